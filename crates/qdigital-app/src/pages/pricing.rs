//! Pricing page

use super::card;
use qdigital_core::{Content, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let tiers = content
        .pricing
        .iter()
        .map(|tier| {
            let mut body = tier.description.clone();
            for feature in &tier.features {
                body.push_str("\n• ");
                body.push_str(feature);
            }
            let mut builder = card(&tier.name)
                .subtitle(format!("{} {}", tier.price, tier.period))
                .body(body);
            if tier.highlighted {
                builder = builder.badge("Most popular");
            }
            builder.build()
        })
        .collect();

    ViewTree::new(
        Page::Pricing.into(),
        "Pricing",
        vec![
            Node::Section {
                eyebrow: Some("Pricing".to_string()),
                title: Some("Simple, Transparent Pricing".to_string()),
                subtitle: None,
                children: vec![Node::grid(3, tiers)],
            },
            Node::button(&content.nav_cta),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlighted_tier_has_badge() {
        let view = render(&Content::reference());
        assert!(view.contains_text("Most popular"));
        assert!(view.contains_text("$12,900 per project"));
    }
}
