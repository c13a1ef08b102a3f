//! Services page

use super::card;
use qdigital_core::{Content, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let services = content
        .services
        .iter()
        .map(|service| {
            card(&service.title)
                .body(&service.description)
                .badge(&service.icon)
                .build()
        })
        .collect();

    ViewTree::new(
        Page::Services.into(),
        "Our Services",
        vec![
            Node::Section {
                eyebrow: Some("Our Services".to_string()),
                title: Some("What We Offer".to_string()),
                subtitle: Some(
                    "End-to-end design and engineering, from the first workshop to launch day and beyond."
                        .to_string(),
                ),
                children: vec![Node::grid(2, services)],
            },
            Node::Section {
                eyebrow: None,
                title: Some(content.call_to_action.title.clone()),
                subtitle: None,
                children: vec![Node::button(&content.call_to_action.primary)],
            },
        ],
    )
}
