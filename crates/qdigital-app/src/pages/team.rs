//! Team page

use super::card;
use qdigital_core::{Content, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let members = content
        .team
        .iter()
        .map(|member| {
            let mut builder = card(&member.name).subtitle(&member.role).body(&member.bio);
            if !member.photo.is_empty() {
                builder = builder.image(&member.photo);
            }
            builder.build()
        })
        .collect();

    ViewTree::new(
        Page::Team.into(),
        "Our Team",
        vec![Node::Section {
            eyebrow: Some("Our Team".to_string()),
            title: Some("The People Behind the Work".to_string()),
            subtitle: None,
            children: vec![Node::grid(4, members)],
        }],
    )
}
