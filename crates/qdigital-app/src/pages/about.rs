//! About page

use super::card;
use qdigital_core::{Content, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let about = &content.about;

    let story = about.story.iter().map(Node::paragraph).collect();
    let values = about
        .values
        .iter()
        .map(|value| card(&value.title).body(&value.description).build())
        .collect();
    let stats = content
        .stats
        .iter()
        .map(|stat| Node::stat(&stat.value, &stat.label))
        .collect();

    ViewTree::new(
        Page::About.into(),
        "About Us",
        vec![
            Node::Section {
                eyebrow: Some("About Us".to_string()),
                title: Some(about.headline.clone()),
                subtitle: None,
                children: story,
            },
            Node::section("Our Values", vec![Node::grid(3, values)]),
            Node::section("By the Numbers", vec![Node::grid(4, stats)]),
        ],
    )
}
