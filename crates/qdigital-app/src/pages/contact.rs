//! Contact page

use qdigital_core::{Content, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let contact = &content.contact;

    let mut details = vec![
        Node::heading(3, "Email"),
        Node::paragraph(&contact.email),
        Node::heading(3, "Phone"),
        Node::paragraph(&contact.phone),
        Node::heading(3, "Studio"),
    ];
    details.extend(contact.address.iter().map(Node::paragraph));

    ViewTree::new(
        Page::Contact.into(),
        "Contact Us",
        vec![
            Node::Section {
                eyebrow: Some("Contact".to_string()),
                title: Some("Let's Work Together".to_string()),
                subtitle: Some(contact.intro.clone()),
                children: details,
            },
            Node::section(
                "What happens next",
                vec![Node::list(vec![
                    "We reply within one business day".to_string(),
                    "A short call to understand your goals".to_string(),
                    "A written proposal with scope and timeline".to_string(),
                ])],
            ),
        ],
    )
}
