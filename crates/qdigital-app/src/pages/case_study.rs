//! Case study page

use qdigital_core::{Content, Cta, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let study = &content.case_study;
    let results = study
        .results
        .iter()
        .map(|stat| Node::stat(&stat.value, &stat.label))
        .collect();

    ViewTree::new(
        Page::CaseStudy.into(),
        "Case Study",
        vec![
            Node::Section {
                eyebrow: Some(study.category.clone()),
                title: Some(study.title.clone()),
                subtitle: Some(study.client.clone()),
                children: vec![
                    Node::image(&study.image, &study.title),
                    Node::paragraph(&study.summary),
                ],
            },
            Node::section("The Challenge", vec![Node::paragraph(&study.challenge)]),
            Node::section("Our Solution", vec![Node::paragraph(&study.solution)]),
            Node::section("Results", vec![Node::grid(3, results)]),
            Node::link(&Cta::new("Back to portfolio", Page::Portfolio)),
        ],
    )
}
