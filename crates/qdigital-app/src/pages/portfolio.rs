//! Portfolio page

use super::card;
use qdigital_core::{Content, Control, Node, Page, ViewTree};

pub(super) fn render(content: &Content) -> ViewTree {
    let projects = content
        .projects
        .iter()
        .map(|project| {
            card(&project.title)
                .badge(&project.category)
                .image(&project.image)
                .control(Control::Navigate(project.target.clone()))
                .build()
        })
        .collect();

    ViewTree::new(
        Page::Portfolio.into(),
        "Portfolio",
        vec![Node::Section {
            eyebrow: Some("Our Work".to_string()),
            title: Some("Creative Portfolio".to_string()),
            subtitle: Some(
                "Selected projects for brands that wanted more than a website.".to_string(),
            ),
            children: vec![Node::grid(3, projects)],
        }],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_project_is_a_control() {
        let content = Content::reference();
        let view = render(&content);
        assert_eq!(view.controls().len(), content.projects.len());
    }
}
