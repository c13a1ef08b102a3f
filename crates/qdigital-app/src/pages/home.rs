//! Home page: hero, clients, services, portfolio, stats, testimonials, CTA

use super::{card, headed_section};
use qdigital_core::{Content, Control, Cta, Node, Page, ViewTree};

/// Number of projects featured on the home page
const FEATURED_PROJECTS: usize = 6;

pub(super) fn render(content: &Content) -> ViewTree {
    let nodes = vec![
        hero(content),
        clients(content),
        services(content),
        portfolio(content),
        stats(content),
        testimonials(content),
        call_to_action(content),
    ];
    ViewTree::new(Page::Home.into(), "Home", nodes)
}

fn hero(content: &Content) -> Node {
    let hero = &content.hero;
    Node::Section {
        eyebrow: Some(hero.badge.clone()),
        title: None,
        subtitle: None,
        children: vec![
            Node::heading(1, &hero.title),
            Node::heading(1, &hero.highlight),
            Node::paragraph(&hero.intro),
            Node::button(&hero.primary),
            Node::button(&hero.secondary),
        ],
    }
}

fn clients(content: &Content) -> Node {
    Node::Section {
        eyebrow: None,
        title: None,
        subtitle: Some("Trusted by industry leaders".to_string()),
        children: vec![Node::list(content.clients.clone())],
    }
}

fn services(content: &Content) -> Node {
    let cards = content
        .services
        .iter()
        .map(|service| {
            card(&service.title)
                .body(&service.description)
                .badge(&service.icon)
                .build()
        })
        .collect();

    headed_section(
        "Our Services",
        "What We Offer",
        "We bring a holistic approach to every project, combining technical expertise with creative vision to deliver outstanding results.",
        vec![Node::grid(4, cards)],
    )
}

fn portfolio(content: &Content) -> Node {
    let cards = content
        .projects
        .iter()
        .take(FEATURED_PROJECTS)
        .map(|project| {
            card(&project.title)
                .badge(&project.category)
                .image(&project.image)
                .control(Control::Navigate(project.target.clone()))
                .build()
        })
        .collect();

    headed_section(
        "Our Work",
        "Creative Portfolio",
        "A glimpse into the diverse projects where we've partnered with forward-thinking brands to build amazing digital experiences.",
        vec![
            Node::grid(3, cards),
            Node::button(&Cta::new("View all projects", Page::Portfolio)),
        ],
    )
}

fn stats(content: &Content) -> Node {
    let stats = content
        .stats
        .iter()
        .map(|stat| Node::stat(&stat.value, &stat.label))
        .collect();
    Node::Section {
        eyebrow: None,
        title: None,
        subtitle: None,
        children: vec![Node::grid(4, stats)],
    }
}

fn testimonials(content: &Content) -> Node {
    headed_section(
        "Testimonials",
        "What Our Partners Say",
        "We pride ourselves on building strong relationships and delivering results that speak for themselves.",
        vec![Node::Testimonials {
            slides: content.testimonials.clone(),
        }],
    )
}

fn call_to_action(content: &Content) -> Node {
    let cta = &content.call_to_action;
    Node::Section {
        eyebrow: None,
        title: Some(cta.title.clone()),
        subtitle: Some(cta.body.clone()),
        children: vec![Node::button(&cta.primary), Node::button(&cta.secondary)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdigital_core::Route;

    #[test]
    fn test_home_sections_in_order() {
        let view = render(&Content::reference());
        assert_eq!(view.nodes.len(), 7);
        assert!(view.contains_text("Digital Excellence"));
        assert!(view.contains_text("Trusted by industry leaders"));
        assert!(view.contains_text("What Our Partners Say"));
        assert!(view.has_carousel());
    }

    #[test]
    fn test_first_project_links_to_case_study() {
        let view = render(&Content::reference());
        let controls = view.controls();
        assert!(controls.contains(&Control::Navigate(Route::Page(Page::CaseStudy))));
    }

    #[test]
    fn test_hero_buttons_come_first() {
        let view = render(&Content::reference());
        let controls = view.controls();
        assert_eq!(controls[0], Control::Navigate(Route::Page(Page::Services)));
        assert_eq!(controls[1], Control::Navigate(Route::Page(Page::Portfolio)));
    }
}
