//! Page renderers (View in TEA pattern)
//!
//! Each page is a pure function from the read-only [`Content`] to a
//! [`ViewTree`]. [`render_page`] picks exactly one of them for a route.

mod about;
mod blog;
mod case_study;
mod contact;
mod home;
mod not_found;
mod portfolio;
mod pricing;
mod services;
pub mod shell;
mod team;

use qdigital_core::{Content, Control, Node, Page, Route, ViewTree};

pub use shell::{render_app, render_footer, AppView, CarouselView, MobileMenu, NavBar, NavItem};

/// Render the view for `route`.
///
/// Depends on nothing but its arguments: the same route and content always
/// produce the same tree.
pub fn render_page(route: &Route, content: &Content) -> ViewTree {
    match route {
        Route::Page(page) => match page {
            Page::Home => home::render(content),
            Page::About => about::render(content),
            Page::Services => services::render(content),
            Page::Portfolio => portfolio::render(content),
            Page::CaseStudy => case_study::render(content),
            Page::Team => team::render(content),
            Page::Pricing => pricing::render(content),
            Page::Blog => blog::render_index(content),
            Page::BlogPostOne | Page::BlogPostTwo | Page::BlogPostThree => {
                blog::render_post(*page, content)
            }
            Page::Contact => contact::render(content),
        },
        Route::NotFound(requested) => not_found::render(route.clone(), requested),
    }
}

/// Card with optional extras left empty
fn card(title: impl Into<String>) -> CardBuilder {
    CardBuilder {
        title: title.into(),
        subtitle: None,
        body: None,
        badge: None,
        image: None,
        control: None,
    }
}

struct CardBuilder {
    title: String,
    subtitle: Option<String>,
    body: Option<String>,
    badge: Option<String>,
    image: Option<String>,
    control: Option<Control>,
}

impl CardBuilder {
    fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    fn badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    fn image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    fn control(mut self, control: Control) -> Self {
        self.control = Some(control);
        self
    }

    fn build(self) -> Node {
        Node::Card {
            title: self.title,
            subtitle: self.subtitle,
            body: self.body,
            badge: self.badge,
            image: self.image,
            control: self.control,
        }
    }
}

/// Section with an eyebrow badge and subtitle, as used by the home page
fn headed_section(eyebrow: &str, title: &str, subtitle: &str, children: Vec<Node>) -> Node {
    Node::Section {
        eyebrow: Some(eyebrow.to_string()),
        title: Some(title.to_string()),
        subtitle: Some(subtitle.to_string()),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_renders_its_own_view() {
        let content = Content::reference();
        for page in Page::ALL {
            let route = Route::Page(page);
            let view = render_page(&route, &content);
            assert_eq!(view.route, route, "{page}");
            assert!(!view.is_not_found(), "{page} rendered not-found");
            assert!(!view.nodes.is_empty(), "{page} rendered nothing");
        }
    }

    #[test]
    fn test_page_titles_are_distinct() {
        let content = Content::reference();
        let mut titles: Vec<String> = Page::ALL
            .iter()
            .map(|page| render_page(&Route::Page(*page), &content).title)
            .collect();
        titles.sort();
        titles.dedup();
        assert_eq!(titles.len(), Page::ALL.len());
    }

    #[test]
    fn test_unknown_routes_render_not_found() {
        let content = Content::reference();
        for id in ["", "HOME", "blog-post-4", "case_study", "404", "../etc"] {
            let route = Route::parse(id);
            let view = render_page(&route, &content);
            assert!(view.is_not_found(), "{id:?} should be not-found");
        }
    }

    #[test]
    fn test_render_is_independent_of_history() {
        let content = Content::reference();
        let first = render_page(&Route::Page(Page::Team), &content);
        let _ = render_page(&Route::Page(Page::Pricing), &content);
        let _ = render_page(&Route::parse("nope"), &content);
        let again = render_page(&Route::Page(Page::Team), &content);
        assert_eq!(first, again);
    }

    #[test]
    fn test_only_home_has_carousel() {
        let content = Content::reference();
        for page in Page::ALL {
            let view = render_page(&Route::Page(page), &content);
            assert_eq!(view.has_carousel(), page == Page::Home, "{page}");
        }
    }
}
