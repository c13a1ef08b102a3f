//! Page shell: navbar, current page and footer

use serde::Serialize;

use crate::carousel::PlayMode;
use crate::state::AppState;
use qdigital_core::{Content, Control, Cta, Node, Page, Route, ViewTree};

use super::render_page;

/// One navbar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub label: String,
    pub route: Route,
    /// Entry points at the current route
    pub active: bool,
}

/// Mobile menu; `entries` is empty while the menu is closed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MobileMenu {
    pub open: bool,
    pub cursor: usize,
    pub entries: Vec<Cta>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavBar {
    pub brand: String,
    pub items: Vec<NavItem>,
    pub cta: Cta,
    /// Compact chrome once the page scrolled past the threshold
    pub scrolled: bool,
    pub menu: MobileMenu,
}

/// Live carousel position, read from the carousel state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CarouselView {
    pub current_slide: usize,
    pub len: usize,
    pub auto_playing: bool,
}

/// Everything a renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppView {
    pub navbar: NavBar,
    pub page: ViewTree,
    pub footer: ViewTree,
    pub carousel: Option<CarouselView>,
    /// Index into [`AppView::controls`]
    pub focus: Option<usize>,
}

impl AppView {
    /// Page controls followed by footer controls
    pub fn controls(&self) -> Vec<Control> {
        let mut controls = self.page.controls();
        controls.extend(self.footer.controls());
        controls
    }

    pub fn focused_control(&self) -> Option<Control> {
        self.focus.and_then(|index| self.controls().into_iter().nth(index))
    }
}

/// Render the whole shell for the current state
pub fn render_app(state: &AppState) -> AppView {
    let route = state.current_route();
    AppView {
        navbar: render_navbar(state),
        page: render_page(route, &state.content),
        footer: render_footer(route, &state.content),
        carousel: state.carousel.as_ref().map(|carousel| CarouselView {
            current_slide: carousel.current_slide(),
            len: carousel.len(),
            auto_playing: carousel.mode() == PlayMode::AutoPlaying,
        }),
        focus: state.focus,
    }
}

fn render_navbar(state: &AppState) -> NavBar {
    let content = &state.content;
    let current = state.current_route();
    let open = state.nav.is_mobile_menu_open();

    let entries = if open {
        content
            .nav
            .iter()
            .chain(std::iter::once(&content.nav_cta))
            .cloned()
            .collect()
    } else {
        Vec::new()
    };

    NavBar {
        brand: content.brand.clone(),
        items: content
            .nav
            .iter()
            .map(|item| NavItem {
                label: item.label.clone(),
                route: item.target.clone(),
                active: &item.target == current,
            })
            .collect(),
        cta: content.nav_cta.clone(),
        scrolled: state.nav.is_scrolled(),
        menu: MobileMenu {
            open,
            cursor: state.menu_cursor,
            entries,
        },
    }
}

/// Footer shown below every page
pub fn render_footer(route: &Route, content: &Content) -> ViewTree {
    let footer = &content.footer;
    let contact = &content.contact;

    let socials = footer
        .socials
        .iter()
        .map(|social| format!("{}: {}", social.name, social.url))
        .collect();
    let quick_links = footer.quick_links.iter().map(Node::link).collect();

    let mut contact_info = vec![Node::paragraph(&contact.email)];
    contact_info.extend(contact.address.iter().map(Node::paragraph));

    ViewTree::new(
        route.clone(),
        content.brand.clone(),
        vec![
            Node::Grid {
                columns: 3,
                children: vec![
                    Node::Section {
                        eyebrow: None,
                        title: None,
                        subtitle: None,
                        children: vec![
                            Node::link(&Cta::new(content.brand.clone(), Page::Home)),
                            Node::paragraph(&footer.blurb),
                            Node::list(socials),
                        ],
                    },
                    Node::section("Quick Links", quick_links),
                    Node::section("Contact Info", contact_info),
                ],
            },
            Node::paragraph(&footer.copyright),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_controls_page_then_footer() {
        let state = AppState::default();
        let view = render_app(&state);
        let controls = view.controls();

        let page_controls = view.page.controls();
        assert_eq!(&controls[..page_controls.len()], page_controls.as_slice());
        assert_eq!(
            controls.last(),
            Some(&Control::Navigate(Route::Page(Page::Contact)))
        );
    }

    #[test]
    fn test_active_nav_item_tracks_route() {
        let mut state = AppState::default();
        state.nav.navigate(Page::Team.into());
        let view = render_app(&state);

        let active: Vec<_> = view
            .navbar
            .items
            .iter()
            .filter(|item| item.active)
            .map(|item| item.label.as_str())
            .collect();
        assert_eq!(active, vec!["Team"]);
    }

    #[test]
    fn test_closed_menu_has_no_entries() {
        let mut state = AppState::default();
        assert!(render_app(&state).navbar.menu.entries.is_empty());

        state.nav.toggle_mobile_menu();
        let menu = render_app(&state).navbar.menu;
        assert!(menu.open);
        assert_eq!(menu.entries.len(), 9);
        assert_eq!(menu.entries[8].label, "Start Project");
    }

    #[test]
    fn test_carousel_view_only_on_home() {
        let state = AppState::default();
        let view = render_app(&state);
        assert_eq!(
            view.carousel,
            Some(CarouselView {
                current_slide: 0,
                len: 3,
                auto_playing: true
            })
        );

        let mut state = AppState::default();
        state.nav.navigate(Page::Blog.into());
        state.carousel = None;
        assert_eq!(render_app(&state).carousel, None);
    }

    #[test]
    fn test_footer_quick_links() {
        let footer = render_footer(&Route::default(), &Content::reference());
        assert!(footer.contains_text("Quick Links"));
        assert!(footer.contains_text("hello@qdigital.com"));
        assert_eq!(footer.controls().len(), 5);
    }
}
