//! Navigation state: current route, mobile menu and navbar chrome

use qdigital_core::Route;

/// Scroll offset (in pixels/rows) past which the navbar switches to its
/// compact "scrolled" chrome.
pub const SCROLL_THRESHOLD_PX: u32 = 10;

/// Router and shell state owned by [`crate::AppState`]
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavState {
    current: Route,
    mobile_menu_open: bool,
    scrolled: bool,
}

impl NavState {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            ..Self::default()
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_scrolled(&self) -> bool {
        self.scrolled
    }

    /// Switch to `route`. No validation: unknown routes render as not-found.
    pub fn navigate(&mut self, route: Route) {
        self.current = route;
    }

    /// Navigation issued from inside the mobile menu also closes the menu.
    pub fn navigate_from_mobile_menu(&mut self, route: Route) {
        self.current = route;
        self.mobile_menu_open = false;
    }

    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Recompute the chrome flag from a scroll offset.
    ///
    /// Returns `true` only when the flag flipped.
    pub fn observe_scroll(&mut self, offset: u32, threshold: u32) -> bool {
        let scrolled = offset > threshold;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdigital_core::Page;

    #[test]
    fn test_initial_state() {
        let nav = NavState::default();
        assert_eq!(nav.current(), &Route::Page(Page::Home));
        assert!(!nav.is_mobile_menu_open());
        assert!(!nav.is_scrolled());
    }

    #[test]
    fn test_navigate_accepts_unknown_routes() {
        let mut nav = NavState::default();
        nav.navigate(Route::parse("nowhere"));
        assert_eq!(nav.current(), &Route::NotFound("nowhere".to_string()));
    }

    #[test]
    fn test_desktop_navigation_leaves_menu_alone() {
        let mut nav = NavState::default();
        nav.toggle_mobile_menu();
        nav.navigate(Page::Team.into());
        assert!(nav.is_mobile_menu_open());
    }

    #[test]
    fn test_mobile_navigation_closes_menu_in_same_action() {
        let mut nav = NavState::default();
        nav.toggle_mobile_menu();
        assert!(nav.is_mobile_menu_open());

        nav.navigate_from_mobile_menu(Page::Pricing.into());

        assert_eq!(nav.current(), &Route::Page(Page::Pricing));
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        let mut nav = NavState::default();
        assert!(!nav.observe_scroll(10, SCROLL_THRESHOLD_PX));
        assert!(!nav.is_scrolled());

        assert!(nav.observe_scroll(11, SCROLL_THRESHOLD_PX));
        assert!(nav.is_scrolled());
    }

    #[test]
    fn test_scroll_only_reports_flips() {
        let mut nav = NavState::default();
        assert!(nav.observe_scroll(200, SCROLL_THRESHOLD_PX));
        assert!(!nav.observe_scroll(300, SCROLL_THRESHOLD_PX));
        assert!(nav.observe_scroll(0, SCROLL_THRESHOLD_PX));
        assert!(!nav.is_scrolled());
    }
}
