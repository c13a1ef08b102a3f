//! Screen layout definitions for the TUI
//!
//! Navbar on top (full glass container, or a single compact row once the
//! page has scrolled), the scrollable page body, and a one-row key hint bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Navbar height before scrolling: border + content row + border
pub const NAVBAR_HEIGHT: u16 = 3;

/// Navbar height in the compact scrolled chrome
pub const NAVBAR_COMPACT_HEIGHT: u16 = 1;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub navbar: Rect,

    /// Scrollable page and footer
    pub body: Rect,

    /// Key hints
    pub status: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect, scrolled: bool) -> ScreenAreas {
    let navbar_height = if scrolled {
        NAVBAR_COMPACT_HEIGHT
    } else {
        NAVBAR_HEIGHT
    };

    let chunks = Layout::vertical([
        Constraint::Length(navbar_height),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        navbar: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// Dropdown area for the open mobile menu, right below the navbar
pub fn mobile_menu(navbar: Rect, screen: Rect, entries: usize) -> Rect {
    let width = 28.min(screen.width);
    let height = (entries as u16 + 2).min(screen.height.saturating_sub(navbar.bottom()));
    Rect {
        x: screen.right().saturating_sub(width),
        y: navbar.bottom(),
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_top_of_page() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, false);

        assert_eq!(layout.navbar.height, 3);
        assert_eq!(layout.body.y, 3);
        assert_eq!(layout.body.height, 20); // 24 - 3 - 1
        assert_eq!(layout.status.y, 23);
    }

    #[test]
    fn test_layout_scrolled_is_compact() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = create(area, true);

        assert_eq!(layout.navbar.height, 1);
        assert_eq!(layout.body.height, 22);
    }

    #[test]
    fn test_mobile_menu_sits_under_navbar() {
        let screen = Rect::new(0, 0, 80, 24);
        let layout = create(screen, false);
        let menu = mobile_menu(layout.navbar, screen, 9);

        assert_eq!(menu.y, 3);
        assert_eq!(menu.height, 11);
        assert_eq!(menu.right(), 80);
    }

    #[test]
    fn test_mobile_menu_clamped_on_tiny_screen() {
        let screen = Rect::new(0, 0, 20, 8);
        let layout = create(screen, false);
        let menu = mobile_menu(layout.navbar, screen, 9);

        assert_eq!(menu.width, 20);
        assert_eq!(menu.height, 5);
    }
}
