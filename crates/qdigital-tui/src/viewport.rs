//! Scrollable page viewport
//!
//! The page body (page plus footer) is taller than the terminal. The
//! viewport tracks the first visible row and converts it into the scroll
//! offset published to the engine.

use qdigital_app::InputKey;

/// Scroll offset units per terminal row. One row scrolled already counts as
/// "scrolled" for the navbar chrome.
pub const PX_PER_ROW: u32 = 16;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageViewport {
    /// First visible row
    offset: u16,
    /// Total rows of content
    content_height: u16,
    /// Rows visible at once
    visible_height: u16,
    /// Focus index last scrolled into view
    followed_focus: Option<usize>,
}

impl PageViewport {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Scroll offset in the units of the engine's scroll signal
    pub fn offset_px(&self) -> u32 {
        u32::from(self.offset) * PX_PER_ROW
    }

    fn max_offset(&self) -> u16 {
        self.content_height.saturating_sub(self.visible_height)
    }

    /// Record the current content and viewport sizes, clamping the offset
    pub fn update_size(&mut self, content_height: u16, visible_height: u16) {
        self.content_height = content_height;
        self.visible_height = visible_height;
        self.offset = self.offset.min(self.max_offset());
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset()));
        self.offset = target as u16;
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Scroll just enough to bring `row` into view
    pub fn ensure_visible(&mut self, row: u16) {
        if row < self.offset {
            self.offset = row;
        } else if self.visible_height > 0 && row >= self.offset + self.visible_height {
            self.offset = (row + 1 - self.visible_height).min(self.max_offset());
        }
    }

    /// Scroll the focused control's row into view once per focus change, so
    /// manual scrolling afterwards is not undone on the next frame.
    pub fn follow_focus(&mut self, focus: Option<usize>, row: Option<usize>) {
        if focus == self.followed_focus {
            return;
        }
        self.followed_focus = focus;
        if let Some(row) = row {
            self.ensure_visible(u16::try_from(row).unwrap_or(u16::MAX));
        }
    }

    /// Apply a scroll key. Returns `false` for keys that are not scroll keys.
    pub fn handle_key(&mut self, key: &InputKey) -> bool {
        let page = i32::from(self.visible_height.saturating_sub(1).max(1));
        match key {
            InputKey::Char('j') | InputKey::Down => self.scroll_by(1),
            InputKey::Char('k') | InputKey::Up => self.scroll_by(-1),
            InputKey::PageDown => self.scroll_by(page),
            InputKey::PageUp => self.scroll_by(-page),
            InputKey::Home | InputKey::Char('g') => self.scroll_to_top(),
            InputKey::End | InputKey::Char('G') => self.scroll_to_bottom(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewport() -> PageViewport {
        let mut viewport = PageViewport::default();
        viewport.update_size(100, 20);
        viewport
    }

    #[test]
    fn test_scroll_is_clamped() {
        let mut viewport = viewport();
        viewport.scroll_by(-5);
        assert_eq!(viewport.offset(), 0);
        viewport.scroll_by(500);
        assert_eq!(viewport.offset(), 80);
    }

    #[test]
    fn test_offset_px_crosses_threshold_after_one_row() {
        let mut viewport = viewport();
        assert_eq!(viewport.offset_px(), 0);
        viewport.scroll_by(1);
        assert!(viewport.offset_px() > 10);
    }

    #[test]
    fn test_scroll_keys() {
        let mut viewport = viewport();
        assert!(viewport.handle_key(&InputKey::PageDown));
        assert_eq!(viewport.offset(), 19);
        assert!(viewport.handle_key(&InputKey::Char('k')));
        assert_eq!(viewport.offset(), 18);
        assert!(viewport.handle_key(&InputKey::Home));
        assert_eq!(viewport.offset(), 0);
        assert!(!viewport.handle_key(&InputKey::Char('m')));
    }

    #[test]
    fn test_shrinking_content_clamps_offset() {
        let mut viewport = viewport();
        viewport.scroll_to_bottom();
        viewport.update_size(30, 20);
        assert_eq!(viewport.offset(), 10);
    }

    #[test]
    fn test_follow_focus_only_on_change() {
        let mut viewport = viewport();
        viewport.follow_focus(Some(4), Some(50));
        assert_eq!(viewport.offset(), 31);

        viewport.scroll_to_top();
        viewport.follow_focus(Some(4), Some(50));
        assert_eq!(viewport.offset(), 0);

        viewport.follow_focus(Some(5), Some(60));
        assert_eq!(viewport.offset(), 41);
    }

    #[test]
    fn test_ensure_visible() {
        let mut viewport = viewport();
        viewport.ensure_visible(45);
        assert_eq!(viewport.offset(), 26);
        viewport.ensure_visible(30);
        assert_eq!(viewport.offset(), 26);
        viewport.ensure_visible(3);
        assert_eq!(viewport.offset(), 3);
    }
}
