//! Message types for the application (TEA pattern)

use crate::input_key::InputKey;
use qdigital_core::{Control, Route};

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Keyboard event from the terminal or a scripted driver
    Key(InputKey),

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Navigate from the desktop navbar, a page button or the footer
    Navigate(Route),

    /// Navigate from inside the mobile menu (also closes the menu)
    MobileNavigate(Route),

    /// Open or close the mobile menu
    ToggleMobileMenu,

    /// Move the mobile menu cursor up
    MobileMenuUp,

    /// Move the mobile menu cursor down
    MobileMenuDown,

    /// Activate the mobile menu entry under the cursor
    MobileMenuSelect,

    // ─────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────
    /// New value of the page scroll offset signal
    ScrollChanged(u32),

    // ─────────────────────────────────────────────────────────
    // Carousel
    // ─────────────────────────────────────────────────────────
    CarouselNext,
    CarouselPrev,
    CarouselToggleAutoPlay,
    CarouselJump(usize),

    /// Auto-advance tick from the timer armed with `generation`
    CarouselTick { generation: u64 },

    // ─────────────────────────────────────────────────────────
    // Control focus
    // ─────────────────────────────────────────────────────────
    /// Move focus to the next control on the page
    FocusNext,

    /// Move focus to the previous control on the page
    FocusPrev,

    /// Trigger the focused control
    ActivateFocused,

    /// Drop control focus
    ClearFocus,

    /// The page shell mounted: arm whatever the initial state needs
    ShellMounted,

    /// Request application exit
    Quit,
}

impl From<Control> for Message {
    fn from(control: Control) -> Self {
        match control {
            Control::Navigate(route) => Message::Navigate(route),
            Control::ToggleMobileMenu => Message::ToggleMobileMenu,
            Control::CarouselPrev => Message::CarouselPrev,
            Control::CarouselNext => Message::CarouselNext,
            Control::CarouselToggleAutoPlay => Message::CarouselToggleAutoPlay,
            Control::CarouselJump(index) => Message::CarouselJump(index),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qdigital_core::Page;

    #[test]
    fn test_control_into_message() {
        assert_eq!(
            Message::from(Control::Navigate(Page::Blog.into())),
            Message::Navigate(Route::Page(Page::Blog))
        );
        assert_eq!(
            Message::from(Control::CarouselJump(2)),
            Message::CarouselJump(2)
        );
    }
}
