//! Main update function - handles state transitions (TEA pattern)

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use tracing::debug;

use super::{carousel, keys::handle_key, navigation, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::ShellMounted => carousel::handle_mount(state),

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::Navigate(route) => navigation::handle_navigate(state, route, false),
        Message::MobileNavigate(route) => navigation::handle_navigate(state, route, true),
        Message::ToggleMobileMenu => navigation::handle_toggle_mobile_menu(state),
        Message::MobileMenuUp => navigation::handle_menu_cursor(state, -1),
        Message::MobileMenuDown => navigation::handle_menu_cursor(state, 1),
        Message::MobileMenuSelect => navigation::handle_menu_select(state),

        Message::ScrollChanged(offset) => {
            let threshold = state.settings.chrome.scroll_threshold_px;
            if state.nav.observe_scroll(offset, threshold) {
                debug!(
                    "Navbar chrome scrolled={} at offset {}",
                    state.nav.is_scrolled(),
                    offset
                );
            }
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Carousel Messages
        // ─────────────────────────────────────────────────────────
        Message::CarouselNext => carousel::handle_next(state),
        Message::CarouselPrev => carousel::handle_prev(state),
        Message::CarouselToggleAutoPlay => carousel::handle_toggle_auto_play(state),
        Message::CarouselJump(index) => carousel::handle_jump(state, index),
        Message::CarouselTick { generation } => carousel::handle_tick(state, generation),

        // ─────────────────────────────────────────────────────────
        // Focus Messages
        // ─────────────────────────────────────────────────────────
        Message::FocusNext => navigation::handle_focus_step(state, 1),
        Message::FocusPrev => navigation::handle_focus_step(state, -1),
        Message::ActivateFocused => navigation::handle_activate_focused(state),
        Message::ClearFocus => {
            state.focus = None;
            UpdateResult::none()
        }
    }
}
