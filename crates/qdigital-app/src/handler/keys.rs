//! Key event handlers

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages based on whether the mobile menu is open
///
/// Scroll keys are not handled here: the renderer owns the viewport and
/// reports offsets through the scroll signal instead.
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    if state.nav.is_mobile_menu_open() {
        handle_key_mobile_menu(state, key)
    } else {
        handle_key_normal(state, key)
    }
}

fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // Navbar items by position
        InputKey::Char(c @ '1'..='9') => nav_item(state, c).map(Message::Navigate),
        InputKey::Char('c') => Some(Message::Navigate(state.content.nav_cta.target.clone())),
        InputKey::Char('m') => Some(Message::ToggleMobileMenu),

        // Carousel
        InputKey::Left => Some(Message::CarouselPrev),
        InputKey::Right => Some(Message::CarouselNext),
        InputKey::Char(' ') => Some(Message::CarouselToggleAutoPlay),

        // Control focus
        InputKey::Tab => Some(Message::FocusNext),
        InputKey::BackTab => Some(Message::FocusPrev),
        InputKey::Enter => Some(Message::ActivateFocused),
        InputKey::Esc => Some(Message::ClearFocus),

        _ => None,
    }
}

fn handle_key_mobile_menu(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::CharCtrl('c') => Some(Message::Quit),
        InputKey::Char('m') | InputKey::Esc => Some(Message::ToggleMobileMenu),
        InputKey::Up | InputKey::Char('k') => Some(Message::MobileMenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MobileMenuDown),
        InputKey::Enter => Some(Message::MobileMenuSelect),
        InputKey::Char(c @ '1'..='9') => nav_item(state, c).map(Message::MobileNavigate),
        InputKey::Char('c') => Some(Message::MobileNavigate(
            state.content.nav_cta.target.clone(),
        )),
        _ => None,
    }
}

/// Route of the navbar item bound to digit `c` (1-based)
fn nav_item(state: &AppState, c: char) -> Option<qdigital_core::Route> {
    let index = c.to_digit(10)? as usize;
    state
        .content
        .nav
        .get(index.checked_sub(1)?)
        .map(|item| item.target.clone())
}
