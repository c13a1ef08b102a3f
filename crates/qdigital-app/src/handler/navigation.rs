//! Navigation, mobile menu and control focus handlers

use crate::carousel::{CarouselState, TimerChange};
use crate::message::Message;
use crate::pages::render_app;
use crate::state::AppState;
use qdigital_core::{Page, Route};
use tracing::debug;

use super::{carousel::apply_timer_change, UpdateResult};

/// Switch the current route.
///
/// Leaving the home page unmounts the carousel and disarms its timer;
/// entering it mounts a fresh carousel.
pub(crate) fn handle_navigate(
    state: &mut AppState,
    route: Route,
    from_mobile_menu: bool,
) -> UpdateResult {
    let was_home = state.current_route().is(Page::Home);
    debug!(
        "Navigate {} -> {}{}",
        state.current_route(),
        route,
        if from_mobile_menu { " (mobile menu)" } else { "" }
    );

    if from_mobile_menu {
        state.nav.navigate_from_mobile_menu(route);
        state.menu_cursor = 0;
    } else {
        state.nav.navigate(route);
    }
    state.focus = None;

    let is_home = state.current_route().is(Page::Home);
    match (was_home, is_home) {
        (true, false) => {
            state.carousel = None;
            apply_timer_change(state, TimerChange::Disarm)
        }
        (false, true) => {
            let carousel = CarouselState::new(state.content.slide_count());
            let change = carousel.on_mount();
            state.carousel = Some(carousel);
            apply_timer_change(state, change)
        }
        _ => UpdateResult::none(),
    }
}

pub(crate) fn handle_toggle_mobile_menu(state: &mut AppState) -> UpdateResult {
    state.nav.toggle_mobile_menu();
    state.menu_cursor = 0;
    UpdateResult::none()
}

pub(crate) fn handle_menu_cursor(state: &mut AppState, delta: isize) -> UpdateResult {
    if !state.nav.is_mobile_menu_open() {
        return UpdateResult::none();
    }
    let len = state.menu_len();
    state.menu_cursor = step(state.menu_cursor, delta, len);
    UpdateResult::none()
}

pub(crate) fn handle_menu_select(state: &mut AppState) -> UpdateResult {
    if !state.nav.is_mobile_menu_open() {
        return UpdateResult::none();
    }
    match state.menu_target(state.menu_cursor) {
        Some(route) => UpdateResult::message(Message::MobileNavigate(route)),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_focus_step(state: &mut AppState, delta: isize) -> UpdateResult {
    let count = render_app(state).controls().len();
    if count == 0 {
        state.focus = None;
        return UpdateResult::none();
    }
    state.focus = Some(match state.focus {
        Some(index) => step(index.min(count - 1), delta, count),
        None if delta < 0 => count - 1,
        None => 0,
    });
    UpdateResult::none()
}

pub(crate) fn handle_activate_focused(state: &mut AppState) -> UpdateResult {
    match render_app(state).focused_control() {
        Some(control) => UpdateResult::message(control.into()),
        None => UpdateResult::none(),
    }
}

/// Move `index` by `delta` within `0..len`, wrapping at both ends
fn step(index: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}

#[cfg(test)]
mod tests {
    use super::step;

    #[test]
    fn test_step_wraps() {
        assert_eq!(step(0, -1, 3), 2);
        assert_eq!(step(2, 1, 3), 0);
        assert_eq!(step(1, 1, 3), 2);
        assert_eq!(step(0, 1, 0), 0);
    }
}
