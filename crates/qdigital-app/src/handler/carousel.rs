//! Carousel handlers and auto-advance timer bookkeeping
//!
//! Invariant kept here: `state.armed_timer` is `Some` exactly when a carousel
//! is mounted and auto-playing. Every `Some` handed out gets a fresh
//! generation, so ticks from a timer that was replaced or cancelled never
//! match and are dropped.

use crate::carousel::{CarouselState, TimerChange};
use crate::state::AppState;
use tracing::{debug, trace, warn};

use super::{UpdateAction, UpdateResult};

/// Turn a carousel transition into the timer action it requires
pub(crate) fn apply_timer_change(state: &mut AppState, change: TimerChange) -> UpdateResult {
    match change {
        TimerChange::Arm => {
            state.timer_generation += 1;
            let generation = state.timer_generation;
            state.armed_timer = Some(generation);
            UpdateResult::action(UpdateAction::ArmCarouselTimer {
                generation,
                period: state.settings.carousel.interval(),
            })
        }
        TimerChange::Disarm => match state.armed_timer.take() {
            Some(_) => UpdateResult::action(UpdateAction::DisarmCarouselTimer),
            None => UpdateResult::none(),
        },
        TimerChange::Unchanged => UpdateResult::none(),
    }
}

/// The shell mounted: arm the timer if the initial page shows a playing carousel
pub(crate) fn handle_mount(state: &mut AppState) -> UpdateResult {
    if state.armed_timer.is_some() {
        return UpdateResult::none();
    }
    match state.carousel.as_ref().map(CarouselState::on_mount) {
        Some(change) => apply_timer_change(state, change),
        None => UpdateResult::none(),
    }
}

pub(crate) fn handle_next(state: &mut AppState) -> UpdateResult {
    with_carousel(state, "next", CarouselState::next)
}

pub(crate) fn handle_prev(state: &mut AppState) -> UpdateResult {
    with_carousel(state, "prev", CarouselState::prev)
}

pub(crate) fn handle_toggle_auto_play(state: &mut AppState) -> UpdateResult {
    with_carousel(state, "toggle", CarouselState::toggle_auto_play)
}

pub(crate) fn handle_jump(state: &mut AppState, index: usize) -> UpdateResult {
    let Some(carousel) = state.carousel.as_mut() else {
        debug!("Carousel jump ignored: carousel not mounted");
        return UpdateResult::none();
    };
    match carousel.jump_to(index) {
        Some(change) => apply_timer_change(state, change),
        None => {
            warn!(
                "Carousel jump to {} ignored: only {} slides",
                index,
                carousel.len()
            );
            UpdateResult::none()
        }
    }
}

/// Auto-advance, but only for the currently armed timer
pub(crate) fn handle_tick(state: &mut AppState, generation: u64) -> UpdateResult {
    if state.armed_timer != Some(generation) {
        trace!("Dropping stale carousel tick (generation {})", generation);
        return UpdateResult::none();
    }
    if let Some(carousel) = state.carousel.as_mut() {
        carousel.tick();
    }
    UpdateResult::none()
}

fn with_carousel(
    state: &mut AppState,
    op: &str,
    transition: impl FnOnce(&mut CarouselState) -> TimerChange,
) -> UpdateResult {
    let Some(carousel) = state.carousel.as_mut() else {
        debug!("Carousel {} ignored: carousel not mounted", op);
        return UpdateResult::none();
    };
    let change = transition(carousel);
    apply_timer_change(state, change)
}
