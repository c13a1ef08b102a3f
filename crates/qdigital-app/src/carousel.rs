//! Testimonial carousel state machine
//!
//! The carousel is a cyclic index over `len >= 1` slides crossed with a
//! [`PlayMode`]. Every transition reports a [`TimerChange`] so the caller
//! can keep exactly one auto-advance timer armed while the mode is
//! [`PlayMode::AutoPlaying`] and none otherwise. The timer itself lives in
//! [`crate::actions::CarouselTimer`]; this type never touches tokio.

/// Whether the auto-advance timer should be running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayMode {
    #[default]
    AutoPlaying,
    Paused,
}

impl PlayMode {
    pub fn toggled(self) -> Self {
        match self {
            PlayMode::AutoPlaying => PlayMode::Paused,
            PlayMode::Paused => PlayMode::AutoPlaying,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PlayMode::AutoPlaying => "playing",
            PlayMode::Paused => "paused",
        }
    }
}

/// What a transition requires of the auto-advance timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerChange {
    /// Mode entered `AutoPlaying`: arm a fresh timer
    Arm,
    /// Mode left `AutoPlaying`: cancel the armed timer
    Disarm,
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselState {
    current_slide: usize,
    len: usize,
    mode: PlayMode,
}

impl CarouselState {
    /// Create a carousel over `len` slides. A zero length is treated as one
    /// slide; validated content never produces it.
    pub fn new(len: usize) -> Self {
        Self {
            current_slide: 0,
            len: len.max(1),
            mode: PlayMode::AutoPlaying,
        }
    }

    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn mode(&self) -> PlayMode {
        self.mode
    }

    pub fn is_auto_playing(&self) -> bool {
        self.mode == PlayMode::AutoPlaying
    }

    /// Timer requirement when the carousel's view mounts
    pub fn on_mount(&self) -> TimerChange {
        match self.mode {
            PlayMode::AutoPlaying => TimerChange::Arm,
            PlayMode::Paused => TimerChange::Unchanged,
        }
    }

    /// Auto-advance by one slide. Callers must only invoke this for ticks of
    /// the currently armed timer.
    pub fn tick(&mut self) -> bool {
        if !self.is_auto_playing() {
            return false;
        }
        self.advance();
        true
    }

    /// Manual next. Also flips the play mode: pressing next while playing
    /// pauses, pressing it while paused resumes.
    pub fn next(&mut self) -> TimerChange {
        self.advance();
        self.set_mode(self.mode.toggled())
    }

    /// Manual previous. Flips the play mode the same way as [`Self::next`].
    pub fn prev(&mut self) -> TimerChange {
        self.current_slide = (self.current_slide + self.len - 1) % self.len;
        self.set_mode(self.mode.toggled())
    }

    pub fn toggle_auto_play(&mut self) -> TimerChange {
        self.set_mode(self.mode.toggled())
    }

    /// Select a slide directly and pause. Returns `None` (state untouched)
    /// when `index` is out of range.
    pub fn jump_to(&mut self, index: usize) -> Option<TimerChange> {
        if index >= self.len {
            return None;
        }
        self.current_slide = index;
        Some(self.set_mode(PlayMode::Paused))
    }

    fn advance(&mut self) {
        self.current_slide = (self.current_slide + 1) % self.len;
    }

    fn set_mode(&mut self, mode: PlayMode) -> TimerChange {
        if self.mode == mode {
            return TimerChange::Unchanged;
        }
        self.mode = mode;
        match mode {
            PlayMode::AutoPlaying => TimerChange::Arm,
            PlayMode::Paused => TimerChange::Disarm,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let carousel = CarouselState::new(3);
        assert_eq!(carousel.current_slide(), 0);
        assert_eq!(carousel.mode(), PlayMode::AutoPlaying);
        assert_eq!(carousel.on_mount(), TimerChange::Arm);
    }

    #[test]
    fn test_zero_slides_treated_as_one() {
        let mut carousel = CarouselState::new(0);
        assert_eq!(carousel.len(), 1);
        carousel.next();
        assert_eq!(carousel.current_slide(), 0);
    }

    #[test]
    fn test_next_wraps_from_last_to_first() {
        let mut carousel = CarouselState::new(3);
        carousel.jump_to(2);
        carousel.next();
        assert_eq!(carousel.current_slide(), 0);
    }

    #[test]
    fn test_prev_wraps_from_first_to_last() {
        let mut carousel = CarouselState::new(3);
        carousel.prev();
        assert_eq!(carousel.current_slide(), 2);
    }

    #[test]
    fn test_next_flips_play_mode_quirk() {
        // Manual next/prev toggle autoplay rather than pausing it.
        let mut carousel = CarouselState::new(3);

        assert_eq!(carousel.next(), TimerChange::Disarm);
        assert_eq!(carousel.mode(), PlayMode::Paused);

        assert_eq!(carousel.next(), TimerChange::Arm);
        assert_eq!(carousel.mode(), PlayMode::AutoPlaying);
    }

    #[test]
    fn test_prev_flips_play_mode_quirk() {
        let mut carousel = CarouselState::new(3);
        assert_eq!(carousel.prev(), TimerChange::Disarm);
        assert_eq!(carousel.prev(), TimerChange::Arm);
        assert_eq!(carousel.current_slide(), 1);
    }

    #[test]
    fn test_toggle_keeps_index() {
        let mut carousel = CarouselState::new(3);
        carousel.tick();
        assert_eq!(carousel.toggle_auto_play(), TimerChange::Disarm);
        assert_eq!(carousel.current_slide(), 1);
        assert_eq!(carousel.toggle_auto_play(), TimerChange::Arm);
        assert_eq!(carousel.current_slide(), 1);
    }

    #[test]
    fn test_jump_to_always_pauses() {
        for start_paused in [false, true] {
            for index in 0..3 {
                let mut carousel = CarouselState::new(3);
                if start_paused {
                    carousel.toggle_auto_play();
                }
                let change = carousel.jump_to(index).unwrap();
                assert_eq!(carousel.current_slide(), index);
                assert_eq!(carousel.mode(), PlayMode::Paused);
                let expected = if start_paused {
                    TimerChange::Unchanged
                } else {
                    TimerChange::Disarm
                };
                assert_eq!(change, expected);
            }
        }
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut carousel = CarouselState::new(3);
        carousel.tick();
        assert_eq!(carousel.jump_to(3), None);
        assert_eq!(carousel.current_slide(), 1);
        assert!(carousel.is_auto_playing());
    }

    #[test]
    fn test_tick_only_advances_while_playing() {
        let mut carousel = CarouselState::new(3);
        assert!(carousel.tick());
        assert_eq!(carousel.current_slide(), 1);

        carousel.toggle_auto_play();
        assert!(!carousel.tick());
        assert_eq!(carousel.current_slide(), 1);
    }

    #[test]
    fn test_index_stays_in_bounds_for_mixed_sequences() {
        for len in 1..=5 {
            let mut carousel = CarouselState::new(len);
            for step in 0..200usize {
                match step % 7 {
                    0 | 3 => {
                        carousel.next();
                    }
                    1 | 5 => {
                        carousel.prev();
                    }
                    2 => {
                        carousel.toggle_auto_play();
                    }
                    _ => {
                        carousel.tick();
                    }
                }
                assert!(carousel.current_slide() < carousel.len());
            }
        }
    }

    #[test]
    fn test_three_slide_scenario() {
        let mut carousel = CarouselState::new(3);

        carousel.next();
        assert_eq!(carousel.current_slide(), 1);
        assert_eq!(carousel.mode(), PlayMode::Paused);

        carousel.next();
        assert_eq!(carousel.current_slide(), 2);
        assert_eq!(carousel.mode(), PlayMode::AutoPlaying);

        assert!(carousel.tick());
        assert_eq!(carousel.current_slide(), 0);
    }
}
