//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for normal mode and the mobile menu
//! - `navigation`: Route changes, mobile menu and control focus
//! - `carousel`: Carousel transitions and timer arm/disarm bookkeeping

pub(crate) mod carousel;
pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use std::time::Duration;

use crate::message::Message;

// Re-export main entry point
pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Start the auto-advance timer, replacing any timer already running.
    /// Ticks carry `generation` so the handler can drop stale ones.
    ArmCarouselTimer { generation: u64, period: Duration },

    /// Cancel the auto-advance timer
    DisarmCarouselTimer,
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
