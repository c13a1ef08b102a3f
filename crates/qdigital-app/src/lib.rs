//! qdigital-app - Application state and orchestration for the qdigital. site
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: [`AppState`] is the model, [`handler::update`] the update
//! function and [`pages`] the views. The [`Engine`] ties them to the message
//! channel, the carousel timer and the scroll signal.

pub mod actions;
pub mod carousel;
pub mod config;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod nav;
pub mod pages;
pub mod process;
pub mod scroll_observer;
pub mod state;

// Re-export primary types
pub use carousel::{CarouselState, PlayMode, TimerChange};
pub use engine::Engine;
pub use engine_event::EngineEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use nav::NavState;
pub use pages::{render_app, render_page, AppView};
pub use state::{AppPhase, AppState};
