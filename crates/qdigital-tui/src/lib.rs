//! qdigital-tui - Terminal renderer for the qdigital. site
//!
//! This crate creates an Engine from qdigital-app and adds terminal
//! rendering, event polling, the scrollable page viewport and widget display.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod viewport;
pub mod widgets;

// Re-export main entry point
pub use runner::run;
