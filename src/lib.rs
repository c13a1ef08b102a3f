//! qdigital. site library
//!
//! Wires the workspace crates into the two ways of running the site: the
//! terminal UI and the headless NDJSON stream.

pub mod headless;

// Re-export main entry points
pub use headless::runner::run_headless;
pub use qdigital_tui::run;
