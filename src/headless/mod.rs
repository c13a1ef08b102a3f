//! Headless mode - NDJSON event output instead of the TUI
//!
//! Events are written to stdout as NDJSON (newline-delimited JSON), one event
//! per line. Each event has an "event" field naming its type and a
//! millisecond `timestamp`. Commands are read line by line from stdin (see
//! [`command::Command`]).
//!
//! # Example Output
//!
//! ```json
//! {"event":"ready","route":"home","timestamp":1704700001000}
//! {"event":"slide_changed","index":1,"auto_playing":true,"timestamp":1704700006000}
//! {"event":"menu_toggled","open":true,"timestamp":1704700007000}
//! ```

pub mod command;
pub mod runner;

use chrono::Utc;
use qdigital_app::EngineEvent;
use qdigital_core::{Route, ViewTree};
use serde::Serialize;
use std::io::{self, Write};
use tracing::error;

/// Events emitted in headless mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Engine started on `route`
    Ready { route: Route, timestamp: i64 },

    /// The current page, rendered
    PageRendered {
        route: Route,
        view: ViewTree,
        timestamp: i64,
    },

    /// Mobile menu opened or closed
    MenuToggled { open: bool, timestamp: i64 },

    /// Navbar switched between top and scrolled chrome
    ChromeChanged { scrolled: bool, timestamp: i64 },

    /// Carousel moved or changed play mode
    SlideChanged {
        index: usize,
        auto_playing: bool,
        timestamp: i64,
    },

    /// Error occurred
    Error {
        message: String,
        fatal: bool,
        timestamp: i64,
    },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let json = match serde_json::to_string(self) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize headless {} event: {}", self.name(), e);
                return;
            }
        };

        // Write to stdout with newline (NDJSON format)
        let mut stdout = io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", json) {
            error!("Failed to write headless event to stdout: {}", e);
            return;
        }

        if let Err(e) = stdout.flush() {
            error!("Failed to flush headless stdout: {}", e);
        }
    }

    /// Event name as it appears in the `event` field
    pub fn name(&self) -> &'static str {
        match self {
            HeadlessEvent::Ready { .. } => "ready",
            HeadlessEvent::PageRendered { .. } => "page_rendered",
            HeadlessEvent::MenuToggled { .. } => "menu_toggled",
            HeadlessEvent::ChromeChanged { .. } => "chrome_changed",
            HeadlessEvent::SlideChanged { .. } => "slide_changed",
            HeadlessEvent::Error { .. } => "error",
        }
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn ready(route: &Route) -> Self {
        Self::Ready {
            route: route.clone(),
            timestamp: Self::now(),
        }
    }

    pub fn page_rendered(view: ViewTree) -> Self {
        Self::PageRendered {
            route: view.route.clone(),
            view,
            timestamp: Self::now(),
        }
    }

    pub fn menu_toggled(open: bool) -> Self {
        Self::MenuToggled {
            open,
            timestamp: Self::now(),
        }
    }

    pub fn chrome_changed(scrolled: bool) -> Self {
        Self::ChromeChanged {
            scrolled,
            timestamp: Self::now(),
        }
    }

    pub fn slide_changed(index: usize, auto_playing: bool) -> Self {
        Self::SlideChanged {
            index,
            auto_playing,
            timestamp: Self::now(),
        }
    }

    pub fn error(message: String, fatal: bool) -> Self {
        Self::Error {
            message,
            fatal,
            timestamp: Self::now(),
        }
    }

    /// Translate an engine event. Page changes are reported through
    /// `page_rendered` by the runner, which has the view at hand.
    pub fn from_engine_event(event: &EngineEvent) -> Option<Self> {
        match event {
            EngineEvent::MobileMenuToggled { open } => Some(Self::menu_toggled(*open)),
            EngineEvent::ChromeChanged { scrolled } => Some(Self::chrome_changed(*scrolled)),
            EngineEvent::SlideChanged {
                index,
                auto_playing,
            } => Some(Self::slide_changed(*index, *auto_playing)),
            EngineEvent::PageChanged { .. }
            | EngineEvent::CarouselUnmounted
            | EngineEvent::Shutdown => None,
        }
    }
}
