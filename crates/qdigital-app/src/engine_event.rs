//! Domain events emitted by the Engine for external consumers
//!
//! Events are broadcast after each message processing cycle via
//! `Engine::subscribe()`. The headless runner turns them into NDJSON.

use qdigital_core::Route;

/// Domain events emitted by the Engine.
///
/// Events are derived by comparing state before and after a message, so
/// subscribers only hear about real changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    /// The current route changed
    PageChanged { from: Route, to: Route },

    /// The mobile menu opened or closed
    MobileMenuToggled { open: bool },

    /// The navbar switched between its top and scrolled chrome
    ChromeChanged { scrolled: bool },

    /// The carousel mounted, moved or changed play mode
    SlideChanged { index: usize, auto_playing: bool },

    /// The carousel's view went away (timer disarmed)
    CarouselUnmounted,

    /// The engine is shutting down
    Shutdown,
}

impl EngineEvent {
    /// Short name for logging
    pub fn event_type(&self) -> &'static str {
        match self {
            EngineEvent::PageChanged { .. } => "page_changed",
            EngineEvent::MobileMenuToggled { .. } => "menu_toggled",
            EngineEvent::ChromeChanged { .. } => "chrome_changed",
            EngineEvent::SlideChanged { .. } => "slide_changed",
            EngineEvent::CarouselUnmounted => "carousel_unmounted",
            EngineEvent::Shutdown => "shutdown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_types() {
        assert_eq!(
            EngineEvent::ChromeChanged { scrolled: true }.event_type(),
            "chrome_changed"
        );
        assert_eq!(EngineEvent::Shutdown.event_type(), "shutdown");
    }
}
