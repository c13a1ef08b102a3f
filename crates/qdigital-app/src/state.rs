//! Application state (Model in TEA pattern)

use std::sync::Arc;

use crate::carousel::CarouselState;
use crate::config::Settings;
use crate::nav::NavState;
use qdigital_core::{Content, Page, Route};

/// Lifecycle phase of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub phase: AppPhase,

    /// Router, mobile menu and navbar chrome
    pub nav: NavState,

    /// Testimonial carousel; `Some` only while the home page is mounted
    pub carousel: Option<CarouselState>,

    /// Read-only site content
    pub content: Arc<Content>,

    pub settings: Settings,

    /// Index into the current view's controls, if any has focus
    pub focus: Option<usize>,

    /// Highlighted entry of the open mobile menu
    pub menu_cursor: usize,

    /// Last generation handed out to a carousel timer
    pub(crate) timer_generation: u64,

    /// Generation of the armed carousel timer, if one is armed
    pub(crate) armed_timer: Option<u64>,
}

impl AppState {
    /// Fresh state starting on the configured start page
    pub fn new(content: Arc<Content>, settings: Settings) -> Self {
        let start = Route::parse(&settings.ui.start_page);
        Self::with_route(content, settings, start)
    }

    pub fn with_route(content: Arc<Content>, settings: Settings, start: Route) -> Self {
        let carousel = start
            .is(Page::Home)
            .then(|| CarouselState::new(content.slide_count()));
        Self {
            phase: AppPhase::Running,
            nav: NavState::new(start),
            carousel,
            content,
            settings,
            focus: None,
            menu_cursor: 0,
            timer_generation: 0,
            armed_timer: None,
        }
    }

    pub fn current_route(&self) -> &Route {
        self.nav.current()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Generation of the armed carousel timer, if any
    pub fn armed_timer(&self) -> Option<u64> {
        self.armed_timer
    }

    /// Number of entries in the mobile menu (nav items plus the CTA)
    pub fn menu_len(&self) -> usize {
        self.content.nav.len() + 1
    }

    /// Route behind mobile menu entry `index`
    pub fn menu_target(&self, index: usize) -> Option<Route> {
        let nav = &self.content.nav;
        if index < nav.len() {
            Some(nav[index].target.clone())
        } else if index == nav.len() {
            Some(self.content.nav_cta.target.clone())
        } else {
            None
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Content::reference()), Settings::default())
    }
}
