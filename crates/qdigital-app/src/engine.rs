//! Engine - shared orchestration for the TUI and headless runners
//!
//! The Engine owns the application state, the message channel, the carousel
//! timer slot, the scroll signal and the event broadcaster. Frontends feed it
//! messages and read back views and events.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, info};

use crate::actions::CarouselTimer;
use crate::config::Settings;
use crate::engine_event::EngineEvent;
use crate::message::Message;
use crate::pages::{render_app, AppView};
use crate::process;
use crate::scroll_observer::ScrollObserver;
use crate::state::AppState;
use qdigital_core::{Content, Route};

/// Lightweight snapshot of state for change detection.
///
/// Captured before message processing, compared after to detect
/// what changed and emit appropriate EngineEvents.
#[derive(Debug, Clone, PartialEq, Eq)]
struct StateSnapshot {
    route: Route,
    menu_open: bool,
    scrolled: bool,
    carousel: Option<(usize, bool)>,
}

impl StateSnapshot {
    fn capture(state: &AppState) -> Self {
        Self {
            route: state.current_route().clone(),
            menu_open: state.nav.is_mobile_menu_open(),
            scrolled: state.nav.is_scrolled(),
            carousel: state
                .carousel
                .as_ref()
                .map(|c| (c.current_slide(), c.is_auto_playing())),
        }
    }
}

/// Orchestration engine for the site.
pub struct Engine {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the unified message channel.
    /// Clone this to give to input sources.
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half of the unified message channel.
    /// The frontend event loop drains messages from here.
    pub msg_rx: mpsc::Receiver<Message>,

    /// The single carousel auto-advance timer, if armed
    carousel_timer: Option<CarouselTimer>,

    /// Scroll offset signal published by the renderer
    scroll_tx: watch::Sender<u32>,

    /// Forwards the scroll signal into the message channel while mounted
    scroll_observer: Option<ScrollObserver>,

    /// Event broadcaster for external consumers.
    event_tx: broadcast::Sender<EngineEvent>,
}

impl Engine {
    /// Create an engine and mount the page shell.
    ///
    /// Spawns the scroll observer and, when the start page shows a playing
    /// carousel, the auto-advance timer. Must be called from within a tokio
    /// runtime.
    pub fn new(content: Arc<Content>, settings: Settings) -> Self {
        Self::with_state(AppState::new(content, settings))
    }

    pub fn with_state(state: AppState) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
        let (scroll_tx, scroll_rx) = watch::channel(0u32);
        let (event_tx, _) = broadcast::channel(256);

        info!("Mounting page shell on {}", state.current_route());
        let scroll_observer = Some(ScrollObserver::spawn(scroll_rx, msg_tx.clone()));

        let mut engine = Self {
            state,
            msg_tx,
            msg_rx,
            carousel_timer: None,
            scroll_tx,
            scroll_observer,
            event_tx,
        };
        engine.process_message(Message::ShellMounted);
        engine
    }

    /// Subscribe to engine events.
    ///
    /// If the subscriber falls behind (buffer full), older events are
    /// dropped. Use `broadcast::error::RecvError::Lagged` to detect this.
    pub fn subscribe(&self) -> broadcast::Receiver<EngineEvent> {
        self.event_tx.subscribe()
    }

    /// Process a single message through the TEA update cycle and emit
    /// EngineEvents for whatever changed.
    pub fn process_message(&mut self, msg: Message) {
        let pre = StateSnapshot::capture(&self.state);

        process::process_message(&mut self.state, msg, &self.msg_tx, &mut self.carousel_timer);

        let post = StateSnapshot::capture(&self.state);
        self.emit_events(&pre, &post);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Publish a new page scroll offset. Repeating the current value is a
    /// no-op.
    pub fn publish_scroll(&self, offset: u32) {
        self.scroll_tx.send_if_modified(|current| {
            if *current == offset {
                return false;
            }
            *current = offset;
            true
        });
    }

    /// Last published scroll offset
    pub fn scroll_offset(&self) -> u32 {
        *self.scroll_tx.borrow()
    }

    /// Whether an auto-advance timer task is currently held
    pub fn carousel_timer_armed(&self) -> bool {
        self.carousel_timer.is_some()
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Render the current frame
    pub fn view(&self) -> AppView {
        render_app(&self.state)
    }

    /// Unmount the shell: cancel the timer and the scroll observer.
    pub fn shutdown(&mut self) {
        self.emit(EngineEvent::Shutdown);

        if self.carousel_timer.take().is_some() {
            debug!("Carousel timer cancelled on shutdown");
        }
        self.scroll_observer = None;
        info!("Page shell unmounted");
    }

    fn emit_events(&self, pre: &StateSnapshot, post: &StateSnapshot) {
        if pre.route != post.route {
            self.emit(EngineEvent::PageChanged {
                from: pre.route.clone(),
                to: post.route.clone(),
            });
        }

        if pre.menu_open != post.menu_open {
            self.emit(EngineEvent::MobileMenuToggled {
                open: post.menu_open,
            });
        }

        if pre.scrolled != post.scrolled {
            self.emit(EngineEvent::ChromeChanged {
                scrolled: post.scrolled,
            });
        }

        if pre.carousel != post.carousel {
            match post.carousel {
                Some((index, auto_playing)) => self.emit(EngineEvent::SlideChanged {
                    index,
                    auto_playing,
                }),
                None => self.emit(EngineEvent::CarouselUnmounted),
            }
        }
    }

    /// Emit a single EngineEvent to all subscribers.
    ///
    /// send() returns Err only if there are no receivers, which is fine.
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(event);
    }
}
