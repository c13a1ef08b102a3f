//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use qdigital_app::config::Settings;
use qdigital_app::message::Message;
use qdigital_app::Engine;
use qdigital_core::prelude::*;
use qdigital_core::{Content, Route};

use crate::viewport::PageViewport;
use crate::{event, render, terminal};

/// Run the site in the terminal until the user quits
pub async fn run(content: Arc<Content>, settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    let mut engine = Engine::new(content, settings);
    info!(route = %engine.state.current_route(), "qdigital. starting");

    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    result
}

/// Main event loop
fn run_loop(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine) -> Result<()> {
    let mut viewport = PageViewport::default();
    let mut shown_route: Route = engine.state.current_route().clone();

    while !engine.should_quit() {
        // Timer ticks and scroll notifications
        engine.drain_pending_messages();

        // A new page starts at the top
        if engine.state.current_route() != &shown_route {
            shown_route = engine.state.current_route().clone();
            viewport.scroll_to_top();
        }

        let view = engine.view();
        terminal.draw(|frame| render::view(frame, &view, &mut viewport))?;
        engine.publish_scroll(viewport.offset_px());

        let Some(message) = event::poll()? else {
            continue;
        };

        if let Message::Key(key) = &message {
            if !engine.state.nav.is_mobile_menu_open() && viewport.handle_key(key) {
                trace!(offset = viewport.offset(), "scrolled");
                continue;
            }
        }

        engine.process_message(message);
    }

    Ok(())
}
