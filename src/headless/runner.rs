//! Headless mode runner - main event loop without TUI
//!
//! Reads [`Command`]s from stdin, feeds them to the engine and emits a
//! [`HeadlessEvent`] for every observable change.

use std::sync::Arc;

use tokio::sync::{broadcast, mpsc};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, error, info, warn};

use qdigital_app::config::Settings;
use qdigital_app::message::Message;
use qdigital_app::{render_page, Engine, EngineEvent};
use qdigital_core::prelude::*;
use qdigital_core::Content;

use super::command::Command;
use super::HeadlessEvent;

/// Run in headless mode - output NDJSON events instead of the TUI
pub async fn run_headless(content: Arc<Content>, settings: Settings) -> Result<()> {
    info!("═══════════════════════════════════════════════════════");
    info!("qdigital. starting in HEADLESS mode");
    info!("═══════════════════════════════════════════════════════");

    let mut engine = Engine::new(content, settings);

    // Spawn headless-specific stdin reader
    let (cmd_tx, cmd_rx) = mpsc::channel::<Result<Command>>(64);
    std::thread::spawn(move || read_stdin_blocking(cmd_tx));

    let result = run_session(&mut engine, cmd_rx, |event| event.emit()).await;

    engine.shutdown();
    info!("qdigital. headless mode exiting");
    result
}

enum Input {
    Message(Option<Message>),
    Command(Option<Result<Command>>),
    /// A `wait` elapsed
    Resume,
}

/// Drive `engine` from `commands` until quit or until the command source
/// closes, handing each event to `emit`.
pub async fn run_session(
    engine: &mut Engine,
    mut commands: mpsc::Receiver<Result<Command>>,
    mut emit: impl FnMut(HeadlessEvent),
) -> Result<()> {
    let mut events = engine.subscribe();

    emit(HeadlessEvent::ready(engine.state.current_route()));
    emit(HeadlessEvent::page_rendered(engine.view().page));

    // Commands are held back while a `wait` runs; timer ticks keep flowing
    let mut waiting_until: Option<Instant> = None;

    loop {
        if engine.should_quit() {
            info!("Quit requested");
            break;
        }

        let deadline = waiting_until.unwrap_or_else(Instant::now);
        let input = tokio::select! {
            msg = engine.msg_rx.recv() => Input::Message(msg),
            cmd = commands.recv(), if waiting_until.is_none() => Input::Command(cmd),
            _ = sleep_until(deadline), if waiting_until.is_some() => Input::Resume,
        };

        match input {
            Input::Message(Some(msg)) => engine.process_message(msg),
            Input::Message(None) => {
                info!("Message channel closed");
                break;
            }
            Input::Command(Some(Ok(Command::Wait(duration)))) => {
                waiting_until = Some(Instant::now() + duration);
            }
            Input::Command(Some(Ok(command))) => apply_command(engine, command, &mut emit),
            Input::Command(Some(Err(e))) => {
                warn!("Rejected headless input: {}", e);
                emit(HeadlessEvent::error(e.to_string(), e.is_fatal()));
            }
            Input::Command(None) => {
                info!("Command input closed");
                break;
            }
            Input::Resume => waiting_until = None,
        }

        forward_events(engine, &mut events, &mut emit);
    }

    Ok(())
}

fn apply_command(engine: &mut Engine, command: Command, emit: &mut impl FnMut(HeadlessEvent)) {
    debug!("Headless command: {:?}", command);
    let message = match command {
        Command::Navigate(route) => Message::Navigate(route),
        Command::ToggleMenu => Message::ToggleMobileMenu,
        Command::MenuNavigate(route) => Message::MobileNavigate(route),
        Command::Scroll(offset) => {
            // Reaches the engine as a message once the scroll observer sees it
            engine.publish_scroll(offset);
            return;
        }
        Command::Next => Message::CarouselNext,
        Command::Prev => Message::CarouselPrev,
        Command::Toggle => Message::CarouselToggleAutoPlay,
        Command::Jump(index) => Message::CarouselJump(index),
        Command::Render => {
            emit(HeadlessEvent::page_rendered(engine.view().page));
            return;
        }
        Command::Wait(_) => return,
        Command::Quit => Message::Quit,
    };
    engine.process_message(message);
}

/// Translate engine events broadcast since the last call
fn forward_events(
    engine: &Engine,
    events: &mut broadcast::Receiver<EngineEvent>,
    emit: &mut impl FnMut(HeadlessEvent),
) {
    loop {
        match events.try_recv() {
            Ok(EngineEvent::PageChanged { to, .. }) => {
                emit(HeadlessEvent::page_rendered(render_page(&to, &engine.state.content)));
            }
            Ok(event) => {
                if let Some(headless) = HeadlessEvent::from_engine_event(&event) {
                    emit(headless);
                }
            }
            Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                warn!("Headless output lagged; {} engine events dropped", skipped);
            }
            Err(_) => break,
        }
    }
}

/// Read stdin line by line and forward parsed commands (blocking version)
fn read_stdin_blocking(cmd_tx: mpsc::Sender<Result<Command>>) {
    use std::io::BufRead;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                break;
            }
        };

        let parsed = match Command::parse(&line) {
            Ok(Some(command)) => Ok(command),
            Ok(None) => continue,
            Err(e) => Err(e),
        };
        let quit = matches!(parsed, Ok(Command::Quit));

        if cmd_tx.blocking_send(parsed).is_err() || quit {
            break;
        }
    }

    info!("Stdin reader exiting");
}
