//! Message processing: the TEA update loop plus action dispatch

use tokio::sync::mpsc;

use crate::actions::{handle_action, CarouselTimer};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function, following up on any
/// returned messages and executing returned actions.
pub fn process_message(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    carousel_timer: &mut Option<CarouselTimer>,
) {
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx, carousel_timer);
        }

        msg = result.message;
    }
}
