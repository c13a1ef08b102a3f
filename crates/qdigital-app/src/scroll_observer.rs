//! Bridge from the renderer's scroll signal into the message channel
//!
//! The renderer publishes the page scroll offset on a `watch` channel. A
//! [`ScrollObserver`] forwards every new value as
//! [`Message::ScrollChanged`]. The observer is created when the page shell
//! mounts; dropping it aborts the forwarding task.

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::message::Message;

#[derive(Debug)]
pub struct ScrollObserver {
    handle: JoinHandle<()>,
}

impl ScrollObserver {
    /// Subscribe to `scroll_rx`. Values published before this call are not
    /// forwarded.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(mut scroll_rx: watch::Receiver<u32>, msg_tx: mpsc::Sender<Message>) -> Self {
        scroll_rx.mark_unchanged();
        let handle = tokio::spawn(async move {
            while scroll_rx.changed().await.is_ok() {
                let offset = *scroll_rx.borrow_and_update();
                if msg_tx.send(Message::ScrollChanged(offset)).await.is_err() {
                    break;
                }
            }
            debug!("Scroll observer stopped");
        });
        Self { handle }
    }
}

impl Drop for ScrollObserver {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
