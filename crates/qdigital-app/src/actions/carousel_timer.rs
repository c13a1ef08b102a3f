//! Auto-advance timer for the testimonial carousel
//!
//! A [`CarouselTimer`] owns the spawned tick task. Dropping the timer aborts
//! the task, so replacing or clearing the engine's timer slot is all it takes
//! to cancel it.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, trace};

use crate::message::Message;

/// Handle to a running auto-advance task
#[derive(Debug)]
pub struct CarouselTimer {
    generation: u64,
    handle: JoinHandle<()>,
}

impl CarouselTimer {
    /// Spawn a task sending `Message::CarouselTick { generation }` every
    /// `period`, first tick one full period from now.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(generation: u64, period: Duration, msg_tx: mpsc::Sender<Message>) -> Self {
        debug!(
            "Arming carousel timer (generation {}, every {:?})",
            generation, period
        );
        let handle = tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + period, period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                trace!("Carousel tick (generation {})", generation);
                if msg_tx
                    .send(Message::CarouselTick { generation })
                    .await
                    .is_err()
                {
                    // Engine gone
                    break;
                }
            }
        });
        Self { generation, handle }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Drop for CarouselTimer {
    fn drop(&mut self) {
        debug!("Disarming carousel timer (generation {})", self.generation);
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_elapsed(start: Instant, ms: u64) {
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(ms) && elapsed < Duration::from_millis(ms + 1),
            "elapsed {elapsed:?}, expected {ms}ms"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_every_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let _timer = CarouselTimer::spawn(3, Duration::from_millis(5000), tx);

        let start = Instant::now();
        let msg = rx.recv().await.unwrap();
        assert_eq!(msg, Message::CarouselTick { generation: 3 });
        assert_elapsed(start, 5000);

        let msg = rx.recv().await.unwrap();
        assert_eq!(msg, Message::CarouselTick { generation: 3 });
        assert_elapsed(start, 10000);
    }

    #[tokio::test(start_paused = true)]
    async fn test_no_tick_before_period() {
        let (tx, mut rx) = mpsc::channel(8);
        let _timer = CarouselTimer::spawn(1, Duration::from_millis(5000), tx);

        tokio::time::sleep(Duration::from_millis(4999)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_task() {
        let (tx, mut rx) = mpsc::channel(8);
        let timer = CarouselTimer::spawn(1, Duration::from_millis(5000), tx);
        drop(timer);

        // The aborted task drops its sender, closing the channel without
        // ever sending a tick.
        let closed = tokio::time::timeout(Duration::from_secs(60), rx.recv()).await;
        assert_eq!(closed, Ok(None));
    }
}
