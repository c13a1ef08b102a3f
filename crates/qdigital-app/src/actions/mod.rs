//! Action handlers: UpdateAction dispatch

use tokio::sync::mpsc;
use tracing::debug;

use crate::handler::UpdateAction;
use crate::message::Message;

mod carousel_timer;

pub use carousel_timer::CarouselTimer;

/// Execute an action returned by `update`.
///
/// `carousel_timer` is the engine's single timer slot: arming replaces the
/// previous timer (dropping, and thereby aborting, it) and disarming clears
/// the slot.
pub fn handle_action(
    action: UpdateAction,
    msg_tx: &mpsc::Sender<Message>,
    carousel_timer: &mut Option<CarouselTimer>,
) {
    match action {
        UpdateAction::ArmCarouselTimer { generation, period } => {
            *carousel_timer = Some(CarouselTimer::spawn(generation, period, msg_tx.clone()));
        }
        UpdateAction::DisarmCarouselTimer => {
            if let Some(timer) = carousel_timer.take() {
                debug!("Carousel timer {} disarmed", timer.generation());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test(start_paused = true)]
    async fn test_arm_replaces_previous_timer() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut slot = None;

        handle_action(
            UpdateAction::ArmCarouselTimer {
                generation: 1,
                period: Duration::from_millis(5000),
            },
            &tx,
            &mut slot,
        );
        handle_action(
            UpdateAction::ArmCarouselTimer {
                generation: 2,
                period: Duration::from_millis(5000),
            },
            &tx,
            &mut slot,
        );
        assert_eq!(slot.as_ref().map(CarouselTimer::generation), Some(2));

        // Only the replacement ticks
        assert_eq!(
            rx.recv().await,
            Some(Message::CarouselTick { generation: 2 })
        );
        assert_eq!(
            rx.recv().await,
            Some(Message::CarouselTick { generation: 2 })
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_clears_slot() {
        let (tx, mut rx) = mpsc::channel(8);
        let mut slot = None;

        handle_action(
            UpdateAction::ArmCarouselTimer {
                generation: 1,
                period: Duration::from_millis(5000),
            },
            &tx,
            &mut slot,
        );
        handle_action(UpdateAction::DisarmCarouselTimer, &tx, &mut slot);
        assert!(slot.is_none());
        drop(tx);

        let result = tokio::time::timeout(Duration::from_secs(30), rx.recv()).await;
        assert_eq!(result, Ok(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_disarm_with_empty_slot_is_noop() {
        let (tx, _rx) = mpsc::channel(8);
        let mut slot: Option<CarouselTimer> = None;

        handle_action(UpdateAction::DisarmCarouselTimer, &tx, &mut slot);

        assert!(slot.is_none());
    }
}
