//! Debounced autosave trigger.
//!
//! The scheduler owns the pending timer as an explicit abortable handle, not
//! module state. Every change cancels any pending timer; when the document is
//! dirty and no save is in flight, a new timer is armed and publishes
//! [`EditorEvent::AutosaveDue`] once the quiet period elapses. The
//! save-in-flight flag is supplied by the persistence collaborator, never
//! owned here.

use std::time::Duration;

use chrono::Utc;
use tokio::task::JoinHandle;

use crate::events::types::{AutosaveDueEvent, EditorEvent};
use crate::events::EventBus;

#[derive(Debug)]
pub struct AutosaveScheduler {
    delay: Duration,
    bus: EventBus,
    pending: Option<JoinHandle<()>>,
}

impl AutosaveScheduler {
    pub fn new(delay: Duration, bus: EventBus) -> Self {
        Self {
            delay,
            bus,
            pending: None,
        }
    }

    /// The block list changed. Cancels any pending timer; arms a new one only
    /// when `dirty` holds and no save is already in flight.
    pub fn note_change(&mut self, invitation_id: Option<String>, dirty: bool, save_in_flight: bool) {
        self.cancel();
        if !dirty || save_in_flight {
            return;
        }

        let delay = self.delay;
        let bus = self.bus.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let event = EditorEvent::AutosaveDue(AutosaveDueEvent {
                invitation_id,
                timestamp: Utc::now(),
            });
            if bus.publish(event).is_err() {
                tracing::debug!("autosave due with no subscribers");
            }
        }));
    }

    /// Cancel the pending timer, if any.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|h| !h.is_finished())
    }
}

impl Drop for AutosaveScheduler {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, Duration};

    fn scheduler(bus: &EventBus) -> AutosaveScheduler {
        AutosaveScheduler::new(Duration::from_millis(1500), bus.clone())
    }

    async fn recv_due(rx: &mut tokio::sync::broadcast::Receiver<EditorEvent>) -> AutosaveDueEvent {
        match rx.recv().await.unwrap() {
            EditorEvent::AutosaveDue(e) => e,
            other => panic!("expected AutosaveDue, got {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn fires_after_debounce() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut autosave = scheduler(&bus);

        autosave.note_change(Some("inv-1".to_string()), true, false);
        assert!(autosave.is_pending());

        advance(Duration::from_millis(1600)).await;
        let event = recv_due(&mut rx).await;
        assert_eq!(event.invitation_id.as_deref(), Some("inv-1"));
    }

    #[tokio::test(start_paused = true)]
    async fn newer_change_resets_the_timer() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut autosave = scheduler(&bus);

        autosave.note_change(None, true, false);
        advance(Duration::from_millis(1000)).await;
        autosave.note_change(None, true, false);
        advance(Duration::from_millis(1000)).await;

        // 2000ms elapsed overall but only 1000ms since the latest change.
        assert!(rx.try_recv().is_err());

        advance(Duration::from_millis(600)).await;
        recv_due(&mut rx).await;
    }

    #[tokio::test(start_paused = true)]
    async fn clean_or_in_flight_changes_do_not_arm() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut autosave = scheduler(&bus);

        autosave.note_change(None, false, false);
        assert!(!autosave.is_pending());

        autosave.note_change(None, true, true);
        assert!(!autosave.is_pending());

        advance(Duration::from_millis(3000)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_timer() {
        let bus = EventBus::new(8);
        let mut rx = bus.subscribe();
        let mut autosave = scheduler(&bus);

        autosave.note_change(None, true, false);
        autosave.cancel();
        assert!(!autosave.is_pending());

        advance(Duration::from_millis(3000)).await;
        assert!(rx.try_recv().is_err());
    }
}
