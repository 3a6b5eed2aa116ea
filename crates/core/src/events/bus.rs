use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::EditorEvent;

/// Default channel capacity for a single editing session's bus.
pub const DEFAULT_BUS_CAPACITY: usize = 64;

/// In-process event bus backed by `tokio::broadcast`.
/// One editing session publishes; the UI and the persistence collaborator
/// subscribe.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: Arc<broadcast::Sender<EditorEvent>>,
}

impl EventBus {
    /// Create a new event bus with the given channel capacity.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Publish an event to all current subscribers.
    pub fn publish(
        &self,
        event: EditorEvent,
    ) -> Result<usize, broadcast::error::SendError<EditorEvent>> {
        self.sender.send(event)
    }

    /// Subscribe to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(DEFAULT_BUS_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    use crate::events::types::BlocksChangedEvent;

    fn changed_event() -> EditorEvent {
        EditorEvent::BlocksChanged(BlocksChangedEvent {
            invitation_id: None,
            block_count: 1,
            timestamp: Utc::now(),
        })
    }

    #[tokio::test]
    async fn publish_and_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.publish(changed_event()).unwrap();

        let event = rx.recv().await.unwrap();
        assert!(matches!(event, EditorEvent::BlocksChanged(e) if e.block_count == 1));
    }

    #[tokio::test]
    async fn multiple_subscribers() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        assert_eq!(bus.subscriber_count(), 2);

        bus.publish(changed_event()).unwrap();

        assert!(matches!(rx1.recv().await.unwrap(), EditorEvent::BlocksChanged(_)));
        assert!(matches!(rx2.recv().await.unwrap(), EditorEvent::BlocksChanged(_)));
    }

    #[test]
    fn publish_without_subscribers_errors() {
        let bus = EventBus::new(4);
        assert!(bus.publish(changed_event()).is_err());
    }
}
