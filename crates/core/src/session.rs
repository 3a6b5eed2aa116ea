//! One logical editing session over a single block collection.
//!
//! The session is the host glue around the pure reducer: it serializes
//! dispatched actions, publishes change events, nudges the autosave
//! scheduler, and tracks the dirty watermark plus the save-in-flight flag the
//! persistence collaborator supplies. No two sessions share a collection.

use chrono::{DateTime, Utc};
use invitation_legacy::LegacyDocument;
use tokio::sync::broadcast;

use crate::action::{move_down, move_up, reduce, Action};
use crate::autosave::AutosaveScheduler;
use crate::block::collection::BlockCollection;
use crate::block::types::Block;
use crate::config::EditorConfig;
use crate::convert::{extract_title, from_legacy, to_legacy};
use crate::events::types::{BlocksChangedEvent, EditorEvent, LoadedEvent};
use crate::events::EventBus;

#[derive(Debug)]
pub struct EditorSession {
    collection: BlockCollection,
    bus: EventBus,
    autosave: AutosaveScheduler,
    dirty: bool,
    save_in_flight: bool,
    /// `last_modified` watermark taken when the in-flight save started, so a
    /// completion callback cannot wipe edits dispatched while it ran.
    save_started_at: Option<DateTime<Utc>>,
}

impl EditorSession {
    pub fn new(config: EditorConfig) -> Self {
        let bus = EventBus::new(config.event_bus_capacity);
        let autosave = AutosaveScheduler::new(config.autosave_debounce, bus.clone());
        Self {
            collection: BlockCollection::new(),
            bus,
            autosave,
            dirty: false,
            save_in_flight: false,
            save_started_at: None,
        }
    }

    /// Read-only view of the current collection.
    pub fn collection(&self) -> &BlockCollection {
        &self.collection
    }

    pub fn subscribe(&self) -> broadcast::Receiver<EditorEvent> {
        self.bus.subscribe()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Derived queries, delegated to the collection.
    pub fn editing_block(&self) -> Option<&Block> {
        self.collection.editing_block()
    }

    pub fn is_valid(&self) -> bool {
        self.collection.validate_blocks()
    }

    pub fn title(&self) -> String {
        extract_title(&self.collection.blocks)
    }

    /// Apply one action through the pure reducer. Content changes mark the
    /// session dirty, publish `BlocksChanged`, and re-arm the autosave timer.
    pub fn dispatch(&mut self, action: Action) {
        let next = reduce(&self.collection, action);
        let content_changed = next.last_modified != self.collection.last_modified;
        self.collection = next;

        if content_changed {
            self.dirty = true;
            let event = EditorEvent::BlocksChanged(BlocksChangedEvent {
                invitation_id: self.collection.invitation_id.clone(),
                block_count: self.collection.len(),
                timestamp: self.collection.last_modified,
            });
            if self.bus.publish(event).is_err() {
                tracing::debug!("blocks changed with no subscribers");
            }
            self.autosave.note_change(
                self.collection.invitation_id.clone(),
                true,
                self.save_in_flight,
            );
        }
    }

    /// Move a block one step toward the front; no-op at the boundary.
    pub fn move_up(&mut self, id: &str) {
        if let Some(action) = move_up(&self.collection, id) {
            self.dispatch(action);
        }
    }

    /// Move a block one step toward the back; no-op at the boundary.
    pub fn move_down(&mut self, id: &str) {
        if let Some(action) = move_down(&self.collection, id) {
            self.dispatch(action);
        }
    }

    /// Replace the session contents from a persisted legacy document.
    /// The loaded state is clean; any pending autosave is dropped.
    pub fn load(&mut self, invitation_id: Option<String>, doc: &LegacyDocument) {
        let blocks = from_legacy(doc);
        self.collection.invitation_id = invitation_id;
        self.collection = reduce(&self.collection, Action::LoadBlocks { blocks });
        self.dirty = false;
        self.autosave.cancel();

        tracing::info!(
            invitation_id = self.collection.invitation_id.as_deref().unwrap_or("new"),
            block_count = self.collection.len(),
            "invitation loaded"
        );
        let event = EditorEvent::Loaded(LoadedEvent {
            invitation_id: self.collection.invitation_id.clone(),
            block_count: self.collection.len(),
            timestamp: Utc::now(),
        });
        let _ = self.bus.publish(event);
    }

    /// Project the current blocks into the legacy persistence shape.
    pub fn export(&self) -> LegacyDocument {
        to_legacy(&self.collection.blocks)
    }

    /// The persistence collaborator reports a save starting or finishing.
    /// While a save is in flight the autosave timer stays disarmed; when it
    /// clears with the session still dirty, the timer is re-armed.
    pub fn set_save_in_flight(&mut self, in_flight: bool) {
        self.save_in_flight = in_flight;
        if in_flight {
            self.save_started_at = Some(self.collection.last_modified);
            self.autosave.cancel();
        } else {
            self.save_started_at = None;
            if self.dirty {
                self.autosave
                    .note_change(self.collection.invitation_id.clone(), true, false);
            }
        }
    }

    /// A save completed; the collaborator hands back the assigned invitation
    /// id on first save. The session goes clean only when nothing changed
    /// since the save snapshot was taken; edits dispatched while the save was
    /// in flight stay dirty and re-arm the autosave timer.
    pub fn mark_saved(&mut self, invitation_id: Option<String>) {
        if invitation_id.is_some() {
            self.collection.invitation_id = invitation_id;
        }
        self.save_in_flight = false;

        let changed_since_save = self
            .save_started_at
            .take()
            .is_some_and(|at| at != self.collection.last_modified);
        if changed_since_save {
            self.autosave
                .note_change(self.collection.invitation_id.clone(), true, false);
        } else {
            self.dirty = false;
            self.autosave.cancel();
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}
