use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Events published by the editing session, consumed by the UI layer and the
/// persistence collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorEvent {
    BlocksChanged(BlocksChangedEvent),
    AutosaveDue(AutosaveDueEvent),
    Loaded(LoadedEvent),
}

/// The block list changed; the document is dirty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlocksChangedEvent {
    pub invitation_id: Option<String>,
    pub block_count: usize,
    pub timestamp: DateTime<Utc>,
}

/// The autosave debounce elapsed with the document still dirty; the
/// persistence collaborator should save now.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AutosaveDueEvent {
    pub invitation_id: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// A document finished loading into the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadedEvent {
    pub invitation_id: Option<String>,
    pub block_count: usize,
    pub timestamp: DateTime<Utc>,
}
