use std::time::Duration;

use crate::events::bus::DEFAULT_BUS_CAPACITY;

/// Editor session configuration.
#[derive(Debug, Clone)]
pub struct EditorConfig {
    /// Quiet period after the last change before an autosave is requested.
    pub autosave_debounce: Duration,
    /// Editor event bus channel capacity.
    pub event_bus_capacity: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            autosave_debounce: Duration::from_millis(1500),
            event_bus_capacity: DEFAULT_BUS_CAPACITY,
        }
    }
}
