//! Editor event contract and in-process broadcast bus.

pub mod bus;
pub mod types;

pub use bus::{EventBus, DEFAULT_BUS_CAPACITY};
pub use types::{AutosaveDueEvent, BlocksChangedEvent, EditorEvent, LoadedEvent};
