//! Block-based document core for the mobile wedding-invitation builder.
//!
//! An invitation page is an ordered collection of typed content blocks
//! (header, text, image, contacts, venue, RSVP). This crate owns the
//! in-memory block model, the pure reducer that mutates it, the converter to
//! and from the legacy persistence shape, and the debounced autosave trigger.
//! Everything beyond that boundary (auth, storage, routing, the persistence
//! API itself) is an external collaborator that only exchanges plain data
//! structures with this crate.

pub mod action;
pub mod autosave;
pub mod block;
pub mod config;
pub mod convert;
pub mod error;
pub mod events;
pub mod session;

pub use action::{move_down, move_up, reduce, Action, BlockPatch, PayloadPatch, StylePatch};
pub use autosave::AutosaveScheduler;
pub use block::collection::BlockCollection;
pub use block::factory::{
    block_palette, create_block, duplicate_block, reorder_blocks, validate_block, PaletteEntry,
};
pub use block::types::{Block, BlockPayload, BlockStyle, BlockVariant};
pub use config::EditorConfig;
pub use convert::{extract_title, from_legacy, to_legacy, FALLBACK_TITLE};
pub use error::BlockError;
pub use events::{EditorEvent, EventBus};
pub use session::EditorSession;
