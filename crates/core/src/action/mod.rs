//! Actions and the pure reducer over [`crate::block::collection::BlockCollection`].

pub mod reduce;
pub mod types;

pub use reduce::{move_down, move_up, reduce};
pub use types::{Action, BlockPatch, PayloadPatch, StylePatch};
