//! The block document model: type catalog, construction, and the collection
//! owning one invitation's ordered blocks.

pub mod collection;
pub mod factory;
pub mod types;
