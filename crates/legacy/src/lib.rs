//! Legacy persistence wire format for mobile wedding invitations.
//!
//! This is the flat "wedding-info + freeform elements" shape the persistence
//! service speaks. It predates the block model: scalar wedding facts live in
//! [`WeddingInfo`], and page content is a list of absolutely-positioned
//! [`LegacyElement`] nodes with no ordering concept beyond their coordinates.
//! The block editor never works with this shape directly; the core crate
//! converts to and from it at the persistence boundary.

pub mod document;
pub mod element;

pub use document::{LegacyContact, LegacyDocument, WeddingInfo};
pub use element::{ElementKind, LegacyElement, LegacyElementStyle};
