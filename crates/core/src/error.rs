use thiserror::Error;

/// Error taxonomy of the block core.
///
/// Deliberately small: validation reports booleans (a failed check is a
/// normal editor condition, not an error), and reducer actions referencing
/// stale ids degrade to no-ops. The only hard failure is an out-of-catalog
/// variant string arriving from the UI boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlockError {
    #[error("unknown block variant: {0}")]
    UnknownVariant(String),
}
