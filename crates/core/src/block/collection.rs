use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::factory::validate_block;
use super::types::Block;

/// Ordered set of blocks for one invitation document.
///
/// The invitation id stays `None` until the persistence collaborator assigns
/// one on first save; the collection never manages that lifecycle itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockCollection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invitation_id: Option<String>,
    pub blocks: Vec<Block>,
    pub last_modified: DateTime<Utc>,
}

impl BlockCollection {
    /// Empty collection for a brand-new invitation.
    pub fn new() -> Self {
        Self {
            invitation_id: None,
            blocks: Vec::new(),
            last_modified: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn find(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    /// The block currently open for editing, if any. The reducer guarantees
    /// at most one.
    pub fn editing_block(&self) -> Option<&Block> {
        self.blocks.iter().find(|b| b.editing)
    }

    /// True when every block passes its minimal-completeness check.
    /// Save gating is the caller's decision; this never fails hard.
    pub fn validate_blocks(&self) -> bool {
        self.blocks.iter().all(validate_block)
    }
}

impl Default for BlockCollection {
    fn default() -> Self {
        Self::new()
    }
}
