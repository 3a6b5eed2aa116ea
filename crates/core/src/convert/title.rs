use crate::block::types::{Block, BlockPayload};

/// Fallback title for invitations without both names filled in.
pub const FALLBACK_TITLE: &str = "모바일 청첩장";

/// `"{groom} ♥ {bride}"` from the first header block, or the fixed fallback.
/// Pure and total.
pub fn extract_title(blocks: &[Block]) -> String {
    blocks
        .iter()
        .find_map(|b| match &b.payload {
            BlockPayload::Header(p) => {
                let groom = p.groom_name.trim();
                let bride = p.bride_name.trim();
                (!groom.is_empty() && !bride.is_empty())
                    .then(|| format!("{groom} ♥ {bride}"))
            }
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_TITLE.to_string())
}
