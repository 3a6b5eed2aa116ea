//! The block collection state machine.
//!
//! `reduce` is a pure function from a collection and one action to the next
//! collection; side effects (persistence, events, timers) belong to callers.
//! Actions referencing unknown block ids degrade to no-ops: a stale id from a
//! race between a UI dispatch and a concurrent removal must not crash the
//! editor. `last_modified` is bumped only when the block list actually
//! changes; pure no-ops return the state untouched.

use chrono::Utc;

use crate::block::collection::BlockCollection;
use crate::block::factory::{create_block, duplicate_block, reorder_blocks};
use crate::block::types::{Block, BlockVariant};

use super::types::{Action, BlockPatch};

/// Apply one action. Executes synchronously and atomically; the host event
/// loop serializes concurrent action sources.
pub fn reduce(state: &BlockCollection, action: Action) -> BlockCollection {
    match action {
        Action::AddBlock { variant, after_id } => add_block(state, variant, after_id.as_deref()),
        Action::RemoveBlock { id } => remove_block(state, &id),
        Action::UpdateBlock { id, patch } => update_block(state, &id, &patch),
        Action::ReorderBlocks { id, new_order } => reorder_to(state, &id, new_order),
        Action::ToggleEdit { id } => toggle_edit(state, &id),
        Action::DuplicateBlock { id } => duplicate(state, &id),
        Action::LoadBlocks { blocks } => load_blocks(state, blocks),
    }
}

/// `ReorderBlocks` one step up, when not already first.
pub fn move_up(state: &BlockCollection, id: &str) -> Option<Action> {
    let block = state.find(id)?;
    (block.order > 0).then(|| Action::ReorderBlocks {
        id: id.to_string(),
        new_order: block.order - 1,
    })
}

/// `ReorderBlocks` one step down, when not already last.
pub fn move_down(state: &BlockCollection, id: &str) -> Option<Action> {
    let block = state.find(id)?;
    (block.order + 1 < state.len()).then(|| Action::ReorderBlocks {
        id: id.to_string(),
        new_order: block.order + 1,
    })
}

fn touched(state: &BlockCollection, blocks: Vec<Block>) -> BlockCollection {
    BlockCollection {
        invitation_id: state.invitation_id.clone(),
        blocks,
        last_modified: Utc::now(),
    }
}

fn add_block(state: &BlockCollection, variant: BlockVariant, after_id: Option<&str>) -> BlockCollection {
    let mut blocks = state.blocks.clone();

    let after_order = after_id.and_then(|id| blocks.iter().find(|b| b.id == id)).map(|b| b.order);
    match after_order {
        Some(after_order) => {
            // Open a slot right after the anchor, take it, then renumber.
            for block in &mut blocks {
                if block.order > after_order {
                    block.order += 1;
                }
            }
            blocks.push(create_block(variant, after_order + 1));
        }
        None => {
            let order = blocks.len();
            blocks.push(create_block(variant, order));
        }
    }

    touched(state, reorder_blocks(blocks))
}

fn remove_block(state: &BlockCollection, id: &str) -> BlockCollection {
    if state.find(id).is_none() {
        tracing::debug!(%id, "remove for unknown block id ignored");
        return state.clone();
    }

    let blocks: Vec<Block> = state.blocks.iter().filter(|b| b.id != id).cloned().collect();
    touched(state, reorder_blocks(blocks))
}

fn update_block(state: &BlockCollection, id: &str, patch: &BlockPatch) -> BlockCollection {
    let Some(index) = state.blocks.iter().position(|b| b.id == id) else {
        tracing::debug!(%id, "update for unknown block id ignored");
        return state.clone();
    };

    let mut block = state.blocks[index].clone();
    patch.apply(&mut block);
    if block == state.blocks[index] {
        return state.clone();
    }

    let mut blocks = state.blocks.clone();
    blocks[index] = block;
    touched(state, blocks)
}

fn reorder_to(state: &BlockCollection, id: &str, new_order: usize) -> BlockCollection {
    let Some(block) = state.find(id) else {
        tracing::debug!(%id, "reorder for unknown block id ignored");
        return state.clone();
    };

    // Collision policy: the moved block takes the clamped target slot and
    // displaced neighbors shift toward the vacancy. Orders are contiguous
    // here, so the shifted orders are unique and the normalization pass
    // reproduces exactly this sequence.
    let old = block.order;
    let target = new_order.min(state.len() - 1);
    if target == old {
        return state.clone();
    }

    let mut blocks = state.blocks.clone();
    for b in &mut blocks {
        if b.id == id {
            b.order = target;
        } else if old < target && b.order > old && b.order <= target {
            b.order -= 1;
        } else if target < old && b.order >= target && b.order < old {
            b.order += 1;
        }
    }
    touched(state, reorder_blocks(blocks))
}

fn toggle_edit(state: &BlockCollection, id: &str) -> BlockCollection {
    if state.find(id).is_none() {
        tracing::debug!(%id, "toggle-edit for unknown block id ignored");
        return state.clone();
    }

    let blocks: Vec<Block> = state
        .blocks
        .iter()
        .map(|b| {
            let mut block = b.clone();
            block.editing = block.id == id;
            block
        })
        .collect();

    if blocks == state.blocks {
        return state.clone();
    }

    // Editing state is transient UI state, not persisted content.
    BlockCollection {
        invitation_id: state.invitation_id.clone(),
        blocks,
        last_modified: state.last_modified,
    }
}

fn duplicate(state: &BlockCollection, id: &str) -> BlockCollection {
    let Some(original) = state.find(id) else {
        tracing::debug!(%id, "duplicate for unknown block id ignored");
        return state.clone();
    };

    let copy = duplicate_block(original);
    let after_order = original.order;

    let mut blocks = state.blocks.clone();
    for block in &mut blocks {
        if block.order > after_order {
            block.order += 1;
        }
    }
    blocks.push(copy);

    touched(state, reorder_blocks(blocks))
}

fn load_blocks(state: &BlockCollection, blocks: Vec<Block>) -> BlockCollection {
    let blocks = reorder_blocks(blocks);
    if blocks == state.blocks {
        return state.clone();
    }
    touched(state, blocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::types::{BlockPatch, ContentPatch, PayloadPatch};
    use crate::block::types::BlockPayload;

    fn collection_of(variants: &[BlockVariant]) -> BlockCollection {
        let mut state = BlockCollection::new();
        for &variant in variants {
            state = reduce(&state, Action::AddBlock { variant, after_id: None });
        }
        state
    }

    fn orders(state: &BlockCollection) -> Vec<usize> {
        state.blocks.iter().map(|b| b.order).collect()
    }

    fn ids(state: &BlockCollection) -> Vec<String> {
        state.blocks.iter().map(|b| b.id.clone()).collect()
    }

    #[test]
    fn add_appends_at_end() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        assert_eq!(orders(&state), vec![0, 1]);
        assert_eq!(state.blocks[0].variant(), BlockVariant::Header);
        assert_eq!(state.blocks[1].variant(), BlockVariant::Content);
    }

    #[test]
    fn add_after_inserts_between() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        let a_id = state.blocks[0].id.clone();
        let b_id = state.blocks[1].id.clone();

        let next = reduce(
            &state,
            Action::AddBlock {
                variant: BlockVariant::Image,
                after_id: Some(a_id.clone()),
            },
        );

        assert_eq!(orders(&next), vec![0, 1, 2]);
        assert_eq!(next.blocks[0].id, a_id);
        assert_eq!(next.blocks[1].variant(), BlockVariant::Image);
        assert_eq!(next.blocks[2].id, b_id);
    }

    #[test]
    fn add_with_unresolved_after_appends() {
        let state = collection_of(&[BlockVariant::Header]);
        let next = reduce(
            &state,
            Action::AddBlock {
                variant: BlockVariant::Content,
                after_id: Some("missing".to_string()),
            },
        );
        assert_eq!(orders(&next), vec![0, 1]);
        assert_eq!(next.blocks[1].variant(), BlockVariant::Content);
    }

    #[test]
    fn remove_middle_renumbers() {
        let state = collection_of(&[
            BlockVariant::Header,
            BlockVariant::Content,
            BlockVariant::Image,
        ]);
        let middle = state.blocks[1].id.clone();
        let first = state.blocks[0].id.clone();
        let last = state.blocks[2].id.clone();

        let next = reduce(&state, Action::RemoveBlock { id: middle });
        assert_eq!(ids(&next), vec![first, last]);
        assert_eq!(orders(&next), vec![0, 1]);
    }

    #[test]
    fn stale_ids_are_tolerated() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        let before = state.clone();

        for action in [
            Action::RemoveBlock { id: "ghost".to_string() },
            Action::UpdateBlock {
                id: "ghost".to_string(),
                patch: BlockPatch::default(),
            },
            Action::ReorderBlocks { id: "ghost".to_string(), new_order: 0 },
            Action::ToggleEdit { id: "ghost".to_string() },
            Action::DuplicateBlock { id: "ghost".to_string() },
        ] {
            let next = reduce(&state, action);
            assert_eq!(next, before, "stale-id action must leave state untouched");
        }
    }

    #[test]
    fn noop_update_leaves_last_modified() {
        let state = collection_of(&[BlockVariant::Content]);
        let id = state.blocks[0].id.clone();

        let next = reduce(
            &state,
            Action::UpdateBlock { id, patch: BlockPatch::default() },
        );
        assert_eq!(next.last_modified, state.last_modified);
    }

    #[test]
    fn update_merges_and_bumps_last_modified() {
        let state = collection_of(&[BlockVariant::Content]);
        let id = state.blocks[0].id.clone();

        let next = reduce(
            &state,
            Action::UpdateBlock {
                id,
                patch: BlockPatch {
                    payload: Some(PayloadPatch::Content(ContentPatch {
                        body: Some("초대합니다".to_string()),
                        ..ContentPatch::default()
                    })),
                    ..BlockPatch::default()
                },
            },
        );

        match &next.blocks[0].payload {
            BlockPayload::Content(p) => assert_eq!(p.body, "초대합니다"),
            other => panic!("unexpected payload {other:?}"),
        }
        assert!(next.last_modified >= state.last_modified);
        assert_ne!(next.blocks, state.blocks);
    }

    #[test]
    fn reorder_collision_moved_block_takes_slot() {
        let state = collection_of(&[
            BlockVariant::Header,
            BlockVariant::Content,
            BlockVariant::Image,
        ]);
        let c_id = state.blocks[2].id.clone();

        let next = reduce(
            &state,
            Action::ReorderBlocks { id: c_id.clone(), new_order: 0 },
        );
        assert_eq!(next.blocks[0].id, c_id);
        assert_eq!(orders(&next), vec![0, 1, 2]);
    }

    #[test]
    fn reorder_out_of_range_clamps_to_end() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        let a_id = state.blocks[0].id.clone();

        let next = reduce(
            &state,
            Action::ReorderBlocks { id: a_id.clone(), new_order: 99 },
        );
        assert_eq!(next.blocks[1].id, a_id);
        assert_eq!(orders(&next), vec![0, 1]);
    }

    #[test]
    fn reorder_moves_block_downward() {
        let state = collection_of(&[
            BlockVariant::Header,
            BlockVariant::Content,
            BlockVariant::Image,
        ]);
        let a_id = state.blocks[0].id.clone();
        let b_id = state.blocks[1].id.clone();
        let c_id = state.blocks[2].id.clone();

        let next = reduce(
            &state,
            Action::ReorderBlocks { id: a_id.clone(), new_order: 2 },
        );
        assert_eq!(ids(&next), vec![b_id, c_id, a_id]);
        assert_eq!(orders(&next), vec![0, 1, 2]);
    }

    #[test]
    fn reorder_to_same_slot_is_noop() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        let a_id = state.blocks[0].id.clone();

        let next = reduce(&state, Action::ReorderBlocks { id: a_id, new_order: 0 });
        assert_eq!(next, state);
    }

    #[test]
    fn move_helpers_respect_bounds() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        let first = state.blocks[0].id.clone();
        let last = state.blocks[1].id.clone();

        assert!(move_up(&state, &first).is_none());
        assert!(move_down(&state, &last).is_none());
        assert!(move_up(&state, "ghost").is_none());

        let action = move_down(&state, &first).unwrap();
        let next = reduce(&state, action);
        assert_eq!(next.blocks[1].id, first);

        let action = move_up(&next, &first).unwrap();
        let back = reduce(&next, action);
        assert_eq!(back.blocks[0].id, first);
    }

    #[test]
    fn toggle_edit_is_exclusive() {
        let state = collection_of(&[
            BlockVariant::Header,
            BlockVariant::Content,
            BlockVariant::Image,
        ]);
        let a_id = state.blocks[0].id.clone();
        let b_id = state.blocks[1].id.clone();

        let next = reduce(&state, Action::ToggleEdit { id: a_id.clone() });
        assert_eq!(next.editing_block().unwrap().id, a_id);
        // Opening another block closes the first.
        let next = reduce(&next, Action::ToggleEdit { id: b_id.clone() });
        assert_eq!(next.editing_block().unwrap().id, b_id);
        assert_eq!(next.blocks.iter().filter(|b| b.editing).count(), 1);
    }

    #[test]
    fn toggle_edit_does_not_bump_last_modified() {
        let state = collection_of(&[BlockVariant::Header]);
        let id = state.blocks[0].id.clone();

        let next = reduce(&state, Action::ToggleEdit { id });
        assert!(next.editing_block().is_some());
        assert_eq!(next.last_modified, state.last_modified);
    }

    #[test]
    fn duplicate_lands_after_original() {
        let state = collection_of(&[BlockVariant::Content, BlockVariant::Image]);
        let first = &state.blocks[0];
        let first_id = first.id.clone();
        let first_payload = first.payload.clone();
        let second_id = state.blocks[1].id.clone();

        let next = reduce(&state, Action::DuplicateBlock { id: first_id.clone() });
        assert_eq!(orders(&next), vec![0, 1, 2]);
        assert_eq!(next.blocks[0].id, first_id);
        assert_eq!(next.blocks[2].id, second_id);

        let copy = &next.blocks[1];
        assert_ne!(copy.id, first_id);
        assert_eq!(copy.payload, first_payload);
        assert!(!copy.editing);
    }

    #[test]
    fn load_replaces_and_normalizes() {
        let state = collection_of(&[BlockVariant::Header]);
        let replacement = vec![
            create_block(BlockVariant::Content, 9),
            create_block(BlockVariant::Image, 3),
        ];
        let image_id = replacement[1].id.clone();

        let next = reduce(&state, Action::LoadBlocks { blocks: replacement });
        assert_eq!(orders(&next), vec![0, 1]);
        assert_eq!(next.blocks[0].id, image_id);
        assert_eq!(next.invitation_id, state.invitation_id);
    }

    #[test]
    fn load_with_identical_blocks_is_noop() {
        let state = collection_of(&[BlockVariant::Header, BlockVariant::Content]);
        let next = reduce(
            &state,
            Action::LoadBlocks { blocks: state.blocks.clone() },
        );
        assert_eq!(next, state);
        assert_eq!(next.last_modified, state.last_modified);
    }

    #[test]
    fn orders_stay_contiguous_over_action_sequences() {
        let mut state = BlockCollection::new();
        let script = [
            Action::AddBlock { variant: BlockVariant::Header, after_id: None },
            Action::AddBlock { variant: BlockVariant::Content, after_id: None },
            Action::AddBlock { variant: BlockVariant::Image, after_id: None },
            Action::DuplicateBlock { id: String::new() }, // patched below
        ];

        for (step, action) in script.into_iter().enumerate() {
            let action = match action {
                Action::DuplicateBlock { .. } => Action::DuplicateBlock {
                    id: state.blocks[1].id.clone(),
                },
                other => other,
            };
            state = reduce(&state, action);

            let mut sorted = orders(&state);
            sorted.sort_unstable();
            let expected: Vec<usize> = (0..state.len()).collect();
            assert_eq!(sorted, expected, "orders broken after step {step}");
        }

        // And again after removals from the middle.
        let victim = state.blocks[2].id.clone();
        state = reduce(&state, Action::RemoveBlock { id: victim });
        let mut sorted = orders(&state);
        sorted.sort_unstable();
        assert_eq!(sorted, (0..state.len()).collect::<Vec<_>>());
    }
}
