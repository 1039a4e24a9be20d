//! Ordered block edit primitives.
//!
//! All four operate on an already-sanitized block list and return a new
//! list with positions renormalized to index order. None mutate their
//! input and none fail: invalid references and capacity overruns are
//! silent no-ops, since they typically come from benign UI races (a
//! double-fired click) rather than programmer mistakes.

use canvas_core::id::fresh_id;
use canvas_core::model::{LayoutBlock, MAX_LAYOUT_BLOCKS};
use canvas_registry::BlockType;
use canvas_schema::factory::new_block;

/// Direction for [`shift_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftDirection {
    /// Toward index 0.
    Up,
    /// Toward the end of the list.
    Down,
}

impl ShiftDirection {
    pub const fn offset(self) -> isize {
        match self {
            ShiftDirection::Up => -1,
            ShiftDirection::Down => 1,
        }
    }
}

/// Move the `source_id` block to the `target_id` block's pre-removal index.
///
/// Splice semantics: the source is removed first, then re-inserted at the
/// index the target held before removal, so the target itself shifts by
/// one. No-op when either id is absent or the ids are equal.
pub fn move_block(blocks: &[LayoutBlock], source_id: &str, target_id: &str) -> Vec<LayoutBlock> {
    if source_id == target_id {
        return blocks.to_vec();
    }

    let (Some(from), Some(to)) = (index_of(blocks, source_id), index_of(blocks, target_id))
    else {
        return blocks.to_vec();
    };

    let mut out = blocks.to_vec();
    let moved = out.remove(from);
    out.insert(to, moved);
    renumber(&mut out);
    out
}

/// Swap a block with its neighbor in `direction`.
///
/// No-op when the id is absent or the neighbor index falls off either end.
pub fn shift_block(
    blocks: &[LayoutBlock],
    block_id: &str,
    direction: ShiftDirection,
) -> Vec<LayoutBlock> {
    let Some(index) = index_of(blocks, block_id) else {
        return blocks.to_vec();
    };

    let adjacent = index as isize + direction.offset();
    if adjacent < 0 || adjacent as usize >= blocks.len() {
        return blocks.to_vec();
    }

    let target_id = blocks[adjacent as usize].id.clone();
    move_block(blocks, block_id, &target_id)
}

/// Insert a fresh block of `block_type` at `at_index` (clamped to the
/// list). No-op at capacity.
pub fn insert_block(
    blocks: &[LayoutBlock],
    block_type: BlockType,
    at_index: usize,
) -> Vec<LayoutBlock> {
    if blocks.len() >= MAX_LAYOUT_BLOCKS {
        return blocks.to_vec();
    }

    let index = at_index.min(blocks.len());
    let mut out = blocks.to_vec();
    out.insert(index, new_block(block_type));
    renumber(&mut out);
    out
}

/// Duplicate the `block_id` block immediately after itself.
///
/// The copy gets a fresh id, a `"<title> Copy"` title, the same visibility,
/// and a shallow copy of `data`. No-op at capacity or on an unknown id.
pub fn duplicate_block(blocks: &[LayoutBlock], block_id: &str) -> Vec<LayoutBlock> {
    if blocks.len() >= MAX_LAYOUT_BLOCKS {
        return blocks.to_vec();
    }
    let Some(index) = index_of(blocks, block_id) else {
        return blocks.to_vec();
    };

    let source = &blocks[index];
    let copy = LayoutBlock {
        id: fresh_id(source.block_type),
        block_type: source.block_type,
        title: format!("{} Copy", source.title),
        position: 0,
        visible: source.visible,
        data: source.data.clone(),
    };

    let mut out = blocks.to_vec();
    out.insert(index + 1, copy);
    renumber(&mut out);
    out
}

fn index_of(blocks: &[LayoutBlock], block_id: &str) -> Option<usize> {
    blocks.iter().position(|b| b.id == block_id)
}

fn renumber(blocks: &mut [LayoutBlock]) {
    for (i, b) in blocks.iter_mut().enumerate() {
        b.position = i as u32;
    }
}
