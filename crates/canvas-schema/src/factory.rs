//! Deterministic default schema construction.

use canvas_core::clock::now_rfc3339;
use canvas_core::id::fresh_id;
use canvas_core::model::{BlockData, LayoutBlock, LayoutSchema, LAYOUT_SCHEMA_V};
use canvas_registry::BlockType;

use crate::seed::LayoutSeed;

/// Canonical composition of a brand-new page, in order.
pub const DEFAULT_BLOCK_ORDER: [BlockType; 8] = [
    BlockType::Hero,
    BlockType::FeaturedLink,
    BlockType::Links,
    BlockType::Products,
    BlockType::Music,
    BlockType::Socials,
    BlockType::Stats,
    BlockType::BrandCollabs,
];

/// Construct a fresh block of `block_type`.
///
/// The block gets a fresh id, its canonical title, empty data, and
/// `visible: true`. `position` is 0; callers renumber after insertion.
pub fn new_block(block_type: BlockType) -> LayoutBlock {
    LayoutBlock {
        id: fresh_id(block_type),
        block_type,
        title: block_type.title().to_string(),
        position: 0,
        visible: true,
        data: BlockData::new(),
    }
}

/// Build the default 8-block schema from optional onboarding signals.
///
/// Visibility is evaluated once, here; an absent seed takes every
/// conditional block down its "false" branch.
pub fn create_default_layout_schema(seed: Option<&LayoutSeed>) -> LayoutSchema {
    let blocks = DEFAULT_BLOCK_ORDER
        .iter()
        .map(|&t| {
            let mut block = new_block(t);
            block.visible = initial_visibility(t, seed);
            block
        })
        .collect();

    let mut schema = LayoutSchema {
        version: LAYOUT_SCHEMA_V,
        updated_at: now_rfc3339(),
        blocks,
    };
    schema.recompute_positions();
    schema
}

fn initial_visibility(block_type: BlockType, seed: Option<&LayoutSeed>) -> bool {
    match block_type {
        BlockType::Hero | BlockType::FeaturedLink | BlockType::Links | BlockType::Stats => true,
        BlockType::Products => seed.is_some_and(LayoutSeed::has_products),
        BlockType::Music => seed.is_some_and(LayoutSeed::has_music_link),
        BlockType::Socials => seed.is_some_and(LayoutSeed::has_social_link),
        BlockType::BrandCollabs => seed.is_some_and(LayoutSeed::collabs_enabled),
        // Not part of the default composition; fresh ad-hoc blocks start visible.
        BlockType::Text | BlockType::Image | BlockType::Embed | BlockType::Divider => true,
    }
}
