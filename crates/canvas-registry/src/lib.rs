//! Canvas block type registry: the closed set of block kinds and their
//! canonical display titles.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of block kinds understood by layout schema version 1.
///
/// Adding a variant requires a schema version bump and is outside this
/// crate's responsibility. Unknown wire spellings are rejected by the
/// sanitizer, never guessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Hero,
    Stats,
    Links,
    Products,
    Music,
    Socials,
    BrandCollabs,
    FeaturedLink,
    Text,
    Image,
    Embed,
    Divider,
}

impl BlockType {
    /// Every member of the closed set, in declaration order.
    pub const ALL: [BlockType; 12] = [
        BlockType::Hero,
        BlockType::Stats,
        BlockType::Links,
        BlockType::Products,
        BlockType::Music,
        BlockType::Socials,
        BlockType::BrandCollabs,
        BlockType::FeaturedLink,
        BlockType::Text,
        BlockType::Image,
        BlockType::Embed,
        BlockType::Divider,
    ];

    /// Wire spelling (snake_case), identical to the serde representation.
    pub const fn as_str(self) -> &'static str {
        match self {
            BlockType::Hero => "hero",
            BlockType::Stats => "stats",
            BlockType::Links => "links",
            BlockType::Products => "products",
            BlockType::Music => "music",
            BlockType::Socials => "socials",
            BlockType::BrandCollabs => "brand_collabs",
            BlockType::FeaturedLink => "featured_link",
            BlockType::Text => "text",
            BlockType::Image => "image",
            BlockType::Embed => "embed",
            BlockType::Divider => "divider",
        }
    }

    /// Canonical display title for this kind.
    pub const fn title(self) -> &'static str {
        match self {
            BlockType::Hero => "Hero",
            BlockType::Stats => "Stats",
            BlockType::Links => "Link List",
            BlockType::Products => "Products",
            BlockType::Music => "Music",
            BlockType::Socials => "Socials",
            BlockType::BrandCollabs => "Brand Collabs",
            BlockType::FeaturedLink => "Featured Link",
            BlockType::Text => "Text",
            BlockType::Image => "Image",
            BlockType::Embed => "Embed",
            BlockType::Divider => "Divider",
        }
    }

    /// Parse a wire spelling. Exact match only (no trimming, no case folding).
    pub fn parse(value: &str) -> Option<BlockType> {
        BlockType::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str((*self).as_str())
    }
}

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::parse(s).ok_or_else(|| UnknownBlockType(s.to_string()))
    }
}

/// Error for [`BlockType::from_str`] on spellings outside the closed set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBlockType(pub String);

impl fmt::Display for UnknownBlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown block type '{}'", self.0)
    }
}

impl std::error::Error for UnknownBlockType {}

/// Membership test against the closed set.
pub fn is_block_type(value: &str) -> bool {
    BlockType::parse(value).is_some()
}

/// Canonical display title for a block type.
pub fn title_for(block_type: BlockType) -> &'static str {
    block_type.title()
}
