use serde::{Deserialize, Serialize};

/// Deterministic, machine-readable account of what the sanitizer repaired.
///
/// Notes:
/// - Contains *no* wall-clock values (to preserve determinism).
/// - Never influences the sanitized result; intended for CI and
///   storage-side monitoring of corrupted persisted state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeReport {
    /// Input was not a plain object; the whole schema was replaced by the
    /// factory default.
    pub replaced_with_default: bool,

    /// `version` was absent or unusable and fell back to the current
    /// schema version constant.
    pub version_repaired: bool,

    /// `updatedAt` was absent or unusable and was stamped with the current
    /// time.
    pub updated_at_stamped: bool,

    /// Block candidates dropped because they were not objects.
    pub blocks_dropped_not_object: usize,

    /// Block candidates dropped because `type` was outside the closed set.
    pub blocks_dropped_unknown_type: usize,

    /// Blocks whose id was missing, empty, or a duplicate and was
    /// regenerated.
    pub ids_regenerated: usize,

    /// Blocks whose title was missing or empty and fell back to the
    /// canonical title.
    pub titles_defaulted: usize,

    /// `data` entries dropped because their values were not primitives.
    pub data_entries_dropped: usize,

    /// Blocks removed by the capacity cap.
    pub blocks_truncated: usize,

    /// A default links block was appended because none survived.
    pub links_block_appended: bool,
}

impl SanitizeReport {
    /// True when the input was already fully valid.
    pub fn is_clean(&self) -> bool {
        self == &SanitizeReport::default()
    }
}
