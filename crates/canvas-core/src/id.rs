//! Fresh block identifiers.

use canvas_registry::BlockType;
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::clock::unix_millis;

const SUFFIX_LEN: usize = 6;

/// Produce a fresh id: `<type>-<millis>-<suffix>`.
///
/// The millisecond component is monotonic within this process, so ids from
/// one generator never repeat locally. There is no cross-process uniqueness
/// guarantee; within-schema uniqueness is enforced by the sanitizer's
/// seen-id tracking.
pub fn fresh_id(block_type: BlockType) -> String {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();

    format!("{}-{}-{}", block_type.as_str(), unix_millis(), suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_ids_carry_the_type_prefix() {
        assert!(fresh_id(BlockType::Links).starts_with("links-"));
        assert!(fresh_id(BlockType::BrandCollabs).starts_with("brand_collabs-"));
    }

    #[test]
    fn fresh_ids_never_repeat_within_a_process() {
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            assert!(seen.insert(fresh_id(BlockType::Text)));
        }
    }

    #[test]
    fn suffix_is_lowercase_alphanumeric() {
        let id = fresh_id(BlockType::Hero);
        let suffix = id.rsplit('-').next().unwrap();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }
}
