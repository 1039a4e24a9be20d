//! Onboarding seed signals.
//!
//! A seed is only consulted when building a brand-new default schema; it is
//! never stored and never re-enters through the trust boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Platforms treated as music/streaming destinations.
const MUSIC_PLATFORMS: &[&str] = &[
    "spotify",
    "apple_music",
    "soundcloud",
    "youtube_music",
    "bandcamp",
    "tidal",
    "deezer",
];

/// Platforms treated as social destinations.
const SOCIAL_PLATFORMS: &[&str] = &[
    "instagram",
    "tiktok",
    "youtube",
    "twitter",
    "x",
    "facebook",
    "twitch",
    "snapchat",
    "pinterest",
    "linkedin",
    "threads",
];

/// Optional onboarding-derived hints for the schema factory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSeed {
    /// Detected platform links, keyed by platform name (e.g. "instagram").
    pub links: BTreeMap<String, String>,
    pub monetization: Option<MonetizationSeed>,
}

/// Monetization features enabled during onboarding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MonetizationSeed {
    pub products: Vec<String>,
    pub collabs_enabled: bool,
}

impl LayoutSeed {
    pub fn has_music_link(&self) -> bool {
        self.links.keys().any(|k| is_music_platform(k))
    }

    pub fn has_social_link(&self) -> bool {
        self.links.keys().any(|k| is_social_platform(k))
    }

    pub fn has_products(&self) -> bool {
        self.monetization
            .as_ref()
            .is_some_and(|m| !m.products.is_empty())
    }

    pub fn collabs_enabled(&self) -> bool {
        self.monetization.as_ref().is_some_and(|m| m.collabs_enabled)
    }
}

/// Case-insensitive membership test against the music platform set.
pub fn is_music_platform(platform: &str) -> bool {
    let lowered = platform.trim().to_ascii_lowercase();
    MUSIC_PLATFORMS.contains(&lowered.as_str())
}

/// Case-insensitive membership test against the social platform set.
pub fn is_social_platform(platform: &str) -> bool {
    let lowered = platform.trim().to_ascii_lowercase();
    SOCIAL_PLATFORMS.contains(&lowered.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn platform_classification_is_case_insensitive() {
        assert!(is_music_platform("Spotify"));
        assert!(is_social_platform("Instagram"));
        assert!(!is_music_platform("instagram"));
        assert!(!is_social_platform("spotify"));
        assert!(!is_music_platform("website"));
        assert!(!is_social_platform("website"));
    }

    #[test]
    fn seed_signal_helpers() {
        let mut seed = LayoutSeed::default();
        assert!(!seed.has_music_link());
        assert!(!seed.has_social_link());
        assert!(!seed.has_products());
        assert!(!seed.collabs_enabled());

        seed.links
            .insert("tiktok".to_string(), "https://tiktok.com/@u".to_string());
        seed.links
            .insert("bandcamp".to_string(), "https://u.bandcamp.com".to_string());
        seed.monetization = Some(MonetizationSeed {
            products: vec!["tshirt".to_string()],
            collabs_enabled: true,
        });

        assert!(seed.has_music_link());
        assert!(seed.has_social_link());
        assert!(seed.has_products());
        assert!(seed.collabs_enabled());
    }

    #[test]
    fn empty_product_list_does_not_count_as_monetization() {
        let seed = LayoutSeed {
            monetization: Some(MonetizationSeed::default()),
            ..LayoutSeed::default()
        };
        assert!(!seed.has_products());
        assert!(!seed.collabs_enabled());
    }
}
