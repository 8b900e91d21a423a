//! Broadcast season.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Anime broadcast season as AniList names it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MediaSeason {
    Winter,
    Spring,
    Summer,
    Fall,
}

impl MediaSeason {
    /// All seasons, in AniList order. Used for uniform random choice.
    pub const ALL: [MediaSeason; 4] = [
        MediaSeason::Winter,
        MediaSeason::Spring,
        MediaSeason::Summer,
        MediaSeason::Fall,
    ];

    /// Wire name (`"WINTER"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaSeason::Winter => "WINTER",
            MediaSeason::Spring => "SPRING",
            MediaSeason::Summer => "SUMMER",
            MediaSeason::Fall => "FALL",
        }
    }
}

impl std::fmt::Display for MediaSeason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
