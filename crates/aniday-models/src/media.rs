//! Media entry models.
//!
//! These mirror the AniList GraphQL response shape. A fetched entry is
//! pass-through data: it is cached and served back out unmodified, so the
//! serialized form must match the wire form field for field.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One media entry returned by AniList.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    /// Weighted average score, 0-100. Absent for unscored entries.
    pub average_score: Option<u8>,

    /// Cover art URLs.
    pub cover_image: Option<CoverImage>,

    /// Number of episodes, absent while still airing.
    pub episodes: Option<u32>,

    /// Airing end date (may be partially known).
    pub end_date: Option<FuzzyDate>,

    /// Genre tags.
    #[serde(default)]
    pub genres: Vec<String>,

    /// Airing start date.
    pub start_date: Option<FuzzyDate>,

    /// Studios involved in production.
    pub studios: Option<StudioConnection>,

    /// Title variants.
    pub title: MediaTitle,

    /// Free-text synopsis. May contain HTML markup; passed through as-is.
    pub description: Option<String>,
}

impl Media {
    /// Score used by the quality filter. Unscored entries count as 0 so
    /// they never beat a positive threshold.
    pub fn score(&self) -> u8 {
        self.average_score.unwrap_or(0)
    }

    /// Whether the entry carries a non-empty English title.
    pub fn has_english_title(&self) -> bool {
        self.title
            .english
            .as_deref()
            .is_some_and(|t| !t.is_empty())
    }
}

/// Title variants for a media entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MediaTitle {
    pub english: Option<String>,
    pub native: Option<String>,
    pub romaji: Option<String>,
}

/// Cover art. Only the extra-large variant is queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CoverImage {
    pub extra_large: Option<String>,
}

/// Partially-known calendar date as AniList reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FuzzyDate {
    pub year: Option<i32>,
    pub month: Option<u32>,
}

/// Studio connection wrapper.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct StudioConnection {
    #[serde(default)]
    pub nodes: Vec<Studio>,
}

/// A single studio node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Studio {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anilist_entry() -> serde_json::Value {
        serde_json::json!({
            "averageScore": 83,
            "coverImage": {
                "extraLarge": "https://example.org/cover.jpg"
            },
            "episodes": 26,
            "endDate": { "year": 1996, "month": 3 },
            "genres": ["Action", "Mecha"],
            "startDate": { "year": 1995, "month": 10 },
            "studios": { "nodes": [{ "name": "Gainax" }] },
            "title": {
                "english": "Neon Genesis Evangelion",
                "native": "新世紀エヴァンゲリオン",
                "romaji": "Shin Seiki Evangelion"
            },
            "description": "In the year 2015..."
        })
    }

    #[test]
    fn test_deserializes_anilist_shape() {
        let media: Media = serde_json::from_value(anilist_entry()).unwrap();
        assert_eq!(media.average_score, Some(83));
        assert_eq!(media.episodes, Some(26));
        assert_eq!(media.genres, vec!["Action", "Mecha"]);
        assert_eq!(
            media.cover_image.as_ref().unwrap().extra_large.as_deref(),
            Some("https://example.org/cover.jpg")
        );
        assert_eq!(media.studios.as_ref().unwrap().nodes[0].name, "Gainax");
        assert_eq!(media.start_date.as_ref().unwrap().year, Some(1995));
    }

    #[test]
    fn test_serializes_back_to_wire_shape() {
        let media: Media = serde_json::from_value(anilist_entry()).unwrap();
        let out = serde_json::to_value(&media).unwrap();
        assert_eq!(out["averageScore"], 83);
        assert_eq!(out["coverImage"]["extraLarge"], "https://example.org/cover.jpg");
        assert_eq!(out["title"]["english"], "Neon Genesis Evangelion");
        assert_eq!(out["endDate"]["month"], 3);
    }

    #[test]
    fn test_tolerates_nulls() {
        let media: Media = serde_json::from_value(serde_json::json!({
            "averageScore": null,
            "coverImage": null,
            "episodes": null,
            "endDate": null,
            "genres": [],
            "startDate": null,
            "studios": { "nodes": [] },
            "title": { "english": null, "native": "何か", "romaji": null },
            "description": null
        }))
        .unwrap();
        assert_eq!(media.score(), 0);
        assert!(!media.has_english_title());
    }

    #[test]
    fn test_empty_english_title_does_not_count() {
        let mut media: Media = serde_json::from_value(anilist_entry()).unwrap();
        assert!(media.has_english_title());
        media.title.english = Some(String::new());
        assert!(!media.has_english_title());
        media.title.english = None;
        assert!(!media.has_english_title());
    }
}
