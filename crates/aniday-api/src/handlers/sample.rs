//! Static sample handler.

use axum::Json;

use aniday_models::Media;

use crate::error::{ApiError, ApiResult};

/// Fixed sample payload served by `/test`, independent of selection state.
const SAMPLE_JSON: &str = include_str!("fixtures/sample.json");

/// `GET /test` - a hardcoded sample entry for client development.
pub async fn get_sample() -> ApiResult<Json<Media>> {
    let media: Media = serde_json::from_str(SAMPLE_JSON)
        .map_err(|e| ApiError::internal(format!("sample fixture is malformed: {e}")))?;
    Ok(Json(media))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_fixture_parses() {
        let media: Media = serde_json::from_str(SAMPLE_JSON).unwrap();
        assert_eq!(media.average_score, Some(83));
        assert_eq!(
            media.title.english.as_deref(),
            Some("Neon Genesis Evangelion")
        );
        assert_eq!(media.studios.as_ref().unwrap().nodes.len(), 8);
    }
}
