//! Anime-of-the-day handler.

use axum::extract::State;
use axum::Json;
use chrono::Local;

use aniday_models::Media;

use crate::error::ApiResult;
use crate::state::AppState;

/// `GET /data` - the cached anime of the day, selecting a fresh one when
/// the calendar date has rolled over since the last selection.
pub async fn get_daily(State(state): State<AppState>) -> ApiResult<Json<Media>> {
    let today = Local::now().date_naive();
    let media = state.selector.daily_record(today).await?;
    Ok(Json(media))
}
