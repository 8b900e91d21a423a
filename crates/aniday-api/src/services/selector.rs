//! Daily anime selection.
//!
//! One anime is selected per calendar day and cached in memory until the
//! date rolls over. Selection draws a random `(season, year)` filter,
//! pulls every page AniList has for it, and picks a random entry that
//! clears a randomly drawn minimum score and carries an English title.
//! Everything is bounded by a shared attempt budget because AniList
//! rate-limits aggressively.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use aniday_anilist::{AnilistClient, SeasonQuery};
use aniday_models::{Media, MediaSeason};

use crate::error::{ApiError, ApiResult};

/// Hard ceiling on external-fetch-triggering operations per selection:
/// extra page fetches, empty-result retries and quality rejections all
/// draw from the same budget.
pub const MAX_ATTEMPTS: u32 = 15;

/// Score threshold range: thresholds land in [0, 90).
const SCORE_RANGE: f64 = 90.0;
/// Power-law exponent biasing thresholds toward lower values.
const THRESHOLD_EXPONENT: f64 = 0.44;

/// Earliest season year AniList is queried for.
const YEAR_FLOOR: i32 = 1962;
/// Inclusive span of candidate years (1962..=2024).
const YEAR_SPAN: f64 = 63.0;
/// Power-law exponent biasing years toward recent seasons.
const YEAR_EXPONENT: f64 = 0.48;

/// Minimum acceptable score for one selection run.
pub fn draw_threshold(rng: &mut impl Rng) -> u8 {
    (rng.random::<f64>().powf(THRESHOLD_EXPONENT) * SCORE_RANGE) as u8
}

/// Season year, skewed toward recent years.
pub fn draw_year(rng: &mut impl Rng) -> i32 {
    YEAR_FLOOR + (rng.random::<f64>().powf(YEAR_EXPONENT) * YEAR_SPAN) as i32
}

/// Uniformly random season.
pub fn draw_season(rng: &mut impl Rng) -> MediaSeason {
    MediaSeason::ALL[rng.random_range(0..MediaSeason::ALL.len())]
}

/// Cached selection. Record and date are only ever written together, on
/// full success of a selection run.
#[derive(Debug, Default)]
struct SelectionState {
    record: Option<Media>,
    selected_on: Option<NaiveDate>,
}

/// Owns the anime-of-the-day cache and the selection procedure.
///
/// The state mutex is held across the whole check-then-refresh sequence,
/// so at most one selection runs at a time; concurrent requests arriving
/// during a refresh wait and then read the fresh cache.
pub struct DailySelector {
    client: Arc<AnilistClient>,
    state: Mutex<SelectionState>,
    rng: Mutex<StdRng>,
}

impl DailySelector {
    /// Create a selector with an OS-seeded generator.
    pub fn new(client: Arc<AnilistClient>) -> Self {
        Self::with_rng(client, StdRng::from_os_rng())
    }

    /// Create a selector with an explicit generator. Tests seed this for
    /// deterministic filter and threshold draws.
    pub fn with_rng(client: Arc<AnilistClient>, rng: StdRng) -> Self {
        Self {
            client,
            state: Mutex::new(SelectionState::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Return the anime for `today`, selecting a new one if the cache is
    /// empty or belongs to an earlier date.
    ///
    /// On a failed selection the cached state is left untouched, so the
    /// next request retries instead of serving a stale date as current.
    pub async fn daily_record(&self, today: NaiveDate) -> ApiResult<Media> {
        let mut state = self.state.lock().await;

        if state.selected_on == Some(today) {
            if let Some(record) = &state.record {
                debug!(%today, "returning cached anime of the day");
                return Ok(record.clone());
            }
        }

        info!(%today, "selecting a new anime of the day");
        let record = self.select().await?;

        state.record = Some(record.clone());
        state.selected_on = Some(today);

        Ok(record)
    }

    /// Run one bounded selection: random filters, full pagination, random
    /// pick, quality gate.
    async fn select(&self) -> ApiResult<Media> {
        let mut rng = self.rng.lock().await;

        let threshold = draw_threshold(&mut *rng);
        debug!(threshold, "drew minimum score threshold");

        let mut attempts = 0u32;
        while attempts < MAX_ATTEMPTS {
            let year = draw_year(&mut *rng);
            let season = draw_season(&mut *rng);

            let pool = self.season_pool(season, year, &mut attempts).await?;

            if pool.is_empty() {
                debug!(%season, year, "no media for filter, drawing a new one");
                attempts += 1;
                continue;
            }

            let pick = pool[rng.random_range(0..pool.len())].clone();

            if pick.score() >= threshold && pick.has_english_title() {
                info!(
                    title = pick.title.english.as_deref().unwrap_or_default(),
                    score = pick.score(),
                    threshold,
                    "accepted anime of the day"
                );
                return Ok(pick);
            }

            debug!(
                score = pick.score(),
                threshold,
                has_english_title = pick.has_english_title(),
                "pick rejected, drawing a new filter"
            );
            attempts += 1;
        }

        warn!(attempts, "attempt budget exhausted without a qualifying pick");
        Err(ApiError::SelectionFailed)
    }

    /// Fetch every page for a `(season, year)` filter, following the
    /// `hasNextPage` cursor while budget remains. Each extra page fetch
    /// consumes one attempt.
    async fn season_pool(
        &self,
        season: MediaSeason,
        year: i32,
        attempts: &mut u32,
    ) -> ApiResult<Vec<Media>> {
        let first = self
            .client
            .season_page(SeasonQuery {
                season,
                year,
                page: 1,
            })
            .await?;

        let mut info = first.page_info;
        let mut pool = first.media;

        while info.has_next_page && *attempts < MAX_ATTEMPTS {
            *attempts += 1;
            let next = self
                .client
                .season_page(SeasonQuery {
                    season,
                    year,
                    page: info.current_page + 1,
                })
                .await?;
            pool.extend(next.media);
            info = next.page_info;
        }

        Ok(pool)
    }
}
