//! Application state.

use std::sync::Arc;

use aniday_anilist::{AnilistClient, AnilistError};

use crate::config::ApiConfig;
use crate::services::DailySelector;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: ApiConfig,
    pub selector: Arc<DailySelector>,
}

impl AppState {
    /// Create new application state.
    pub fn new(config: ApiConfig) -> Result<Self, AnilistError> {
        let client = AnilistClient::with_endpoint(&config.anilist_url, config.fetch_timeout)?;
        let selector = Arc::new(DailySelector::new(Arc::new(client)));
        Ok(Self { config, selector })
    }

    /// Create state around an existing selector. Tests use this to inject
    /// a selector wired to a mock AniList endpoint and a seeded generator.
    pub fn with_selector(config: ApiConfig, selector: Arc<DailySelector>) -> Self {
        Self { config, selector }
    }
}
