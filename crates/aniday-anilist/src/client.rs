//! AniList GraphQL client for seasonal media pages.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use aniday_models::{MediaSeason, Page};

use crate::error::{AnilistError, AnilistResult};

/// Public AniList GraphQL endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://graphql.anilist.co";

/// Only TV/OVA/etc. anime entries, never manga.
const MEDIA_TYPE: &str = "ANIME";

/// Seasonal page query document.
const SEASON_QUERY: &str = "\
query Page($season: MediaSeason, $seasonYear: Int, $type: MediaType, $isAdult: Boolean, $page: Int) {
  Page(page: $page) {
    media(season: $season, seasonYear: $seasonYear, type: $type, isAdult: $isAdult) {
      averageScore
      coverImage {
        extraLarge
      }
      episodes
      endDate {
        year
        month
      }
      genres
      startDate {
        year
        month
      }
      studios {
        nodes {
          name
        }
      }
      title {
        english
        native
        romaji
      }
      description
    }
    pageInfo {
      currentPage
      hasNextPage
    }
  }
}";

/// Filter for one seasonal page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonQuery {
    pub season: MediaSeason,
    pub year: i32,
    pub page: u32,
}

#[derive(Serialize)]
struct GraphqlRequest<'a> {
    query: &'a str,
    variables: Variables,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Variables {
    season: MediaSeason,
    season_year: i32,
    #[serde(rename = "type")]
    media_type: &'static str,
    is_adult: bool,
    page: u32,
}

#[derive(Deserialize)]
struct GraphqlResponse {
    data: Option<QueryData>,
    errors: Option<Vec<GraphqlError>>,
}

#[derive(Deserialize)]
struct QueryData {
    #[serde(rename = "Page")]
    page: Page,
}

#[derive(Deserialize)]
struct GraphqlError {
    message: String,
}

/// AniList API client.
pub struct AnilistClient {
    http: Client,
    endpoint: String,
}

impl AnilistClient {
    /// Create a client against the public endpoint.
    pub fn new(timeout: Duration) -> AnilistResult<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT, timeout)
    }

    /// Create a client against a custom endpoint (tests point this at a
    /// mock server).
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> AnilistResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Fetch one page of anime for a `(season, year)` filter.
    ///
    /// Non-2xx responses and GraphQL-level errors both come back as `Err`;
    /// callers treat them as a failed fetch, not an empty page.
    pub async fn season_page(&self, query: SeasonQuery) -> AnilistResult<Page> {
        debug!(
            season = %query.season,
            year = query.year,
            page = query.page,
            "fetching seasonal page"
        );

        let request = GraphqlRequest {
            query: SEASON_QUERY,
            variables: Variables {
                season: query.season,
                season_year: query.year,
                media_type: MEDIA_TYPE,
                is_adult: false,
                page: query.page,
            },
        };

        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        if !response.status().is_success() {
            return Err(AnilistError::Status(response.status()));
        }

        let decoded: GraphqlResponse = response.json().await?;

        if let Some(errors) = decoded.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(AnilistError::Graphql(messages.join("; ")));
            }
        }

        decoded
            .data
            .map(|d| d.page)
            .ok_or(AnilistError::MissingData)
    }
}
