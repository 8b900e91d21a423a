//! AniList client error types.

use thiserror::Error;

pub type AnilistResult<T> = Result<T, AnilistError>;

#[derive(Debug, Error)]
pub enum AnilistError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("AniList returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("GraphQL error: {0}")]
    Graphql(String),

    #[error("response carried no data")]
    MissingData,
}
