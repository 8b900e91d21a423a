//! AniList GraphQL client.
//!
//! A thin client around the one query this service needs: seasonal media
//! pages filtered by `(season, seasonYear)`. Pagination is page-number
//! based; callers follow `pageInfo.hasNextPage` and re-query with the next
//! page number.

pub mod client;
pub mod error;

pub use client::{AnilistClient, SeasonQuery, DEFAULT_ENDPOINT};
pub use error::{AnilistError, AnilistResult};
