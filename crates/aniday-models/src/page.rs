//! Paginated query results.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::media::Media;

/// One page of a paginated AniList query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    #[serde(default)]
    pub media: Vec<Media>,
    pub page_info: PageInfo,
}

/// Pagination cursor. `has_next_page` drives the fetch loop; callers
/// increment the page number until it reports false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub current_page: u32,
    pub has_next_page: bool,
}
