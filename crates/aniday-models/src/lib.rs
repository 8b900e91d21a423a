//! Shared data models for the aniday backend.
//!
//! This crate provides Serde-serializable types for:
//! - AniList media entries (the "anime of the day" record)
//! - Paginated query results
//! - Broadcast seasons

pub mod media;
pub mod page;
pub mod season;

// Re-export common types
pub use media::{CoverImage, FuzzyDate, Media, MediaTitle, Studio, StudioConnection};
pub use page::{Page, PageInfo};
pub use season::MediaSeason;
