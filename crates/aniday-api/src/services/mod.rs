//! API services.

pub mod selector;

pub use selector::{DailySelector, MAX_ATTEMPTS};
