//! Request handlers.

pub mod daily;
pub mod health;
pub mod sample;

pub use daily::*;
pub use health::*;
pub use sample::*;
