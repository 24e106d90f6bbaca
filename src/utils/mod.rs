//! Shared helpers.
//!
//! - [`normalize`](mod@normalize) - character folding used by fuzzy matching
//! - [`app_data`] - configuration file in the platform data directory
//! - [`progress`] - spinner that becomes a no-op without the `progress` feature

pub mod app_data;
pub mod normalize;
pub mod progress;

pub use app_data::*;
pub use normalize::normalize;
