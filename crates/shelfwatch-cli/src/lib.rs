//! CLI library components for the reagent shelf-life tracker.

pub mod logging;
pub mod pipeline;
