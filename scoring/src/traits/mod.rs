//! # Traits
//!
//! Collaborator seams of the scoring pipeline.
//!
//! - [`time_provider`]: injected clock for lateness relative to "now".
//! - [`question_result_generator`]: scores one question's submissions.
//!
//! Implement these to plug in a different clock or question scoring strategy.

pub mod question_result_generator;
pub mod time_provider;
