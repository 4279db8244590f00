//! # Utilities
//!
//! Small helpers shared across the `scoring` crate.
//!
//! - [`rounding`]: decimal rounding used for every reported score.
//! - [`natural_order`]: digit-aware string ordering used to break ties between
//!   assignment and group names.

pub mod natural_order;
pub mod rounding;
