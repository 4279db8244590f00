//! Ambient plumbing shared by the gradebook workspace: environment-driven
//! configuration and logging.

pub mod config;
pub mod logger;
