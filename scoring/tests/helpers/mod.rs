#[allow(dead_code)]
pub mod fixtures;

#[allow(unused_imports)]
pub use fixtures::{Classroom, date, engine};
