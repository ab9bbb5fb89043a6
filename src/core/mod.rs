//! Core utilities shared across features.

mod datetime;

pub use datetime::{day_label, parse_as_of, trailing_days, MAX_WINDOW_DAYS};
