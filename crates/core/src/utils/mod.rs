pub mod number_format;
pub mod time_utils;

pub use number_format::{format_fixed, format_truncated, truncate_fixed};
pub use time_utils::format_timestamp;
