pub mod time_utils;

pub use time_utils::{date_key, get_days_between, parse_date_key, Clock, FixedClock, SystemClock};
