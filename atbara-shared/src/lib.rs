pub mod fare;
pub mod format;
pub mod models;
pub mod pii;

pub use fare::{FareClass, ParseFareClassError};
pub use format::{format_date, format_price, format_time, DEFAULT_CURRENCY};
pub use pii::Masked;
