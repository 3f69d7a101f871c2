pub mod admin;
pub mod booking;
pub mod context;
pub mod dashboard;
pub mod error;
pub mod home;
pub mod navigation;
pub mod search;
pub mod shell;

pub use context::AppContext;
pub use error::{AppError, AppResult};
pub use navigation::{BookingPayload, Route};
pub use shell::{Outcome, Shell};
