pub mod models;
pub mod reference;
pub mod trips;
pub mod wizard;

pub use models::{BookingConfirmation, BookingSummary, Gender, PassengerField, PassengerInfo};
pub use reference::{ReferenceGenerator, DEFAULT_REFERENCE_PREFIX};
pub use trips::{DashboardError, DashboardTab, TripDashboard};
pub use wizard::{BookingWizard, WizardConfig, WizardError, WizardStep};
