use atbara_catalog::Train;
use atbara_core::search::SearchQuery;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Home,
    Results,
    Booking,
    Dashboard,
    Admin,
}

impl Route {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::Results => "available.trains",
            Route::Booking => "booking.summary",
            Route::Dashboard => "dashboard",
            Route::Admin => "admin",
        }
    }
}

/// What the results page hands to the booking page. Either part may be missing
/// when the booking page is reached directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingPayload {
    pub train: Option<Train>,
    pub search_params: Option<SearchQuery>,
}

impl BookingPayload {
    pub fn new(train: Train, search_params: SearchQuery) -> Self {
        Self {
            train: Some(train),
            search_params: Some(search_params),
        }
    }
}
