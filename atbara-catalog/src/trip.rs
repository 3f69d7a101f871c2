use atbara_shared::format::hhmm;
use atbara_shared::FareClass;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Trip status tag used to split the dashboard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Upcoming,
    Completed,
    Cancelled,
}

/// A previously confirmed booking as shown on the trip dashboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Trip {
    pub id: String,
    pub booking_ref: String,
    pub train_name: String,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    #[serde(with = "hhmm")]
    pub departure: NaiveTime,
    #[serde(with = "hhmm")]
    pub arrival: NaiveTime,
    pub fare_class: FareClass,
    pub seat: String,
    pub price: i32,
    pub status: TripStatus,
}

impl Trip {
    pub fn is_upcoming(&self) -> bool {
        self.status == TripStatus::Upcoming
    }
}
