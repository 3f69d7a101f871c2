use atbara_shared::format::hhmm;
use atbara_shared::FareClass;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Headline totals on the admin overview tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminStats {
    pub total_bookings: u32,
    pub total_revenue: i64,
    pub total_trains: u32,
    pub total_users: u32,
}

/// A scheduled route with its capacity figures
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrainRoute {
    pub id: String,
    pub name: String,
    pub from: String,
    pub to: String,
    #[serde(with = "hhmm")]
    pub departure: NaiveTime,
    #[serde(with = "hhmm")]
    pub arrival: NaiveTime,
    pub price: i32,
    pub fare_class: FareClass,
    pub capacity: u32,
    pub booked: u32,
}

impl TrainRoute {
    /// Booked share of capacity, 0.0..=100.0
    pub fn occupancy_percent(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        self.booked as f64 / self.capacity as f64 * 100.0
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentBooking {
    pub reference: String,
    pub passenger: String,
    pub from: String,
    pub to: String,
    pub date: NaiveDate,
    pub status: BookingStatus,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    NewBooking,
    PaymentReceived,
    ScheduleUpdated,
    NewUserRegistration,
}

impl ActivityKind {
    pub fn translation_key(&self) -> &'static str {
        match self {
            ActivityKind::NewBooking => "new.booking",
            ActivityKind::PaymentReceived => "payment.received",
            ActivityKind::ScheduleUpdated => "train.schedule.updated",
            ActivityKind::NewUserRegistration => "new.user.registration",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ActivityEntry {
    pub kind: ActivityKind,
    pub details: String,
    pub minutes_ago: u32,
}
