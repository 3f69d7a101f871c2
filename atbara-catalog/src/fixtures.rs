//! Static data standing in for a backend. Every list here is hard-coded and
//! independent of the others; in particular the trips below are not derived from
//! bookings made through the wizard.

use crate::admin::{ActivityEntry, ActivityKind, AdminStats, BookingStatus, RecentBooking, TrainRoute};
use crate::city::City;
use crate::train::{Amenity, Train};
use crate::trip::{Trip, TripStatus};
use crate::user::{Role, User};
use atbara_shared::FareClass;
use chrono::{NaiveDate, NaiveTime};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or_default()
}

/// Stations offered in the origin/destination pickers
pub fn cities() -> Vec<City> {
    vec![
        City::new("khartoum", "Khartoum"),
        City::new("atbara", "Atbara"),
        City::new("port.sudan", "Port Sudan"),
        City::new("kassala", "Kassala"),
        City::new("wad.medani", "Wad Medani"),
        City::new("nyala", "Nyala"),
        City::new("el.obeid", "El Obeid"),
        City::new("dongola", "Dongola"),
        City::new("sennar", "Sennar"),
    ]
}

pub fn find_city(id: &str) -> Option<City> {
    cities().into_iter().find(|c| c.id == id)
}

/// Trains returned for every search
pub fn trains() -> Vec<Train> {
    vec![
        Train {
            id: "1".to_string(),
            name: "Al Haramain Express".to_string(),
            departure_time: time(8, 0),
            arrival_time: time(12, 30),
            duration: "4h 30m".to_string(),
            price: 150,
            fare_class: FareClass::Business,
            available_seats: 45,
            amenities: vec![Amenity::Wifi, Amenity::Meals, Amenity::PowerOutlets],
        },
        Train {
            id: "2".to_string(),
            name: "Saudi Express".to_string(),
            departure_time: time(10, 15),
            arrival_time: time(14, 45),
            duration: "4h 30m".to_string(),
            price: 120,
            fare_class: FareClass::Economy,
            available_seats: 23,
            amenities: vec![Amenity::Wifi, Amenity::Snacks],
        },
        Train {
            id: "3".to_string(),
            name: "Royal Train".to_string(),
            departure_time: time(14, 0),
            arrival_time: time(18, 30),
            duration: "4h 30m".to_string(),
            price: 250,
            fare_class: FareClass::Vip,
            available_seats: 12,
            amenities: vec![
                Amenity::Wifi,
                Amenity::Meals,
                Amenity::PowerOutlets,
                Amenity::LoungeAccess,
            ],
        },
        Train {
            id: "4".to_string(),
            name: "Desert Express".to_string(),
            departure_time: time(18, 30),
            arrival_time: time(23, 0),
            duration: "4h 30m".to_string(),
            price: 135,
            fare_class: FareClass::Economy,
            available_seats: 67,
            amenities: vec![Amenity::Wifi, Amenity::Snacks, Amenity::PowerOutlets],
        },
    ]
}

/// Trips shown on the dashboard
pub fn trips() -> Vec<Trip> {
    vec![
        Trip {
            id: "1".to_string(),
            booking_ref: "AT-ABC123456".to_string(),
            train_name: "Blue Nile Express".to_string(),
            from: "Khartoum".to_string(),
            to: "Atbara".to_string(),
            date: date(2024, 1, 15),
            departure: time(8, 0),
            arrival: time(12, 30),
            fare_class: FareClass::Business,
            seat: "12A".to_string(),
            price: 500,
            status: TripStatus::Upcoming,
        },
        Trip {
            id: "2".to_string(),
            booking_ref: "AT-DEF789012".to_string(),
            train_name: "Sudan Express".to_string(),
            from: "Atbara".to_string(),
            to: "Port Sudan".to_string(),
            date: date(2024, 1, 10),
            departure: time(14, 0),
            arrival: time(18, 30),
            fare_class: FareClass::Economy,
            seat: "23B".to_string(),
            price: 400,
            status: TripStatus::Completed,
        },
        Trip {
            id: "3".to_string(),
            booking_ref: "AT-GHI345678".to_string(),
            train_name: "Nile Valley Train".to_string(),
            from: "Khartoum".to_string(),
            to: "Wad Medani".to_string(),
            date: date(2024, 1, 8),
            departure: time(10, 15),
            arrival: time(14, 0),
            fare_class: FareClass::Vip,
            seat: "5A".to_string(),
            price: 350,
            status: TripStatus::Completed,
        },
    ]
}

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "admin".to_string(),
            name: "Atbara Rail Admin".to_string(),
            email: "admin@atbararail.sd".to_string(),
            role: Role::Admin,
            joined: date(2023, 12, 1),
            trips: 0,
        },
        User {
            id: "ahmed".to_string(),
            name: "أحمد محمد".to_string(),
            email: "ahmed@example.com".to_string(),
            role: Role::Customer,
            joined: date(2024, 1, 10),
            trips: 5,
        },
        User {
            id: "fatima".to_string(),
            name: "فاطمة الزهراء".to_string(),
            email: "fatima@example.com".to_string(),
            role: Role::Customer,
            joined: date(2024, 1, 8),
            trips: 3,
        },
        User {
            id: "omar".to_string(),
            name: "عمر المنصوري".to_string(),
            email: "omar@example.com".to_string(),
            role: Role::Customer,
            joined: date(2024, 1, 5),
            trips: 8,
        },
    ]
}

pub fn find_user(id: &str) -> Option<User> {
    users().into_iter().find(|u| u.id == id)
}

pub fn admin_stats() -> AdminStats {
    AdminStats {
        total_bookings: 1250,
        total_revenue: 625_000,
        total_trains: 25,
        total_users: 8420,
    }
}

pub fn train_routes() -> Vec<TrainRoute> {
    vec![
        TrainRoute {
            id: "1".to_string(),
            name: "Blue Nile Express".to_string(),
            from: "Khartoum".to_string(),
            to: "Atbara".to_string(),
            departure: time(8, 0),
            arrival: time(12, 30),
            price: 500,
            fare_class: FareClass::Business,
            capacity: 200,
            booked: 145,
        },
        TrainRoute {
            id: "2".to_string(),
            name: "Sudan Express".to_string(),
            from: "Atbara".to_string(),
            to: "Port Sudan".to_string(),
            departure: time(14, 0),
            arrival: time(18, 30),
            price: 400,
            fare_class: FareClass::Economy,
            capacity: 300,
            booked: 267,
        },
        TrainRoute {
            id: "3".to_string(),
            name: "Nile Valley Train".to_string(),
            from: "Khartoum".to_string(),
            to: "Wad Medani".to_string(),
            departure: time(10, 15),
            arrival: time(14, 0),
            price: 350,
            fare_class: FareClass::Vip,
            capacity: 100,
            booked: 78,
        },
    ]
}

pub fn recent_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            kind: ActivityKind::NewBooking,
            details: "Ahmed Mohamed booked Khartoum → Atbara".to_string(),
            minutes_ago: 2,
        },
        ActivityEntry {
            kind: ActivityKind::PaymentReceived,
            details: "500 SDG for booking AT-ABC123456".to_string(),
            minutes_ago: 5,
        },
        ActivityEntry {
            kind: ActivityKind::ScheduleUpdated,
            details: "Blue Nile Express departure time changed".to_string(),
            minutes_ago: 60,
        },
        ActivityEntry {
            kind: ActivityKind::NewUserRegistration,
            details: "Fatima Alzahraa joined the platform".to_string(),
            minutes_ago: 120,
        },
    ]
}

pub fn recent_bookings() -> Vec<RecentBooking> {
    vec![
        RecentBooking {
            reference: "AT-ABC123456".to_string(),
            passenger: "أحمد محمد".to_string(),
            from: "khartoum".to_string(),
            to: "atbara".to_string(),
            date: date(2024, 1, 15),
            status: BookingStatus::Confirmed,
        },
        RecentBooking {
            reference: "AT-DEF789012".to_string(),
            passenger: "فاطمة الزهراء".to_string(),
            from: "atbara".to_string(),
            to: "port.sudan".to_string(),
            date: date(2024, 1, 14),
            status: BookingStatus::Confirmed,
        },
        RecentBooking {
            reference: "AT-GHI345678".to_string(),
            passenger: "عمر المنصوري".to_string(),
            from: "khartoum".to_string(),
            to: "wad.medani".to_string(),
            date: date(2024, 1, 13),
            status: BookingStatus::Cancelled,
        },
    ]
}
