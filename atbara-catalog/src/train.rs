use atbara_shared::format::hhmm;
use atbara_shared::FareClass;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// On-board services advertised on a train card
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Amenity {
    #[serde(rename = "WiFi")]
    Wifi,
    Meals,
    Snacks,
    #[serde(rename = "Power Outlets")]
    PowerOutlets,
    #[serde(rename = "Lounge Access")]
    LoungeAccess,
}

impl fmt::Display for Amenity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Amenity::Wifi => "WiFi",
            Amenity::Meals => "Meals",
            Amenity::Snacks => "Snacks",
            Amenity::PowerOutlets => "Power Outlets",
            Amenity::LoungeAccess => "Lounge Access",
        };
        f.write_str(label)
    }
}

/// A scheduled train as listed in search results. Fixture record, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Train {
    pub id: String,
    pub name: String,
    #[serde(with = "hhmm")]
    pub departure_time: NaiveTime,
    #[serde(with = "hhmm")]
    pub arrival_time: NaiveTime,
    /// Human-readable, e.g. `4h 30m`
    pub duration: String,
    pub price: i32,
    pub fare_class: FareClass,
    pub available_seats: i32,
    pub amenities: Vec<Amenity>,
}

impl Train {
    pub fn is_available(&self) -> bool {
        self.available_seats > 0
    }

    pub fn has_amenity(&self, amenity: Amenity) -> bool {
        self.amenities.contains(&amenity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_deserialization() {
        let json = r#"
            {
                "id": "9",
                "name": "Night Mail",
                "departure_time": "22:10",
                "arrival_time": "06:40",
                "duration": "8h 30m",
                "price": 90,
                "fare_class": "Economy",
                "available_seats": 0,
                "amenities": ["WiFi", "Power Outlets"]
            }
        "#;
        let train: Train = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(train.departure_time, NaiveTime::from_hms_opt(22, 10, 0).unwrap());
        assert!(train.has_amenity(Amenity::PowerOutlets));
        assert!(!train.has_amenity(Amenity::Meals));
        assert!(!train.is_available());
    }
}
