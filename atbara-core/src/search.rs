use atbara_catalog::{fixtures, Train};
use atbara_shared::FareClass;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{CoreError, CoreResult};

pub const MAX_PASSENGERS: u8 = 8;

/// Default upper bound of the price filter, in currency units
pub const DEFAULT_PRICE_MAX: i32 = 500;

/// What the user asked for on the home page. Created per search, dropped on navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SearchQuery {
    pub origin: String,
    pub destination: String,
    pub date: NaiveDate,
    pub passenger_count: u8,
    pub fare_class: FareClass,
}

impl SearchQuery {
    pub fn new(
        origin: &str,
        destination: &str,
        date: NaiveDate,
        passenger_count: u8,
        fare_class: FareClass,
    ) -> CoreResult<Self> {
        for city in [origin, destination] {
            if fixtures::find_city(city).is_none() {
                return Err(CoreError::UnknownCity(city.to_string()));
            }
        }

        if origin == destination {
            return Err(CoreError::ValidationError(
                "origin and destination must differ".to_string(),
            ));
        }

        if passenger_count == 0 || passenger_count > MAX_PASSENGERS {
            return Err(CoreError::ValidationError(format!(
                "passenger count must be between 1 and {}",
                MAX_PASSENGERS
            )));
        }

        Ok(Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            date,
            passenger_count,
            fare_class,
        })
    }
}

/// Raw home-page form, every field still a string
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchForm {
    pub from: String,
    pub to: String,
    pub date: String,
    pub passengers: String,
    pub class: String,
}

impl Default for SearchForm {
    fn default() -> Self {
        Self {
            from: String::new(),
            to: String::new(),
            date: String::new(),
            passengers: "1".to_string(),
            class: "economy".to_string(),
        }
    }
}

impl SearchForm {
    pub fn into_query(self) -> CoreResult<SearchQuery> {
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|e| CoreError::ValidationError(format!("invalid date '{}': {}", self.date, e)))?;
        let passengers = self
            .passengers
            .trim()
            .parse::<u8>()
            .map_err(|_| CoreError::ValidationError(format!("invalid passenger count '{}'", self.passengers)))?;
        let fare_class = self
            .class
            .parse::<FareClass>()
            .map_err(|e| CoreError::ValidationError(e.to_string()))?;

        SearchQuery::new(self.from.trim(), self.to.trim(), date, passengers, fare_class)
    }
}

/// Sidebar filters on the results page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FilterCriteria {
    /// `None` matches every class
    pub fare_class: Option<FareClass>,
    pub price_min: i32,
    pub price_max: i32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            fare_class: None,
            price_min: 0,
            price_max: DEFAULT_PRICE_MAX,
        }
    }
}

impl FilterCriteria {
    pub fn matches(&self, train: &Train) -> bool {
        if let Some(class) = self.fare_class {
            if train.fare_class != class {
                return false;
            }
        }
        train.price >= self.price_min && train.price <= self.price_max
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    DepartureTime,
    Price,
    Duration,
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "time" | "departure" | "departure_time" => Ok(SortKey::DepartureTime),
            "price" => Ok(SortKey::Price),
            "duration" => Ok(SortKey::Duration),
            other => Err(CoreError::ValidationError(format!("unknown sort key '{}'", other))),
        }
    }
}

pub fn filter_trains(trains: &[Train], criteria: &FilterCriteria) -> Vec<Train> {
    trains.iter().filter(|t| criteria.matches(t)).cloned().collect()
}

/// Stable sort: trains with equal keys keep their fixture order.
/// Times compare as `HH:MM`, durations as plain strings, prices numerically.
pub fn sort_trains(trains: &mut [Train], key: SortKey) {
    match key {
        SortKey::DepartureTime => trains.sort_by(|a, b| a.departure_time.cmp(&b.departure_time)),
        SortKey::Price => trains.sort_by_key(|t| t.price),
        SortKey::Duration => trains.sort_by(|a, b| a.duration.cmp(&b.duration)),
    }
}

/// Filter then sort. An empty result is a valid outcome.
pub fn apply(trains: &[Train], criteria: &FilterCriteria, key: SortKey) -> Vec<Train> {
    let mut result = filter_trains(trains, criteria);
    sort_trains(&mut result, key);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn train(id: &str, departure: (u32, u32), duration: &str, price: i32, class: FareClass) -> Train {
        Train {
            id: id.to_string(),
            name: format!("Train {}", id),
            departure_time: NaiveTime::from_hms_opt(departure.0, departure.1, 0).unwrap(),
            arrival_time: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            duration: duration.to_string(),
            price,
            fare_class: class,
            available_seats: 10,
            amenities: vec![],
        }
    }

    fn mixed_fixture() -> Vec<Train> {
        vec![
            train("a", (18, 0), "4h 30m", 150, FareClass::Business),
            train("b", (9, 0), "4h 30m", 120, FareClass::Economy),
            train("c", (7, 0), "4h 30m", 250, FareClass::Business),
            train("d", (6, 0), "4h 30m", 135, FareClass::Economy),
        ]
    }

    #[test]
    fn test_business_filter_preserves_fixture_order() {
        let criteria = FilterCriteria {
            fare_class: Some(FareClass::Business),
            ..Default::default()
        };
        let ids: Vec<String> = filter_trains(&mixed_fixture(), &criteria)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let result = apply(&mixed_fixture(), &FilterCriteria::default(), SortKey::Price);
        let prices: Vec<i32> = result.iter().map(|t| t.price).collect();
        assert_eq!(prices, vec![120, 135, 150, 250]);
    }

    #[test]
    fn test_sort_is_stable_for_ties() {
        let result = apply(&mixed_fixture(), &FilterCriteria::default(), SortKey::Duration);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_sort_by_departure() {
        let result = apply(&mixed_fixture(), &FilterCriteria::default(), SortKey::DepartureTime);
        let ids: Vec<&str> = result.iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_duration_sort_is_lexical() {
        let trains = vec![
            train("long", (8, 0), "10h 05m", 100, FareClass::Economy),
            train("short", (8, 0), "4h 30m", 100, FareClass::Economy),
        ];
        let result = apply(&trains, &FilterCriteria::default(), SortKey::Duration);
        assert_eq!(result[0].id, "long");
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let criteria = FilterCriteria {
            fare_class: None,
            price_min: 135,
            price_max: 150,
        };
        let ids: Vec<String> = filter_trains(&mixed_fixture(), &criteria)
            .into_iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec!["a", "d"]);
    }

    #[test]
    fn test_no_results_is_empty_not_error() {
        let criteria = FilterCriteria {
            fare_class: Some(FareClass::Vip),
            price_min: 0,
            price_max: 100,
        };
        assert!(apply(&fixtures::trains(), &criteria, SortKey::Price).is_empty());
    }

    #[test]
    fn test_search_form_validation() {
        let form = SearchForm {
            from: "khartoum".to_string(),
            to: "atbara".to_string(),
            date: "2024-01-15".to_string(),
            ..Default::default()
        };
        let query = form.into_query().unwrap();
        assert_eq!(query.passenger_count, 1);
        assert_eq!(query.fare_class, FareClass::Economy);

        let same_city = SearchForm {
            from: "khartoum".to_string(),
            to: "khartoum".to_string(),
            date: "2024-01-15".to_string(),
            ..Default::default()
        };
        assert!(same_city.into_query().is_err());

        let unknown = SearchForm {
            from: "cairo".to_string(),
            to: "atbara".to_string(),
            date: "2024-01-15".to_string(),
            ..Default::default()
        };
        assert_eq!(unknown.into_query(), Err(CoreError::UnknownCity("cairo".to_string())));

        let too_many = SearchForm {
            from: "khartoum".to_string(),
            to: "atbara".to_string(),
            date: "2024-01-15".to_string(),
            passengers: "9".to_string(),
            ..Default::default()
        };
        assert!(too_many.into_query().is_err());
    }

    #[test]
    fn test_sort_key_parse() {
        assert_eq!("time".parse::<SortKey>().unwrap(), SortKey::DepartureTime);
        assert_eq!("Price".parse::<SortKey>().unwrap(), SortKey::Price);
        assert!("seats".parse::<SortKey>().is_err());
    }
}
