use chrono::{NaiveDate, NaiveTime};

/// Currency every fixture price is expressed in (Sudanese pound)
pub const DEFAULT_CURRENCY: &str = "SDG";

/// `<amount> <currency-code>`, e.g. `525 SDG`
pub fn format_price(amount: i32, currency: &str) -> String {
    format!("{} {}", amount, currency)
}

/// ISO `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// 24-hour `HH:MM`
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter keeping train times in their `HH:MM` wire form
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_time(*time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, "%H:%M").map_err(serde::de::Error::custom)
    }
}
