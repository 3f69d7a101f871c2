use atbara_catalog::{PriceBreakdown, Train};
use atbara_core::payment::PaymentReceipt;
use atbara_core::search::SearchQuery;
use atbara_shared::{FareClass, Masked};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn translation_key(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(format!("expected male or female, got '{}'", other)),
        }
    }
}

/// Nationalities offered by the passenger form
pub const NATIONALITIES: [&str; 8] = [
    "Sudan",
    "Egypt",
    "Ethiopia",
    "Eritrea",
    "Chad",
    "Libya",
    "South Sudan",
    "Other",
];

/// Fields of the passenger form, keyed by their translation key
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PassengerField {
    FullNameLocal,
    FullNameLatin,
    IdNumber,
    Nationality,
    Email,
    Phone,
    Gender,
    BirthDate,
}

impl PassengerField {
    pub const REQUIRED: [PassengerField; 5] = [
        PassengerField::FullNameLocal,
        PassengerField::FullNameLatin,
        PassengerField::IdNumber,
        PassengerField::Phone,
        PassengerField::BirthDate,
    ];

    pub fn translation_key(&self) -> &'static str {
        match self {
            PassengerField::FullNameLocal => "full.name.arabic",
            PassengerField::FullNameLatin => "full.name.english",
            PassengerField::IdNumber => "id.passport.number",
            PassengerField::Nationality => "nationality",
            PassengerField::Email => "email",
            PassengerField::Phone => "phone",
            PassengerField::Gender => "gender",
            PassengerField::BirthDate => "birth.date",
        }
    }
}

impl fmt::Display for PassengerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.translation_key())
    }
}

impl FromStr for PassengerField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "name_local" | "full_name_local" | "name_ar" => Ok(PassengerField::FullNameLocal),
            "name_latin" | "full_name_latin" | "name_en" | "name" => Ok(PassengerField::FullNameLatin),
            "id" | "id_number" | "passport" => Ok(PassengerField::IdNumber),
            "nationality" => Ok(PassengerField::Nationality),
            "email" => Ok(PassengerField::Email),
            "phone" => Ok(PassengerField::Phone),
            "gender" => Ok(PassengerField::Gender),
            "birth_date" | "birthdate" | "dob" => Ok(PassengerField::BirthDate),
            other => Err(format!("unknown passenger field '{}'", other)),
        }
    }
}

/// Step 1 form state. Filled field by field; required fields must be non-blank to advance.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PassengerInfo {
    pub full_name_local: String,
    pub full_name_latin: String,
    pub id_number: Masked<String>,
    pub nationality: String,
    pub email: Option<String>,
    pub phone: Masked<String>,
    pub gender: Gender,
    pub birth_date: Option<NaiveDate>,
}

impl Default for PassengerInfo {
    fn default() -> Self {
        Self {
            full_name_local: String::new(),
            full_name_latin: String::new(),
            id_number: Masked::default(),
            nationality: NATIONALITIES[0].to_string(),
            email: None,
            phone: Masked::default(),
            gender: Gender::Male,
            birth_date: None,
        }
    }
}

impl PassengerInfo {
    /// Set one field from raw form input. An empty string clears the field.
    pub fn set(&mut self, field: PassengerField, value: &str) -> Result<(), String> {
        let value = value.trim();
        match field {
            PassengerField::FullNameLocal => self.full_name_local = value.to_string(),
            PassengerField::FullNameLatin => self.full_name_latin = value.to_string(),
            PassengerField::IdNumber => self.id_number = Masked::from(value),
            PassengerField::Phone => self.phone = Masked::from(value),
            PassengerField::Email => {
                self.email = if value.is_empty() {
                    None
                } else if value.contains('@') {
                    Some(value.to_string())
                } else {
                    return Err(format!("'{}' is not an email address", value));
                }
            }
            PassengerField::Nationality => {
                if !NATIONALITIES.contains(&value) {
                    return Err(format!("'{}' is not an offered nationality", value));
                }
                self.nationality = value.to_string();
            }
            PassengerField::Gender => self.gender = value.parse()?,
            PassengerField::BirthDate => {
                self.birth_date = if value.is_empty() {
                    None
                } else {
                    Some(
                        NaiveDate::parse_from_str(value, "%Y-%m-%d")
                            .map_err(|e| format!("invalid date '{}': {}", value, e))?,
                    )
                }
            }
        }
        Ok(())
    }

    pub fn missing_fields(&self) -> Vec<PassengerField> {
        PassengerField::REQUIRED
            .into_iter()
            .filter(|field| match field {
                PassengerField::FullNameLocal => self.full_name_local.trim().is_empty(),
                PassengerField::FullNameLatin => self.full_name_latin.trim().is_empty(),
                PassengerField::IdNumber => self.id_number.is_blank(),
                PassengerField::Phone => self.phone.is_blank(),
                PassengerField::BirthDate => self.birth_date.is_none(),
                _ => false,
            })
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Sidebar shown next to every wizard step
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub train_name: String,
    pub fare_class: FareClass,
    pub origin: String,
    pub destination: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub seat_label: Option<String>,
    pub price: PriceBreakdown,
    /// Shown from the payment step onward
    pub secure_payment_notice: bool,
}

/// Terminal record of a completed wizard. Built once, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingConfirmation {
    pub id: Uuid,
    /// Display-only, no uniqueness guarantee
    pub reference: String,
    pub train: Train,
    pub search_params: SearchQuery,
    pub passenger: PassengerInfo,
    pub seat_index: usize,
    pub seat_label: String,
    pub payment: PaymentReceipt,
    pub price: PriceBreakdown,
    pub confirmed_at: DateTime<Utc>,
}

impl BookingConfirmation {
    pub fn total_price(&self) -> i32 {
        self.price.total
    }

    /// Payload encoded into the ticket QR code
    pub fn qr_payload(&self) -> String {
        serde_json::json!({
            "reference": self.reference,
            "train_id": self.train.id,
            "date": self.search_params.date,
            "seat": self.seat_label,
        })
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let info = PassengerInfo::default();
        assert_eq!(info.gender, Gender::Male);
        assert_eq!(info.nationality, "Sudan");
        assert_eq!(info.missing_fields().len(), 5);
    }

    #[test]
    fn test_email_is_optional() {
        let mut info = PassengerInfo::default();
        info.set(PassengerField::FullNameLocal, "أحمد محمد").unwrap();
        info.set(PassengerField::FullNameLatin, "Ahmed Mohamed").unwrap();
        info.set(PassengerField::IdNumber, "P1234567").unwrap();
        info.set(PassengerField::Phone, "+249 123 456 789").unwrap();
        info.set(PassengerField::BirthDate, "1990-05-01").unwrap();
        assert!(info.is_complete());
        assert_eq!(info.email, None);
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let mut info = PassengerInfo::default();
        info.set(PassengerField::FullNameLatin, "   ").unwrap();
        assert!(info.missing_fields().contains(&PassengerField::FullNameLatin));
    }

    #[test]
    fn test_invalid_values_rejected() {
        let mut info = PassengerInfo::default();
        assert!(info.set(PassengerField::BirthDate, "01/05/1990").is_err());
        assert!(info.set(PassengerField::Email, "not-an-email").is_err());
        assert!(info.set(PassengerField::Nationality, "Atlantis").is_err());
        assert!(info.set(PassengerField::Gender, "other").is_err());
        info.set(PassengerField::Gender, "female").unwrap();
        assert_eq!(info.gender, Gender::Female);
    }

    #[test]
    fn test_debug_masks_identity_data() {
        let mut info = PassengerInfo::default();
        info.set(PassengerField::IdNumber, "P1234567").unwrap();
        info.set(PassengerField::Phone, "+249 123 456 789").unwrap();
        let rendered = format!("{:?}", info);
        assert!(!rendered.contains("P1234567"));
        assert!(!rendered.contains("456 789"));
    }

    #[test]
    fn test_field_parse() {
        assert_eq!("name_ar".parse::<PassengerField>().unwrap(), PassengerField::FullNameLocal);
        assert_eq!("birth-date".parse::<PassengerField>().unwrap(), PassengerField::BirthDate);
        assert!("shoe_size".parse::<PassengerField>().is_err());
    }
}
