use atbara_shared::Masked;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::CoreError;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Mobile,
    Bank,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 3] = [PaymentMethod::Card, PaymentMethod::Mobile, PaymentMethod::Bank];

    pub fn translation_key(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "credit.debit.card",
            PaymentMethod::Mobile => "mobile.payment",
            PaymentMethod::Bank => "bank.transfer",
        }
    }

    /// Provider names shown under the option, if any
    pub fn providers(&self) -> Option<&'static str> {
        match self {
            PaymentMethod::Card => Some("Visa, Mastercard"),
            PaymentMethod::Mobile => Some("MTN Pay, Sudani Pay"),
            PaymentMethod::Bank => None,
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "mobile" => Ok(PaymentMethod::Mobile),
            "bank" => Ok(PaymentMethod::Bank),
            other => Err(CoreError::ValidationError(format!("unknown payment method '{}'", other))),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardDetails {
    pub holder_name: String,
    pub number: Masked<String>,
    /// `MM/YY`
    pub expiry: String,
    pub cvv: Masked<String>,
}

impl CardDetails {
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.holder_name.trim().is_empty() {
            missing.push("cardholder.name");
        }
        if self.number.is_blank() {
            missing.push("card.number");
        }
        if self.expiry.trim().is_empty() {
            missing.push("expiry.date");
        }
        if self.cvv.is_blank() {
            missing.push("cvv");
        }
        missing
    }
}

/// Payment choice on step 3. Exactly one method is active at a time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentSelection {
    pub method: PaymentMethod,
    pub card: Option<CardDetails>,
}

impl PaymentSelection {
    /// Switch method. Card details already typed are kept so switching back restores them.
    pub fn choose(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn set_card(&mut self, card: CardDetails) {
        self.card = Some(card);
    }

    /// Field keys still blocking acceptance, empty when the selection is usable
    pub fn missing_fields(&self) -> Vec<&'static str> {
        match self.method {
            PaymentMethod::Card => match &self.card {
                Some(card) => card.missing_fields(),
                None => vec!["cardholder.name", "card.number", "expiry.date", "cvv"],
            },
            PaymentMethod::Mobile | PaymentMethod::Bank => Vec::new(),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Snapshot safe to keep on a confirmation: no CVV, card number reduced to its tail
    pub fn receipt(&self) -> PaymentReceipt {
        let card_tail = match (self.method, &self.card) {
            (PaymentMethod::Card, Some(card)) => Some(card.number.tail()),
            _ => None,
        };
        PaymentReceipt {
            method: self.method,
            card_tail,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PaymentReceipt {
    pub method: PaymentMethod,
    pub card_tail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card() -> CardDetails {
        CardDetails {
            holder_name: "Ahmed Mohamed".to_string(),
            number: Masked::from("1234 5678 9012 3456"),
            expiry: "12/27".to_string(),
            cvv: Masked::from("123"),
        }
    }

    #[test]
    fn test_card_requires_details() {
        let mut payment = PaymentSelection::default();
        assert_eq!(payment.method, PaymentMethod::Card);
        assert!(!payment.is_accepted());

        payment.set_card(CardDetails {
            cvv: Masked::from(""),
            ..card()
        });
        assert_eq!(payment.missing_fields(), vec!["cvv"]);

        payment.set_card(card());
        assert!(payment.is_accepted());
    }

    #[test]
    fn test_mobile_and_bank_need_no_details() {
        let mut payment = PaymentSelection::default();
        payment.choose(PaymentMethod::Mobile);
        assert!(payment.is_accepted());
        payment.choose(PaymentMethod::Bank);
        assert!(payment.is_accepted());
    }

    #[test]
    fn test_switching_back_keeps_card() {
        let mut payment = PaymentSelection::default();
        payment.set_card(card());
        payment.choose(PaymentMethod::Bank);
        payment.choose(PaymentMethod::Card);
        assert!(payment.is_accepted());
    }

    #[test]
    fn test_receipt_hides_card() {
        let mut payment = PaymentSelection::default();
        payment.set_card(card());
        let receipt = payment.receipt();
        assert_eq!(receipt.card_tail.as_deref(), Some("************3456"));

        payment.choose(PaymentMethod::Mobile);
        assert_eq!(payment.receipt().card_tail, None);
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("Bank".parse::<PaymentMethod>().unwrap(), PaymentMethod::Bank);
        assert!("cash".parse::<PaymentMethod>().is_err());
    }
}
