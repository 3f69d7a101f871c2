use atbara_shared::{format_price, DEFAULT_CURRENCY};
use serde::{Deserialize, Serialize};

/// Flat fee added to every ticket, in currency units
pub const SERVICE_FEE: i32 = 25;

/// Pricing rules for a single-passenger booking.
///
/// The passenger count captured at search time is deliberately not applied: a booking
/// always prices one ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PricingPolicy {
    pub service_fee: i32,
    pub currency: String,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            service_fee: SERVICE_FEE,
            currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

/// Line items shown in the booking summary
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub ticket_price: i32,
    pub service_fee: i32,
    pub total: i32,
    pub currency: String,
}

impl PriceBreakdown {
    pub fn display_ticket(&self) -> String {
        format_price(self.ticket_price, &self.currency)
    }

    pub fn display_fee(&self) -> String {
        format_price(self.service_fee, &self.currency)
    }

    pub fn display_total(&self) -> String {
        format_price(self.total, &self.currency)
    }
}

impl PricingPolicy {
    pub fn new(service_fee: i32, currency: impl Into<String>) -> Self {
        Self {
            service_fee,
            currency: currency.into(),
        }
    }

    /// Saturates rather than wrapping on absurd inputs
    pub fn total(&self, ticket_price: i32) -> i32 {
        ticket_price.saturating_add(self.service_fee)
    }

    pub fn breakdown(&self, ticket_price: i32) -> PriceBreakdown {
        PriceBreakdown {
            ticket_price,
            service_fee: self.service_fee,
            total: self.total(ticket_price),
            currency: self.currency.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_adds_service_fee() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.total(500), 525);
    }

    #[test]
    fn test_breakdown_display() {
        let breakdown = PricingPolicy::default().breakdown(150);
        assert_eq!(breakdown.display_ticket(), "150 SDG");
        assert_eq!(breakdown.display_fee(), "25 SDG");
        assert_eq!(breakdown.display_total(), "175 SDG");
    }

    #[test]
    fn test_total_saturates() {
        let policy = PricingPolicy::new(i32::MAX, "SDG");
        assert_eq!(policy.total(500), i32::MAX);
    }

    #[test]
    fn test_custom_fee() {
        let policy = PricingPolicy::new(40, "SDG");
        assert_eq!(policy.breakdown(100).total, 140);
    }
}
