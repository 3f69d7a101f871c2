use crate::models::{BookingConfirmation, BookingSummary, PassengerField, PassengerInfo};
use crate::reference::ReferenceGenerator;
use atbara_catalog::{PricingPolicy, SeatMap, SeatMapError, SelectOutcome, Train};
use atbara_core::payment::{CardDetails, PaymentMethod, PaymentSelection};
use atbara_core::search::SearchQuery;
use atbara_shared::models::BookingConfirmedEvent;
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WizardStep {
    PassengerInfo,
    SeatSelection,
    Payment,
    Confirmation,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::PassengerInfo,
        WizardStep::SeatSelection,
        WizardStep::Payment,
        WizardStep::Confirmation,
    ];

    /// 1-based position shown in the progress bar
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::PassengerInfo => 1,
            WizardStep::SeatSelection => 2,
            WizardStep::Payment => 3,
            WizardStep::Confirmation => 4,
        }
    }

    pub fn translation_key(&self) -> &'static str {
        match self {
            WizardStep::PassengerInfo => "passenger.info",
            WizardStep::SeatSelection => "seat.selection",
            WizardStep::Payment => "payment",
            WizardStep::Confirmation => "confirm",
        }
    }

    fn successor(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PassengerInfo => Some(WizardStep::SeatSelection),
            WizardStep::SeatSelection => Some(WizardStep::Payment),
            WizardStep::Payment => Some(WizardStep::Confirmation),
            WizardStep::Confirmation => None,
        }
    }

    // Confirmation is terminal: no way back once the booking exists.
    fn predecessor(&self) -> Option<WizardStep> {
        match self {
            WizardStep::PassengerInfo => None,
            WizardStep::SeatSelection => Some(WizardStep::PassengerInfo),
            WizardStep::Payment => Some(WizardStep::SeatSelection),
            WizardStep::Confirmation => None,
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Knobs the wizard takes from configuration
#[derive(Debug, Clone, Default)]
pub struct WizardConfig {
    pub pricing: PricingPolicy,
    pub references: ReferenceGenerator,
}

/// Linear four-step booking flow: passenger info → seat → payment → confirmation.
///
/// Each step owns its data and only accepts edits while it is the current step.
/// `next` advances one step once the current step's exit condition holds; `previous`
/// goes back one step and keeps everything entered so far.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    id: Uuid,
    train: Train,
    search_params: SearchQuery,
    step: WizardStep,
    passenger: PassengerInfo,
    seats: SeatMap,
    payment: PaymentSelection,
    terms_accepted: bool,
    config: WizardConfig,
    confirmation: Option<BookingConfirmation>,
}

impl BookingWizard {
    /// Enter the flow with the navigation payload from search results.
    /// Both parts are required; a missing one is a precondition failure, not a panic.
    pub fn start(
        train: Option<Train>,
        search_params: Option<SearchQuery>,
        config: WizardConfig,
    ) -> Result<Self, WizardError> {
        let train = train.ok_or(WizardError::MissingPrecondition("train"))?;
        let search_params = search_params.ok_or(WizardError::MissingPrecondition("search parameters"))?;

        let wizard = Self {
            id: Uuid::new_v4(),
            train,
            search_params,
            step: WizardStep::PassengerInfo,
            passenger: PassengerInfo::default(),
            seats: SeatMap::new(),
            payment: PaymentSelection::default(),
            terms_accepted: false,
            config,
            confirmation: None,
        };
        tracing::debug!(booking_id = %wizard.id, train_id = %wizard.train.id, "Booking started");
        Ok(wizard)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn train(&self) -> &Train {
        &self.train
    }

    pub fn search_params(&self) -> &SearchQuery {
        &self.search_params
    }

    pub fn passenger(&self) -> &PassengerInfo {
        &self.passenger
    }

    pub fn seats(&self) -> &SeatMap {
        &self.seats
    }

    pub fn payment(&self) -> &PaymentSelection {
        &self.payment
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn confirmation(&self) -> Option<&BookingConfirmation> {
        self.confirmation.as_ref()
    }

    // ------------------------------------------------------------------
    // Step 1: passenger info
    // ------------------------------------------------------------------

    pub fn set_passenger_field(&mut self, field: PassengerField, value: &str) -> Result<(), WizardError> {
        self.require_step(WizardStep::PassengerInfo, "edit passenger details")?;
        self.passenger
            .set(field, value)
            .map_err(|reason| WizardError::InvalidField { field, reason })
    }

    // ------------------------------------------------------------------
    // Step 2: seat selection
    // ------------------------------------------------------------------

    /// Occupied seats are ignored, any other seat replaces the current selection
    pub fn select_seat(&mut self, index: usize) -> Result<SelectOutcome, WizardError> {
        self.require_step(WizardStep::SeatSelection, "select a seat")?;
        Ok(self.seats.select(index)?)
    }

    /// Random seat over the whole coach. Can return an occupied seat.
    pub fn auto_select_seat<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<usize, WizardError> {
        self.require_step(WizardStep::SeatSelection, "select a seat")?;
        let index = self.seats.auto_select(rng);
        if SeatMap::is_occupied(index) {
            tracing::warn!(booking_id = %self.id, seat = index, "Auto-select picked an occupied seat");
        }
        Ok(index)
    }

    // ------------------------------------------------------------------
    // Step 3: payment
    // ------------------------------------------------------------------

    pub fn choose_payment(&mut self, method: PaymentMethod) -> Result<(), WizardError> {
        self.require_step(WizardStep::Payment, "choose a payment method")?;
        self.payment.choose(method);
        Ok(())
    }

    pub fn set_card_details(&mut self, card: CardDetails) -> Result<(), WizardError> {
        self.require_step(WizardStep::Payment, "enter card details")?;
        self.payment.set_card(card);
        Ok(())
    }

    pub fn accept_terms(&mut self, accepted: bool) -> Result<(), WizardError> {
        self.require_step(WizardStep::Payment, "accept the terms")?;
        self.terms_accepted = accepted;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    /// Keys of whatever still blocks `next` on the current step
    pub fn missing_for_step(&self) -> Vec<&'static str> {
        match self.step {
            WizardStep::PassengerInfo => self
                .passenger
                .missing_fields()
                .iter()
                .map(|f| f.translation_key())
                .collect(),
            WizardStep::SeatSelection => {
                if self.seats.selected().is_none() {
                    vec!["seat"]
                } else {
                    Vec::new()
                }
            }
            WizardStep::Payment => {
                let mut missing = self.payment.missing_fields();
                if !self.terms_accepted {
                    missing.push("agree.terms.conditions");
                }
                missing
            }
            WizardStep::Confirmation => Vec::new(),
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step != WizardStep::Confirmation && self.missing_for_step().is_empty()
    }

    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        self.next_with_rng(&mut rand::thread_rng())
    }

    /// Advance one step. Leaving the payment step builds the confirmation.
    pub fn next_with_rng<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<WizardStep, WizardError> {
        let to = self.step.successor().ok_or(WizardError::InvalidTransition {
            from: self.step,
            direction: "next",
        })?;

        let missing = self.missing_for_step();
        if !missing.is_empty() {
            return Err(WizardError::IncompleteInput {
                step: self.step,
                missing,
            });
        }

        if to == WizardStep::Confirmation {
            let confirmation = self.build_confirmation(rng)?;
            self.confirmation = Some(confirmation);
        }

        tracing::debug!(booking_id = %self.id, from = %self.step, to = %to, "Wizard advanced");
        self.step = to;
        Ok(to)
    }

    /// Go back one step without discarding anything
    pub fn previous(&mut self) -> Result<WizardStep, WizardError> {
        let to = self.step.predecessor().ok_or(WizardError::InvalidTransition {
            from: self.step,
            direction: "previous",
        })?;
        tracing::debug!(booking_id = %self.id, from = %self.step, to = %to, "Wizard went back");
        self.step = to;
        Ok(to)
    }

    // ------------------------------------------------------------------
    // Derived views
    // ------------------------------------------------------------------

    pub fn summary(&self) -> BookingSummary {
        BookingSummary {
            train_name: self.train.name.clone(),
            fare_class: self.train.fare_class,
            origin: self.search_params.origin.clone(),
            destination: self.search_params.destination.clone(),
            departure: self.train.departure_time,
            arrival: self.train.arrival_time,
            seat_label: self.seats.selected_label(),
            price: self.config.pricing.breakdown(self.train.price),
            secure_payment_notice: self.step >= WizardStep::Payment,
        }
    }

    pub fn total_price(&self) -> i32 {
        self.config.pricing.total(self.train.price)
    }

    fn build_confirmation<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<BookingConfirmation, WizardError> {
        let seat_index = self.seats.selected().ok_or(WizardError::IncompleteInput {
            step: WizardStep::SeatSelection,
            missing: vec!["seat"],
        })?;

        let confirmation = BookingConfirmation {
            id: self.id,
            reference: self.config.references.generate(rng),
            train: self.train.clone(),
            search_params: self.search_params.clone(),
            passenger: self.passenger.clone(),
            seat_index,
            seat_label: SeatMap::label(seat_index),
            payment: self.payment.receipt(),
            price: self.config.pricing.breakdown(self.train.price),
            confirmed_at: Utc::now(),
        };

        let event = BookingConfirmedEvent {
            booking_id: confirmation.id,
            reference: confirmation.reference.clone(),
            train_id: confirmation.train.id.clone(),
            seat_label: confirmation.seat_label.clone(),
            total_amount: confirmation.price.total,
            currency: confirmation.price.currency.clone(),
            timestamp: confirmation.confirmed_at.timestamp(),
        };
        tracing::info!(
            reference = %event.reference,
            event = %serde_json::to_string(&event).unwrap_or_default(),
            "Booking confirmed"
        );

        Ok(confirmation)
    }

    fn require_step(&self, step: WizardStep, action: &'static str) -> Result<(), WizardError> {
        if self.step != step {
            return Err(WizardError::StepLocked {
                current: self.step,
                action,
            });
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Cannot start booking: {0} missing")]
    MissingPrecondition(&'static str),

    #[error("Step {step} incomplete, missing: {}", .missing.join(", "))]
    IncompleteInput {
        step: WizardStep,
        missing: Vec<&'static str>,
    },

    #[error("Cannot go {direction} from step {from}")]
    InvalidTransition {
        from: WizardStep,
        direction: &'static str,
    },

    #[error("Cannot {action} while on step {current}")]
    StepLocked {
        current: WizardStep,
        action: &'static str,
    },

    #[error("Invalid value for {field}: {reason}")]
    InvalidField { field: PassengerField, reason: String },

    #[error(transparent)]
    Seat(#[from] SeatMapError),
}
