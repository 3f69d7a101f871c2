use uuid::Uuid;

// Diagnostic events. Nothing consumes them beyond the log line they are rendered into.

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct BookingConfirmedEvent {
    pub booking_id: Uuid,
    pub reference: String,
    pub train_id: String,
    pub seat_label: String,
    pub total_amount: i32,
    pub currency: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TicketDownloadRequestedEvent {
    pub booking_ref: String,
    pub trip_id: String,
    pub timestamp: i64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct TripCancellationRequestedEvent {
    pub trip_id: String,
    pub booking_ref: String,
    pub timestamp: i64,
}
