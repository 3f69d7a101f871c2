pub mod events;

pub use events::{BookingConfirmedEvent, TicketDownloadRequestedEvent, TripCancellationRequestedEvent};
