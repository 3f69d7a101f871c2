use atbara_catalog::{fixtures, Trip, TripStatus};
use atbara_shared::models::{TicketDownloadRequestedEvent, TripCancellationRequestedEvent};
use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Upcoming,
    Past,
}

impl DashboardTab {
    pub fn translation_key(&self) -> &'static str {
        match self {
            DashboardTab::Upcoming => "upcoming",
            DashboardTab::Past => "past",
        }
    }

    pub fn empty_key(&self) -> &'static str {
        match self {
            DashboardTab::Upcoming => "no.upcoming.trips",
            DashboardTab::Past => "no.past.trips",
        }
    }
}

/// Read-only view of the user's trips.
///
/// Cancelled trips belong to neither tab. Downloading and cancelling only emit a
/// diagnostic event; the trip list itself is never modified.
#[derive(Debug, Clone)]
pub struct TripDashboard {
    trips: Vec<Trip>,
}

impl TripDashboard {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self { trips }
    }

    pub fn from_fixtures() -> Self {
        Self::new(fixtures::trips())
    }

    pub fn upcoming(&self) -> Vec<&Trip> {
        self.with_status(TripStatus::Upcoming)
    }

    pub fn past(&self) -> Vec<&Trip> {
        self.with_status(TripStatus::Completed)
    }

    pub fn tab(&self, tab: DashboardTab) -> Vec<&Trip> {
        match tab {
            DashboardTab::Upcoming => self.upcoming(),
            DashboardTab::Past => self.past(),
        }
    }

    /// Counts shown on the tab headers
    pub fn counts(&self) -> (usize, usize) {
        (self.upcoming().len(), self.past().len())
    }

    pub fn find_ticket(&self, booking_ref: &str) -> Result<&Trip, DashboardError> {
        self.trips
            .iter()
            .find(|t| t.booking_ref.eq_ignore_ascii_case(booking_ref.trim()))
            .ok_or_else(|| DashboardError::NotFound(booking_ref.to_string()))
    }

    pub fn download_ticket(&self, booking_ref: &str) -> Result<TicketDownloadRequestedEvent, DashboardError> {
        let trip = self.find_ticket(booking_ref)?;
        let event = TicketDownloadRequestedEvent {
            booking_ref: trip.booking_ref.clone(),
            trip_id: trip.id.clone(),
            timestamp: Utc::now().timestamp(),
        };
        tracing::info!(booking_ref = %event.booking_ref, trip_id = %event.trip_id, "Ticket download requested");
        Ok(event)
    }

    /// Only upcoming trips offer a cancel action
    pub fn cancel_trip(&self, booking_ref: &str) -> Result<TripCancellationRequestedEvent, DashboardError> {
        let trip = self.find_ticket(booking_ref)?;
        if !trip.is_upcoming() {
            return Err(DashboardError::NotCancellable {
                booking_ref: trip.booking_ref.clone(),
                status: trip.status,
            });
        }

        let event = TripCancellationRequestedEvent {
            trip_id: trip.id.clone(),
            booking_ref: trip.booking_ref.clone(),
            timestamp: Utc::now().timestamp(),
        };
        tracing::info!(booking_ref = %event.booking_ref, trip_id = %event.trip_id, "Trip cancellation requested");
        Ok(event)
    }

    fn with_status(&self, status: TripStatus) -> Vec<&Trip> {
        self.trips.iter().filter(|t| t.status == status).collect()
    }
}

impl Default for TripDashboard {
    fn default() -> Self {
        Self::from_fixtures()
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("No trip with booking reference {0}")]
    NotFound(String),
    #[error("Trip {booking_ref} cannot be cancelled in status {status:?}")]
    NotCancellable { booking_ref: String, status: TripStatus },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tabs_partition_by_status() {
        let dashboard = TripDashboard::from_fixtures();
        let upcoming = dashboard.upcoming();
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].booking_ref, "AT-ABC123456");
        assert!(dashboard.past().iter().all(|t| t.status == TripStatus::Completed));
        assert_eq!(dashboard.counts(), (1, 2));
    }

    #[test]
    fn test_cancelled_trips_hidden() {
        let mut trips = fixtures::trips();
        trips[0].status = TripStatus::Cancelled;
        let dashboard = TripDashboard::new(trips);
        assert!(dashboard.tab(DashboardTab::Upcoming).is_empty());
        assert_eq!(dashboard.tab(DashboardTab::Past).len(), 2);
    }

    #[test]
    fn test_cancel_only_upcoming() {
        let dashboard = TripDashboard::from_fixtures();
        let event = dashboard.cancel_trip("at-abc123456").unwrap();
        assert_eq!(event.booking_ref, "AT-ABC123456");

        assert!(matches!(
            dashboard.cancel_trip("AT-DEF789012"),
            Err(DashboardError::NotCancellable { .. })
        ));
        assert_eq!(
            dashboard.cancel_trip("AT-NOPE"),
            Err(DashboardError::NotFound("AT-NOPE".to_string()))
        );
        // list unchanged
        assert_eq!(dashboard.upcoming().len(), 1);
    }

    #[test]
    fn test_download_any_known_trip() {
        let dashboard = TripDashboard::default();
        assert_eq!(dashboard.download_ticket("AT-GHI345678").unwrap().trip_id, "3");
        assert!(dashboard.download_ticket("missing").is_err());
    }
}
