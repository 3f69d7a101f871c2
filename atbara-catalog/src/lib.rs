pub mod admin;
pub mod city;
pub mod fixtures;
pub mod pricing;
pub mod seat_map;
pub mod train;
pub mod trip;
pub mod user;

pub use city::City;
pub use pricing::{PriceBreakdown, PricingPolicy, SERVICE_FEE};
pub use seat_map::{SeatMap, SeatMapError, SeatStatus, SelectOutcome, OCCUPIED_SEATS, SEAT_COUNT};
pub use train::{Amenity, Train};
pub use trip::{Trip, TripStatus};
pub use user::{Role, User};
