use async_trait::async_trait;
use atbara_catalog::{fixtures, City, Train};
use std::time::Duration;

use crate::search::SearchQuery;
use crate::CoreResult;

/// Delay the fixture repository waits before answering, mimicking a network round trip
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(1000);

/// Repository trait for train data access
#[async_trait]
pub trait TrainRepository: Send + Sync {
    async fn search_trains(&self, query: &SearchQuery) -> CoreResult<Vec<Train>>;

    async fn list_cities(&self) -> CoreResult<Vec<City>>;
}

/// Answers every search with the static train list after an artificial delay
#[derive(Debug, Clone)]
pub struct FixtureTrainRepository {
    delay: Duration,
}

impl FixtureTrainRepository {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for FixtureTrainRepository {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_DELAY)
    }
}

#[async_trait]
impl TrainRepository for FixtureTrainRepository {
    async fn search_trains(&self, query: &SearchQuery) -> CoreResult<Vec<Train>> {
        tracing::debug!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            delay_ms = self.delay.as_millis() as u64,
            "Fetching trains"
        );
        tokio::time::sleep(self.delay).await;
        // The fixture does not vary by route or date.
        Ok(fixtures::trains())
    }

    async fn list_cities(&self) -> CoreResult<Vec<City>> {
        Ok(fixtures::cities())
    }
}
