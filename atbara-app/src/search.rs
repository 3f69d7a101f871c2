use std::sync::Arc;

use atbara_catalog::Train;
use atbara_core::repository::TrainRepository;
use atbara_core::search::{self, FilterCriteria, SearchQuery, SortKey};
use atbara_core::CoreResult;
use atbara_shared::{format_time, FareClass};
use tokio::task::JoinHandle;

use crate::context::AppContext;
use crate::error::{AppError, AppResult};
use crate::navigation::BookingPayload;

/// Trains fetched for one results view
#[derive(Debug)]
pub struct LoadedResults {
    pub generation: u64,
    pub trains: Vec<Train>,
}

/// In-flight fetch. Dropping it aborts the task so a late answer can never land
/// on a view the user already left.
#[derive(Debug)]
pub struct PendingResults {
    generation: u64,
    handle: Option<JoinHandle<CoreResult<Vec<Train>>>>,
}

impl PendingResults {
    pub fn spawn(repo: Arc<dyn TrainRepository>, query: SearchQuery, generation: u64) -> Self {
        let handle = tokio::spawn(async move { repo.search_trains(&query).await });
        Self {
            generation,
            handle: Some(handle),
        }
    }

    pub async fn wait(mut self) -> AppResult<LoadedResults> {
        let handle = self
            .handle
            .take()
            .ok_or_else(|| AppError::Internal("results already collected".to_string()))?;
        let trains = handle
            .await
            .map_err(|e| AppError::Internal(format!("search task failed: {}", e)))??;
        Ok(LoadedResults {
            generation: self.generation,
            trains,
        })
    }
}

impl Drop for PendingResults {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            if !handle.is_finished() {
                tracing::debug!(generation = self.generation, "Discarding pending search");
            }
            handle.abort();
        }
    }
}

#[derive(Debug)]
pub enum LoadState {
    Loading,
    Loaded(Vec<Train>),
}

/// The results page: one query, its fetched trains, and the sidebar filters
#[derive(Debug)]
pub struct SearchResultsScreen {
    query: SearchQuery,
    generation: u64,
    state: LoadState,
    pending: Option<PendingResults>,
    pub filter: FilterCriteria,
    pub sort: SortKey,
}

impl SearchResultsScreen {
    /// Open the page and start fetching in the background
    pub fn open(ctx: &mut AppContext, query: SearchQuery) -> Self {
        let generation = ctx.next_generation();
        tracing::info!(
            origin = %query.origin,
            destination = %query.destination,
            date = %query.date,
            generation,
            "Searching trains"
        );
        let pending = PendingResults::spawn(ctx.trains.clone(), query.clone(), generation);
        Self {
            query,
            generation,
            state: LoadState::Loading,
            pending: Some(pending),
            filter: ctx.default_filter(),
            sort: SortKey::default(),
        }
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    /// Wait for the fetch started by `open`. No-op once loaded.
    pub async fn wait(&mut self) -> AppResult<()> {
        if let Some(pending) = self.pending.take() {
            let loaded = pending.wait().await?;
            self.apply(loaded);
        }
        Ok(())
    }

    /// Apply a load if it belongs to this view; stale loads are dropped
    pub fn apply(&mut self, loaded: LoadedResults) -> bool {
        if loaded.generation != self.generation {
            tracing::debug!(
                expected = self.generation,
                got = loaded.generation,
                "Ignoring stale search results"
            );
            return false;
        }
        self.state = LoadState::Loaded(loaded.trains);
        true
    }

    /// Filtered and sorted trains. `None` while still loading.
    pub fn visible(&self) -> Option<Vec<Train>> {
        match &self.state {
            LoadState::Loading => None,
            LoadState::Loaded(trains) => Some(search::apply(trains, &self.filter, self.sort)),
        }
    }

    pub fn set_class_filter(&mut self, class: Option<FareClass>) {
        self.filter.fare_class = class;
    }

    pub fn set_price_range(&mut self, min: i32, max: i32) -> AppResult<()> {
        if min > max {
            return Err(AppError::Validation(format!("price range {}..{} is empty", min, max)));
        }
        self.filter.price_min = min;
        self.filter.price_max = max;
        Ok(())
    }

    pub fn reset_filters(&mut self, ctx: &AppContext) {
        self.filter = ctx.default_filter();
    }

    /// Payload for the booking page. The train must be among the visible results.
    pub fn book(&self, train_id: &str) -> AppResult<BookingPayload> {
        let trains = self
            .visible()
            .ok_or_else(|| AppError::Validation("results are still loading".to_string()))?;
        let train = trains
            .into_iter()
            .find(|t| t.id == train_id)
            .ok_or_else(|| AppError::NotFound(format!("train {}", train_id)))?;
        Ok(BookingPayload::new(train, self.query.clone()))
    }

    pub fn render(&self, ctx: &AppContext) -> String {
        let mut out = Vec::new();
        out.push(format!(
            "{}: {} → {}, {}, {} {}",
            ctx.t("available.trains"),
            ctx.t(&self.query.origin),
            ctx.t(&self.query.destination),
            atbara_shared::format_date(self.query.date),
            self.query.passenger_count,
            ctx.t("passengers"),
        ));

        let trains = match self.visible() {
            None => {
                out.push(ctx.t("loading"));
                return out.join("\n");
            }
            Some(trains) => trains,
        };

        out.push(format!("{} {}", trains.len(), ctx.t("trains.found")));
        if trains.is_empty() {
            out.push(ctx.t("no.trains"));
        }
        for train in &trains {
            out.push(format!(
                "[{}] {} ({}) {}-{} {} | {} {} | {} {}",
                train.id,
                train.name,
                ctx.t(train.fare_class.translation_key()),
                format_time(train.departure_time),
                format_time(train.arrival_time),
                train.duration,
                ctx.price(train.price),
                ctx.t("per.person"),
                train.available_seats,
                ctx.t("seats.available"),
            ));
            let amenities: Vec<String> = train.amenities.iter().map(|a| a.to_string()).collect();
            out.push(format!("    {}", amenities.join(", ")));
            if train.is_available() {
                out.push(format!("    [{}: book {}]", ctx.t("book.now"), train.id));
            }
        }
        out.join("\n")
    }
}
