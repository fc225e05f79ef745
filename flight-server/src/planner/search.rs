//! Itinerary search over the full candidate-sequence space.
//!
//! Enumerates candidate sequences lazily, simulates each one, and keeps
//! a streaming minimum. Evaluation is strictly sequential.

use std::time::Instant;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::domain::{DomainError, Iata, Itinerary};

use super::buffers::{ConfigError, ConnectionBuffers};
use super::config::SearchConfig;
use super::regions::RegionBuckets;
use super::resolver::{LegResolver, LegSource, OfferProvider, Strategy};
use super::simulate::{SimulationError, Simulator};

/// One itinerary search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Airport the journey starts from.
    pub origin: Iata,
    /// Instant before which nothing may depart.
    pub start: DateTime<Utc>,
    /// Leg-acceptance policy.
    pub strategy: Strategy,
}

/// Error from running a search.
///
/// An exhausted search with no feasible itinerary is not an error; it
/// is a [`SearchResult`] with `best: None`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Itinerary(DomainError),
}

impl From<SimulationError> for SearchError {
    fn from(e: SimulationError) -> Self {
        match e {
            SimulationError::Config(e) => SearchError::Config(e),
            SimulationError::Itinerary(e) => SearchError::Itinerary(e),
        }
    }
}

/// The winning sequence and its itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct BestItinerary {
    /// The candidate sequence that produced the itinerary.
    pub sequence: Vec<Iata>,
    pub itinerary: Itinerary,
}

/// Outcome of a search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// The best feasible itinerary, or `None` when every evaluated
    /// sequence was infeasible.
    pub best: Option<BestItinerary>,
    /// Number of candidate sequences evaluated.
    pub sequences_checked: usize,
    /// How many of those were feasible.
    pub feasible_count: usize,
    /// Whether enumeration stopped early (sequence cap or time budget).
    pub truncated: bool,
}

/// Searches for the best multi-leg itinerary across the region buckets.
#[derive(Debug)]
pub struct Planner<'a, P: OfferProvider> {
    provider: &'a P,
    buckets: &'a RegionBuckets,
    buffers: &'a ConnectionBuffers,
    config: &'a SearchConfig,
}

impl<'a, P: OfferProvider + Sync> Planner<'a, P> {
    pub fn new(
        provider: &'a P,
        buckets: &'a RegionBuckets,
        buffers: &'a ConnectionBuffers,
        config: &'a SearchConfig,
    ) -> Self {
        Self {
            provider,
            buckets,
            buffers,
            config,
        }
    }

    /// Run the search against the live provider under the request's
    /// strategy.
    ///
    /// # Errors
    ///
    /// Fails up front when the buffer table does not cover the start
    /// origin and every bucket airport.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SearchError> {
        info!(
            origin = %request.origin,
            strategy = %request.strategy,
            candidates = self.buckets.cardinality(),
            "starting itinerary search"
        );

        let resolver = LegResolver::new(self.provider, request.strategy);
        select_best(
            &resolver,
            self.buckets,
            self.buffers,
            self.config,
            request.origin,
            request.start,
        )
        .await
    }
}

/// Simulate every candidate sequence from `buckets` and keep the one
/// with the smallest `total_travel_time`, ties broken by lower
/// `total_cost`. The leg source is a parameter so selection can run
/// against a deterministic stub.
///
/// # Errors
///
/// Fails when the buffer table does not cover the start origin and
/// every bucket airport, before any sequence is evaluated.
pub async fn select_best<L: LegSource>(
    legs: &L,
    buckets: &RegionBuckets,
    buffers: &ConnectionBuffers,
    config: &SearchConfig,
    origin: Iata,
    start: DateTime<Utc>,
) -> Result<SearchResult, SearchError> {
    buffers.validate_covers(std::iter::once(&origin).chain(buckets.all_airports()))?;

    let simulator = Simulator::new(legs, buffers, config.extra_travel_time());
    let deadline = config.time_budget().map(|budget| Instant::now() + budget);

    let mut best: Option<BestItinerary> = None;
    let mut sequences_checked = 0usize;
    let mut feasible_count = 0usize;
    let mut truncated = false;

    for sequence in buckets.sequences() {
        if let Some(cap) = config.max_sequences {
            if sequences_checked >= cap {
                truncated = true;
                break;
            }
        }
        if let Some(deadline) = deadline {
            if Instant::now() >= deadline {
                truncated = true;
                break;
            }
        }

        sequences_checked += 1;

        let Some(itinerary) = simulator.simulate(origin, start, &sequence).await? else {
            debug!(?sequence, "sequence infeasible");
            continue;
        };

        feasible_count += 1;
        debug!(
            ?sequence,
            travel_time = %itinerary.total_travel_time(),
            cost = itinerary.total_cost(),
            "sequence feasible"
        );

        if best
            .as_ref()
            .is_none_or(|b| beats(&itinerary, &b.itinerary))
        {
            best = Some(BestItinerary {
                sequence,
                itinerary,
            });
        }
    }

    info!(
        sequences_checked,
        feasible_count, truncated, "itinerary search finished"
    );

    Ok(SearchResult {
        best,
        sequences_checked,
        feasible_count,
        truncated,
    })
}

/// Whether `candidate` strictly improves on `incumbent`.
fn beats(candidate: &Itinerary, incumbent: &Itinerary) -> bool {
    if candidate.total_travel_time() != incumbent.total_travel_time() {
        return candidate.total_travel_time() < incumbent.total_travel_time();
    }
    candidate.total_cost() < incumbent.total_cost()
}
