//! Itinerary simulation.
//!
//! Walks one candidate sequence leg by leg, resolving the earliest
//! eligible flight for each hop. Any missing leg aborts the whole
//! sequence; partially resolved chains never become itineraries.

use chrono::{DateTime, Utc};

use crate::domain::{DomainError, Iata, Itinerary, ItineraryLeg};

use super::buffers::{ConfigError, ConnectionBuffers};
use super::resolver::LegSource;

/// Error from simulating a candidate sequence.
///
/// Distinct from infeasibility: an infeasible sequence is `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Itinerary(#[from] DomainError),
}

/// Simulates candidate sequences against a leg source.
#[derive(Debug)]
pub struct Simulator<'a, L: LegSource> {
    legs: &'a L,
    buffers: &'a ConnectionBuffers,
    extra_travel_time: chrono::Duration,
}

impl<'a, L: LegSource> Simulator<'a, L> {
    pub fn new(
        legs: &'a L,
        buffers: &'a ConnectionBuffers,
        extra_travel_time: chrono::Duration,
    ) -> Self {
        Self {
            legs,
            buffers,
            extra_travel_time,
        }
    }

    /// Simulate the itinerary that visits `sequence` in order, starting
    /// from `origin` no earlier than `start`.
    ///
    /// Each hop may depart only after the previous arrival plus the
    /// minimum connection time at the current airport; the start origin
    /// gets the same treatment with `start` as the notional arrival. The
    /// layover annotation on each leg measures from the previous arrival
    /// (so it is at least the connection buffer when a wait occurred).
    ///
    /// Returns `Ok(None)` when any hop has no eligible flight. An empty
    /// sequence yields the degenerate empty itinerary.
    ///
    /// # Errors
    ///
    /// Fails when an airport in the walk has no buffer entry.
    pub async fn simulate(
        &self,
        origin: Iata,
        start: DateTime<Utc>,
        sequence: &[Iata],
    ) -> Result<Option<Itinerary>, SimulationError> {
        let mut current = origin;
        let mut previous_arrival = start;
        let mut legs: Vec<ItineraryLeg> = Vec::with_capacity(sequence.len());

        for &destination in sequence {
            let not_before = previous_arrival + self.buffers.minimum_connection(current)?;

            let Some(leg) = self
                .legs
                .earliest_eligible_leg(current, destination, not_before)
                .await
            else {
                return Ok(None);
            };

            let layover = leg.departure() - previous_arrival;
            previous_arrival = leg.arrival();
            legs.push(ItineraryLeg::new(leg, layover, current));
            current = destination;
        }

        let itinerary = Itinerary::new(legs, self.extra_travel_time)?;
        Ok(Some(itinerary))
    }
}
