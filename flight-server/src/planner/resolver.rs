//! Flight leg resolution.
//!
//! Resolves the earliest eligible direct flight between two airports, no
//! earlier than a given instant. The provider is an injected capability
//! so searches can run against a deterministic stub.

use std::future::Future;

use chrono::{DateTime, NaiveDate, Utc};
use tracing::warn;

use crate::amadeus::{AmadeusError, FlightOffer, convert_offer, is_provider_direct};
use crate::domain::{Iata, Leg};

/// Capability to query raw flight offers from the external provider.
///
/// Implemented by [`crate::amadeus::AmadeusClient`] and by
/// [`crate::amadeus::mock::MockAmadeusClient`] for tests.
pub trait OfferProvider {
    /// Fetch available offers between two airports on a calendar date.
    fn search_offers(
        &self,
        origin: Iata,
        destination: Iata,
        date: NaiveDate,
    ) -> impl Future<Output = Result<Vec<FlightOffer>, AmadeusError>> + Send;
}

/// The per-leg resolution contract consumed by the simulator.
///
/// Deterministic stubs implement this directly in tests; production code
/// uses [`LegResolver`] over an [`OfferProvider`].
pub trait LegSource {
    /// The earliest direct leg departing at or after `not_before`, or
    /// `None` when no eligible flight exists. Absence is not an error:
    /// the caller treats it as infeasibility of the candidate sequence.
    fn earliest_eligible_leg(
        &self,
        origin: Iata,
        destination: Iata,
        not_before: DateTime<Utc>,
    ) -> impl Future<Output = Option<Leg>> + Send;
}

/// Leg-acceptance policy for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Accept any single-segment offer, including ones with technical
    /// stops.
    WithStops,
    /// Additionally require the provider's nonstop marker on every leg,
    /// so the whole itinerary is expressible with provider-direct legs.
    Direct,
}

impl std::str::FromStr for Strategy {
    type Err = InvalidStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "stops" => Ok(Strategy::WithStops),
            "direct" => Ok(Strategy::Direct),
            other => Err(InvalidStrategy(other.to_string())),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::WithStops => f.write_str("stops"),
            Strategy::Direct => f.write_str("direct"),
        }
    }
}

/// Error for an unrecognized strategy flag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected \"direct\" or \"stops\")")]
pub struct InvalidStrategy(pub String);

/// Resolves legs from provider offers under a strategy.
#[derive(Debug, Clone)]
pub struct LegResolver<'a, P: OfferProvider> {
    provider: &'a P,
    strategy: Strategy,
}

impl<'a, P: OfferProvider> LegResolver<'a, P> {
    /// Create a resolver over a provider.
    pub fn new(provider: &'a P, strategy: Strategy) -> Self {
        Self { provider, strategy }
    }
}

impl<P: OfferProvider + Sync> LegSource for LegResolver<'_, P> {
    async fn earliest_eligible_leg(
        &self,
        origin: Iata,
        destination: Iata,
        not_before: DateTime<Utc>,
    ) -> Option<Leg> {
        // Provider failures (network, rate limit) make this leg
        // unavailable; the surrounding search keeps going.
        let offers = match self
            .provider
            .search_offers(origin, destination, not_before.date_naive())
            .await
        {
            Ok(offers) => offers,
            Err(e) => {
                warn!(%origin, %destination, error = %e, "provider query failed, leg unavailable");
                return None;
            }
        };

        let mut eligible: Vec<Leg> = Vec::new();
        for offer in &offers {
            if self.strategy == Strategy::Direct && !is_provider_direct(offer) {
                continue;
            }

            match convert_offer(offer) {
                // Multi-segment offers are never accepted as one leg.
                Ok(None) => {}
                Ok(Some(leg)) => {
                    if leg.origin() != origin || leg.destination() != destination {
                        warn!(%origin, %destination, "offer endpoints do not match the queried route, skipping");
                        continue;
                    }
                    if leg.departure() >= not_before {
                        eligible.push(leg);
                    }
                }
                Err(e) => {
                    warn!(%origin, %destination, error = %e, "skipping malformed offer");
                }
            }
        }

        // Stable sort keeps provider order among equal departures, so
        // the selection is deterministic.
        eligible.sort_by_key(|leg| leg.departure());
        eligible.into_iter().next()
    }
}
