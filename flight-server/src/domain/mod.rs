//! Domain types for the flight itinerary search.
//!
//! This module contains the core domain model: validated airport codes,
//! resolved flight legs, and fully-priced itineraries. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod airport;
mod itinerary;
mod leg;
mod time;

pub use airport::{Iata, InvalidIata};
pub use itinerary::{Itinerary, ItineraryLeg};
pub use leg::Leg;
pub use time::format_elapsed;

/// Errors from domain type construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// A leg's cost was negative.
    #[error("leg cost must be non-negative, got {0}")]
    NegativeCost(f64),

    /// A leg's arrival preceded its departure.
    #[error("leg arrives before it departs")]
    ArrivalBeforeDeparture,

    /// Consecutive itinerary legs do not share an airport.
    #[error("legs do not connect: arrived at {0} but next departs from {1}")]
    LegsNotConnected(Iata, Iata),

    /// A layover annotation was negative.
    #[error("negative layover at {0}")]
    NegativeLayover(Iata),
}
