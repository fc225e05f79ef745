//! Multi-leg itinerary planning.
//!
//! The planner enumerates candidate airport sequences from the region
//! buckets, simulates each one against a leg source, and selects the
//! itinerary with the smallest total travel time. Configuration (buffer
//! table, buckets, search parameters) is built once at startup and
//! injected; the provider is an injected capability so every stage can
//! be tested against deterministic stubs.

mod buffers;
mod config;
mod regions;
mod resolver;
mod search;
mod simulate;

pub use buffers::{ConfigError, ConnectionBuffers};
pub use config::SearchConfig;
pub use regions::{RegionBucket, RegionBuckets, Sequences};
pub use resolver::{InvalidStrategy, LegResolver, LegSource, OfferProvider, Strategy};
pub use search::{BestItinerary, Planner, SearchError, SearchRequest, SearchResult, select_best};
pub use simulate::{SimulationError, Simulator};
