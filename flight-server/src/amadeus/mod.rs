//! Amadeus Self-Service API client.
//!
//! This module provides an HTTP client for the Amadeus flight-offers and
//! location-search endpoints.
//!
//! Key characteristics of the API:
//! - Authentication is an OAuth2 client-credentials grant; the bearer
//!   token is short-lived and cached until near expiry
//! - Segment timestamps are **local times without an offset**; this
//!   codebase interprets them all as UTC (see [`convert`])
//! - Durations are ISO-8601 strings at hour/minute granularity
//!   (`PT7H30M`)

mod client;
pub mod convert;
mod error;
pub mod mock;
mod types;

pub use client::{AmadeusClient, AmadeusConfig};
pub use convert::{ConversionError, convert_offer, is_provider_direct, parse_duration};
pub use error::AmadeusError;
pub use types::{
    Dictionaries, FlightOffer, FlightOffersResponse, Location, LocationsResponse, OfferItinerary,
    OfferPoint, OfferPrice, OfferSegment, TokenResponse,
};
