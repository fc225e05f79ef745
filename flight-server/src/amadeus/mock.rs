//! Mock Amadeus client for testing without API access.
//!
//! Serves programmatically-built offers keyed by route, as if they were
//! live flight-offers responses. Routes can also be scripted to fail, to
//! exercise the resolver's failure-as-absence behavior.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;

use crate::domain::Iata;
use crate::planner::OfferProvider;

use super::error::AmadeusError;
use super::types::{FlightOffer, OfferItinerary, OfferPoint, OfferPrice, OfferSegment};

/// Mock Amadeus client backed by an in-memory route table.
///
/// Useful for development and tests that need deterministic provider
/// behavior. Dates are ignored: the scripted offers are static.
#[derive(Debug, Clone, Default)]
pub struct MockAmadeusClient {
    offers: HashMap<(Iata, Iata), Vec<FlightOffer>>,
    failing_routes: HashSet<(Iata, Iata)>,
}

impl MockAmadeusClient {
    /// Create an empty mock client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an offer for a route.
    pub fn add_offer(&mut self, origin: Iata, destination: Iata, offer: FlightOffer) {
        self.offers
            .entry((origin, destination))
            .or_default()
            .push(offer);
    }

    /// Script a route to fail with a rate-limit error.
    pub fn fail_route(&mut self, origin: Iata, destination: Iata) {
        self.failing_routes.insert((origin, destination));
    }
}

impl OfferProvider for MockAmadeusClient {
    async fn search_offers(
        &self,
        origin: Iata,
        destination: Iata,
        _date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, AmadeusError> {
        if self.failing_routes.contains(&(origin, destination)) {
            return Err(AmadeusError::RateLimited);
        }

        Ok(self
            .offers
            .get(&(origin, destination))
            .cloned()
            .unwrap_or_default())
    }
}

/// Build a single-segment offer for tests.
///
/// Timestamps are Amadeus-style local strings (`2026-09-01T08:00:00`),
/// the duration an ISO-8601 string (`PT3H30M`).
pub fn single_segment_offer(
    carrier: &str,
    number: &str,
    origin: &str,
    departure_at: &str,
    destination: &str,
    arrival_at: &str,
    duration: &str,
    total: &str,
) -> FlightOffer {
    FlightOffer {
        id: None,
        validating_airline_codes: Some(vec![carrier.to_string()]),
        itineraries: vec![OfferItinerary {
            duration: Some(duration.to_string()),
            segments: vec![OfferSegment {
                departure: OfferPoint {
                    iata_code: origin.to_string(),
                    terminal: None,
                    at: departure_at.to_string(),
                },
                arrival: OfferPoint {
                    iata_code: destination.to_string(),
                    terminal: None,
                    at: arrival_at.to_string(),
                },
                carrier_code: carrier.to_string(),
                number: number.to_string(),
                duration: Some(duration.to_string()),
                number_of_stops: Some(0),
            }],
        }],
        price: OfferPrice {
            total: total.to_string(),
            currency: "USD".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap()
    }

    #[tokio::test]
    async fn serves_scripted_offers() {
        let mut client = MockAmadeusClient::new();
        client.add_offer(
            iata("PUQ"),
            iata("SCL"),
            single_segment_offer(
                "LA",
                "841",
                "PUQ",
                "2026-09-01T08:00:00",
                "SCL",
                "2026-09-01T11:30:00",
                "PT3H30M",
                "150.00",
            ),
        );

        let offers = client
            .search_offers(iata("PUQ"), iata("SCL"), date())
            .await
            .unwrap();

        assert_eq!(offers.len(), 1);
        assert_eq!(offers[0].price.total, "150.00");
    }

    #[tokio::test]
    async fn unknown_route_is_empty_not_an_error() {
        let client = MockAmadeusClient::new();

        let offers = client
            .search_offers(iata("PUQ"), iata("SCL"), date())
            .await
            .unwrap();

        assert!(offers.is_empty());
    }

    #[tokio::test]
    async fn scripted_failure() {
        let mut client = MockAmadeusClient::new();
        client.fail_route(iata("PUQ"), iata("SCL"));

        let result = client.search_offers(iata("PUQ"), iata("SCL"), date()).await;

        assert!(matches!(result, Err(AmadeusError::RateLimited)));
    }
}
