//! Data transfer objects for web requests and responses.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::amadeus::{FlightOffer, Location, OfferPoint};
use crate::domain::format_elapsed;
use crate::planner::{BestItinerary, SearchResult};

/// Query for `GET /flights`.
#[derive(Debug, Deserialize)]
pub struct FlightsQuery {
    /// Origin airport IATA code
    pub origin: Option<String>,

    /// Destination airport IATA code
    pub destination: Option<String>,

    /// Departure date in `YYYY-MM-DD`
    pub departure_date: Option<String>,
}

/// Query for `GET /airports`.
#[derive(Debug, Deserialize)]
pub struct AirportsQuery {
    /// Free-text keyword (city or airport name)
    pub keyword: Option<String>,
}

/// Response for `GET /flights`.
#[derive(Debug, Serialize)]
pub struct FlightsResponse {
    /// Processed offers
    pub data: Vec<OfferResult>,
}

/// A processed flight offer.
#[derive(Debug, Serialize)]
pub struct OfferResult {
    /// Total price as reported by the provider
    pub amount: String,

    /// ISO currency code
    pub currency: String,

    /// One entry per bound
    pub itineraries: Vec<OfferItineraryResult>,
}

/// One bound of a processed offer.
#[derive(Debug, Serialize)]
pub struct OfferItineraryResult {
    /// ISO-8601 duration of the bound
    pub duration: Option<String>,

    /// The segments, in travel order
    pub segments: Vec<OfferSegmentResult>,
}

/// A segment of a processed offer.
#[derive(Debug, Serialize)]
pub struct OfferSegmentResult {
    /// Carrier code plus resolved airline name
    pub airline: AirlineResult,

    /// Departure point
    pub departure: PointResult,

    /// Arrival point
    pub arrival: PointResult,
}

/// Carrier identification with the name resolved from the carriers
/// dictionary.
#[derive(Debug, Serialize)]
pub struct AirlineResult {
    /// Carrier code (e.g. "LA")
    pub code: String,

    /// Airline name, or "Unknown Airline" when the dictionary lacks it
    pub airline_name: String,
}

/// An airport endpoint with its local timestamp.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointResult {
    /// IATA code
    pub iata_code: String,

    /// Terminal, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<String>,

    /// Local timestamp as sent by the provider
    pub at: String,
}

/// An airport or city match for `GET /airports`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationResult {
    /// Human-readable name
    pub name: Option<String>,

    /// IATA code
    pub iata_code: Option<String>,

    /// "AIRPORT" or "CITY"
    pub sub_type: Option<String>,
}

/// Response for `GET /airports`.
#[derive(Debug, Serialize)]
pub struct AirportsResponse {
    /// Matching locations
    pub data: Vec<LocationResult>,
}

/// Body of `POST /search`.
#[derive(Debug, Deserialize)]
pub struct PlanSearchRequest {
    /// Start origin airport IATA code
    pub origin: String,

    /// Departure date in `YYYY-MM-DD`
    pub departure_date: String,

    /// Departure time in `HH:MM` (24-hour)
    pub departure_time: String,

    /// Leg-acceptance strategy: "direct" or "stops"
    pub strategy: String,

    /// Optional address to email the itinerary to
    pub notify: Option<String>,
}

/// Response for `POST /search`.
#[derive(Debug, Serialize)]
pub struct PlanSearchResponse {
    /// The best itinerary, absent when nothing was feasible
    pub best: Option<BestItineraryResult>,

    /// Candidate sequences evaluated
    pub sequences_checked: usize,

    /// How many of those were feasible
    pub feasible_count: usize,

    /// Whether enumeration stopped early
    pub truncated: bool,
}

/// The winning sequence with its fully resolved legs and totals.
#[derive(Debug, Serialize)]
pub struct BestItineraryResult {
    /// Destination airports in visit order
    pub sequence: Vec<String>,

    /// The resolved flights
    pub legs: Vec<LegResult>,

    /// Sum of flight durations, as `H:MM:SS`
    pub total_flight_duration: String,

    /// Sum of layovers, as `H:MM:SS`
    pub total_layover_duration: String,

    /// Flight time plus layovers plus the fixed overhead, as `H:MM:SS`
    pub total_travel_time: String,

    /// Sum of leg costs
    pub total_cost: f64,
}

/// One resolved flight in a found itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Validating airline code
    pub airline: String,

    /// Carrier code plus flight number (e.g. "LA841")
    pub flight_number: String,

    /// Departure airport
    pub origin: String,

    /// Arrival airport
    pub destination: String,

    /// Departure instant, RFC 3339
    pub departure: String,

    /// Arrival instant, RFC 3339
    pub arrival: String,

    /// Flight duration, as `H:MM:SS`
    pub duration: String,

    /// Ticket cost
    pub cost: f64,

    /// Ground time before this flight, as `H:MM:SS`
    pub layover: String,

    /// Airport where the layover occurred
    pub layover_at: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl OfferResult {
    /// Process a raw offer, resolving airline names from the carriers
    /// dictionary.
    pub fn from_offer(offer: &FlightOffer, carriers: &HashMap<String, String>) -> Self {
        let itineraries = offer
            .itineraries
            .iter()
            .map(|bound| OfferItineraryResult {
                duration: bound.duration.clone(),
                segments: bound
                    .segments
                    .iter()
                    .map(|segment| OfferSegmentResult {
                        airline: AirlineResult {
                            code: segment.carrier_code.clone(),
                            airline_name: carriers
                                .get(&segment.carrier_code)
                                .cloned()
                                .unwrap_or_else(|| "Unknown Airline".to_string()),
                        },
                        departure: PointResult::from_point(&segment.departure),
                        arrival: PointResult::from_point(&segment.arrival),
                    })
                    .collect(),
            })
            .collect();

        Self {
            amount: offer.price.total.clone(),
            currency: offer.price.currency.clone(),
            itineraries,
        }
    }
}

impl PointResult {
    fn from_point(point: &OfferPoint) -> Self {
        Self {
            iata_code: point.iata_code.clone(),
            terminal: point.terminal.clone(),
            at: point.at.clone(),
        }
    }
}

impl LocationResult {
    /// Create from a provider location.
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            iata_code: location.iata_code.clone(),
            sub_type: location.sub_type.clone(),
        }
    }
}

impl PlanSearchResponse {
    /// Create from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        Self {
            best: result.best.as_ref().map(BestItineraryResult::from_best),
            sequences_checked: result.sequences_checked,
            feasible_count: result.feasible_count,
            truncated: result.truncated,
        }
    }
}

impl BestItineraryResult {
    /// Create from the winning itinerary.
    pub fn from_best(best: &BestItinerary) -> Self {
        let legs = best
            .itinerary
            .legs()
            .iter()
            .map(|entry| LegResult {
                airline: entry.leg.airline().to_string(),
                flight_number: entry.leg.flight_number().to_string(),
                origin: entry.leg.origin().to_string(),
                destination: entry.leg.destination().to_string(),
                departure: entry.leg.departure().to_rfc3339(),
                arrival: entry.leg.arrival().to_rfc3339(),
                duration: format_elapsed(entry.leg.duration()),
                cost: entry.leg.cost(),
                layover: format_elapsed(entry.layover),
                layover_at: entry.layover_at.to_string(),
            })
            .collect();

        Self {
            sequence: best.sequence.iter().map(|a| a.to_string()).collect(),
            legs,
            total_flight_duration: format_elapsed(best.itinerary.total_flight_duration()),
            total_layover_duration: format_elapsed(best.itinerary.total_layover_duration()),
            total_travel_time: format_elapsed(best.itinerary.total_travel_time()),
            total_cost: best.itinerary.total_cost(),
        }
    }
}
