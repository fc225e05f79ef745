//! Amadeus API response DTOs.
//!
//! These types map directly to the Amadeus Self-Service JSON payloads.
//! They use `Option` liberally because Amadeus omits fields rather than
//! sending null values in many cases.

use std::collections::HashMap;

use serde::Deserialize;

/// Response from the OAuth2 token endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,

    /// Lifetime of the token in seconds.
    pub expires_in: i64,
}

/// Response from `GET /v2/shopping/flight-offers`.
#[derive(Debug, Clone, Deserialize)]
pub struct FlightOffersResponse {
    /// The offers. Absent when the search matched nothing.
    pub data: Option<Vec<FlightOffer>>,

    /// Lookup dictionaries (carrier names, aircraft, etc.).
    pub dictionaries: Option<Dictionaries>,
}

/// A single priced flight offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    /// Offer id within this response.
    pub id: Option<String>,

    /// Airlines validating the ticket; the first is the selling carrier.
    pub validating_airline_codes: Option<Vec<String>>,

    /// One itinerary per bound (one for a one-way search).
    pub itineraries: Vec<OfferItinerary>,

    /// Total price for the offer.
    pub price: OfferPrice,
}

/// One bound of an offer: an ordered list of flight segments.
#[derive(Debug, Clone, Deserialize)]
pub struct OfferItinerary {
    /// ISO-8601 duration of the whole bound (e.g. "PT7H30M").
    pub duration: Option<String>,

    /// The flight segments, in travel order.
    pub segments: Vec<OfferSegment>,
}

/// A single flight segment within an offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferSegment {
    /// Departure point and local timestamp.
    pub departure: OfferPoint,

    /// Arrival point and local timestamp.
    pub arrival: OfferPoint,

    /// Operating carrier code (e.g. "LA").
    pub carrier_code: String,

    /// Flight number without the carrier prefix (e.g. "841").
    pub number: String,

    /// ISO-8601 duration of this segment.
    pub duration: Option<String>,

    /// Technical stops within the segment. 0 or absent means nonstop.
    pub number_of_stops: Option<u32>,
}

/// An airport endpoint of a segment.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPoint {
    /// IATA code of the airport.
    pub iata_code: String,

    /// Terminal, when known.
    pub terminal: Option<String>,

    /// Local timestamp without offset, e.g. "2026-09-01T10:35:00".
    pub at: String,
}

/// Price block of an offer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferPrice {
    /// Total price as a decimal string (e.g. "423.10").
    pub total: String,

    /// ISO currency code.
    pub currency: String,
}

/// Lookup dictionaries attached to an offers response.
#[derive(Debug, Clone, Deserialize)]
pub struct Dictionaries {
    /// Carrier code to airline name.
    pub carriers: Option<HashMap<String, String>>,
}

/// Response from `GET /v1/reference-data/locations`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationsResponse {
    /// Matching locations. Absent when nothing matched.
    pub data: Option<Vec<Location>>,
}

/// A city or airport from the locations endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    /// Human-readable name.
    pub name: Option<String>,

    /// IATA code.
    pub iata_code: Option<String>,

    /// "AIRPORT" or "CITY".
    pub sub_type: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_flight_offers() {
        let json = r#"{
            "data": [
                {
                    "id": "1",
                    "validatingAirlineCodes": ["LA"],
                    "itineraries": [
                        {
                            "duration": "PT3H30M",
                            "segments": [
                                {
                                    "departure": {"iataCode": "PUQ", "at": "2026-09-01T08:00:00"},
                                    "arrival": {"iataCode": "SCL", "terminal": "2", "at": "2026-09-01T11:30:00"},
                                    "carrierCode": "LA",
                                    "number": "841",
                                    "duration": "PT3H30M",
                                    "numberOfStops": 0
                                }
                            ]
                        }
                    ],
                    "price": {"total": "150.00", "currency": "USD"}
                }
            ],
            "dictionaries": {
                "carriers": {"LA": "LATAM AIRLINES"}
            }
        }"#;

        let response: FlightOffersResponse = serde_json::from_str(json).unwrap();

        let offers = response.data.unwrap();
        assert_eq!(offers.len(), 1);

        let offer = &offers[0];
        assert_eq!(offer.validating_airline_codes.as_deref(), Some(&["LA".to_string()][..]));
        assert_eq!(offer.price.total, "150.00");
        assert_eq!(offer.price.currency, "USD");

        let segment = &offer.itineraries[0].segments[0];
        assert_eq!(segment.carrier_code, "LA");
        assert_eq!(segment.number, "841");
        assert_eq!(segment.departure.iata_code, "PUQ");
        assert_eq!(segment.arrival.terminal.as_deref(), Some("2"));
        assert_eq!(segment.number_of_stops, Some(0));

        let carriers = response.dictionaries.unwrap().carriers.unwrap();
        assert_eq!(carriers.get("LA").map(String::as_str), Some("LATAM AIRLINES"));
    }

    #[test]
    fn deserialize_empty_offers() {
        let response: FlightOffersResponse = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(response.data.unwrap().is_empty());
        assert!(response.dictionaries.is_none());

        // Amadeus may also omit data entirely
        let response: FlightOffersResponse = serde_json::from_str("{}").unwrap();
        assert!(response.data.is_none());
    }

    #[test]
    fn deserialize_segment_without_stops_field() {
        let json = r#"{
            "departure": {"iataCode": "SCL", "at": "2026-09-01T14:00:00"},
            "arrival": {"iataCode": "MIA", "at": "2026-09-01T22:10:00"},
            "carrierCode": "AA",
            "number": "940"
        }"#;

        let segment: OfferSegment = serde_json::from_str(json).unwrap();
        assert!(segment.number_of_stops.is_none());
        assert!(segment.duration.is_none());
    }

    #[test]
    fn deserialize_token_response() {
        let json = r#"{"access_token": "abc", "expires_in": 1799, "token_type": "Bearer"}"#;
        let token: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(token.access_token, "abc");
        assert_eq!(token.expires_in, 1799);
    }

    #[test]
    fn deserialize_locations() {
        let json = r#"{
            "data": [
                {"name": "MIAMI INTL", "iataCode": "MIA", "subType": "AIRPORT"}
            ]
        }"#;

        let response: LocationsResponse = serde_json::from_str(json).unwrap();
        let locations = response.data.unwrap();
        assert_eq!(locations[0].iata_code.as_deref(), Some("MIA"));
        assert_eq!(locations[0].sub_type.as_deref(), Some("AIRPORT"));
    }
}
