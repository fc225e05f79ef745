//! Conversion from Amadeus DTOs to domain types.
//!
//! This module turns raw flight offers into validated [`Leg`] values.
//! Timestamps from Amadeus are local times with no offset; they are all
//! pinned to UTC rather than resolved to per-airport timezones, a
//! deliberate simplification.

use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::domain::{DomainError, Iata, Leg};

use super::types::{FlightOffer, OfferSegment};

/// Error during offer to domain conversion.
///
/// A conversion error invalidates exactly one offer; callers skip the
/// offer (with a warning) rather than failing the surrounding search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConversionError {
    /// Failed to parse an IATA code
    #[error("invalid IATA code: {0}")]
    InvalidAirport(String),

    /// Failed to parse a timestamp
    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Failed to parse an ISO-8601 duration
    #[error("invalid duration: {0}")]
    InvalidDuration(String),

    /// Failed to parse the offer price
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Missing required field
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The parsed fields violate a domain invariant
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Parse an Amadeus `PT#H#M` duration.
///
/// Accepts hours and/or minutes, in that order. A seconds component is
/// rejected as malformed: the provider contract promises hour/minute
/// granularity and silently dropping seconds would corrupt totals.
pub fn parse_duration(s: &str) -> Result<Duration, ConversionError> {
    let invalid = || ConversionError::InvalidDuration(s.to_string());

    let mut rest = s.strip_prefix("PT").ok_or_else(invalid)?;
    let mut hours: Option<i64> = None;
    let mut minutes: Option<i64> = None;

    while !rest.is_empty() {
        let (value, after) = take_number(rest).ok_or_else(invalid)?;
        let mut chars = after.chars();
        let unit = chars.next().ok_or_else(invalid)?;
        rest = chars.as_str();

        match unit {
            'H' if hours.is_none() && minutes.is_none() => hours = Some(value),
            'M' if minutes.is_none() => minutes = Some(value),
            // Anything else, including 'S', is malformed.
            _ => return Err(invalid()),
        }
    }

    if hours.is_none() && minutes.is_none() {
        return Err(invalid());
    }

    // Absurdly large values overflow chrono's range; treat them as
    // malformed rather than trusting the provider.
    let hours = Duration::try_hours(hours.unwrap_or(0)).ok_or_else(invalid)?;
    let minutes = Duration::try_minutes(minutes.unwrap_or(0)).ok_or_else(invalid)?;
    hours.checked_add(&minutes).ok_or_else(invalid)
}

fn take_number(s: &str) -> Option<(i64, &str)> {
    let end = s
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let value = s[..end].parse().ok()?;
    Some((value, &s[end..]))
}

/// Parse an Amadeus local timestamp (`2026-09-01T10:35:00`) as a UTC
/// instant.
///
/// The payload carries no offset; all instants are normalized to UTC
/// without per-airport timezone resolution.
pub fn parse_local_timestamp(s: &str) -> Result<DateTime<Utc>, ConversionError> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|t| t.and_utc())
        .map_err(|_| ConversionError::InvalidTimestamp(s.to_string()))
}

/// Whether the provider marks every segment of the offer as nonstop.
///
/// An absent `numberOfStops` counts as 0, per the Amadeus schema default.
pub fn is_provider_direct(offer: &FlightOffer) -> bool {
    offer
        .itineraries
        .iter()
        .flat_map(|itinerary| itinerary.segments.iter())
        .all(|segment| segment.number_of_stops.unwrap_or(0) == 0)
}

/// Convert a flight offer into a single direct [`Leg`].
///
/// Returns `Ok(None)` for offers whose itinerary has more than one
/// segment: the resolver only accepts direct legs, and multi-leg routes
/// are composed from repeated single-leg resolutions, never taken as one
/// provider offer.
///
/// # Errors
///
/// Returns `Err` for malformed offers (unparseable timestamp, duration,
/// price, or airport code). The error covers that single offer only.
pub fn convert_offer(offer: &FlightOffer) -> Result<Option<Leg>, ConversionError> {
    let itinerary = offer
        .itineraries
        .first()
        .ok_or(ConversionError::MissingField("itineraries"))?;

    if itinerary.segments.is_empty() {
        return Err(ConversionError::MissingField("segments"));
    }
    if itinerary.segments.len() > 1 {
        return Ok(None);
    }

    let segment = &itinerary.segments[0];

    let origin = parse_point(segment, |s| &s.departure.iata_code)?;
    let destination = parse_point(segment, |s| &s.arrival.iata_code)?;
    let departure = parse_local_timestamp(&segment.departure.at)?;
    let arrival = parse_local_timestamp(&segment.arrival.at)?;

    let duration_str = segment
        .duration
        .as_deref()
        .or(itinerary.duration.as_deref())
        .ok_or(ConversionError::MissingField("duration"))?;
    let duration = parse_duration(duration_str)?;

    let cost: f64 = offer
        .price
        .total
        .parse()
        .map_err(|_| ConversionError::InvalidPrice(offer.price.total.clone()))?;
    if !cost.is_finite() {
        return Err(ConversionError::InvalidPrice(offer.price.total.clone()));
    }

    let airline = offer
        .validating_airline_codes
        .as_ref()
        .and_then(|codes| codes.first())
        .cloned()
        .unwrap_or_else(|| segment.carrier_code.clone());

    let flight_number = format!("{}{}", segment.carrier_code, segment.number);

    let leg = Leg::new(
        airline,
        flight_number,
        origin,
        destination,
        departure,
        arrival,
        duration,
        cost,
    )?;

    Ok(Some(leg))
}

fn parse_point(
    segment: &OfferSegment,
    code: impl Fn(&OfferSegment) -> &String,
) -> Result<Iata, ConversionError> {
    let raw = code(segment);
    Iata::parse(raw).map_err(|_| ConversionError::InvalidAirport(raw.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::amadeus::types::{OfferItinerary, OfferPoint, OfferPrice};

    fn segment(from: &str, dep_at: &str, to: &str, arr_at: &str) -> OfferSegment {
        OfferSegment {
            departure: OfferPoint {
                iata_code: from.to_string(),
                terminal: None,
                at: dep_at.to_string(),
            },
            arrival: OfferPoint {
                iata_code: to.to_string(),
                terminal: None,
                at: arr_at.to_string(),
            },
            carrier_code: "LA".to_string(),
            number: "841".to_string(),
            duration: Some("PT3H30M".to_string()),
            number_of_stops: Some(0),
        }
    }

    fn offer(segments: Vec<OfferSegment>, total: &str) -> FlightOffer {
        FlightOffer {
            id: Some("1".to_string()),
            validating_airline_codes: Some(vec!["LA".to_string()]),
            itineraries: vec![OfferItinerary {
                duration: Some("PT3H30M".to_string()),
                segments,
            }],
            price: OfferPrice {
                total: total.to_string(),
                currency: "USD".to_string(),
            },
        }
    }

    #[test]
    fn parse_duration_hours_and_minutes() {
        assert_eq!(parse_duration("PT7H30M").unwrap(), Duration::minutes(450));
        assert_eq!(parse_duration("PT2H").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration("PT45M").unwrap(), Duration::minutes(45));
        assert_eq!(parse_duration("PT0H0M").unwrap(), Duration::zero());
    }

    #[test]
    fn parse_duration_rejects_seconds() {
        // Seconds are unsupported and must not be silently dropped.
        assert!(parse_duration("PT1H30M45S").is_err());
        assert!(parse_duration("PT30S").is_err());
    }

    #[test]
    fn parse_duration_rejects_out_of_range() {
        // Parseable as i64 but beyond chrono's representable range.
        assert_eq!(
            parse_duration("PT4000000000000H"),
            Err(ConversionError::InvalidDuration(
                "PT4000000000000H".to_string()
            ))
        );
        assert!(parse_duration("PT9223372036854775807M").is_err());
    }

    #[test]
    fn parse_duration_rejects_malformed() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("PT").is_err());
        assert!(parse_duration("7H30M").is_err());
        assert!(parse_duration("PTXH").is_err());
        assert!(parse_duration("PT30M2H").is_err());
        assert!(parse_duration("PT1H2H").is_err());
        assert!(parse_duration("PT1H30").is_err());
    }

    #[test]
    fn parse_timestamp() {
        let instant = parse_local_timestamp("2026-09-01T10:35:00").unwrap();
        assert_eq!(instant.to_rfc3339(), "2026-09-01T10:35:00+00:00");
    }

    #[test]
    fn parse_timestamp_rejects_malformed() {
        assert!(parse_local_timestamp("2026-09-01 10:35").is_err());
        assert!(parse_local_timestamp("2026-09-01T10:35:00Z").is_err());
        assert!(parse_local_timestamp("not a time").is_err());
    }

    #[test]
    fn convert_single_segment_offer() {
        let offer = offer(
            vec![segment(
                "PUQ",
                "2026-09-01T08:00:00",
                "SCL",
                "2026-09-01T11:30:00",
            )],
            "150.00",
        );

        let leg = convert_offer(&offer).unwrap().unwrap();

        assert_eq!(leg.airline(), "LA");
        assert_eq!(leg.flight_number(), "LA841");
        assert_eq!(leg.origin().as_str(), "PUQ");
        assert_eq!(leg.destination().as_str(), "SCL");
        assert_eq!(leg.duration(), Duration::minutes(210));
        assert_eq!(leg.cost(), 150.0);
        assert_eq!(leg.departure().to_rfc3339(), "2026-09-01T08:00:00+00:00");
    }

    #[test]
    fn multi_segment_offer_is_filtered_not_an_error() {
        let offer = offer(
            vec![
                segment("PUQ", "2026-09-01T08:00:00", "SCL", "2026-09-01T11:30:00"),
                segment("SCL", "2026-09-01T14:00:00", "MIA", "2026-09-01T22:00:00"),
            ],
            "450.00",
        );

        assert_eq!(convert_offer(&offer).unwrap(), None);
    }

    #[test]
    fn malformed_price_is_an_error() {
        let offer = offer(
            vec![segment(
                "PUQ",
                "2026-09-01T08:00:00",
                "SCL",
                "2026-09-01T11:30:00",
            )],
            "one hundred",
        );

        assert!(matches!(
            convert_offer(&offer),
            Err(ConversionError::InvalidPrice(_))
        ));
    }

    #[test]
    fn malformed_timestamp_is_an_error() {
        let offer = offer(
            vec![segment("PUQ", "bogus", "SCL", "2026-09-01T11:30:00")],
            "150.00",
        );

        assert!(matches!(
            convert_offer(&offer),
            Err(ConversionError::InvalidTimestamp(_))
        ));
    }

    #[test]
    fn falls_back_to_carrier_code_without_validating_airline() {
        let mut offer = offer(
            vec![segment(
                "PUQ",
                "2026-09-01T08:00:00",
                "SCL",
                "2026-09-01T11:30:00",
            )],
            "150.00",
        );
        offer.validating_airline_codes = None;

        let leg = convert_offer(&offer).unwrap().unwrap();
        assert_eq!(leg.airline(), "LA");
    }

    #[test]
    fn provider_direct_marker() {
        let direct = offer(
            vec![segment(
                "PUQ",
                "2026-09-01T08:00:00",
                "SCL",
                "2026-09-01T11:30:00",
            )],
            "150.00",
        );
        assert!(is_provider_direct(&direct));

        let mut with_stop = direct.clone();
        with_stop.itineraries[0].segments[0].number_of_stops = Some(1);
        assert!(!is_provider_direct(&with_stop));

        // Absent field counts as nonstop.
        let mut unknown = direct.clone();
        unknown.itineraries[0].segments[0].number_of_stops = None;
        assert!(is_provider_direct(&unknown));
    }
}
