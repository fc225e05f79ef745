//! Flight leg type.
//!
//! A `Leg` is a single direct flight between two airports with known
//! timing and cost, resolved from a provider offer. It is never mutated
//! after creation.

use chrono::{DateTime, Duration, Utc};

use super::{DomainError, Iata};

/// A single direct flight.
///
/// Times are UTC instants; the provider sends local times without an
/// offset and the resolver pins them to UTC (a documented simplification,
/// see [`crate::amadeus::convert`]).
///
/// # Invariants
///
/// - `arrival >= departure`
/// - `cost >= 0`
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    airline: String,
    flight_number: String,
    origin: Iata,
    destination: Iata,
    departure: DateTime<Utc>,
    arrival: DateTime<Utc>,
    duration: Duration,
    cost: f64,
}

impl Leg {
    /// Construct a leg, validating timing and cost.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `arrival < departure` or `cost` is negative.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        airline: String,
        flight_number: String,
        origin: Iata,
        destination: Iata,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        duration: Duration,
        cost: f64,
    ) -> Result<Self, DomainError> {
        if arrival < departure {
            return Err(DomainError::ArrivalBeforeDeparture);
        }
        if cost < 0.0 {
            return Err(DomainError::NegativeCost(cost));
        }

        Ok(Self {
            airline,
            flight_number,
            origin,
            destination,
            departure,
            arrival,
            duration,
            cost,
        })
    }

    /// The validating airline code (e.g. "LA").
    pub fn airline(&self) -> &str {
        &self.airline
    }

    /// Carrier code plus flight number (e.g. "LA841").
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Departure airport.
    pub fn origin(&self) -> Iata {
        self.origin
    }

    /// Arrival airport.
    pub fn destination(&self) -> Iata {
        self.destination
    }

    /// Departure instant (UTC).
    pub fn departure(&self) -> DateTime<Utc> {
        self.departure
    }

    /// Arrival instant (UTC).
    pub fn arrival(&self) -> DateTime<Utc> {
        self.arrival
    }

    /// Scheduled flight duration as reported by the provider.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Ticket cost in the search currency (USD).
    pub fn cost(&self) -> f64 {
        self.cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn instant(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, 1, h, m, 0).unwrap()
    }

    fn make_leg(dep: DateTime<Utc>, arr: DateTime<Utc>, cost: f64) -> Result<Leg, DomainError> {
        Leg::new(
            "LA".into(),
            "LA841".into(),
            iata("PUQ"),
            iata("SCL"),
            dep,
            arr,
            arr - dep,
            cost,
        )
    }

    #[test]
    fn valid_leg() {
        let leg = make_leg(instant(10, 0), instant(13, 30), 120.5).unwrap();

        assert_eq!(leg.airline(), "LA");
        assert_eq!(leg.flight_number(), "LA841");
        assert_eq!(leg.origin(), iata("PUQ"));
        assert_eq!(leg.destination(), iata("SCL"));
        assert_eq!(leg.duration(), Duration::minutes(210));
        assert_eq!(leg.cost(), 120.5);
    }

    #[test]
    fn zero_cost_allowed() {
        assert!(make_leg(instant(10, 0), instant(12, 0), 0.0).is_ok());
    }

    #[test]
    fn negative_cost_rejected() {
        let result = make_leg(instant(10, 0), instant(12, 0), -1.0);
        assert!(matches!(result, Err(DomainError::NegativeCost(_))));
    }

    #[test]
    fn arrival_before_departure_rejected() {
        let result = make_leg(instant(12, 0), instant(10, 0), 100.0);
        assert!(matches!(result, Err(DomainError::ArrivalBeforeDeparture)));
    }
}
