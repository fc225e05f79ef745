//! Itinerary types.
//!
//! An `Itinerary` is a fully resolved chain of legs for one candidate
//! sequence, with aggregate time and cost totals. Partially resolved
//! chains never become itineraries: the simulator aborts the whole
//! sequence when any leg is missing.

use chrono::Duration;

use super::{DomainError, Iata, Leg};

/// A leg annotated with the layover that preceded it.
///
/// Every leg carries the annotation; for the first leg the layover is
/// measured from the search start instant at the start origin.
#[derive(Debug, Clone, PartialEq)]
pub struct ItineraryLeg {
    /// The resolved flight.
    pub leg: Leg,
    /// Ground time between the previous arrival and this departure.
    pub layover: Duration,
    /// Airport where the layover occurred.
    pub layover_at: Iata,
}

impl ItineraryLeg {
    /// Annotate a leg with its layover.
    pub fn new(leg: Leg, layover: Duration, layover_at: Iata) -> Self {
        Self {
            leg,
            layover,
            layover_at,
        }
    }
}

/// A complete itinerary with aggregate totals.
///
/// Totals are computed at construction, so
/// `total_travel_time == total_flight_duration + total_layover_duration + extra_travel_time`
/// holds for every value of this type. `extra_travel_time` is a fixed
/// per-itinerary overhead constant, added exactly once.
///
/// # Invariants
///
/// - Consecutive legs connect (destination of one = origin of the next)
/// - Every layover annotation is non-negative
/// - The empty itinerary is legal: all totals zero plus the extra-time
///   constant (degenerate case for an empty candidate sequence)
#[derive(Debug, Clone, PartialEq)]
pub struct Itinerary {
    legs: Vec<ItineraryLeg>,
    total_flight_duration: Duration,
    total_layover_duration: Duration,
    total_travel_time: Duration,
    total_cost: f64,
}

impl Itinerary {
    /// Construct an itinerary from annotated legs, computing the totals.
    ///
    /// # Errors
    ///
    /// Returns `Err` if consecutive legs do not share an airport or any
    /// layover annotation is negative.
    pub fn new(legs: Vec<ItineraryLeg>, extra_travel_time: Duration) -> Result<Self, DomainError> {
        for window in legs.windows(2) {
            let arrived_at = window[0].leg.destination();
            let departs_from = window[1].leg.origin();
            if arrived_at != departs_from {
                return Err(DomainError::LegsNotConnected(arrived_at, departs_from));
            }
        }

        let mut total_flight_duration = Duration::zero();
        let mut total_layover_duration = Duration::zero();
        let mut total_cost = 0.0;

        for entry in &legs {
            if entry.layover < Duration::zero() {
                return Err(DomainError::NegativeLayover(entry.layover_at));
            }
            total_flight_duration += entry.leg.duration();
            total_layover_duration += entry.layover;
            total_cost += entry.leg.cost();
        }

        let total_travel_time = total_flight_duration + total_layover_duration + extra_travel_time;

        Ok(Self {
            legs,
            total_flight_duration,
            total_layover_duration,
            total_travel_time,
            total_cost,
        })
    }

    /// The annotated legs in travel order.
    pub fn legs(&self) -> &[ItineraryLeg] {
        &self.legs
    }

    /// Number of flights in the itinerary.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Sum of leg flight durations.
    pub fn total_flight_duration(&self) -> Duration {
        self.total_flight_duration
    }

    /// Sum of layovers.
    pub fn total_layover_duration(&self) -> Duration {
        self.total_layover_duration
    }

    /// Flight time plus layover time plus the extra-time constant.
    pub fn total_travel_time(&self) -> Duration {
        self.total_travel_time
    }

    /// Sum of leg costs.
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn iata(s: &str) -> Iata {
        Iata::parse(s).unwrap()
    }

    fn instant(day: u32, h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 9, day, h, m, 0).unwrap()
    }

    fn leg(from: &str, to: &str, dep: DateTime<Utc>, arr: DateTime<Utc>, cost: f64) -> Leg {
        Leg::new(
            "QR".into(),
            "QR921".into(),
            iata(from),
            iata(to),
            dep,
            arr,
            arr - dep,
            cost,
        )
        .unwrap()
    }

    fn extra() -> Duration {
        Duration::minutes(150)
    }

    #[test]
    fn totals_from_legs() {
        let first = leg("PUQ", "SCL", instant(1, 8, 0), instant(1, 11, 0), 150.0);
        let second = leg("SCL", "MIA", instant(1, 14, 0), instant(1, 22, 0), 450.0);

        let itinerary = Itinerary::new(
            vec![
                ItineraryLeg::new(first, Duration::zero(), iata("PUQ")),
                ItineraryLeg::new(second, Duration::hours(3), iata("SCL")),
            ],
            extra(),
        )
        .unwrap();

        assert_eq!(itinerary.leg_count(), 2);
        assert_eq!(itinerary.total_flight_duration(), Duration::hours(11));
        assert_eq!(itinerary.total_layover_duration(), Duration::hours(3));
        assert_eq!(
            itinerary.total_travel_time(),
            Duration::hours(14) + Duration::minutes(150)
        );
        assert_eq!(itinerary.total_cost(), 600.0);
    }

    #[test]
    fn travel_time_invariant() {
        let first = leg("SCL", "MAD", instant(1, 10, 0), instant(1, 23, 0), 800.0);
        let itinerary = Itinerary::new(
            vec![ItineraryLeg::new(
                first,
                Duration::minutes(45),
                iata("SCL"),
            )],
            extra(),
        )
        .unwrap();

        assert_eq!(
            itinerary.total_travel_time(),
            itinerary.total_flight_duration() + itinerary.total_layover_duration() + extra()
        );
    }

    #[test]
    fn empty_itinerary_is_degenerate_but_valid() {
        let itinerary = Itinerary::new(vec![], extra()).unwrap();

        assert_eq!(itinerary.leg_count(), 0);
        assert_eq!(itinerary.total_flight_duration(), Duration::zero());
        assert_eq!(itinerary.total_layover_duration(), Duration::zero());
        assert_eq!(itinerary.total_cost(), 0.0);
        // Degenerate case still carries the extra-time constant.
        assert_eq!(itinerary.total_travel_time(), extra());
    }

    #[test]
    fn disconnected_legs_rejected() {
        let first = leg("PUQ", "SCL", instant(1, 8, 0), instant(1, 11, 0), 150.0);
        let second = leg("MIA", "MAD", instant(1, 14, 0), instant(1, 22, 0), 450.0);

        let result = Itinerary::new(
            vec![
                ItineraryLeg::new(first, Duration::zero(), iata("PUQ")),
                ItineraryLeg::new(second, Duration::hours(3), iata("SCL")),
            ],
            extra(),
        );

        assert!(matches!(
            result,
            Err(DomainError::LegsNotConnected(a, b))
                if a == iata("SCL") && b == iata("MIA")
        ));
    }

    #[test]
    fn negative_layover_rejected() {
        let first = leg("PUQ", "SCL", instant(1, 8, 0), instant(1, 11, 0), 150.0);

        let result = Itinerary::new(
            vec![ItineraryLeg::new(
                first,
                Duration::minutes(-1),
                iata("PUQ"),
            )],
            extra(),
        );

        assert!(matches!(result, Err(DomainError::NegativeLayover(_))));
    }
}
