//! HTML rendering of a found itinerary for the notification email.

use crate::domain::{Iata, format_elapsed};
use crate::planner::BestItinerary;

/// Subject line for the notification email.
pub fn email_subject(origin: Iata, best: &BestItinerary) -> String {
    match best.sequence.last() {
        Some(last) => format!("Flight itinerary {origin} \u{2192} {last}"),
        None => format!("Flight itinerary from {origin}"),
    }
}

/// Render the best itinerary as an HTML email body.
///
/// Pure function over the search outcome; durations use the same
/// `H:MM:SS` rendering as the API responses.
pub fn email_body(origin: Iata, best: &BestItinerary) -> String {
    let mut sequence = origin.to_string();
    for airport in &best.sequence {
        sequence.push_str(" \u{2192} ");
        sequence.push_str(airport.as_str());
    }

    let mut details = String::new();
    for entry in best.itinerary.legs() {
        let leg = &entry.leg;
        details.push_str(&format!(
            "\
        <li>
            <strong>{airline} {number}</strong><br>
            <strong>Departure:</strong> {departure} ({origin})<br>
            <strong>Arrival:</strong> {arrival} ({destination})<br>
            <strong>Duration:</strong> {duration}<br>
            <strong>Cost:</strong> ${cost:.2}<br>
            <strong>Layover:</strong> {layover} at {layover_at}<br>
        </li>
",
            airline = leg.airline(),
            number = leg.flight_number(),
            departure = leg.departure().format("%Y-%m-%d %H:%M:%S"),
            origin = leg.origin(),
            arrival = leg.arrival().format("%Y-%m-%d %H:%M:%S"),
            destination = leg.destination(),
            duration = format_elapsed(leg.duration()),
            cost = leg.cost(),
            layover = format_elapsed(entry.layover),
            layover_at = entry.layover_at,
        ));
    }

    let itinerary = &best.itinerary;
    format!(
        "\
        <h1>Flight Itinerary</h1>
        <h2>Flight Sequence</h2>
        <p>{sequence}</p>

        <h2>Flight Details</h2>
        <ul>{details}</ul>

        <h2>Summary</h2>
        <ul>
            <li><strong>Total Flight Duration:</strong> {flight}</li>
            <li><strong>Total Layover Duration:</strong> {layover}</li>
            <li><strong>Total Travel Time:</strong> {travel}</li>
            <li><strong>Total Cost:</strong> ${cost:.2}</li>
        </ul>
",
        flight = format_elapsed(itinerary.total_flight_duration()),
        layover = format_elapsed(itinerary.total_layover_duration()),
        travel = format_elapsed(itinerary.total_travel_time()),
        cost = itinerary.total_cost(),
    )
}
