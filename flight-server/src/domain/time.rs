//! Elapsed-duration rendering.

use chrono::Duration;

/// Render a non-negative elapsed duration as `"H:MM:SS"`, with a leading
/// day count once it exceeds 24 hours (`"1 day, 2:30:00"`).
///
/// This is the explicit serialization format for all durations crossing
/// the API boundary and appearing in notification emails.
///
/// Negative durations are clamped to zero; they cannot arise from a valid
/// itinerary.
pub fn format_elapsed(duration: Duration) -> String {
    let total_secs = duration.num_seconds().max(0);

    let days = total_secs / 86_400;
    let hours = (total_secs % 86_400) / 3_600;
    let minutes = (total_secs % 3_600) / 60;
    let seconds = total_secs % 60;

    match days {
        0 => format!("{hours}:{minutes:02}:{seconds:02}"),
        1 => format!("1 day, {hours}:{minutes:02}:{seconds:02}"),
        n => format!("{n} days, {hours}:{minutes:02}:{seconds:02}"),
    }
}
