//! Search configuration for the itinerary planner.

use chrono::Duration;

/// Configuration parameters for an itinerary search.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Fixed overhead added once per itinerary to the total travel time
    /// (minutes). Models unscheduled ground time the legs don't capture.
    pub extra_travel_time_mins: i64,

    /// Optional cap on the number of candidate sequences evaluated.
    /// `None` evaluates the full Cartesian product.
    pub max_sequences: Option<usize>,

    /// Optional wall-clock budget for one search (seconds), checked
    /// between sequences. When exhausted the search stops enumerating
    /// and reports the best itinerary found so far.
    pub time_budget_secs: Option<u64>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        extra_travel_time_mins: i64,
        max_sequences: Option<usize>,
        time_budget_secs: Option<u64>,
    ) -> Self {
        Self {
            extra_travel_time_mins,
            max_sequences,
            time_budget_secs,
        }
    }

    /// Returns the extra travel time as a Duration.
    pub fn extra_travel_time(&self) -> Duration {
        Duration::minutes(self.extra_travel_time_mins)
    }

    /// Returns the time budget as a std Duration, if set.
    pub fn time_budget(&self) -> Option<std::time::Duration> {
        self.time_budget_secs.map(std::time::Duration::from_secs)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            extra_travel_time_mins: 150, // 2.5 hours
            max_sequences: None,
            time_budget_secs: None,
        }
    }
}
