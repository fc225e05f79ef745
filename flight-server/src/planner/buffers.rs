//! Connection-buffer table.
//!
//! Maps an airport to the minimum ground time required there before a
//! connecting departure is permissible. The table is built once at
//! startup and injected; it never changes during a search.

use std::collections::HashMap;

use chrono::Duration;

use crate::domain::Iata;

/// Error from buffer-table configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// An airport that can appear as an origin has no buffer entry.
    /// Missing entries are never silently defaulted.
    #[error("no minimum connection time configured for {0}")]
    MissingBuffer(Iata),
}

/// Minimum connection times per airport.
#[derive(Debug, Clone, Default)]
pub struct ConnectionBuffers {
    buffers: HashMap<Iata, Duration>,
}

impl ConnectionBuffers {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the buffer for an airport.
    ///
    /// Ground time cannot be negative; a negative `buffer` is clamped
    /// to zero.
    pub fn insert(&mut self, airport: Iata, buffer: Duration) {
        self.buffers.insert(airport, buffer.max(Duration::zero()));
    }

    /// The minimum ground time required at `airport`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingBuffer`] when the airport has no
    /// entry; this is a configuration error, not an absence of flights.
    pub fn minimum_connection(&self, airport: Iata) -> Result<Duration, ConfigError> {
        self.buffers
            .get(&airport)
            .copied()
            .ok_or(ConfigError::MissingBuffer(airport))
    }

    /// Check that every airport in `airports` has a buffer entry.
    ///
    /// Run at search setup over the start origin and every bucket member,
    /// so lookups during simulation cannot fail.
    pub fn validate_covers<'a>(
        &self,
        airports: impl IntoIterator<Item = &'a Iata>,
    ) -> Result<(), ConfigError> {
        for airport in airports {
            if !self.buffers.contains_key(airport) {
                return Err(ConfigError::MissingBuffer(*airport));
            }
        }
        Ok(())
    }

    /// Number of configured airports.
    pub fn len(&self) -> usize {
        self.buffers.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.buffers.is_empty()
    }

    /// The built-in buffer table, in minutes per airport.
    pub fn world_default() -> Self {
        let entries: &[(&str, i64)] = &[
            ("SAN", 120),
            ("TIJ", 120),
            ("BCN", 120),
            ("ORY", 120),
            ("KUL", 120),
            ("SCL", 30),
            ("PUQ", 90),
            ("PTY", 120),
            ("LIS", 120),
            ("SFO", 120),
            ("MIA", 120),
            ("JFK", 120),
            ("LAX", 120),
            ("YYZ", 168),
            ("DFW", 102),
            ("MAD", 120),
            ("LHR", 126),
            ("CDG", 108),
            ("FRA", 150),
            ("AMS", 120),
            ("CMN", 120),
            ("JNB", 162),
            ("LOS", 114),
            ("CAI", 120),
            ("ADD", 90),
            ("DOH", 90),
            ("DXB", 120),
            ("DEL", 96),
            ("SIN", 138),
            ("HND", 120),
            ("PER", 120),
            ("SYD", 168),
            ("MEL", 114),
            ("BNE", 150),
            ("ADL", 102),
        ];

        let mut table = Self::new();
        for (code, minutes) in entries {
            // Codes in the static table are valid by inspection.
            let airport = Iata::parse(code).expect("static buffer table entry");
            table.insert(airport, Duration::minutes(*minutes));
        }
        table
    }
}
