//! Region buckets and candidate-sequence generation.
//!
//! A region bucket is a named, ordered set of airports for one world
//! region. The bucket order is the mandated traversal order; a candidate
//! sequence picks one airport per bucket. Sequences are generated lazily
//! as the Cartesian product across buckets, first bucket varying slowest.

use crate::domain::Iata;

/// A named, ordered set of airports for one region.
#[derive(Debug, Clone)]
pub struct RegionBucket {
    name: String,
    airports: Vec<Iata>,
}

impl RegionBucket {
    /// Create a bucket.
    pub fn new(name: impl Into<String>, airports: Vec<Iata>) -> Self {
        Self {
            name: name.into(),
            airports,
        }
    }

    /// Region name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Airports in this bucket, in configured order.
    pub fn airports(&self) -> &[Iata] {
        &self.airports
    }
}

/// The ordered bucket configuration for a search.
///
/// Read-only for the duration of a search; built once at startup.
#[derive(Debug, Clone)]
pub struct RegionBuckets {
    buckets: Vec<RegionBucket>,
}

impl RegionBuckets {
    /// Create a bucket configuration in traversal order.
    pub fn new(buckets: Vec<RegionBucket>) -> Self {
        Self { buckets }
    }

    /// The buckets in traversal order.
    pub fn buckets(&self) -> &[RegionBucket] {
        &self.buckets
    }

    /// Number of buckets (= sequence length).
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Every airport appearing in any bucket.
    pub fn all_airports(&self) -> impl Iterator<Item = &Iata> {
        self.buckets.iter().flat_map(|b| b.airports.iter())
    }

    /// Total number of candidate sequences (product of bucket sizes).
    pub fn cardinality(&self) -> usize {
        self.buckets.iter().map(|b| b.airports.len()).product()
    }

    /// Lazy iterator over all candidate sequences.
    ///
    /// Deterministic order: the first bucket varies slowest. The iterator
    /// is `Clone`, so enumeration is restartable, and nothing is
    /// materialized up front. Zero buckets yield a single empty sequence;
    /// any empty bucket yields no sequences at all.
    pub fn sequences(&self) -> Sequences<'_> {
        Sequences {
            buckets: &self.buckets,
            indices: vec![0; self.buckets.len()],
            exhausted: self.buckets.iter().any(|b| b.airports.is_empty()),
        }
    }

    /// The six built-in buckets, in traversal order.
    pub fn world_default() -> Self {
        fn bucket(name: &str, codes: &[&str]) -> RegionBucket {
            let airports = codes
                .iter()
                .map(|c| Iata::parse(c).expect("static bucket entry"))
                .collect();
            RegionBucket::new(name, airports)
        }

        Self::new(vec![
            bucket("South America", &["SCL"]),
            bucket("North America", &["MIA", "PTY", "LAX", "SFO", "SAN", "TIJ"]),
            bucket("Europe", &["MAD", "LIS", "BCN", "ORY", "CMN"]),
            bucket("Africa", &["CMN", "CAI"]),
            bucket("Asia", &["DOH", "DXB", "KUL"]),
            bucket("Australia", &["PER"]),
        ])
    }
}

/// Odometer-style iterator over the Cartesian product of buckets.
#[derive(Debug, Clone)]
pub struct Sequences<'a> {
    buckets: &'a [RegionBucket],
    indices: Vec<usize>,
    exhausted: bool,
}

impl Iterator for Sequences<'_> {
    type Item = Vec<Iata>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let sequence: Vec<Iata> = self
            .buckets
            .iter()
            .zip(&self.indices)
            .map(|(bucket, &idx)| bucket.airports[idx])
            .collect();

        // Advance the odometer; the last position ticks fastest so the
        // first bucket varies slowest.
        let mut pos = self.indices.len();
        loop {
            if pos == 0 {
                self.exhausted = true;
                break;
            }
            pos -= 1;
            self.indices[pos] += 1;
            if self.indices[pos] < self.buckets[pos].airports.len() {
                break;
            }
            self.indices[pos] = 0;
        }

        Some(sequence)
    }
}
