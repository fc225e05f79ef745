//! Application state for the web layer.

use std::sync::Arc;

use crate::amadeus::AmadeusClient;
use crate::notify::Mailer;
use crate::planner::{ConnectionBuffers, RegionBuckets, SearchConfig};

/// Shared application state.
///
/// Contains all the services needed to handle requests. The planner
/// configuration is built once at startup and never mutated.
#[derive(Clone)]
pub struct AppState {
    /// Amadeus API client
    pub amadeus: Arc<AmadeusClient>,

    /// Region buckets defining the candidate-sequence space
    pub buckets: Arc<RegionBuckets>,

    /// Minimum connection times per airport
    pub buffers: Arc<ConnectionBuffers>,

    /// Itinerary search configuration
    pub config: Arc<SearchConfig>,

    /// Outbound mailer, when SMTP is configured
    pub mailer: Option<Arc<Mailer>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        amadeus: AmadeusClient,
        buckets: RegionBuckets,
        buffers: ConnectionBuffers,
        config: SearchConfig,
        mailer: Option<Mailer>,
    ) -> Self {
        Self {
            amadeus: Arc::new(amadeus),
            buckets: Arc::new(buckets),
            buffers: Arc::new(buffers),
            config: Arc::new(config),
            mailer: mailer.map(Arc::new),
        }
    }
}
