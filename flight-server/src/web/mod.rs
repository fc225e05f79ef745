//! Web layer for the flight itinerary search.
//!
//! Provides HTTP endpoints for browsing offers, looking up airports and
//! running the multi-leg itinerary search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
