//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{error, warn};

use crate::amadeus::AmadeusError;
use crate::domain::Iata;
use crate::notify::{email_body, email_subject};
use crate::planner::{Planner, SearchError, SearchRequest, Strategy};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/flights", get(flights))
        .route("/airports", get(airports))
        .route("/search", post(search))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List processed flight offers for one route and date.
async fn flights(
    State(state): State<AppState>,
    Query(query): Query<FlightsQuery>,
) -> Result<Json<FlightsResponse>, AppError> {
    let (Some(origin), Some(destination), Some(departure_date)) =
        (query.origin, query.destination, query.departure_date)
    else {
        return Err(AppError::BadRequest {
            message: "Please provide origin, destination, and departure_date.".to_string(),
        });
    };

    let origin = Iata::parse_normalized(&origin).map_err(|_| AppError::BadRequest {
        message: format!("Invalid origin IATA code: {origin}"),
    })?;
    let destination = Iata::parse_normalized(&destination).map_err(|_| AppError::BadRequest {
        message: format!("Invalid destination IATA code: {destination}"),
    })?;
    let date =
        NaiveDate::parse_from_str(&departure_date, "%Y-%m-%d").map_err(|_| AppError::BadRequest {
            message: format!("Invalid departure_date (expected YYYY-MM-DD): {departure_date}"),
        })?;

    let response = state
        .amadeus
        .search_offers_raw(origin, destination, date)
        .await?;

    let offers = response.data.unwrap_or_default();
    if offers.is_empty() {
        return Err(AppError::NotFound {
            message: "No flights found.".to_string(),
        });
    }

    let carriers = response
        .dictionaries
        .and_then(|d| d.carriers)
        .unwrap_or_default();
    let data = offers
        .iter()
        .map(|offer| OfferResult::from_offer(offer, &carriers))
        .collect();

    Ok(Json(FlightsResponse { data }))
}

/// Search airports and cities by keyword.
async fn airports(
    State(state): State<AppState>,
    Query(query): Query<AirportsQuery>,
) -> Result<Json<AirportsResponse>, AppError> {
    let Some(keyword) = query.keyword.filter(|k| !k.trim().is_empty()) else {
        return Err(AppError::BadRequest {
            message: "Please provide a keyword.".to_string(),
        });
    };

    let response = state.amadeus.search_locations(&keyword).await?;

    let locations = response.data.unwrap_or_default();
    if locations.is_empty() {
        return Err(AppError::NotFound {
            message: "No airports found.".to_string(),
        });
    }

    let data = locations.iter().map(LocationResult::from_location).collect();
    Ok(Json(AirportsResponse { data }))
}

/// Run the multi-leg itinerary search.
async fn search(
    State(state): State<AppState>,
    Json(req): Json<PlanSearchRequest>,
) -> Result<Json<PlanSearchResponse>, AppError> {
    let origin = Iata::parse_normalized(&req.origin).map_err(|_| AppError::BadRequest {
        message: format!("Invalid origin IATA code: {}", req.origin),
    })?;
    let date = NaiveDate::parse_from_str(&req.departure_date, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest {
            message: format!(
                "Invalid departure_date (expected YYYY-MM-DD): {}",
                req.departure_date
            ),
        }
    })?;
    let time = NaiveTime::parse_from_str(&req.departure_time, "%H:%M").map_err(|_| {
        AppError::BadRequest {
            message: format!(
                "Invalid departure_time (expected HH:MM): {}",
                req.departure_time
            ),
        }
    })?;
    let strategy: Strategy = req.strategy.parse().map_err(|_| AppError::BadRequest {
        message: format!("Invalid strategy (expected \"direct\" or \"stops\"): {}", req.strategy),
    })?;

    let start = NaiveDateTime::new(date, time).and_utc();
    let request = SearchRequest {
        origin,
        start,
        strategy,
    };

    let planner = Planner::new(
        state.amadeus.as_ref(),
        &state.buckets,
        &state.buffers,
        &state.config,
    );
    let result = planner.search(&request).await?;

    if let Some(recipient) = req.notify.as_deref() {
        match (&state.mailer, result.best.as_ref()) {
            (Some(mailer), Some(best)) => {
                let subject = email_subject(origin, best);
                let body = email_body(origin, best);
                // Best effort: a delivery failure never fails the search.
                if let Err(e) = mailer.send(recipient, &subject, body).await {
                    warn!(recipient, error = %e, "failed to send itinerary email");
                }
            }
            (None, _) => {
                warn!(recipient, "notification requested but SMTP is not configured");
            }
            (_, None) => {}
        }
    }

    Ok(Json(PlanSearchResponse::from_result(&result)))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<AmadeusError> for AppError {
    fn from(e: AmadeusError) -> Self {
        AppError::Internal {
            message: e.to_string(),
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Config(e) => AppError::Internal {
                message: format!("configuration error: {e}"),
            },
            SearchError::Itinerary(e) => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status == StatusCode::INTERNAL_SERVER_ERROR {
            error!(%status, message, "request failed");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
