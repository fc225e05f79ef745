//! Amadeus Self-Service HTTP client.
//!
//! Provides async methods for the flight-offers and location-search
//! endpoints. Handles the OAuth2 client-credentials grant, caching the
//! bearer token until shortly before it expires.

use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::Iata;
use crate::planner::OfferProvider;

use super::error::AmadeusError;
use super::types::{FlightOffer, FlightOffersResponse, LocationsResponse, TokenResponse};

/// Default base URL (the Amadeus test environment).
const DEFAULT_BASE_URL: &str = "https://test.api.amadeus.com";

/// Default maximum number of offers requested per query.
const DEFAULT_MAX_OFFERS: u32 = 100;

/// Refresh the token this many seconds before it actually expires.
const TOKEN_EXPIRY_MARGIN_SECS: i64 = 60;

/// Configuration for the Amadeus client.
#[derive(Debug, Clone)]
pub struct AmadeusConfig {
    /// API key (client id) for the OAuth grant
    pub api_key: String,
    /// API secret for the OAuth grant
    pub api_secret: String,
    /// Base URL (defaults to the Amadeus test environment)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Maximum offers requested per flight-offers query
    pub max_offers: u32,
    /// Currency code for prices
    pub currency: String,
}

impl AmadeusConfig {
    /// Create a new config with the given credentials.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 30,
            max_offers: DEFAULT_MAX_OFFERS,
            currency: "USD".to_string(),
        }
    }

    /// Set a custom base URL (for testing or the production environment).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the maximum offers per query.
    pub fn with_max_offers(mut self, max: u32) -> Self {
        self.max_offers = max;
        self
    }

    /// Set the price currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}

#[derive(Debug, Clone)]
struct CachedToken {
    bearer: String,
    expires_at: DateTime<Utc>,
}

impl CachedToken {
    fn is_fresh(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Amadeus Self-Service API client.
///
/// Fetches and caches the OAuth2 bearer token lazily; concurrent callers
/// share one cached token behind an `RwLock`.
#[derive(Debug, Clone)]
pub struct AmadeusClient {
    http: reqwest::Client,
    config: AmadeusConfig,
    token: Arc<RwLock<Option<CachedToken>>>,
}

impl AmadeusClient {
    /// Create a new Amadeus client with the given configuration.
    pub fn new(config: AmadeusConfig) -> Result<Self, AmadeusError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            config,
            token: Arc::new(RwLock::new(None)),
        })
    }

    /// Get a valid bearer token, fetching a new one if needed.
    async fn access_token(&self) -> Result<String, AmadeusError> {
        if let Some(token) = self.token.read().await.as_ref()
            && token.is_fresh()
        {
            return Ok(token.bearer.clone());
        }

        let mut slot = self.token.write().await;
        // Another caller may have refreshed while we waited for the lock.
        if let Some(token) = slot.as_ref()
            && token.is_fresh()
        {
            return Ok(token.bearer.clone());
        }

        let url = format!("{}/v1/security/oauth2/token", self.config.base_url);
        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", &self.config.api_key),
                ("client_secret", &self.config.api_secret),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::Token(format!("status {status}: {body}")));
        }

        let grant: TokenResponse = response
            .json()
            .await
            .map_err(|e| AmadeusError::Token(e.to_string()))?;

        let cached = CachedToken {
            bearer: grant.access_token.clone(),
            expires_at: Utc::now()
                + Duration::seconds((grant.expires_in - TOKEN_EXPIRY_MARGIN_SECS).max(0)),
        };
        *slot = Some(cached);

        debug!(expires_in = grant.expires_in, "fetched Amadeus token");
        Ok(grant.access_token)
    }

    /// Search flight offers for a route and calendar date, returning the
    /// full response including the carriers dictionary.
    pub async fn search_offers_raw(
        &self,
        origin: Iata,
        destination: Iata,
        date: NaiveDate,
    ) -> Result<FlightOffersResponse, AmadeusError> {
        let bearer = self.access_token().await?;

        let url = format!("{}/v2/shopping/flight-offers", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(bearer)
            .query(&[
                ("originLocationCode", origin.as_str().to_string()),
                ("destinationLocationCode", destination.as_str().to_string()),
                ("departureDate", date.format("%Y-%m-%d").to_string()),
                ("adults", "1".to_string()),
                ("currencyCode", self.config.currency.clone()),
                ("max", self.config.max_offers.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AmadeusError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }

    /// Search airports and cities by keyword.
    pub async fn search_locations(&self, keyword: &str) -> Result<LocationsResponse, AmadeusError> {
        let bearer = self.access_token().await?;

        let url = format!("{}/v1/reference-data/locations", self.config.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(bearer)
            .query(&[("keyword", keyword), ("subType", "CITY,AIRPORT")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AmadeusError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(AmadeusError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AmadeusError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| AmadeusError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl OfferProvider for AmadeusClient {
    async fn search_offers(
        &self,
        origin: Iata,
        destination: Iata,
        date: NaiveDate,
    ) -> Result<Vec<FlightOffer>, AmadeusError> {
        let response = self.search_offers_raw(origin, destination, date).await?;
        Ok(response.data.unwrap_or_default())
    }
}
