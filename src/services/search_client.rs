//! Search Client for Weekend Traveller.
//!
//! Talks to the itinerary backend over HTTP. Every failure, whatever its
//! cause, comes back as a [`SearchError`]; there is no retry and no
//! client-side timeout.

use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::types::errors::SearchError;
use crate::types::landing::{BackgroundVideo, Recommendation, RecommendationResponse, VideoEntry};
use crate::types::trip::{SearchRequest, TripPlan};

/// Backend operation the session depends on.
#[async_trait]
pub trait TripSearch {
    async fn search(&self, query: &str, origin: &str, days: u32) -> Result<TripPlan, SearchError>;
}

/// Optional landing page feeds.
#[async_trait]
pub trait LandingApi {
    async fn recommendations(&self, lat: f64, lng: f64) -> Result<Vec<Recommendation>, SearchError>;
    async fn background_videos(&self) -> Result<Vec<BackgroundVideo>, SearchError>;
}

/// HTTP client for the itinerary backend.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: Client,
    base_url: String,
}

impl SearchClient {
    /// Creates a client for `base_url` (e.g. `https://host/api`).
    pub fn new(base_url: &str) -> Result<Self, SearchError> {
        let http = Client::builder().build()?;
        Self::with_client(http, base_url)
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: &str) -> Result<Self, SearchError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        Url::parse(trimmed).map_err(|e| SearchError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            http,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Fails on non-2xx, then decodes the body as `T`.
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, SearchError> {
        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::Status {
                status: status.as_u16(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| SearchError::Decode(e.to_string()))
    }
}

#[async_trait]
impl TripSearch for SearchClient {
    async fn search(&self, query: &str, origin: &str, days: u32) -> Result<TripPlan, SearchError> {
        let request = SearchRequest {
            query: query.to_string(),
            origin: origin.to_string(),
            days,
        };
        info!("searching itinerary: query={:?} origin={:?} days={}", query, origin, days);

        let response = self.http.post(self.endpoint("search")).json(&request).send().await?;
        let result = Self::decode::<TripPlan>(response).await;
        match &result {
            Ok(plan) => debug!("search returned plan for {}", plan.destination),
            Err(e) => warn!("search failed: {}", e),
        }
        result
    }
}

#[async_trait]
impl LandingApi for SearchClient {
    async fn recommendations(&self, lat: f64, lng: f64) -> Result<Vec<Recommendation>, SearchError> {
        let response = self
            .http
            .get(self.endpoint("recommendations"))
            .query(&[("lat", lat), ("lng", lng)])
            .send()
            .await?;
        let body: RecommendationResponse = Self::decode(response).await?;
        debug!("received {} recommendations", body.destinations.len());
        Ok(body.destinations)
    }

    async fn background_videos(&self) -> Result<Vec<BackgroundVideo>, SearchError> {
        let response = self.http.get(self.endpoint("background-videos")).send().await?;
        let entries: Vec<VideoEntry> = Self::decode(response).await?;
        Ok(entries.into_iter().map(BackgroundVideo::from).collect())
    }
}
