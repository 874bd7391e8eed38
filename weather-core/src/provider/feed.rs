use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::{debug, info};

use crate::{
    assemble::WeatherAssembler,
    document::Document,
    error::WeatherError,
    model::{WeatherRequest, WeatherSnapshot},
};

use super::WeatherProvider;

/// Fetches an XML weather feed over HTTP and assembles it into a snapshot.
#[derive(Debug, Clone)]
pub struct FeedProvider {
    endpoint: Url,
    query_param: String,
    assembler: WeatherAssembler,
    http: Client,
}

impl FeedProvider {
    pub fn new(endpoint: Url, query_param: impl Into<String>, assembler: WeatherAssembler) -> Self {
        Self { endpoint, query_param: query_param.into(), assembler, http: Client::new() }
    }

    /// Endpoint with `location` form-encoded into the query.
    pub fn request_url(&self, location: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair(&self.query_param, location);
        url
    }

    async fn fetch_document(&self, location: &str) -> Result<Document, WeatherError> {
        let url = self.request_url(location);
        debug!(%url, "requesting weather feed");

        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| WeatherError::Transport(format!("failed to send feed request: {e}")))?;

        let status = res.status();
        let body = res
            .text()
            .await
            .map_err(|e| WeatherError::Transport(format!("failed to read feed body: {e}")))?;

        if !status.is_success() {
            return Err(WeatherError::Transport(format!(
                "feed request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        Document::parse(&body)
    }
}

#[async_trait]
impl WeatherProvider for FeedProvider {
    async fn get_weather(&self, request: &WeatherRequest) -> Result<WeatherSnapshot, WeatherError> {
        info!(location = %request.location, "getting weather");

        let document = self.fetch_document(&request.location).await?;
        let snapshot = self.assembler.assemble(&document)?;

        info!(
            location = %request.location,
            days = snapshot.forecast_conditions().len(),
            "weather feed converted"
        );
        Ok(snapshot)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((end, _)) => format!("{}...", &body[..end]),
        None => body.to_string(),
    }
}
