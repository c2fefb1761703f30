use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::diagnostics::{DiagnosticSink, TracingSink};
use crate::client::types::QueryParams;
use crate::config::ApiConfig;
use crate::error::{ApiError, Result};

/// HTTP client for the recipe/shop API.
///
/// Holds no mutable state; clones share the underlying connection pool and
/// diagnostic sink, and concurrent calls are independent of each other.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
    client: Client,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self::with_sink(config, Arc::new(TracingSink))
    }

    pub fn with_sink(config: ApiConfig, diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            config,
            client: Client::new(),
            diagnostics,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// `{base}{endpoint}` followed by a percent-encoded query string when
    /// `query` holds at least one pair.
    pub fn build_url(&self, endpoint: &str, query: Option<&QueryParams>) -> String {
        let mut url = format!("{}{}", self.config.base_url(), endpoint);

        if let Some(params) = query.filter(|p| !p.is_empty()) {
            let pairs: Vec<String> = params
                .iter()
                .map(|(key, value)| {
                    format!(
                        "{}={}",
                        urlencoding::encode(key),
                        urlencoding::encode(value)
                    )
                })
                .collect();
            url.push('?');
            url.push_str(&pairs.join("&"));
        }

        url
    }

    /// Issue a single GET and decode the JSON body into `T`.
    ///
    /// Failures are reported to the diagnostic sink once and then returned
    /// unchanged.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        query: Option<&QueryParams>,
    ) -> Result<T> {
        let url = self.build_url(endpoint, query);

        let result = self.fetch(&url).await;
        if let Err(e) = &result {
            self.diagnostics.request_failed(&url, e);
        }
        result
    }

    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!("Making GET request to: {}", url);

        let response = self
            .client
            .get(url)
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", url, status);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(ApiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let decoded = serde_json::from_str(&body)?;
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> ApiClient {
        ApiClient::new(ApiConfig::new("http://localhost:8080").unwrap())
    }

    #[test]
    fn build_url_without_query() {
        assert_eq!(
            client().build_url("/recipes/list", None),
            "http://localhost:8080/recipes/list"
        );
    }

    #[test]
    fn build_url_with_empty_query_has_no_question_mark() {
        let params = QueryParams::new();
        assert_eq!(
            client().build_url("/shops/find", Some(&params)),
            "http://localhost:8080/shops/find"
        );
    }

    #[test]
    fn build_url_percent_encodes_keys_and_values() {
        let mut params = QueryParams::new();
        params.insert("title".to_string(), "pea soup & bread".to_string());
        params.insert("max time".to_string(), "30".to_string());

        assert_eq!(
            client().build_url("/recipes/list", Some(&params)),
            "http://localhost:8080/recipes/list?max%20time=30&title=pea%20soup%20%26%20bread"
        );
    }
}
