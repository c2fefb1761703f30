//! Client configuration.
//!
//! The base address is resolved once, when the application starts, and handed
//! to [`ApiClient::new`](crate::ApiClient::new). A missing or malformed value
//! fails right here instead of on the first request.

use std::env;
use std::fmt;
use std::str::FromStr;

use reqwest::Url;

use crate::error::{ApiError, Result};

/// Environment variable holding the API base address.
pub const API_URL_ENV: &str = "API_URL";

/// Environment variable selecting the single-recipe route (`direct` or `get`).
pub const RECIPE_LOOKUP_ENV: &str = "API_RECIPE_LOOKUP";

/// Route used to fetch a single recipe.
///
/// Deployments of the recipe service disagree on this path, so it is chosen by
/// configuration rather than hard-coded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecipeLookup {
    /// `/recipes/{id}`
    #[default]
    Direct,
    /// `/recipes/get/{id}`
    Get,
}

impl RecipeLookup {
    /// Endpoint path for the given (already encoded) identifier.
    pub fn path(&self, encoded_id: &str) -> String {
        match self {
            RecipeLookup::Direct => format!("/recipes/{}", encoded_id),
            RecipeLookup::Get => format!("/recipes/get/{}", encoded_id),
        }
    }
}

impl FromStr for RecipeLookup {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(RecipeLookup::Direct),
            "get" => Ok(RecipeLookup::Get),
            other => Err(ApiError::Configuration(format!(
                "{} must be 'direct' or 'get', got '{}'",
                RECIPE_LOOKUP_ENV, other
            ))),
        }
    }
}

impl fmt::Display for RecipeLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeLookup::Direct => f.write_str("direct"),
            RecipeLookup::Get => f.write_str("get"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    recipe_lookup: RecipeLookup,
}

impl ApiConfig {
    /// Validate a base address. Trailing slashes are dropped so endpoint paths
    /// can always start with `/`.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        if trimmed.is_empty() {
            return Err(ApiError::Configuration(
                "base URL is empty".to_string(),
            ));
        }

        let parsed = Url::parse(trimmed).map_err(|e| {
            ApiError::Configuration(format!("invalid base URL '{}': {}", trimmed, e))
        })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::Configuration(format!(
                "base URL '{}' must use http or https",
                trimmed
            )));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
            recipe_lookup: RecipeLookup::default(),
        })
    }

    /// Build the configuration from `API_URL` and, optionally, `API_RECIPE_LOOKUP`.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var(API_URL_ENV).map_err(|_| {
            ApiError::Configuration(format!(
                "{} is not defined. Please check your environment.",
                API_URL_ENV
            ))
        })?;

        let mut config = Self::new(base_url)?;

        if let Ok(lookup) = env::var(RECIPE_LOOKUP_ENV) {
            config.recipe_lookup = lookup.parse()?;
        }

        tracing::debug!(
            "Loaded API configuration: base_url={}, recipe_lookup={}",
            config.base_url,
            config.recipe_lookup
        );

        Ok(config)
    }

    pub fn with_recipe_lookup(mut self, lookup: RecipeLookup) -> Self {
        self.recipe_lookup = lookup;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn recipe_lookup(&self) -> RecipeLookup {
        self.recipe_lookup
    }
}
