//! # Recipe/Shop HTTP Client
//!
//! This module provides the HTTP client for the recipe/shop API: a single GET
//! request helper and the typed accessors built on top of it.
//!
//! ## Modules
//!
//! - [`client`] - [`ApiClient`] and the generic request helper
//! - [`diagnostics`] - Injectable failure reporting
//! - [`recipes`] - Recipe listing and lookup
//! - [`shops`] - Nearby shop search
//! - [`types`] - Record and pagination types
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_shop_client::{ApiClient, ApiConfig, PageRequest, QueryParams};
//!
//! # async fn example() -> recipe_shop_client::Result<()> {
//! let client = ApiClient::new(ApiConfig::new("http://localhost:8080")?);
//!
//! let mut filters = QueryParams::new();
//! filters.insert("title".to_string(), "soup".to_string());
//!
//! let page = client.list_recipes(Some(&filters), PageRequest::new(1, 5)).await?;
//! println!("Found {} recipes", page.total_elements);
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod diagnostics;
pub mod recipes;
pub mod shops;
pub mod types;

pub use client::ApiClient;
pub use diagnostics::{DiagnosticSink, TracingSink};
pub use recipes::recipe_list_query;
pub use shops::ShopSearch;
pub use types::*;
