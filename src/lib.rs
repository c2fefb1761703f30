//! # Recipe/Shop API Client
//!
//! Typed async access to the recipe/shop HTTP service used by the browsing
//! front-end. Each call is one GET round trip: build the URL, check the status,
//! decode the JSON into a typed record.
//!
//! ## Configuration
//!
//! The base address comes from [`ApiConfig`], normally built once at startup
//! with [`ApiConfig::from_env`]. A missing `API_URL` is reported there, before
//! any client exists.
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_shop_client::{ApiClient, ApiConfig, ShopSearch};
//!
//! # async fn example() -> recipe_shop_client::Result<()> {
//! let client = ApiClient::new(ApiConfig::from_env()?);
//!
//! let recipe = client.get_recipe("42").await?;
//! let shops = client.find_shops(&ShopSearch::default()).await?;
//! println!("{} is sold in {} shops nearby", recipe.title, shops.total_elements);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{
    recipe_list_query, ApiClient, DiagnosticSink, Page, PageRequest, PaginatedResponse,
    QueryParams, Recipe, Shop, ShopSearch, TracingSink,
};
pub use config::{ApiConfig, RecipeLookup};
pub use error::{ApiError, Result};
