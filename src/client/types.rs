//! Type definitions for the recipe/shop API.
//!
//! ## Key Types
//!
//! - [`Recipe`] - A single recipe as served by the recipe endpoints
//! - [`Shop`] - A shop record, kept as an opaque JSON object
//! - [`PaginatedResponse`] - The wire envelope returned by list endpoints
//! - [`Page`] - What list accessors hand back to callers
//! - [`PageRequest`] - Zero-indexed page number and page size
//!
//! ## Wire Format
//!
//! The service speaks camelCase JSON (`introText`, `imgUrl`, `totalPages`, ...).
//! Every [`Recipe`] field is required; a payload missing one fails to decode.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Flat string-valued query parameters. Key order on the wire is not significant.
pub type QueryParams = BTreeMap<String, String>;

/// A recipe as returned by `/recipes/list` and the single-recipe route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique recipe identifier
    pub id: i64,
    pub title: String,
    /// Delimited tag string, passed through as served
    pub tags: String,
    pub intro_text: String,
    /// Free-form preparation time, e.g. "30 min"
    pub time: String,
    pub ingredients: String,
    /// Number of people the recipe serves
    pub people: i32,
    pub preparation: String,
    pub img_url: String,
}

/// A shop returned by `/shops/find`.
///
/// The service owns this schema; the client keeps the object as-is.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Shop(Map<String, Value>);

impl Shop {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl From<Map<String, Value>> for Shop {
    fn from(fields: Map<String, Value>) -> Self {
        Shop(fields)
    }
}

/// Standard API response wrapper for list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    /// Items for the current page
    pub content: Vec<T>,
    /// Total number of pages
    pub total_pages: u64,
    /// Total number of items across all pages
    pub total_elements: u64,
}

/// One page of results plus the totals reported by the service.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u64,
    pub total_elements: u64,
}

impl<T> From<PaginatedResponse<T>> for Page<T> {
    fn from(response: PaginatedResponse<T>) -> Self {
        Page {
            items: response.content,
            total_pages: response.total_pages,
            total_elements: response.total_elements,
        }
    }
}

/// Pagination input for list accessors. `page` is zero-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self { page: 0, size: 10 }
    }
}
