//! Shop search endpoint.

use crate::client::client::ApiClient;
use crate::client::types::{Page, PaginatedResponse, QueryParams, Shop};
use crate::error::Result;

pub const FIND_SHOPS_ENDPOINT: &str = "/shops/find";

/// Search area for [`ApiClient::find_shops`]. Defaults to a 20 unit radius
/// around Bolzano.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopSearch {
    pub distance: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Default for ShopSearch {
    fn default() -> Self {
        Self {
            distance: 20.0,
            latitude: 46.4983,
            longitude: 11.3548,
        }
    }
}

impl ShopSearch {
    pub fn query(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert("distance".to_string(), self.distance.to_string());
        params.insert("latitude".to_string(), self.latitude.to_string());
        params.insert("longitude".to_string(), self.longitude.to_string());
        params
    }
}

impl ApiClient {
    pub async fn find_shops(&self, search: &ShopSearch) -> Result<Page<Shop>> {
        let response: PaginatedResponse<Shop> =
            self.get(FIND_SHOPS_ENDPOINT, Some(&search.query())).await?;
        Ok(response.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_search_stringifies_like_plain_numbers() {
        let query = ShopSearch::default().query();
        assert_eq!(query["distance"], "20");
        assert_eq!(query["latitude"], "46.4983");
        assert_eq!(query["longitude"], "11.3548");
    }
}
