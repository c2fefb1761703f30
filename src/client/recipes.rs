//! Recipe endpoints.

use crate::client::client::ApiClient;
use crate::client::types::{Page, PageRequest, PaginatedResponse, QueryParams, Recipe};
use crate::error::Result;

pub const LIST_RECIPES_ENDPOINT: &str = "/recipes/list";

/// Query sent by [`ApiClient::list_recipes`]: the filters verbatim, then
/// `page` and `size`. A filter named `page` or `size` is overridden.
pub fn recipe_list_query(filters: Option<&QueryParams>, pagination: PageRequest) -> QueryParams {
    let mut params = filters.cloned().unwrap_or_default();
    params.insert("page".to_string(), pagination.page.to_string());
    params.insert("size".to_string(), pagination.size.to_string());
    params
}

impl ApiClient {
    /// Fetch one page of recipes. Filter keys (e.g. `title`, `maxTime`) are
    /// forwarded without validation.
    pub async fn list_recipes(
        &self,
        filters: Option<&QueryParams>,
        pagination: PageRequest,
    ) -> Result<Page<Recipe>> {
        let query = recipe_list_query(filters, pagination);
        let response: PaginatedResponse<Recipe> =
            self.get(LIST_RECIPES_ENDPOINT, Some(&query)).await?;

        tracing::debug!(
            "Retrieved {} recipes (page {} of {})",
            response.content.len(),
            pagination.page,
            response.total_pages
        );
        Ok(response.into())
    }

    /// Fetch a single recipe. The identifier is treated as opaque text and
    /// percent-encoded into the configured route.
    pub async fn get_recipe(&self, id: &str) -> Result<Recipe> {
        let endpoint = self
            .config()
            .recipe_lookup()
            .path(&urlencoding::encode(id));
        self.get(&endpoint, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let query = recipe_list_query(None, PageRequest::default());
        assert_eq!(query.len(), 2);
        assert_eq!(query["page"], "0");
        assert_eq!(query["size"], "10");
    }

    #[test]
    fn pagination_overrides_same_named_filters() {
        let mut filters = QueryParams::new();
        filters.insert("page".to_string(), "99".to_string());
        filters.insert("maxTime".to_string(), "20".to_string());

        let query = recipe_list_query(Some(&filters), PageRequest::new(2, 25));
        assert_eq!(query.len(), 3);
        assert_eq!(query["page"], "2");
        assert_eq!(query["size"], "25");
        assert_eq!(query["maxTime"], "20");
    }
}
