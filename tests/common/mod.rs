#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use mockito::ServerGuard;
use recipe_shop_client::{ApiClient, ApiConfig, ApiError, DiagnosticSink};

/// Records every failure reported by the request helper.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<(String, Option<u16>)>>,
}

impl RecordingSink {
    pub fn reports(&self) -> Vec<(String, Option<u16>)> {
        self.reports.lock().unwrap().clone()
    }
}

impl DiagnosticSink for RecordingSink {
    fn request_failed(&self, url: &str, error: &ApiError) {
        self.reports
            .lock()
            .unwrap()
            .push((url.to_string(), error.status()));
    }
}

pub struct TestEnvironment {
    pub server: ServerGuard,
    pub sink: Arc<RecordingSink>,
    pub client: ApiClient,
}

impl TestEnvironment {
    pub async fn new() -> anyhow::Result<Self> {
        let server = mockito::Server::new_async().await;
        let config = ApiConfig::new(server.url())?;
        Ok(Self::with_config(server, config))
    }

    pub fn with_config(server: ServerGuard, config: ApiConfig) -> Self {
        let sink = Arc::new(RecordingSink::default());
        let client = ApiClient::with_sink(config, sink.clone());
        Self {
            server,
            sink,
            client,
        }
    }
}

pub fn recipe_json(id: i64, title: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "title": title,
        "tags": "vegetarian;winter",
        "introText": "A warming bowl for cold evenings.",
        "time": "45 min",
        "ingredients": "2 leeks, 3 potatoes, 1l broth",
        "people": 4,
        "preparation": "Chop, simmer, blend.",
        "imgUrl": "https://cdn.example.com/recipes/1.jpg"
    })
}

pub fn envelope(content: Vec<serde_json::Value>, total_pages: u64, total_elements: u64) -> String {
    serde_json::json!({
        "content": content,
        "totalPages": total_pages,
        "totalElements": total_elements
    })
    .to_string()
}
