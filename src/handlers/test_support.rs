use axum::{body::Body, http::Request, http::StatusCode, Router};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use crate::config::Config;
use crate::models::Item;
use crate::persist;
use crate::routes;
use crate::state::AppState;
use crate::store::ItemStore;

pub struct TestApp {
    pub router: Router,
    pub store_path: PathBuf,
    _dir: TempDir,
}

impl TestApp {
    /// Router over a fresh store file seeded with `initial`.
    pub fn new(initial: JsonValue) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let store_path = dir.path().join("items.json");
        std::fs::write(&store_path, serde_json::to_vec_pretty(&initial).unwrap()).unwrap();

        let config = Config {
            store_path: store_path.clone(),
            service_port: 3000,
            service_host: "0.0.0.0".to_string(),
        };

        let store = ItemStore::open(&store_path).expect("Failed to open item store");

        let state = AppState {
            store,
            config: Arc::new(config),
        };

        Self {
            router: routes::app(state),
            store_path,
            _dir: dir,
        }
    }

    pub async fn send(&self, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_string(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    pub async fn send_json<T: DeserializeOwned>(
        &self,
        method: &str,
        uri: &str,
        body: Option<JsonValue>,
    ) -> (StatusCode, T) {
        let (status, bytes) = self.send(method, uri, body).await;
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    /// GET /api/items as raw JSON.
    pub async fn list(&self) -> JsonValue {
        let (status, body) = self.send_json("GET", routes::ITEMS, None).await;
        assert_eq!(status, StatusCode::OK);
        body
    }

    pub fn on_disk(&self) -> Vec<Item> {
        persist::load(&self.store_path).unwrap()
    }

    pub fn raw_file(&self) -> Vec<u8> {
        std::fs::read(&self.store_path).unwrap()
    }
}
