//! Integration tests for the health endpoint.

mod common;

use std::sync::Arc;

use axum::http::StatusCode;
use common::{body_text, get};
use rolodex_db::repositories::MemoryContactRepo;

#[tokio::test]
async fn test_health_reports_ok_with_reachable_storage() {
    let app = common::build_test_app(Arc::new(MemoryContactRepo::new()));
    let response = get(app, "/health").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["storage_healthy"], true);
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
}
