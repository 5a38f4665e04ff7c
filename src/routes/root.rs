use axum::Json;
use serde_json::{Value, json};

pub async fn root_page() -> Json<Value> {
  Json(json!({
    "hello!": "development static file server",
    "here are our routes": {
      "/": "root page",
      "/static/<path>": "files from the configured static directory"
    }
  }))
}
