use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::routes::AppState;

pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let mappls_token = match &state.token_cache {
        Some(cache) if cache.is_cached() => "cached",
        Some(_) => "pending",
        None => "disabled",
    };

    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "service": "yourroute",
        "version": env!("CARGO_PKG_VERSION"),
        "database": state.database_status.as_str(),
        "mapplsToken": mappls_token
    }))
}
