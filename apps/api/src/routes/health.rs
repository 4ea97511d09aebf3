use axum::{response::Html, Json};
use serde_json::{json, Value};

/// GET /api/v1/health
/// Returns service status and the endpoint map.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "skillgap-api",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "analyze_resume": "/api/v1/analyze_resume",
            "search_and_analyze": "/api/v1/search_and_analyze"
        }
    }))
}

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(
        r#"<html>
    <body>
        <h1>Skill Gap API</h1>
        <p>API is operational.</p>
        <p><a href="/api/v1/health">Health Check</a></p>
    </body>
</html>"#,
    )
}
