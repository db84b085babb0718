//! HTTP server exposing the advisor.
//!
//! Routes:
//! - `GET  /health`
//! - `POST /get_advice` (context object or `{"prompt": ...}`)
//! - `GET  /api/crops`, `/api/concerns`, `/api/climates`, `/api/soils`
//! - `GET  /api/crops/{name}` (crop profile)

use crate::assistant::{topic_name, AgriAssistant};
use crate::error::{AgriError, Result};
use crate::knowledge::{
    crop_profile, CropProfile, CLIMATE_OPTIONS, CONCERN_OPTIONS, CROP_OPTIONS, SOIL_OPTIONS,
};
use crate::models::{AdviceRequest, FarmingContext};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Shared server state
pub struct AppState {
    pub assistant: AgriAssistant,
}

/// Advice request body.
///
/// A non-empty `prompt` selects the conversational path; otherwise the
/// context fields are used.
#[derive(Debug, Deserialize)]
pub struct AdviceBody {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(flatten)]
    pub context: FarmingContext,
}

impl AdviceBody {
    fn into_request(self) -> Result<AdviceRequest> {
        if let Some(prompt) = self.prompt.filter(|p| !p.trim().is_empty()) {
            return Ok(AdviceRequest::Prompt(prompt));
        }

        let ctx = self.context;
        let all_empty = [&ctx.crop, &ctx.location, &ctx.climate, &ctx.soil_type, &ctx.main_concern]
            .iter()
            .all(|f| f.trim().is_empty());
        if all_empty {
            return Err(AgriError::Validation(
                "Provide a prompt or at least one farming context field".to_string(),
            ));
        }

        Ok(AdviceRequest::Context(ctx))
    }
}

/// Successful advice response
#[derive(Debug, Serialize, Deserialize)]
pub struct AdviceResponse {
    pub success: bool,
    pub advice: String,
    pub topic: String,
}

/// Error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            success: false,
            error: message.into(),
        }),
    )
        .into_response()
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/get_advice", post(advice_handler))
        .route("/api/crops", get(crops_handler))
        .route("/api/crops/{name}", get(crop_profile_handler))
        .route("/api/concerns", get(concerns_handler))
        .route("/api/climates", get(climates_handler))
        .route("/api/soils", get(soils_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process exits
pub async fn serve(host: &str, port: u16, assistant: AgriAssistant) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| AgriError::Config(format!("Invalid host:port '{}:{}': {}", host, port, e)))?;

    info!(%addr, mode = assistant.mode(), "Starting HTTP server");

    let app = router(Arc::new(AppState { assistant }));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Health check endpoint
async fn health_handler() -> &'static str {
    "OK"
}

/// Advice endpoint handler
async fn advice_handler(
    State(state): State<Arc<AppState>>,
    body: std::result::Result<Json<AdviceBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(body) => body,
        Err(rejection) => {
            // client faults all map to 400, whatever axum's own status
            warn!(status = %rejection.status(), error = %rejection.body_text(), "Rejected advice request");
            return error_response(StatusCode::BAD_REQUEST, rejection.body_text());
        }
    };

    let request = match body.into_request() {
        Ok(request) => request,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e.to_string()),
    };

    let topic = topic_name(&request).to_string();
    info!(kind = request.kind(), topic = %topic, "Advice request");

    let advice = state.assistant.respond(request).await;

    Json(AdviceResponse {
        success: true,
        advice,
        topic,
    })
    .into_response()
}

async fn crops_handler() -> Json<&'static [&'static str]> {
    Json(CROP_OPTIONS)
}

async fn concerns_handler() -> Json<&'static [&'static str]> {
    Json(CONCERN_OPTIONS)
}

async fn climates_handler() -> Json<&'static [&'static str]> {
    Json(CLIMATE_OPTIONS)
}

async fn soils_handler() -> Json<&'static [&'static str]> {
    Json(SOIL_OPTIONS)
}

async fn crop_profile_handler(Path(name): Path<String>) -> Response {
    match crop_profile(&name) {
        Some(profile) => Json::<&CropProfile>(profile).into_response(),
        None => error_response(StatusCode::NOT_FOUND, format!("No profile for crop '{}'", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(AppState {
            assistant: AgriAssistant::local(),
        }))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/get_advice")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        response.into_body().collect().await.unwrap().to_bytes().to_vec()
    }

    #[tokio::test]
    async fn health() {
        let req = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"OK");
    }

    #[tokio::test]
    async fn structured_advice() {
        let req = post_json(
            r#"{"crop": "Corn", "location": "Mindanao", "climate": "Dry season",
                "soil_type": "Sandy loam", "main_concern": "Pest Control"}"#,
        );
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: AdviceResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(json.success);
        assert_eq!(json.topic, "pest_disease");
        assert!(json.advice.contains("Fall Armyworm"));
        assert!(json.advice.contains("Mindanao"));
    }

    #[tokio::test]
    async fn prompt_advice() {
        let req = post_json(r#"{"prompt": "How do I grow rice?"}"#);
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: AdviceResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json.topic, "rice");
        assert!(json.advice.contains("PALAY"));
    }

    #[tokio::test]
    async fn partial_context_defaults_missing_fields() {
        let req = post_json(r#"{"crop": "Banana", "main_concern": "Soil Health"}"#);
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: AdviceResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json.topic, "soil_health");
        assert!(json.advice.contains("BANANA SOIL NUTRITION"));
    }

    #[tokio::test]
    async fn empty_request_is_rejected() {
        let response = app().oneshot(post_json("{}")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!json.success);
        assert!(json.error.contains("prompt"));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected() {
        let response = app().oneshot(post_json("{not json")).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!json.success);
    }

    #[tokio::test]
    async fn mistyped_field_is_rejected() {
        let response = app().oneshot(post_json(r#"{"crop": 5}"#)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_is_rejected() {
        let req = Request::builder()
            .method("POST")
            .uri("/get_advice")
            .body(Body::from(r#"{"crop": "Rice"}"#))
            .unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json: ErrorResponse = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert!(!json.success);
    }

    #[tokio::test]
    async fn static_lists() {
        let req = Request::builder().uri("/api/concerns").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let concerns: Vec<String> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(concerns.len(), CONCERN_OPTIONS.len());
        assert!(concerns.contains(&"Water Management".to_string()));

        let req = Request::builder().uri("/api/crops").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        let crops: Vec<String> = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(crops.first().map(String::as_str), Some("Rice"));
    }

    #[tokio::test]
    async fn crop_profile_lookup() {
        let req = Request::builder().uri("/api/crops/corn").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(json["local_name"], "Mais");

        let req = Request::builder().uri("/api/crops/cacao").body(Body::empty()).unwrap();
        let response = app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
