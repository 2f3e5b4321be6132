//! HTTP transport: a thin wrapper around [`generate_worksheet_with`].
//!
//! | Route                          | Response |
//! |--------------------------------|----------|
//! | `GET /`                        | API banner |
//! | `GET /health`                  | `{"status": "healthy"}` |
//! | `GET /concepts`                | topic id → skill ids |
//! | `POST /api/generate-worksheet` | renderer payload, or 400 `{"detail": ...}` |

use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Map, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{info, instrument, warn, Level};

use crate::config::ServerConfig;
use crate::render::to_render_payload;
use crate::worksheet_engine::{generate_worksheet_with, Registry, WorksheetRequest};

// ---------------------------------------------------------------------------
// Shared state
// ---------------------------------------------------------------------------

/// Read-only state shared by every request.
pub struct AppState {
    pub registry: Registry,
    pub config: ServerConfig,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        AppState { registry: Registry::standard(), config }
    }
}

type ApiError = (StatusCode, Json<Value>);

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn root() -> Json<Value> {
    Json(json!({ "message": "Math Worksheet Generator API" }))
}

#[instrument(level = "info")]
async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}

async fn concepts(State(state): State<Arc<AppState>>) -> Json<Value> {
    let table: Map<String, Value> = state
        .registry
        .catalog()
        .into_iter()
        .map(|entry| (entry.id.as_str().to_string(), json!(entry.subcategories)))
        .collect();
    Json(Value::Object(table))
}

#[instrument(
    level = "info",
    skip(state, request),
    fields(
        worksheet_type = %request.worksheet_type,
        difficulty = %request.difficulty,
        concepts = request.concepts.len(),
    )
)]
async fn generate(
    State(state): State<Arc<AppState>>,
    Json(request): Json<WorksheetRequest>,
) -> Result<Json<Value>, ApiError> {
    let worksheet = generate_worksheet_with(&state.registry, &request, state.config.question_limits())
        .map_err(|e| {
            warn!(error = %e, "worksheet request rejected");
            (StatusCode::BAD_REQUEST, Json(json!({ "detail": e.to_string() })))
        })?;

    info!(problems = worksheet.problems.len(), "worksheet generated");
    Ok(Json(to_render_payload(&worksheet)))
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

fn cors(origins: &[String]) -> CorsLayer {
    let allow_origin = if origins.iter().any(|o| o == "*") {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|o| match HeaderValue::from_str(o) {
                Ok(v) => Some(v),
                Err(_) => {
                    warn!(origin = %o, "ignoring invalid CORS origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

/// Build the router with CORS and per-request tracing.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors(&state.config.allowed_origins);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/concepts", get(concepts))
        .route("/api/generate-worksheet", post(generate))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn app() -> Router {
        build_router(Arc::new(AppState::new(ServerConfig::default())))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_json(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/generate-worksheet")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_reports_healthy() {
        let response = app()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "status": "healthy" }));
    }

    #[tokio::test]
    async fn concepts_lists_every_topic() {
        let response = app()
            .oneshot(Request::builder().uri("/concepts").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let table = body_json(response).await;
        let table = table.as_object().unwrap();
        assert_eq!(table.len(), 14);
        assert!(table["addition"].as_array().unwrap().contains(&json!("add_zero")));
        assert!(table["odd_even"].as_array().unwrap().contains(&json!("problem_solving")));
    }

    #[tokio::test]
    async fn seeded_request_returns_payload() {
        let request = json!({
            "worksheet_type": "fluency",
            "difficulty": "beginner",
            "concepts": ["add_one"],
            "question_count": 6,
            "include_answer_key": true,
            "rng_seed": 42,
        });
        let first = body_json(app().oneshot(post_json(request.clone())).await.unwrap()).await;
        let second = body_json(app().oneshot(post_json(request)).await.unwrap()).await;

        assert_eq!(first["problem_count"], 6);
        assert_eq!(first["answer_key"].as_array().unwrap().len(), 6);
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn multi_concept_fluency_is_a_bad_request() {
        let response = app()
            .oneshot(post_json(json!({
                "worksheet_type": "fluency",
                "difficulty": "beginner",
                "concepts": ["add_one", "add_zero"],
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["detail"].as_str().unwrap().starts_with("Fluency worksheets can only target one concept"));
    }

    #[tokio::test]
    async fn unknown_difficulty_is_a_bad_request() {
        let response = app()
            .oneshot(post_json(json!({
                "worksheet_type": "spiral",
                "difficulty": "expert",
                "concepts": ["addition"],
            })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["detail"], "Invalid difficulty: expert");
    }
}
