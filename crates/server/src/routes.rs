use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;
use service::DynVetSpecialtyService;

use crate::openapi::ApiDoc;

pub mod vet_specialties;

/// Handler state; the service collaborator is injected at construction.
#[derive(Clone)]
pub struct ServerState {
    pub vet_specialties: Arc<DynVetSpecialtyService>,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router
pub fn build_router(cors: CorsLayer, state: ServerState) -> Router {
    let public = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json));

    let vet_specialty_routes = Router::new()
        .route(
            "/vet-specialties",
            post(vet_specialties::create).put(vet_specialties::update),
        )
        .route(
            "/vet-specialties/:vet_id/:specialty_id",
            get(vet_specialties::find_by_id).delete(vet_specialties::delete),
        )
        .route("/vet-specialties/vet/:vet_id", get(vet_specialties::find_by_vet_id))
        .route(
            "/vet-specialties/specialty/:specialty_id",
            get(vet_specialties::find_by_specialty_id),
        );

    public
        .merge(vet_specialty_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 失败（5xx 等）时以 ERROR 记录
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
