// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{
        header::{HeaderName, ACCEPT, AUTHORIZATION, CONTENT_TYPE},
        Method, StatusCode,
    },
    routing::get,
    Json, Router,
};
use building_store::{BuildingId, BuildingService, Building};
use chrono::Utc;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::normalize_path::NormalizePath;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::*;
use crate::config::REQUEST_TIMEOUT;
use crate::errors::ApiError;
use crate::telemetry;

/// The service owns its store; handlers only need a shared handle.
pub type SharedService = Arc<BuildingService>;

/// What the binary serves: the router behind trailing-slash normalization.
pub type App = NormalizePath<Router>;

/// Route table, logged at start-up.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/metrics"),
    ("GET", "/v1/api/health"),
    ("POST", "/v1/api/building"),
    ("PUT", "/v1/api/building"),
    ("PATCH", "/v1/api/building"),
    ("GET", "/v1/api/building"),
    ("GET", "/v1/api/building/:id"),
    ("DELETE", "/v1/api/building/:id"),
];

pub fn build_router(service: SharedService) -> Router {
    let api = Router::new()
        .route("/health", get(health))
        .route(
            "/building",
            get(list_buildings)
                .post(create_building)
                .put(update_building)
                .patch(update_building),
        )
        .route("/building/:id", get(get_building).delete(delete_building));

    let router = Router::new()
        .route("/", get(welcome))
        .route("/metrics", get(metrics_handler))
        .nest("/v1/api", api)
        .with_state(service);

    with_middleware(router)
}

/// Router plus trailing-slash stripping. Normalization has to run before
/// routing, so it wraps the router instead of being one of its layers.
pub fn build_app(service: SharedService) -> App {
    NormalizePath::trim_trailing_slash(build_router(service))
}

/// Shared middleware stack. The last layer added sees the request first.
pub fn with_middleware(router: Router) -> Router {
    router
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(CatchPanicLayer::new())
        .layer(CompressionLayer::new())
        .layer(cors_layer())
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

// Credentials cannot be combined with a wildcard origin, so the caller's origin is echoed.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            ACCEPT,
            AUTHORIZATION,
            CONTENT_TYPE,
            HeaderName::from_static("x-csrf-token"),
        ])
}

fn bind<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    payload.map(|Json(body)| body).map_err(ApiError::from)
}

// Counts the call under `op` and passes the result through.
fn finish<T>(op: &'static str, result: Result<T, ApiError>) -> Result<T, ApiError> {
    match &result {
        Ok(_) => telemetry::record_request(op, "ok"),
        Err(e) => {
            tracing::debug!("{} rejected: {}", op, e);
            telemetry::record_request(op, e.kind());
        }
    }
    result
}

async fn welcome() -> Json<ApiResponse<()>> {
    Json(ApiResponse::status("Welcome!"))
}

async fn health() -> Json<ApiResponse<()>> {
    Json(ApiResponse::status(format!(
        "Building API Service: {}",
        Utc::now().to_rfc3339()
    )))
}

async fn create_building(
    State(service): State<SharedService>,
    payload: Result<Json<CreateBuildingRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<BuildingId>>), ApiError> {
    let result = bind(payload).and_then(|candidate| Ok(service.create(candidate)?));
    let id = finish("create", result)?;
    telemetry::record_count(service.count());
    Ok((StatusCode::CREATED, Json(ApiResponse::success(id))))
}

async fn update_building(
    State(service): State<SharedService>,
    payload: Result<Json<UpdateBuildingRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    let result = bind(payload).and_then(|candidate| Ok(service.update(candidate)?));
    finish("update", result)?;
    Ok(Json(ApiResponse::status(STATUS_SUCCESS)))
}

async fn list_buildings(
    State(service): State<SharedService>,
) -> Result<Json<ApiResponse<BuildingList>>, ApiError> {
    let buildings = finish("get_all", service.get_all().map_err(ApiError::from))?;
    Ok(Json(ApiResponse::success(BuildingList {
        count: buildings.len(),
        buildings,
    })))
}

async fn get_building(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Building>>, ApiError> {
    let building = finish("get", service.get(&id).map_err(ApiError::from))?;
    Ok(Json(ApiResponse::success(building)))
}

async fn delete_building(
    State(service): State<SharedService>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    finish("delete", service.delete(&id).map_err(ApiError::from))?;
    telemetry::record_count(service.count());
    Ok(Json(ApiResponse::status(STATUS_SUCCESS)))
}

async fn metrics_handler() -> String {
    telemetry::get_metrics()
}
