//! # API REST
//!
//! REST API implementation for PMS.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, status-code mapping)
//!
//! All record logic lives in `pms-core`; this crate only translates between
//! HTTP and the store/engine contracts.

#![warn(rust_2018_idioms)]

pub mod error;

use axum::{
    extract::{Path as AxumPath, Query, State},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use pms_core::{PatientRecord, QueryEngine, RecordStore, SortField, SortOrder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state shared across REST API handlers.
#[derive(Clone)]
pub struct AppState {
    store: RecordStore,
    engine: QueryEngine,
}

impl AppState {
    pub fn new(store: RecordStore) -> Self {
        let engine = QueryEngine::new(store.clone());
        Self { store, engine }
    }
}

/// Informational message response.
#[derive(Serialize, ToSchema)]
pub struct MessageRes {
    pub message: String,
}

/// Liveness response for monitoring and load balancer health checks.
#[derive(Serialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// One patient record on the wire.
#[derive(Serialize, ToSchema)]
pub struct PatientRes {
    /// Record identifier, e.g. "P001"
    pub id: String,
    pub name: String,
    /// Height in metres
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Body mass index derived from height and weight
    pub bmi: f64,
}

impl From<PatientRecord> for PatientRes {
    fn from(record: PatientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name.as_str().to_owned(),
            height: record.height.value(),
            weight: record.weight.value(),
            bmi: record.bmi,
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        index,
        about,
        health,
        view,
        view_patient_by_id,
        view_patients_by_name,
        sort_patients
    ),
    components(schemas(MessageRes, HealthRes, PatientRes))
)]
struct ApiDoc;

/// Builds the REST router with all routes and the Swagger UI mounted.
///
/// The caller owns outer layers such as CORS.
pub fn router(store: RecordStore) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/health", get(health))
        .route("/view", get(view))
        .route("/patient/id/:patient_id", get(view_patient_by_id))
        .route("/patient/", get(view_patients_by_name))
        .route("/sort", get(sort_patients))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(AppState::new(store))
}

fn no_records_message() -> Json<MessageRes> {
    Json(MessageRes {
        message: "No patient records found.".to_string(),
    })
}

fn patient_list(records: Vec<PatientRecord>) -> Json<Vec<PatientRes>> {
    Json(records.into_iter().map(PatientRes::from).collect())
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service banner", body = MessageRes)
    )
)]
/// Service banner.
async fn index() -> Json<MessageRes> {
    Json(MessageRes {
        message: "Patient Management System 🏥".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/about",
    responses(
        (status = 200, description = "Service description", body = MessageRes)
    )
)]
/// Short description of the service.
async fn about() -> Json<MessageRes> {
    Json(MessageRes {
        message: "This is a microservice for managing patient records.".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API.
async fn health() -> Json<HealthRes> {
    Json(HealthRes {
        ok: true,
        message: "PMS is alive".to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/view",
    responses(
        (status = 200, description = "All patient records in natural order, or an informational message when none exist", body = [PatientRes]),
        (status = 500, description = "Patient data unavailable", body = MessageRes)
    )
)]
/// List all patient records in natural order.
///
/// An empty store is not an error here: it yields an informational message,
/// unlike the lookup endpoints which report a miss as 404.
async fn view(State(state): State<AppState>) -> Result<Response, ApiError> {
    let records = state.store.get_all()?;

    if records.is_empty() {
        return Ok(no_records_message().into_response());
    }

    Ok(patient_list(records).into_response())
}

#[utoipa::path(
    get,
    path = "/patient/id/{patient_id}",
    params(
        ("patient_id" = String, Path, description = "Patient ID in the database, e.g. P001")
    ),
    responses(
        (status = 200, description = "The matching patient record", body = PatientRes),
        (status = 404, description = "No patient with this id", body = MessageRes),
        (status = 500, description = "Patient data unavailable", body = MessageRes)
    )
)]
/// Fetch a single patient record by its id.
async fn view_patient_by_id(
    State(state): State<AppState>,
    AxumPath(patient_id): AxumPath<String>,
) -> Result<Json<PatientRes>, ApiError> {
    match state.store.get_by_id(&patient_id)? {
        Some(record) => Ok(Json(record.into())),
        None => Err(ApiError::PatientNotFound(patient_id)),
    }
}

#[derive(Deserialize, IntoParams)]
struct NameParams {
    /// Patient name to match exactly (case-sensitive)
    patient_name: String,
}

#[utoipa::path(
    get,
    path = "/patient/",
    params(NameParams),
    responses(
        (status = 200, description = "All records with this name, in natural relative order", body = [PatientRes]),
        (status = 404, description = "No patients with this name", body = MessageRes),
        (status = 500, description = "Patient data unavailable", body = MessageRes)
    )
)]
/// Fetch all patient records matching a name exactly.
async fn view_patients_by_name(
    State(state): State<AppState>,
    Query(params): Query<NameParams>,
) -> Result<Json<Vec<PatientRes>>, ApiError> {
    let records = state.store.get_by_name(&params.patient_name)?;

    if records.is_empty() {
        return Err(ApiError::NameNotFound(params.patient_name));
    }

    Ok(patient_list(records))
}

#[derive(Deserialize, IntoParams)]
struct SortParams {
    /// Field to sort by: height, weight or bmi
    sort_by: String,
    /// Sort order, `asc` (default) or `desc`
    order: Option<String>,
}

#[utoipa::path(
    get,
    path = "/sort",
    params(SortParams),
    responses(
        (status = 200, description = "All patient records ordered by the requested field, or an informational message when none exist", body = [PatientRes]),
        (status = 400, description = "Invalid sort field or order", body = MessageRes),
        (status = 500, description = "Patient data unavailable", body = MessageRes)
    )
)]
/// Fetch all patient records sorted by a numeric field.
///
/// Parameters are validated before the store is read, so an invalid field or
/// order never touches the backing file.
async fn sort_patients(
    State(state): State<AppState>,
    Query(params): Query<SortParams>,
) -> Result<Response, ApiError> {
    let field: SortField = params.sort_by.parse()?;
    let order: SortOrder = match params.order.as_deref() {
        Some(raw) => raw.parse()?,
        None => SortOrder::default(),
    };

    let records = state.engine.sort_by(field, order)?;

    if records.is_empty() {
        return Ok(no_records_message().into_response());
    }

    Ok(patient_list(records).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt as _;
    use pms_core::CoreConfig;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tower::ServiceExt as _;

    const SAMPLE: &str = r#"{
        "P001": { "name": "John Doe", "height": 1.72, "weight": 98.6 },
        "P002": { "name": "Jane Doe", "height": 1.65, "weight": 70.2 },
        "P003": { "name": "John Doe", "height": 1.80, "weight": 82.0 }
    }"#;

    fn test_router(contents: &str) -> (TempDir, Router) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("patients.json");
        std::fs::write(&path, contents).unwrap();

        let store = RecordStore::new(Arc::new(CoreConfig::new(path)));
        (temp, router(store))
    }

    async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap();
        (status, body)
    }

    fn ids(body: &serde_json::Value) -> Vec<&str> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap())
            .collect()
    }

    #[tokio::test]
    async fn test_view_returns_all_records_in_natural_order() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/view").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ["P001", "P002", "P003"]);
    }

    #[tokio::test]
    async fn test_view_empty_store_is_informational_not_error() {
        let (_temp, router) = test_router("{}");

        let (status, body) = get_json(router, "/view").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "No patient records found.");
    }

    #[tokio::test]
    async fn test_patient_by_id_found() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/patient/id/P002").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jane Doe");
    }

    #[tokio::test]
    async fn test_patient_by_id_not_found_is_404_naming_the_id() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/patient/id/P999").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().contains("P999"));
    }

    #[tokio::test]
    async fn test_patient_by_name_returns_matches_in_natural_order() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/patient/?patient_name=John%20Doe").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ["P001", "P003"]);
    }

    #[tokio::test]
    async fn test_patient_by_name_no_match_is_404_naming_the_name() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/patient/?patient_name=Nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body["message"].as_str().unwrap().contains("Nobody"));
    }

    #[tokio::test]
    async fn test_sort_descending_by_weight() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/sort?sort_by=weight&order=desc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ["P001", "P003", "P002"]);
    }

    #[tokio::test]
    async fn test_sort_order_defaults_to_ascending() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/sort?sort_by=height").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(ids(&body), ["P002", "P001", "P003"]);
    }

    #[tokio::test]
    async fn test_sort_invalid_field_is_400_listing_allowed_fields() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/sort?sort_by=age").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["message"].as_str().unwrap();
        assert!(message.contains("height"));
        assert!(message.contains("weight"));
        assert!(message.contains("bmi"));
    }

    #[tokio::test]
    async fn test_sort_invalid_order_is_400() {
        let (_temp, router) = test_router(SAMPLE);

        let (status, body) = get_json(router, "/sort?sort_by=bmi&order=sideways").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"].as_str().unwrap().contains("sideways"));
    }

    #[tokio::test]
    async fn test_sort_empty_store_is_informational_not_error() {
        let (_temp, router) = test_router("{}");

        let (status, body) = get_json(router, "/sort?sort_by=bmi").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "No patient records found.");
    }

    #[tokio::test]
    async fn test_store_failure_is_500_with_generic_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("does-not-exist.json");
        let router = router(RecordStore::new(Arc::new(CoreConfig::new(path))));

        let (status, body) = get_json(router, "/view").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], "Failed to fetch patient records.");
    }
}
