use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        catalog::{CreateServiceDto, ImportReportDto, ServiceDto, UpdateServiceDto},
    },
    server::{
        controller::product::{export_catalog, import_catalog, ExportQuery},
        data::service::ServiceFilter,
        error::AppError,
        model::catalog::{CatalogItemParams, UpdateCatalogItemParams},
        service::{catalog::CatalogKind, service::ServiceService},
        state::AppState,
    },
};

/// Tag for grouping service endpoints in OpenAPI documentation
pub static SERVICE_TAG: &str = "service";

#[derive(Deserialize)]
pub struct ServiceQuery {
    pub chapter_id: Option<i32>,
    /// Activity filter; defaults to active-only when absent.
    pub active: Option<bool>,
}

/// List services, filtered by chapter and activity (active-only without an
/// `active` parameter).
#[utoipa::path(
    get,
    path = "/api/services",
    tag = SERVICE_TAG,
    params(
        ("chapter_id" = Option<i32>, Query, description = "Filter by chapter id"),
        ("active" = Option<bool>, Query, description = "Activity filter (default: active only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved services", body = Vec<ServiceDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceService::new(&state.db);

    let services = service
        .get_filtered(ServiceFilter {
            chapter_id: query.chapter_id,
            is_active: Some(query.active.unwrap_or(true)),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            services
                .into_iter()
                .map(|s| s.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new service; the slug is derived from the name when omitted
/// and suffixed on collision.
#[utoipa::path(
    post,
    path = "/api/services",
    tag = SERVICE_TAG,
    request_body = CreateServiceDto,
    responses(
        (status = 201, description = "Successfully created service", body = ServiceDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_service(
    State(state): State<AppState>,
    Json(payload): Json<CreateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceService::new(&state.db);

    let params = CatalogItemParams::from_service_dto(payload);

    let created = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(created.into_dto())))
}

/// Get a service by id.
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Successfully retrieved service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(found) => Ok((StatusCode::OK, Json(found.into_dto()))),
        None => Err(AppError::NotFound("Service not found".to_string())),
    }
}

/// Get a service by slug.
#[utoipa::path(
    get,
    path = "/api/services/slug/{slug}",
    tag = SERVICE_TAG,
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Successfully retrieved service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_service_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceService::new(&state.db);

    match service.get_by_slug(&slug).await? {
        Some(found) => Ok((StatusCode::OK, Json(found.into_dto()))),
        None => Err(AppError::NotFound("Service not found".to_string())),
    }
}

/// Update a service; omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service id")),
    request_body = UpdateServiceDto,
    responses(
        (status = 200, description = "Successfully updated service", body = ServiceDto),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateServiceDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceService::new(&state.db);

    let params = UpdateCatalogItemParams::from_service_dto(payload);

    match service.update(id, params).await? {
        Some(updated) => Ok((StatusCode::OK, Json(updated.into_dto()))),
        None => Err(AppError::NotFound("Service not found".to_string())),
    }
}

/// Delete a service.
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    tag = SERVICE_TAG,
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 204, description = "Successfully deleted service"),
        (status = 404, description = "Service not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_service(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ServiceService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Export services as CSV or a self-contained ZIP archive (deploy-token
/// guarded).
#[utoipa::path(
    get,
    path = "/api/services/export",
    tag = SERVICE_TAG,
    params(("format" = Option<String>, Query, description = "csv (default) or zip")),
    responses(
        (status = 200, description = "Export file"),
        (status = 401, description = "Invalid deploy token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_services(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    export_catalog(&state, CatalogKind::Service, &query.format).await
}

/// Import services from an uploaded CSV file or ZIP archive (deploy-token
/// guarded). A CSV matching the legacy feed layout is routed to the sheet
/// ingest.
#[utoipa::path(
    post,
    path = "/api/services/import",
    tag = SERVICE_TAG,
    responses(
        (status = 200, description = "Import report", body = ImportReportDto),
        (status = 401, description = "Invalid deploy token", body = ErrorDto),
        (status = 422, description = "Rejected upload", body = ImportReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_services(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    import_catalog(&state, CatalogKind::Service, multipart).await
}
