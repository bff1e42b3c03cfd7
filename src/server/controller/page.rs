use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        page::{CheckSlugDto, CreatePageDto, PageDto, SlugAvailabilityDto, UpdatePageDto},
    },
    server::{
        error::AppError,
        model::page::{CreatePageParams, UpdatePageParams},
        service::page::PageService,
        state::AppState,
    },
};

/// Tag for grouping page endpoints in OpenAPI documentation
pub static PAGE_TAG: &str = "page";

/// List all pages.
///
/// Returns every page (active and inactive) ordered by `order` for the
/// admin listing.
///
/// # Returns
/// - `200 OK` - All pages
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pages",
    tag = PAGE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved pages", body = Vec<PageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_pages(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    let pages = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(pages.into_iter().map(PageDto::from).collect::<Vec<_>>()),
    ))
}

/// Create a new page.
///
/// The slug is taken from the payload when present, otherwise derived from
/// the title. A slug already taken by another page is suffixed (`-1`,
/// `-2`, …); a slug matching a reserved application route is rejected with
/// a distinct validation error.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Page creation data
///
/// # Returns
/// - `201 Created` - Successfully created page
/// - `422 Unprocessable Entity` - Validation failure or reserved slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pages",
    tag = PAGE_TAG,
    request_body = CreatePageDto,
    responses(
        (status = 201, description = "Successfully created page", body = PageDto),
        (status = 422, description = "Validation failure or reserved slug", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_page(
    State(state): State<AppState>,
    Json(payload): Json<CreatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    let params = CreatePageParams::from_dto(payload);

    let page = service.create(params).await?;

    Ok((StatusCode::CREATED, Json(PageDto::from(page))))
}

/// Get a page by id.
///
/// # Returns
/// - `200 OK` - Page details
/// - `404 Not Found` - Page does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pages/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page id")),
    responses(
        (status = 200, description = "Successfully retrieved page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(page) => Ok((StatusCode::OK, Json(PageDto::from(page)))),
        None => Err(AppError::NotFound("Page not found".to_string())),
    }
}

/// Update a page.
///
/// Applies a partial update; omitted fields are left unchanged. A changed
/// slug goes through the same reservation check and uniqueness suffixing
/// as creation.
///
/// # Returns
/// - `200 OK` - Successfully updated page
/// - `404 Not Found` - Page does not exist
/// - `422 Unprocessable Entity` - Validation failure or reserved slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/pages/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page id")),
    request_body = UpdatePageDto,
    responses(
        (status = 200, description = "Successfully updated page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 422, description = "Validation failure or reserved slug", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdatePageDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    let params = UpdatePageParams::from_dto(payload);

    match service.update(id, params).await? {
        Some(page) => Ok((StatusCode::OK, Json(PageDto::from(page)))),
        None => Err(AppError::NotFound("Page not found".to_string())),
    }
}

/// Delete a page.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - Page does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/pages/{id}",
    tag = PAGE_TAG,
    params(("id" = i32, Path, description = "Page id")),
    responses(
        (status = 204, description = "Successfully deleted page"),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_page(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Get an active page by slug (public access).
///
/// # Returns
/// - `200 OK` - Page details
/// - `404 Not Found` - No active page with this slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/pages/slug/{slug}",
    tag = PAGE_TAG,
    params(("slug" = String, Path, description = "Page slug")),
    responses(
        (status = 200, description = "Successfully retrieved page", body = PageDto),
        (status = 404, description = "Page not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_page_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    match service.get_active_by_slug(&slug).await? {
        Some(page) => Ok((StatusCode::OK, Json(PageDto::from(page)))),
        None => Err(AppError::NotFound("Page not found".to_string())),
    }
}

/// Check slug availability.
///
/// Reports whether the slug is free and, when it is taken or reserved,
/// suggests the first free non-reserved variant.
///
/// # Returns
/// - `200 OK` - Availability result
/// - `422 Unprocessable Entity` - Empty slug
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/pages/check-slug",
    tag = PAGE_TAG,
    request_body = CheckSlugDto,
    responses(
        (status = 200, description = "Slug availability", body = SlugAvailabilityDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_slug(
    State(state): State<AppState>,
    Json(payload): Json<CheckSlugDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = PageService::new(&state.db);

    let availability = service.check_slug(payload).await?;

    Ok((StatusCode::OK, Json(availability)))
}
