use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        banner::{BannerDto, CreateBannerDto, UpdateBannerDto},
    },
    server::{
        data::banner::BannerRepository,
        error::{validation::ValidationError, AppError},
        model::banner::{CreateBannerParams, UpdateBannerParams},
        state::AppState,
        util::slug::slugify,
    },
};

/// Tag for grouping banner endpoints in OpenAPI documentation
pub static BANNER_TAG: &str = "banner";

/// List all banners ordered by `order`.
#[utoipa::path(
    get,
    path = "/api/banners",
    tag = BANNER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved banners", body = Vec<BannerDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banners(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let repo = BannerRepository::new(&state.db);

    let banners = repo.get_all_ordered().await?;

    Ok((
        StatusCode::OK,
        Json(banners.into_iter().map(BannerDto::from).collect::<Vec<_>>()),
    ))
}

/// Create a banner; the slug is derived from the title when omitted.
#[utoipa::path(
    post,
    path = "/api/banners",
    tag = BANNER_TAG,
    request_body = CreateBannerDto,
    responses(
        (status = 201, description = "Successfully created banner", body = BannerDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_banner(
    State(state): State<AppState>,
    Json(payload): Json<CreateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    if payload.title.trim().is_empty() {
        return Err(ValidationError::field("title", "Title is required").into());
    }

    let params = CreateBannerParams::from_dto(payload);
    let slug = match params.slug.as_deref() {
        Some(slug) if !slug.trim().is_empty() => slug.trim().to_string(),
        _ => slugify(&params.title),
    };

    let repo = BannerRepository::new(&state.db);
    let banner = repo.create(slug, params).await?;

    Ok((StatusCode::CREATED, Json(BannerDto::from(banner))))
}

/// Get a banner by id.
#[utoipa::path(
    get,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner id")),
    responses(
        (status = 200, description = "Successfully retrieved banner", body = BannerDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_banner_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BannerRepository::new(&state.db);

    match repo.get_by_id(id).await? {
        Some(banner) => Ok((StatusCode::OK, Json(BannerDto::from(banner)))),
        None => Err(AppError::NotFound("Banner not found".to_string())),
    }
}

/// Update a banner; omitted fields are left unchanged.
#[utoipa::path(
    put,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner id")),
    request_body = UpdateBannerDto,
    responses(
        (status = 200, description = "Successfully updated banner", body = BannerDto),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBannerDto>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BannerRepository::new(&state.db);

    match repo.update(id, UpdateBannerParams::from_dto(payload)).await? {
        Some(banner) => Ok((StatusCode::OK, Json(BannerDto::from(banner)))),
        None => Err(AppError::NotFound("Banner not found".to_string())),
    }
}

/// Delete a banner.
#[utoipa::path(
    delete,
    path = "/api/banners/{id}",
    tag = BANNER_TAG,
    params(("id" = i32, Path, description = "Banner id")),
    responses(
        (status = 204, description = "Successfully deleted banner"),
        (status = 404, description = "Banner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_banner(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let repo = BannerRepository::new(&state.db);

    if repo.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}
