use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::server::{error::AppError, service::seo::SeoService, state::AppState};

/// Tag for grouping SEO endpoints in OpenAPI documentation
pub static SEO_TAG: &str = "seo";

/// Serve robots.txt: the stored override or a generated default.
#[utoipa::path(
    get,
    path = "/robots.txt",
    tag = SEO_TAG,
    responses(
        (status = 200, description = "robots.txt", body = String, content_type = "text/plain"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn robots_txt(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SeoService::new(&state.db, &state.app_url);

    let body = service.robots_txt().await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    ))
}

/// Serve sitemap.xml with static routes plus every active product,
/// service, case and page. A failing entity group is omitted rather than
/// failing the response.
#[utoipa::path(
    get,
    path = "/sitemap.xml",
    tag = SEO_TAG,
    responses(
        (status = 200, description = "sitemap.xml", body = String, content_type = "application/xml"),
        (status = 500, description = "Internal server error")
    ),
)]
pub async fn sitemap_xml(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = SeoService::new(&state.db, &state.app_url);

    let body = service.sitemap_xml().await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/xml")],
        body,
    ))
}
