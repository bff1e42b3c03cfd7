use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{api::ErrorDto, menu::MenuDto},
    server::{error::AppError, service::menu::MenuService, state::AppState},
};

/// Tag for grouping admin menu endpoints in OpenAPI documentation
pub static MENU_TAG: &str = "menu";

/// Get the admin menu: active entries ordered by type and order.
#[utoipa::path(
    get,
    path = "/api/admin/menu",
    tag = MENU_TAG,
    responses(
        (status = 200, description = "Successfully retrieved menu", body = MenuDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_menu(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = MenuService::new(&state.db);

    let menu = service.get_menu().await?;

    Ok((StatusCode::OK, Json(menu)))
}
