use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::ErrorDto, server::state::AppState};

/// Header carrying the deploy token.
pub const DEPLOY_TOKEN_HEADER: &str = "X-Deploy-Token";

/// Verifies the deploy token on guarded routes.
///
/// The token is read from the `X-Deploy-Token` header or, as a fallback, a
/// `token` query parameter (the body cannot be consumed here because the
/// guarded import endpoint streams multipart uploads).
///
/// # Returns
/// - Passes the request through when the token matches the configured secret
/// - `500 Internal Server Error` - No `DEPLOY_TOKEN` configured on the server
/// - `401 Unauthorized` - Token missing or mismatched
pub async fn verify_deploy_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let Some(expected) = state.deploy_token.as_deref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "DEPLOY_TOKEN is not configured on the server".to_string(),
            }),
        )
            .into_response();
    };

    let provided = request
        .headers()
        .get(DEPLOY_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string)
        .or_else(|| token_from_query(request.uri().query()));

    match provided {
        Some(token) if token == expected => next.run(request).await,
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(ErrorDto {
                error: "Invalid deploy token".to_string(),
            }),
        )
            .into_response(),
    }
}

fn token_from_query(query: Option<&str>) -> Option<String> {
    query?
        .split('&')
        .find_map(|pair| pair.strip_prefix("token="))
        .map(str::to_string)
}
