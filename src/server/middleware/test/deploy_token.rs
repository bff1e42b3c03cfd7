use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware,
    routing::get,
    Router,
};
use test_utils::builder::TestBuilder;
use tower::ServiceExt;

use crate::server::{middleware::deploy_token::verify_deploy_token, state::AppState};

async fn state(deploy_token: Option<&str>) -> AppState {
    let test = TestBuilder::new().build().await.unwrap();

    AppState {
        db: test.db.unwrap(),
        http_client: reqwest::Client::new(),
        app_url: "http://localhost".to_string(),
        storage_dir: "storage".to_string(),
        deploy_token: deploy_token.map(str::to_string),
        telegram_api_url: "http://127.0.0.1:9".to_string(),
    }
}

fn guarded_router(state: AppState) -> Router {
    Router::new()
        .route("/guarded", get(|| async { "ok" }))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            verify_deploy_token,
        ))
        .with_state(state)
}

/// Tests that a missing server-side secret is a server error, not an
/// authorization failure.
///
/// Expected: 500
#[tokio::test]
async fn unconfigured_secret_is_a_server_error() {
    let app = guarded_router(state(None).await);

    let response = app
        .oneshot(Request::get("/guarded").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

/// Tests the mismatch and missing-token paths.
///
/// Expected: 401 for both
#[tokio::test]
async fn wrong_or_missing_token_is_unauthorized() {
    let app = guarded_router(state(Some("s3cret")).await);

    let missing = app
        .clone()
        .oneshot(Request::get("/guarded").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let wrong = app
        .oneshot(
            Request::get("/guarded")
                .header("X-Deploy-Token", "nope")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);
}

/// Tests the header and query-parameter token paths.
///
/// Expected: 200 for both carriers
#[tokio::test]
async fn matching_token_passes() {
    let app = guarded_router(state(Some("s3cret")).await);

    let via_header = app
        .clone()
        .oneshot(
            Request::get("/guarded")
                .header("X-Deploy-Token", "s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(via_header.status(), StatusCode::OK);

    let via_query = app
        .oneshot(
            Request::get("/guarded?token=s3cret")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(via_query.status(), StatusCode::OK);
}
