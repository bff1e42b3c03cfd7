use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{banner, menu, page, product, seo, service, settings},
    middleware::deploy_token::verify_deploy_token,
    openapi::ApiDoc,
    state::AppState,
};

/// Leave headroom above the 100 MB import cap so oversize uploads reach
/// the size check and get reported with their actual size instead of a
/// bare 413.
const IMPORT_BODY_LIMIT: usize = 110 * 1024 * 1024;

pub fn router(state: AppState) -> Router {
    // Catalog import/export is the deploy-data surface and sits behind the
    // deploy token.
    let catalog_transfer = Router::new()
        .route("/api/products/export", get(product::export_products))
        .route("/api/products/import", post(product::import_products))
        .route("/api/services/export", get(service::export_services))
        .route("/api/services/import", post(service::import_services))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            verify_deploy_token,
        ))
        .layer(DefaultBodyLimit::max(IMPORT_BODY_LIMIT));

    Router::new()
        .route("/api/pages", get(page::get_pages).post(page::create_page))
        .route("/api/pages/check-slug", post(page::check_slug))
        .route("/api/pages/slug/{slug}", get(page::get_page_by_slug))
        .route(
            "/api/pages/{id}",
            get(page::get_page_by_id)
                .put(page::update_page)
                .delete(page::delete_page),
        )
        .route(
            "/api/products",
            get(product::get_products).post(product::create_product),
        )
        .route(
            "/api/products/slug/{slug}",
            get(product::get_product_by_slug),
        )
        .route(
            "/api/products/{id}",
            get(product::get_product_by_id)
                .put(product::update_product)
                .delete(product::delete_product),
        )
        .route(
            "/api/services",
            get(service::get_services).post(service::create_service),
        )
        .route(
            "/api/services/slug/{slug}",
            get(service::get_service_by_slug),
        )
        .route(
            "/api/services/{id}",
            get(service::get_service_by_id)
                .put(service::update_service)
                .delete(service::delete_service),
        )
        .route(
            "/api/banners",
            get(banner::get_banners).post(banner::create_banner),
        )
        .route(
            "/api/banners/{id}",
            get(banner::get_banner_by_id)
                .put(banner::update_banner)
                .delete(banner::delete_banner),
        )
        .route("/api/admin/menu", get(menu::get_admin_menu))
        .route(
            "/api/settings/seo",
            get(settings::get_seo_settings).put(settings::update_seo_settings),
        )
        .route(
            "/api/settings/telegram",
            get(settings::get_telegram_settings).put(settings::update_telegram_settings),
        )
        .route(
            "/api/settings/telegram/test",
            post(settings::test_telegram_connection),
        )
        .route(
            "/api/settings/telegram/webhook-info",
            get(settings::get_webhook_info),
        )
        .route(
            "/api/settings/how-work-block",
            get(settings::get_how_work_settings).put(settings::update_how_work_settings),
        )
        .route("/robots.txt", get(seo::robots_txt))
        .route("/sitemap.xml", get(seo::sitemap_xml))
        .merge(catalog_transfer)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
