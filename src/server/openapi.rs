//! OpenAPI document assembly for the REST API.

use utoipa::OpenApi;

use super::controller;

#[derive(OpenApi)]
#[openapi(
    paths(
        controller::page::get_pages,
        controller::page::create_page,
        controller::page::get_page_by_id,
        controller::page::update_page,
        controller::page::delete_page,
        controller::page::get_page_by_slug,
        controller::page::check_slug,
        controller::product::get_products,
        controller::product::create_product,
        controller::product::get_product_by_id,
        controller::product::get_product_by_slug,
        controller::product::update_product,
        controller::product::delete_product,
        controller::product::export_products,
        controller::product::import_products,
        controller::service::get_services,
        controller::service::create_service,
        controller::service::get_service_by_id,
        controller::service::get_service_by_slug,
        controller::service::update_service,
        controller::service::delete_service,
        controller::service::export_services,
        controller::service::import_services,
        controller::banner::get_banners,
        controller::banner::create_banner,
        controller::banner::get_banner_by_id,
        controller::banner::update_banner,
        controller::banner::delete_banner,
        controller::menu::get_admin_menu,
        controller::settings::get_seo_settings,
        controller::settings::update_seo_settings,
        controller::settings::get_telegram_settings,
        controller::settings::update_telegram_settings,
        controller::settings::test_telegram_connection,
        controller::settings::get_webhook_info,
        controller::settings::get_how_work_settings,
        controller::settings::update_how_work_settings,
        controller::seo::robots_txt,
        controller::seo::sitemap_xml,
    ),
    tags(
        (name = "page", description = "Site page management"),
        (name = "product", description = "Product catalog management"),
        (name = "service", description = "Service catalog management"),
        (name = "banner", description = "Banner management"),
        (name = "menu", description = "Admin menu"),
        (name = "settings", description = "Settings singletons"),
        (name = "seo", description = "Server-rendered SEO endpoints"),
    )
)]
pub struct ApiDoc;
