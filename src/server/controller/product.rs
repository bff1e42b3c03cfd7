use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorsDto},
        catalog::{CreateProductDto, ImportReportDto, ProductDto, UpdateProductDto},
    },
    server::{
        data::product::ProductFilter,
        error::{validation::ValidationError, AppError},
        model::catalog::{CatalogItemParams, UpdateCatalogItemParams},
        service::{
            catalog::{export::CatalogExporter, import::CatalogImporter, CatalogKind},
            product::ProductService,
        },
        state::AppState,
    },
};

/// Tag for grouping product endpoints in OpenAPI documentation
pub static PRODUCT_TAG: &str = "product";

#[derive(Deserialize)]
pub struct ProductQuery {
    pub chapter_id: Option<i32>,
    /// Activity filter; defaults to active-only when absent.
    pub active: Option<bool>,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_format() -> String {
    "csv".to_string()
}

/// List products.
///
/// Returns products with resolved media, chapter and service relations,
/// filtered by chapter and activity. Without an `active` parameter only
/// active products are listed.
///
/// # Returns
/// - `200 OK` - Filtered products
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products",
    tag = PRODUCT_TAG,
    params(
        ("chapter_id" = Option<i32>, Query, description = "Filter by chapter id"),
        ("active" = Option<bool>, Query, description = "Activity filter (default: active only)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved products", body = Vec<ProductDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    Query(query): Query<ProductQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let products = service
        .get_filtered(ProductFilter {
            chapter_id: query.chapter_id,
            is_active: Some(query.active.unwrap_or(true)),
        })
        .await?;

    Ok((
        StatusCode::OK,
        Json(
            products
                .into_iter()
                .map(|p| p.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Create a new product.
///
/// The slug is derived from the name when omitted and suffixed on
/// collision; the order defaults to the end of the product's chapter. A
/// supplied service id list replaces the relation set wholesale.
///
/// # Returns
/// - `201 Created` - Successfully created product
/// - `422 Unprocessable Entity` - Validation failure
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/products",
    tag = PRODUCT_TAG,
    request_body = CreateProductDto,
    responses(
        (status = 201, description = "Successfully created product", body = ProductDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<CreateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let services = payload.services.clone();
    let params = CatalogItemParams::from_product_dto(payload);

    let product = service.create(params, services).await?;

    Ok((StatusCode::CREATED, Json(product.into_dto())))
}

/// Get a product by id.
///
/// # Returns
/// - `200 OK` - Product details
/// - `404 Not Found` - Product does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Get a product by slug.
///
/// # Returns
/// - `200 OK` - Product details
/// - `404 Not Found` - Product does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/products/slug/{slug}",
    tag = PRODUCT_TAG,
    params(("slug" = String, Path, description = "Product slug")),
    responses(
        (status = 200, description = "Successfully retrieved product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_product_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    match service.get_by_slug(&slug).await? {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Update a product.
///
/// Applies a partial update; omitted fields are left unchanged. A supplied
/// service id list replaces the relation set wholesale.
///
/// # Returns
/// - `200 OK` - Successfully updated product
/// - `404 Not Found` - Product does not exist
/// - `422 Unprocessable Entity` - Validation failure
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateProductDto,
    responses(
        (status = 200, description = "Successfully updated product", body = ProductDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 422, description = "Validation failure", body = ValidationErrorsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    let services = payload.services.clone();
    let params = UpdateCatalogItemParams::from_product_dto(payload);

    match service.update(id, params, services).await? {
        Some(product) => Ok((StatusCode::OK, Json(product.into_dto()))),
        None => Err(AppError::NotFound("Product not found".to_string())),
    }
}

/// Delete a product.
///
/// # Returns
/// - `204 No Content` - Successfully deleted
/// - `404 Not Found` - Product does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/products/{id}",
    tag = PRODUCT_TAG,
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 204, description = "Successfully deleted product"),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = ProductService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Ok(StatusCode::NOT_FOUND)
    }
}

/// Export products as CSV or a self-contained ZIP archive.
///
/// Deploy-token guarded. The ZIP variant bundles the CSV together with
/// every referenced media binary so the archive re-imports without
/// external state.
///
/// # Returns
/// - `200 OK` - File download
/// - `401 Unauthorized` - Invalid deploy token
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    get,
    path = "/api/products/export",
    tag = PRODUCT_TAG,
    params(("format" = Option<String>, Query, description = "csv (default) or zip")),
    responses(
        (status = 200, description = "Export file"),
        (status = 401, description = "Invalid deploy token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_products(
    State(state): State<AppState>,
    Query(query): Query<ExportQuery>,
) -> Result<impl IntoResponse, AppError> {
    export_catalog(&state, CatalogKind::Product, &query.format).await
}

/// Import products from an uploaded CSV file or ZIP archive.
///
/// Deploy-token guarded. Rows are created-or-updated keyed by id/slug;
/// malformed rows are skipped and reported while the rest of the file is
/// processed.
///
/// # Returns
/// - `200 OK` - Import report
/// - `401 Unauthorized` - Invalid deploy token
/// - `422 Unprocessable Entity` - Missing/oversize/unsupported file or
///   structurally invalid content
/// - `500 Internal Server Error` - Database or storage error
#[utoipa::path(
    post,
    path = "/api/products/import",
    tag = PRODUCT_TAG,
    responses(
        (status = 200, description = "Import report", body = ImportReportDto),
        (status = 401, description = "Invalid deploy token", body = ErrorDto),
        (status = 422, description = "Rejected upload", body = ImportReportDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_products(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    import_catalog(&state, CatalogKind::Product, multipart).await
}

/// Shared export implementation for both catalog controllers.
pub(super) async fn export_catalog(
    state: &AppState,
    kind: CatalogKind,
    format: &str,
) -> Result<impl IntoResponse, AppError> {
    let exporter = CatalogExporter::new(&state.db, &state.storage_dir);

    let (bytes, content_type, file_name) = match format {
        "zip" => (
            exporter.export_zip(kind).await?,
            "application/zip",
            format!("{}s.zip", kind.label()),
        ),
        _ => (
            exporter.export_csv(kind).await?,
            "text/csv",
            kind.csv_file_name().to_string(),
        ),
    };

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, content_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    ))
}

/// Shared import implementation for both catalog controllers: pulls the
/// `file` part out of the multipart body and hands it to the importer.
pub(super) async fn import_catalog(
    state: &AppState,
    kind: CatalogKind,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let mut upload: Option<(String, Option<String>, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or("upload").to_string();
            let content_type = field.content_type().map(|m| m.to_string());
            let bytes = field
                .bytes()
                .await
                .map_err(|e| AppError::BadRequest(format!("Failed to read upload: {}", e)))?;

            upload = Some((file_name, content_type, bytes.to_vec()));
        }
    }

    let Some((file_name, content_type, bytes)) = upload else {
        return Err(ValidationError::field("file", "No file was uploaded").into());
    };

    let importer = CatalogImporter::new(&state.db, &state.storage_dir);
    let report = importer
        .import(kind, &file_name, content_type.as_deref(), &bytes)
        .await?;

    let status = if report.success {
        StatusCode::OK
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };

    Ok((status, Json(report)))
}
