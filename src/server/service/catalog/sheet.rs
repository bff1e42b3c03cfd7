//! Legacy catalog sheet ingest.
//!
//! The original services feed is a six-column sheet where a row may name a
//! service, open a new chapter, and/or add a case to the chapter opened by
//! the nearest preceding row. The iteration folds an explicit cursor
//! (current chapter id plus chapter/case order counters) through the rows;
//! a case row landing before any chapter row is a row-level error.

use sea_orm::{DatabaseConnection, DbErr};

use super::row::description_from_parts;
use crate::{
    model::catalog::ImportReportDto,
    server::{
        data::{case::CaseRepository, chapter::ChapterRepository, service::ServiceRepository},
        error::AppError,
        model::{
            case::CreateCaseParams,
            catalog::{CatalogItemParams, UpdateCatalogItemParams},
        },
        util::slug::{resolve_unique, slugify},
    },
};

const SHEET_HEADERS: [&str; 6] = [
    "service",
    "chapter",
    "case",
    "description",
    "html_text",
    "detailed_text",
];

/// Whether a CSV header row matches the legacy feed layout.
pub fn is_sheet_layout(headers: &csv::StringRecord) -> bool {
    let names: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_ascii_lowercase())
        .collect();

    SHEET_HEADERS.iter().all(|h| names.iter().any(|n| n == h))
}

/// Fold state threaded through the sheet rows.
#[derive(Debug, Default)]
struct IngestCursor {
    /// Chapter opened by the nearest preceding chapter row; cases attach
    /// here.
    current_chapter_id: Option<i32>,
    chapter_order: i32,
    case_order: i32,
    service_order: i32,
}

/// Ingests a legacy feed sheet.
///
/// Services, chapters and cases are created-or-updated keyed by their
/// derived slug (chapters by name), so re-ingesting the same sheet never
/// duplicates rows.
pub async fn ingest<R: std::io::Read>(
    db: &DatabaseConnection,
    mut reader: csv::Reader<R>,
) -> Result<ImportReportDto, AppError> {
    let headers = match reader.headers() {
        Ok(headers) => headers.clone(),
        Err(e) => {
            return Ok(ImportReportDto {
                success: false,
                message: format!("Failed to read sheet headers: {}", e),
                success_count: 0,
                skip_count: 0,
                errors: Vec::new(),
            })
        }
    };

    let column = |record: &csv::StringRecord, name: &str| -> Option<String> {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .and_then(|i| record.get(i))
            .and_then(clean_value)
    };

    let mut cursor = IngestCursor::default();
    let mut services = 0usize;
    let mut chapters = 0usize;
    let mut cases = 0usize;
    let mut skip_count = 0usize;
    let mut errors = Vec::new();

    for (index, result) in reader.records().enumerate() {
        let line = index + 2;

        let record = match result {
            Ok(record) => record,
            Err(e) => {
                errors.push(format!("Row {}: {}", line, e));
                skip_count += 1;
                continue;
            }
        };

        let service_name = column(&record, "service");
        let chapter_name = column(&record, "chapter");
        let case_name = column(&record, "case");

        if service_name.is_none() && chapter_name.is_none() && case_name.is_none() {
            skip_count += 1;
            continue;
        }

        let description = description_from_parts(
            column(&record, "description"),
            column(&record, "html_text"),
            column(&record, "detailed_text"),
        );

        if let Some(name) = service_name {
            match upsert_service(db, &name, description.clone(), cursor.service_order).await {
                Ok(()) => {
                    cursor.service_order += 1;
                    services += 1;
                }
                Err(e) => {
                    errors.push(format!("Row {}: service '{}': {}", line, name, e));
                    skip_count += 1;
                }
            }
        }

        if let Some(name) = chapter_name {
            match ChapterRepository::new(db)
                .first_or_create(&name, cursor.chapter_order)
                .await
            {
                Ok(chapter) => {
                    // A new chapter resets the case counter.
                    cursor.current_chapter_id = Some(chapter.id);
                    cursor.chapter_order += 1;
                    cursor.case_order = 0;
                    chapters += 1;
                }
                Err(e) => {
                    errors.push(format!("Row {}: chapter '{}': {}", line, name, e));
                    skip_count += 1;
                }
            }
        }

        if let Some(name) = case_name {
            match cursor.current_chapter_id {
                Some(chapter_id) => {
                    match upsert_case(db, &name, chapter_id, description, cursor.case_order).await
                    {
                        Ok(()) => {
                            cursor.case_order += 1;
                            cases += 1;
                        }
                        Err(e) => {
                            errors.push(format!("Row {}: case '{}': {}", line, name, e));
                            skip_count += 1;
                        }
                    }
                }
                None => {
                    errors.push(format!(
                        "Row {}: case '{}' appears before any chapter",
                        line, name
                    ));
                    skip_count += 1;
                }
            }
        }
    }

    Ok(ImportReportDto {
        success: true,
        message: format!(
            "Ingested {} services, {} chapters, {} cases",
            services, chapters, cases
        ),
        success_count: services + chapters + cases,
        skip_count,
        errors,
    })
}

/// Trims a cell; empty cells and the literal "NaN" spreadsheet artifact
/// count as absent.
fn clean_value(value: &str) -> Option<String> {
    let trimmed = value.trim();

    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        return None;
    }

    Some(trimmed.to_string())
}

async fn upsert_service(
    db: &DatabaseConnection,
    name: &str,
    description: Option<serde_json::Value>,
    order: i32,
) -> Result<(), DbErr> {
    let repo = ServiceRepository::new(db);
    let slug = slugify(name);

    match repo.find_by_slug(&slug).await? {
        Some(current) => {
            repo.update(
                current.id,
                None,
                UpdateCatalogItemParams {
                    name: Some(name.to_string()),
                    description,
                    order: Some(order),
                    is_active: Some(true),
                    ..Default::default()
                },
            )
            .await?;
        }
        None => {
            let slug = resolve_unique(&slug, |candidate| {
                let repo = ServiceRepository::new(db);
                async move { repo.slug_exists(&candidate, None).await }
            })
            .await?;

            repo.create(
                slug,
                order,
                CatalogItemParams {
                    name: name.to_string(),
                    slug: None,
                    description,
                    seo_title: None,
                    seo_description: None,
                    seo_keywords: None,
                    image_id: None,
                    icon_id: None,
                    chapter_id: None,
                    order: Some(order),
                    is_active: true,
                },
            )
            .await?;
        }
    }

    Ok(())
}

async fn upsert_case(
    db: &DatabaseConnection,
    name: &str,
    chapter_id: i32,
    description: Option<serde_json::Value>,
    order: i32,
) -> Result<(), DbErr> {
    let repo = CaseRepository::new(db);
    let slug = slugify(name);

    let params = CreateCaseParams {
        name: name.to_string(),
        slug: None,
        description,
        chapter_id: Some(chapter_id),
        order,
        is_active: true,
    };

    match repo.find_by_slug(&slug).await? {
        Some(current) => {
            repo.overwrite(current.id, params).await?;
        }
        None => {
            repo.create(slug, params).await?;
        }
    }

    Ok(())
}
