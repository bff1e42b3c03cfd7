//! Catalog import: CSV uploads and self-contained ZIP archives.
//!
//! Rows are created-or-updated keyed by id (when present) or slug, so
//! re-importing the same file never duplicates rows. A malformed or
//! constraint-violating row is skipped with its reason recorded; only a
//! structurally invalid file (unreadable archive, missing required
//! columns) aborts the whole operation.

use std::io::{Cursor, Read};
use std::path::Path;

use sea_orm::DatabaseConnection;

use super::{row, sheet, CatalogKind};
use crate::{
    model::catalog::ImportReportDto,
    server::{
        data::{
            chapter::ChapterRepository, media::MediaRepository, product::ProductRepository,
            service::ServiceRepository,
        },
        error::{validation::ValidationError, AppError},
        model::catalog::{CatalogItemParams, UpdateCatalogItemParams},
        util::slug::{resolve_unique, slugify},
    },
};

/// Upload size cap; larger files are rejected before any row processing.
pub const MAX_IMPORT_SIZE_MB: u64 = 100;

enum UploadKind {
    Csv,
    Zip,
}

pub struct CatalogImporter<'a> {
    db: &'a DatabaseConnection,
    storage_dir: &'a str,
}

impl<'a> CatalogImporter<'a> {
    pub fn new(db: &'a DatabaseConnection, storage_dir: &'a str) -> Self {
        Self { db, storage_dir }
    }

    /// Imports an uploaded file, dispatching on its declared type.
    ///
    /// The file kind is decided by extension and declared MIME type, never
    /// by sniffing content. Oversize and unsupported uploads are rejected
    /// as validation errors before any processing.
    pub async fn import(
        &self,
        kind: CatalogKind,
        file_name: &str,
        content_type: Option<&str>,
        bytes: &[u8],
    ) -> Result<ImportReportDto, AppError> {
        let limit = MAX_IMPORT_SIZE_MB as usize * 1024 * 1024;
        if bytes.len() > limit {
            return Err(ValidationError::UploadTooLarge {
                size_mb: bytes.len() as f64 / (1024.0 * 1024.0),
                limit_mb: MAX_IMPORT_SIZE_MB,
            }
            .into());
        }

        match upload_kind(file_name, content_type)? {
            UploadKind::Zip => self.import_zip(kind, bytes).await,
            UploadKind::Csv => self.import_csv(kind, bytes).await,
        }
    }

    /// Extracts a ZIP archive: media binaries land under the storage root
    /// and are re-associated by relative path, then the contained CSV is
    /// imported.
    async fn import_zip(
        &self,
        kind: CatalogKind,
        bytes: &[u8],
    ) -> Result<ImportReportDto, AppError> {
        let mut archive = match zip::ZipArchive::new(Cursor::new(bytes)) {
            Ok(archive) => archive,
            Err(e) => return Ok(failure(format!("Failed to read archive: {}", e))),
        };

        let media_repo = MediaRepository::new(self.db);
        let mut csv_bytes: Option<Vec<u8>> = None;

        for index in 0..archive.len() {
            let mut entry = match archive.by_index(index) {
                Ok(entry) => entry,
                Err(e) => return Ok(failure(format!("Failed to read archive entry: {}", e))),
            };

            let entry_name = entry.name().to_string();
            if entry_name.contains("..") {
                return Ok(failure(format!(
                    "Archive contains an unsafe path: {}",
                    entry_name
                )));
            }
            if entry.is_dir() {
                continue;
            }

            if entry_name == kind.csv_file_name()
                || (csv_bytes.is_none() && entry_name.ends_with(".csv"))
            {
                let mut buf = Vec::new();
                entry.read_to_end(&mut buf)?;
                csv_bytes = Some(buf);
            } else if let Some(relative) = entry_name.strip_prefix("media/") {
                let Some((disk, file_name)) = relative.split_once('/') else {
                    continue;
                };

                let mut buf = Vec::new();
                entry.read_to_end(&mut buf)?;

                let dir = Path::new(self.storage_dir).join(disk);
                std::fs::create_dir_all(&dir)?;
                std::fs::write(dir.join(file_name), &buf)?;

                media_repo
                    .first_or_create(disk, file_name, Some(buf.len() as i64))
                    .await?;
            }
        }

        let Some(csv_bytes) = csv_bytes else {
            return Ok(failure(format!(
                "Archive does not contain {}",
                kind.csv_file_name()
            )));
        };

        self.import_csv(kind, &csv_bytes).await
    }

    /// Imports CSV rows with create-or-update semantics.
    ///
    /// A services upload whose header matches the legacy feed layout is
    /// routed to the sheet ingest instead.
    async fn import_csv(
        &self,
        kind: CatalogKind,
        bytes: &[u8],
    ) -> Result<ImportReportDto, AppError> {
        let mut reader = csv::Reader::from_reader(bytes);

        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => return Ok(failure(format!("Failed to read CSV headers: {}", e))),
        };

        if kind == CatalogKind::Service && sheet::is_sheet_layout(&headers) {
            return sheet::ingest(self.db, reader).await;
        }

        if !headers
            .iter()
            .any(|h| h.trim().eq_ignore_ascii_case("name"))
        {
            return Ok(failure("CSV is missing required column 'name'".to_string()));
        }

        let mut success_count = 0usize;
        let mut skip_count = 0usize;
        let mut errors = Vec::new();

        for (index, result) in reader.records().enumerate() {
            // Header occupies line 1.
            let line = index + 2;

            let record = match result {
                Ok(record) => record,
                Err(e) => {
                    errors.push(format!("Row {}: {}", line, e));
                    skip_count += 1;
                    continue;
                }
            };

            let parsed = match row::CatalogRow::from_record(&headers, &record) {
                Ok(parsed) => parsed,
                Err(e) => {
                    errors.push(format!("Row {}: {}", line, e));
                    skip_count += 1;
                    continue;
                }
            };

            match self.upsert_row(kind, parsed).await {
                Ok(()) => success_count += 1,
                Err(e) => {
                    errors.push(format!("Row {}: {}", line, e));
                    skip_count += 1;
                }
            }
        }

        Ok(ImportReportDto {
            success: true,
            message: format!(
                "Imported {} {} rows, skipped {}",
                success_count,
                kind.label(),
                skip_count
            ),
            success_count,
            skip_count,
            errors,
        })
    }

    /// Creates or updates a single row, keyed by id when present and
    /// matching, otherwise by slug.
    async fn upsert_row(&self, kind: CatalogKind, parsed: row::CatalogRow) -> Result<(), String> {
        let chapter_id = match &parsed.chapter {
            Some(name) => Some(
                ChapterRepository::new(self.db)
                    .first_or_create(name, 0)
                    .await
                    .map_err(|e| e.to_string())?
                    .id,
            ),
            None => None,
        };

        let image_id = self.resolve_media(parsed.image.as_deref()).await?;
        let icon_id = self.resolve_media(parsed.icon.as_deref()).await?;

        let slug = match parsed.slug.clone() {
            Some(slug) => slug,
            None => slugify(&parsed.name),
        };
        if slug.is_empty() {
            return Err("a slug could not be derived from the name".to_string());
        }

        match kind {
            CatalogKind::Product => {
                let repo = ProductRepository::new(self.db);

                let service_ids = self.resolve_service_slugs(&parsed.services).await?;

                let existing = match parsed.id {
                    Some(id) => repo
                        .get_by_id(id)
                        .await
                        .map_err(|e| e.to_string())?
                        .map(|p| p.product),
                    None => None,
                };
                let existing = match existing {
                    Some(found) => Some(found),
                    None => repo.find_by_slug(&slug).await.map_err(|e| e.to_string())?,
                };

                match existing {
                    Some(current) => {
                        let new_slug = if current.slug != slug {
                            Some(
                                resolve_unique(&slug, |candidate| {
                                    let repo = ProductRepository::new(self.db);
                                    let id = current.id;
                                    async move { repo.slug_exists(&candidate, Some(id)).await }
                                })
                                .await
                                .map_err(|e| e.to_string())?,
                            )
                        } else {
                            None
                        };

                        repo.update(current.id, new_slug, update_params(&parsed, chapter_id, image_id, icon_id))
                            .await
                            .map_err(|e| e.to_string())?;
                        repo.sync_services(current.id, &service_ids)
                            .await
                            .map_err(|e| e.to_string())?;
                    }
                    None => {
                        let created = repo
                            .create(
                                slug,
                                parsed.order.unwrap_or(0),
                                create_params(&parsed, chapter_id, image_id, icon_id),
                            )
                            .await
                            .map_err(|e| e.to_string())?;
                        repo.sync_services(created.id, &service_ids)
                            .await
                            .map_err(|e| e.to_string())?;
                    }
                }
            }
            CatalogKind::Service => {
                let repo = ServiceRepository::new(self.db);

                let existing = match parsed.id {
                    Some(id) => repo
                        .get_by_id(id)
                        .await
                        .map_err(|e| e.to_string())?
                        .map(|s| s.service),
                    None => None,
                };
                let existing = match existing {
                    Some(found) => Some(found),
                    None => repo.find_by_slug(&slug).await.map_err(|e| e.to_string())?,
                };

                match existing {
                    Some(current) => {
                        let new_slug = if current.slug != slug {
                            Some(
                                resolve_unique(&slug, |candidate| {
                                    let repo = ServiceRepository::new(self.db);
                                    let id = current.id;
                                    async move { repo.slug_exists(&candidate, Some(id)).await }
                                })
                                .await
                                .map_err(|e| e.to_string())?,
                            )
                        } else {
                            None
                        };

                        repo.update(current.id, new_slug, update_params(&parsed, chapter_id, image_id, icon_id))
                            .await
                            .map_err(|e| e.to_string())?;
                    }
                    None => {
                        repo.create(
                            slug,
                            parsed.order.unwrap_or(0),
                            create_params(&parsed, chapter_id, image_id, icon_id),
                        )
                        .await
                        .map_err(|e| e.to_string())?;
                    }
                }
            }
        }

        Ok(())
    }

    /// Resolves a `disk/name` media path to a media row id, registering the
    /// row when the binary was just extracted from an archive.
    async fn resolve_media(&self, path: Option<&str>) -> Result<Option<i32>, String> {
        let Some(path) = path else {
            return Ok(None);
        };

        let Some((disk, name)) = path.split_once('/') else {
            return Err(format!("invalid media path '{}', expected disk/name", path));
        };

        let media = MediaRepository::new(self.db)
            .first_or_create(disk, name, None)
            .await
            .map_err(|e| e.to_string())?;

        Ok(Some(media.id))
    }

    /// Maps related service slugs to ids; unknown slugs are logged and
    /// dropped rather than failing the row.
    async fn resolve_service_slugs(&self, slugs: &[String]) -> Result<Vec<i32>, String> {
        let repo = ServiceRepository::new(self.db);
        let mut ids = Vec::with_capacity(slugs.len());

        for slug in slugs {
            match repo.find_by_slug(slug).await.map_err(|e| e.to_string())? {
                Some(service) => ids.push(service.id),
                None => tracing::warn!("Import references unknown service slug '{}'", slug),
            }
        }

        Ok(ids)
    }
}

fn create_params(
    parsed: &row::CatalogRow,
    chapter_id: Option<i32>,
    image_id: Option<i32>,
    icon_id: Option<i32>,
) -> CatalogItemParams {
    CatalogItemParams {
        name: parsed.name.clone(),
        slug: None,
        description: parsed.description.clone(),
        seo_title: parsed.seo_title.clone(),
        seo_description: parsed.seo_description.clone(),
        seo_keywords: parsed.seo_keywords.clone(),
        image_id,
        icon_id,
        chapter_id,
        order: parsed.order,
        is_active: parsed.is_active,
    }
}

fn update_params(
    parsed: &row::CatalogRow,
    chapter_id: Option<i32>,
    image_id: Option<i32>,
    icon_id: Option<i32>,
) -> UpdateCatalogItemParams {
    UpdateCatalogItemParams {
        name: Some(parsed.name.clone()),
        slug: None,
        description: parsed.description.clone(),
        seo_title: parsed.seo_title.clone(),
        seo_description: parsed.seo_description.clone(),
        seo_keywords: parsed.seo_keywords.clone(),
        image_id,
        icon_id,
        chapter_id,
        order: parsed.order,
        is_active: Some(parsed.is_active),
    }
}

fn upload_kind(file_name: &str, content_type: Option<&str>) -> Result<UploadKind, AppError> {
    let extension = file_name
        .rsplit('.')
        .next()
        .unwrap_or_default()
        .to_ascii_lowercase();

    let zip_mime = matches!(
        content_type,
        Some("application/zip") | Some("application/x-zip-compressed")
    );
    if extension == "zip" || zip_mime {
        return Ok(UploadKind::Zip);
    }

    let csv_mime = matches!(content_type, Some("text/csv") | Some("text/plain"));
    if extension == "csv" || extension == "txt" || csv_mime {
        return Ok(UploadKind::Csv);
    }

    Err(ValidationError::UnsupportedUploadType(if extension.is_empty() {
        content_type.unwrap_or("unknown").to_string()
    } else {
        extension
    })
    .into())
}

fn failure(message: String) -> ImportReportDto {
    ImportReportDto {
        success: false,
        message,
        success_count: 0,
        skip_count: 0,
        errors: Vec::new(),
    }
}
