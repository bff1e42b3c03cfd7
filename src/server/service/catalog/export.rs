//! Catalog export: CSV and self-contained ZIP archives.

use std::collections::HashMap;
use std::io::{Cursor, Write};
use std::path::Path;

use sea_orm::DatabaseConnection;
use zip::write::SimpleFileOptions;

use super::{row, CatalogKind};
use crate::server::{
    data::{product::ProductRepository, service::ServiceRepository},
    error::AppError,
};

pub struct CatalogExporter<'a> {
    db: &'a DatabaseConnection,
    storage_dir: &'a str,
}

impl<'a> CatalogExporter<'a> {
    pub fn new(db: &'a DatabaseConnection, storage_dir: &'a str) -> Self {
        Self { db, storage_dir }
    }

    /// Exports all rows of the given entity type as CSV bytes.
    pub async fn export_csv(&self, kind: CatalogKind) -> Result<Vec<u8>, AppError> {
        let (rows, _media) = self.collect(kind).await?;

        write_csv(kind, &rows)
    }

    /// Exports all rows of the given entity type as a ZIP archive holding
    /// the CSV plus every referenced media binary under `media/disk/name`.
    ///
    /// A media row whose binary is missing from storage is logged and
    /// skipped; the archive stays importable without it.
    pub async fn export_zip(&self, kind: CatalogKind) -> Result<Vec<u8>, AppError> {
        let (rows, media) = self.collect(kind).await?;
        let csv_bytes = write_csv(kind, &rows)?;

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();

        writer.start_file(kind.csv_file_name(), options)?;
        writer.write_all(&csv_bytes)?;

        for item in media {
            let relative = item.relative_path();
            let source = Path::new(self.storage_dir).join(&relative);

            match std::fs::read(&source) {
                Ok(bytes) => {
                    writer.start_file(format!("media/{}", relative), options)?;
                    writer.write_all(&bytes)?;
                }
                Err(e) => {
                    tracing::warn!(
                        "Skipping media '{}' missing from storage: {}",
                        relative,
                        e
                    );
                }
            }
        }

        Ok(writer.finish()?.into_inner())
    }

    /// Loads all rows of one entity type as CSV row models plus the media
    /// rows they reference (deduplicated).
    async fn collect(
        &self,
        kind: CatalogKind,
    ) -> Result<(Vec<row::CatalogRow>, Vec<entity::media::Model>), AppError> {
        let mut rows = Vec::new();
        let mut media: HashMap<i32, entity::media::Model> = HashMap::new();

        match kind {
            CatalogKind::Product => {
                let products = ProductRepository::new(self.db).get_all().await?;

                let service_ids: Vec<i32> = products
                    .iter()
                    .flat_map(|p| p.service_ids.iter().copied())
                    .collect();
                let slug_map = ServiceRepository::new(self.db).slug_map(&service_ids).await?;

                for item in products {
                    for m in [&item.image, &item.icon].into_iter().flatten() {
                        media.insert(m.id, m.clone());
                    }

                    rows.push(row::CatalogRow {
                        id: Some(item.product.id),
                        name: item.product.name,
                        slug: Some(item.product.slug),
                        description: item.product.description,
                        seo_title: item.product.seo_title,
                        seo_description: item.product.seo_description,
                        seo_keywords: item.product.seo_keywords,
                        chapter: item.chapter.map(|c| c.name),
                        order: Some(item.product.order),
                        is_active: item.product.is_active,
                        image: item.image.map(|m| m.relative_path()),
                        icon: item.icon.map(|m| m.relative_path()),
                        services: item
                            .service_ids
                            .iter()
                            .filter_map(|id| slug_map.get(id).cloned())
                            .collect(),
                    });
                }
            }
            CatalogKind::Service => {
                let services = ServiceRepository::new(self.db).get_all().await?;

                for item in services {
                    for m in [&item.image, &item.icon].into_iter().flatten() {
                        media.insert(m.id, m.clone());
                    }

                    rows.push(row::CatalogRow {
                        id: Some(item.service.id),
                        name: item.service.name,
                        slug: Some(item.service.slug),
                        description: item.service.description,
                        seo_title: item.service.seo_title,
                        seo_description: item.service.seo_description,
                        seo_keywords: item.service.seo_keywords,
                        chapter: item.chapter.map(|c| c.name),
                        order: Some(item.service.order),
                        is_active: item.service.is_active,
                        image: item.image.map(|m| m.relative_path()),
                        icon: item.icon.map(|m| m.relative_path()),
                        services: Vec::new(),
                    });
                }
            }
        }

        Ok((rows, media.into_values().collect()))
    }
}

fn write_csv(kind: CatalogKind, rows: &[row::CatalogRow]) -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer.write_record(row::headers(kind))?;
    for item in rows {
        writer.write_record(item.to_fields(kind))?;
    }

    writer
        .into_inner()
        .map_err(|e| AppError::InternalError(format!("Failed to flush CSV: {}", e)))
}
