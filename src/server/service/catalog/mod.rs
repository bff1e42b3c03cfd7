//! Catalog import/export transform for products and services.
//!
//! Converts between persisted catalog rows and a flat tabular
//! representation: a CSV with one row per entity, optionally wrapped in a
//! ZIP archive together with the referenced media binaries so the archive
//! is self-contained and re-importable.
//!
//! The two entity types share one row shape; `CatalogKind` selects the
//! table, CSV file name and the product-only related-services column.

pub mod export;
pub mod import;
pub mod row;
pub mod sheet;

/// Which catalog table a transform operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogKind {
    Product,
    Service,
}

impl CatalogKind {
    /// CSV file name used inside ZIP archives and download responses.
    pub fn csv_file_name(self) -> &'static str {
        match self {
            Self::Product => "products.csv",
            Self::Service => "services.csv",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Product => "product",
            Self::Service => "service",
        }
    }
}
