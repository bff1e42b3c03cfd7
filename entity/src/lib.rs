//! SeaORM entity definitions for the CMS database schema.
//!
//! Each module maps one table. Repositories in the server crate own all
//! queries; this crate only describes columns and relations.

pub mod prelude;

pub mod banner;
pub mod case;
pub mod chapter;
pub mod how_work_block_settings;
pub mod media;
pub mod menu;
pub mod page;
pub mod product;
pub mod product_service;
pub mod seo_settings;
pub mod service;
pub mod telegram_settings;
