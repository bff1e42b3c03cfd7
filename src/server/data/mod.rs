//! Database repository layer for all domain entities.
//!
//! Repository structs handle database operations (CRUD) for each domain in
//! the application. Repositories use SeaORM entity models internally and
//! return entity or relation-enriched models to the service layer; all
//! queries, inserts, updates and deletes go through here.

pub mod banner;
pub mod case;
pub mod chapter;
pub mod media;
pub mod menu;
pub mod page;
pub mod product;
pub mod service;
pub mod settings;

#[cfg(test)]
mod test;
