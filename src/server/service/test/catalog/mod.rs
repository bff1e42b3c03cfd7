use sea_orm::{EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

use crate::server::service::catalog::{
    export::CatalogExporter, import::CatalogImporter, CatalogKind,
};

mod export;
mod import;
mod roundtrip;
mod sheet;

/// Parses exported CSV bytes into (headers, rows) for assertions.
fn parse_csv(bytes: &[u8]) -> (csv::StringRecord, Vec<csv::StringRecord>) {
    let mut reader = csv::Reader::from_reader(bytes);
    let headers = reader.headers().unwrap().clone();
    let rows = reader.records().map(|r| r.unwrap()).collect();

    (headers, rows)
}

/// Returns the value of a named column in a record.
fn column<'a>(
    headers: &csv::StringRecord,
    record: &'a csv::StringRecord,
    name: &str,
) -> &'a str {
    let index = headers.iter().position(|h| h == name).unwrap();

    record.get(index).unwrap()
}
