use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with
/// in-memory SQLite databases. Add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Page, Chapter};
///
/// let test = TestBuilder::new()
///     .with_table(Page)
///     .with_table(Chapter)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite backend syntax. Tables should be added in dependency
    /// order (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity implementing `EntityTrait`
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds all tables required for catalog operations.
    ///
    /// Adds Chapter, Media, Service, Product, ProductService and Case in
    /// dependency order. Use this when testing products, services, the
    /// import/export transform, or the sheet ingest.
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Chapter)
            .with_table(Media)
            .with_table(Service)
            .with_table(Product)
            .with_table(ProductService)
            .with_table(Case)
    }

    /// Adds the three settings singleton tables.
    pub fn with_settings_tables(self) -> Self {
        self.with_table(SeoSettings)
            .with_table(TelegramSettings)
            .with_table(HowWorkBlockSettings)
    }

    /// Adds every table known to the schema.
    ///
    /// Convenience for tests that exercise cross-cutting surfaces such as
    /// the sitemap.
    pub fn with_all_tables(self) -> Self {
        self.with_table(Page)
            .with_catalog_tables()
            .with_table(Banner)
            .with_table(Menu)
            .with_settings_tables()
    }

    /// Builds the configured test context.
    ///
    /// Connects to a fresh in-memory SQLite database and creates all
    /// configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Ready-to-use test context
    /// - `Err(TestError::Database)` - Connection or table creation failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut context = TestContext::new();

        context.with_tables(self.tables).await?;

        Ok(context)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
