//! Shared testing utilities for the CMS backend.
//!
//! Provides a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas, plus entity factories
//! for concise test data setup.
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database
//! tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//! use entity::prelude::Page;
//!
//! #[tokio::test]
//! async fn test_page_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_table(Page)
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
