//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories generate unique slugs/names so repeated calls in a
//! single test never collide.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! // Create with defaults
//! let page = factory::page::create_page(&db).await?;
//! let chapter = factory::chapter::create_chapter(&db).await?;
//!
//! // Customize via the builder
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Custom Product")
//!     .slug("custom-product")
//!     .active(false)
//!     .build()
//!     .await?;
//! ```

pub mod banner;
pub mod case;
pub mod chapter;
pub mod helpers;
pub mod media;
pub mod page;
pub mod product;
pub mod service;

// Re-export commonly used factory functions for concise usage
pub use banner::create_banner;
pub use case::create_case;
pub use chapter::create_chapter;
pub use media::create_media;
pub use page::create_page;
pub use product::create_product;
pub use service::create_service;
