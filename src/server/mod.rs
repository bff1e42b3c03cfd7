//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM for database
//! operations, and reqwest for the outbound Telegram Bot API integration.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of
//! concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations over SeaORM entities
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Deploy-token verification for guarded routes
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, HTTP client, storage root)
//! - **Startup** (`startup`) - Database connection, migrations and menu seeding
//! - **Router** (`router`) - Axum route configuration
//! - **OpenAPI** (`openapi`) - API documentation assembly
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes to a controller
//! 2. **Middleware** verifies the deploy token on guarded routes
//! 3. **Controller** validates input shape, converts DTOs to params, calls a service
//! 4. **Service** executes business logic and orchestrates data operations
//! 5. **Data** queries the database and returns entity models
//! 6. **Controller** converts domain models to DTOs and builds the HTTP response

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod openapi;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
