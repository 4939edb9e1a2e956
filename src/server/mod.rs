//! HTTP backend for the book catalog.
//!
//! The backend uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Validation, transactions and error classification
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **Command line** (`cli`) - Flags such as the graceful shutdown window
//! - **State** (`state`) - Shared application state (database pool and clock)
//! - **Startup** (`startup`) - Database connection and schema migration
//! - **Router** (`router`) - Axum route configuration and timeouts
//! - **Lifecycle** (`lifecycle`) - Serving until a shutdown signal, then draining
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** decodes the JSON body into a DTO, calls service
//! 3. **Service** validates, opens a transaction if needed, calls repositories
//! 4. **Data** queries database, converts entities to domain models
//! 5. **Service** returns DTOs to the controller
//! 6. **Controller** serializes the DTO into the HTTP response

pub mod cli;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
