//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation of the forum: API
//! endpoints, business rules, data access and infrastructure. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Existence, ownership and uniqueness rules
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and the envelope mapping
//! - **Middleware** (`middleware/`) - Actor resolution and rejecting extractors
//! - **Utilities** (`util/`) - Field validation rules
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the database pool)
//! - **Startup** (`startup`) - Database connection, migrations, CORS and sample data
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Extractors** parse path parameters and validate the JSON body
//! 3. **Controller** resolves the actor when the route requires one, calls the service
//! 4. **Service** checks existence and ownership, then calls the data layer
//! 5. **Data** queries the database and converts entities to domain models
//! 6. **Controller** converts the domain model to a DTO inside an `RsData` envelope
//!
//! Any failure along the way is an `AppError`, turned into an envelope in one place.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
