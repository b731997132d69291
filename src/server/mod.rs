//! Server-side API backend and business logic.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business rules between controllers and the data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Typed session access and role guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, mailer, URLs)
//! - **Startup** (`startup`) - Initialization of database, sessions, mailer and shutdown handling
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** checks access through the session, converts DTOs to params, calls a service
//! 3. **Service** applies business rules and calls repositories
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO and responds

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
