//! Feature modules. Each module follows the same structure:
//!
//! - `controller.rs`: HTTP handlers
//! - `service.rs`: business logic against the credential store
//! - `model.rs`: entities and DTOs
//! - `router.rs`: axum router wiring

pub mod auth;
pub mod users;
