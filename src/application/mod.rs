//! Application layer services implementing business logic.
//!
//! Services sit between HTTP handlers and repository traits: they validate
//! input, call the repository, and map outcomes to [`crate::error::AppError`].
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Short link creation and resolution

pub mod services;
