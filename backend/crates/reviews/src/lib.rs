//! Board-Game Review Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, repository traits
//! - `application/` - Use cases
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers
//!
//! ## Request pipeline
//! Every endpoint follows the same fixed pipeline: path and body
//! validation before any store access, referential validation through
//! the repository, dispatch to a use case, envelope shaping, and error
//! mapping to the uniform `{"msg": ...}` body. Zero-row lookups surface
//! as `Option::None` from the repository, never as errors; only genuine
//! store faults reach the 500 path.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use error::{ReviewsError, ReviewsResult};
pub use infra::postgres::PgReviewsRepository;
pub use presentation::router::{reviews_router, reviews_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult, OptionExt, ResultExt},
    kind::ErrorKind,
};
