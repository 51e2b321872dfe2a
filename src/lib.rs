//! # Arcade Assets - sprite, audio and leaderboard backend
//!
//! Stores sprite images and audio clips inline in a document store and keeps
//! a simple player leaderboard, with every mutating call passing through a
//! small validation core first.
//!
//! ## Architecture Layers
//!
//! - **Domain**: value objects, entities, the identifier validator, the
//!   file-type gate and the query sanitizer
//! - **Application**: use cases and ports (repository traits)
//! - **Infrastructure**: PostgreSQL and in-memory repository adapters
//! - **API**: axum handlers, error mapping and middleware
//!
//! ## Example Usage
//!
//! ```no_run
//! use arcade_assets::{api::create_router, ApplicationBuilder, Config};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = ApplicationBuilder::new(Config::in_memory())
//!     .with_store()
//!     .await?
//!     .build()?;
//! let app = create_router(state);
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

// Re-export key types explicitly to avoid ambiguity
pub use api::errors as api_errors;
pub use application::builder::ApplicationBuilder;
pub use application::{dto, ports, use_cases};
pub use config::Config;
pub use domain::errors as domain_errors;
pub use domain::input_sanitization;
pub use domain::{entities, value_objects};
