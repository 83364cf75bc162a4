//! Portfolio Site
//!
//! Static portfolio pages composed from typed content records and rendered
//! with askama behind an axum server.
//!
//! - `content/`: registry, card/slide factory, page composers, error content
//! - `config`: `portfolio.toml` + environment overrides
//! - `server` / `web/`: router, handlers, templates (feature `server`)

pub mod config;
pub mod content;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "server")]
pub mod web;

pub use config::{Config, ConfigError};
pub use content::{ContentError, ContentRegistry};

#[cfg(feature = "server")]
pub use server::{create_router, AppError, AppState};
