//! Portfolio Content Module
//!
//! Data flows one way:
//! registry (static records) -> factory (cards/slides) -> composer (page contexts).
//!
//! ## Pages
//! - Home: hero card
//! - Education, Certifications, Connect: card grids
//! - Tech Stack: card grid in frontend/backend/infra sections
//! - Achievements, IRL: carousels
//! - Landing: custom-domain entry page

pub mod types;
pub mod utils;
pub mod registry;
pub mod view_models;
pub mod factory;
pub mod composer;
pub mod error_pages;

pub use error_pages::{ErrorContent, ErrorKind};
pub use registry::ContentRegistry;
pub use types::{ContentError, RecordKind, TechCategory};
