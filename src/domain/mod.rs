//! Domain layer containing business entities and repository contracts.
//!
//! - [`entities`] - Lists and items
//! - [`repositories`] - Data access trait definitions
//!
//! The domain layer has no dependency on infrastructure or presentation;
//! services in [`crate::application::services`] compose the repositories.

pub mod entities;
pub mod repositories;
