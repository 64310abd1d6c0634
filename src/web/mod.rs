//! Server-rendered HTML layer.
//!
//! Uses Askama templates from `templates/` for the list and item pages.
//!
//! # Modules
//!
//! - [`handlers`] - Page handlers, one per route
//! - [`forms`] - Form bodies, `_method` override and id parsing
//! - [`middleware`] - Request tracing and debug body logging
//! - [`render`] - Page and redirect helpers
//! - [`routes`] - Route table

pub mod forms;
pub mod handlers;
pub mod middleware;
pub mod render;
pub mod routes;
