//! HTTP middleware for request observability.

pub mod request_log;
pub mod trace;
