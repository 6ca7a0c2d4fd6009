//! HTTP layer translating requests into service calls.
//!
//! - [`dto`] - Form and JSON payloads
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware
//! - [`templates`] - Askama page templates

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod templates;
