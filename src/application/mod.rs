//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a small API to work with.
//!
//! - [`services::code_generator::CodeGenerator`] - Collision-checked code generation
//! - [`services::link_service::LinkService`] - Link creation and redirect resolution

pub mod services;
