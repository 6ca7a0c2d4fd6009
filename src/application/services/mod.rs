//! Business logic services for the application layer.

pub mod code_generator;
pub mod link_service;

pub use code_generator::CodeGenerator;
pub use link_service::LinkService;
