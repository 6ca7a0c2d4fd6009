//! Core domain entities.
//!
//! - [`UrlRecord`] - A stored long URL and its short code

pub mod url_record;

pub use url_record::UrlRecord;
