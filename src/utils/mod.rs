//! Helpers used across the application:
//!
//! - [`code_generator`] - Random short code sampling
//! - [`redirect_location`] - `Location` header values for stored URLs
//! - [`request_origin`] - Public origin extraction from HTTP headers

pub mod code_generator;
pub mod redirect_location;
pub mod request_origin;
