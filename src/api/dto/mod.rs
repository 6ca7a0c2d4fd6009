//! Data Transfer Objects for requests and responses.
//!
//! Inputs are deserialized with Serde and checked with `validator`.

pub mod health;
pub mod shorten;
