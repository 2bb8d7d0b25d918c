//! # Quill Shared
//!
//! Wire types shared between the API server and its consumers: request and
//! response DTOs plus the standard error body.

pub mod dto;
pub mod response;

pub use response::ErrorResponse;
