//! Presentation Layer
//!
//! HTTP handlers, body extraction and DTOs for the API.

pub mod dto;
pub mod extract;
pub mod handlers;
pub mod router;
