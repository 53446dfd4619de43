//! Shared Kernel - Domain-crossing minimal core
//!
//! Error vocabulary shared by the service crates:
//! - [`error::app_error::AppError`] and the [`error::app_error::AppResult`] alias
//! - [`error::kind::ErrorKind`], the status-code classification
//! - [`error::response::ErrorBody`], the JSON shape every error is rendered as

pub mod error {
    pub mod app_error;
    pub mod kind;
    pub mod response;
}
