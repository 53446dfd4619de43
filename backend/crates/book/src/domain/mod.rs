//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entity (Book) and the validated field set (BookDraft)
//! - Value objects (BookId, BookTitle, AuthorName)
//! - Payload validation (pure, store-independent)
//! - Repository trait (interface)

pub mod entity;
pub mod repository;
pub mod validation;
pub mod value_object;
