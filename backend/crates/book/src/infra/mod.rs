//! Infrastructure Layer
//!
//! Repository implementations.

pub mod postgres;

#[cfg(test)]
pub mod memory;
