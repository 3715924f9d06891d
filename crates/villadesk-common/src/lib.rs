//! Villadesk Common - shared types and utilities
//!
//! This crate provides:
//! - `VilladeskError`: the application error taxonomy
//! - `ErrorCode`: structured error codes for API responses
//! - Field-level validation helpers for request payloads
//! - Unit-identifier normalization

pub mod error;
pub mod unit_id;
pub mod validation;

pub use error::{FieldViolation, VilladeskError};
