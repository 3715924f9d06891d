//! Villadesk Auth - owner account authentication
//!
//! JWT issuance and validation (with a short-lived decode cache) plus
//! bcrypt-backed credential checks against the `users` table.

pub mod model;
pub mod service;
