//! Villadesk Persistence - database entities
//!
//! This crate provides the SeaORM entity definitions for the two domain
//! tables (`properties`, `voice_interactions`) and the owner account table
//! (`users`). All persistence runs against an external relational database;
//! there is no embedded storage mode.

pub mod entity;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;
