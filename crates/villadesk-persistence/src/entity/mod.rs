//! SeaORM entity definitions for the Villadesk tables.

pub mod prelude;
pub mod properties;
pub mod users;
pub mod voice_interactions;
