//! Owner-facing API: property CRUD and dashboard statistics. Every route
//! requires an authenticated owner context.

pub mod dashboard;
pub mod property;
