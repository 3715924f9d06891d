//! Villadesk server assembly: configuration, authentication middleware,
//! logging, graceful shutdown, and the HTTP server wiring the console and
//! voice-gateway endpoints together.

pub mod auth;
pub mod middleware;
pub mod model;
pub mod startup;
