pub mod common;
pub mod config;

pub use common::AppState;
pub use config::Configuration;
