//! Application startup utilities: logging, HTTP server assembly, and
//! graceful shutdown.

mod http;
mod logging;
mod shutdown;

pub use http::console_server;
pub use logging::{LogRotation, LoggingConfig, LoggingGuard, init_logging};
pub use shutdown::{GracefulShutdown, ShutdownSignal, wait_for_shutdown_signal};
