//! # Logging Infrastructure
//!
//! File-based structured logging for the console.
//!
//! - **File log**: `<CONSOLE_LOG_DIR>/console.log`, rotated daily, written
//!   from a background thread
//! - **Stderr**: warnings and errors only, so the binary's summary stays readable
//! - **Panics**: logged with location and backtrace before the default hook runs
//!
//! ## Usage
//!
//! ```rust,no_run
//! let config = console::config::ConsoleConfig::from_env().unwrap();
//! // Keep the guard alive until shutdown so buffered lines are flushed
//! let _guard = console::debug::init_logger(&config);
//! tracing::info!(duration_ms = 234, "API call completed");
//! ```
//!
//! `RUST_LOG` takes precedence over the configured level.

pub mod logger;

pub use logger::init as init_logger;
