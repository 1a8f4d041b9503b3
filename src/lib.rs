//! Teaching snippets: a delayed, fallible square computation plus a handful of
//! small synchronous utilities.

pub mod basics;
pub mod config;
pub mod delayed_square;
pub mod error;
pub mod logging;

pub use config::{Config, LoggingConfig, SquareConfig};
pub use delayed_square::{evaluate, square_async, DelayedSquare, PendingSquare};
pub use error::{ConfigError, SquareError};
