//! Redis sorted set length check.
//!
//! A monitoring check that counts the members of a sorted set within a score
//! range and reports OK, WARNING, CRITICAL or UNKNOWN through its output line
//! and exit code.

pub mod check;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod status;

pub use check::{CheckConfig, ScoreRange, SortedSetCheck, Thresholds, classify};
pub use config::{Config, LoggingConfig, RedisConfig};
pub use error::{CheckError, ConfigError, UsageError};
pub use status::{CheckResult, Status};
