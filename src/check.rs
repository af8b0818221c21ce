//! Sorted set length check.
//!
//! Counts the members of a sorted set whose score lies in an inclusive range
//! with a single `ZCOUNT` and compares the count to the warning and critical
//! thresholds. Critical is tested first, so it shadows warning whenever both
//! limits are reached.

use crate::config::RedisConfig;
use crate::error::CheckError;
use crate::status::CheckResult;
use redis::{ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use tracing::{debug, warn};

/// Warning and critical limits. A count equal to a limit reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    pub warning: i64,
    pub critical: i64,
}

/// Inclusive score bounds, passed to Redis as given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreRange {
    pub min: i64,
    pub max: i64,
}

/// Fully resolved settings for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub redis: RedisConfig,
    pub key: String,
    pub range: ScoreRange,
    pub thresholds: Thresholds,
}

/// Classify a sorted set count against the thresholds.
pub fn classify(key: &str, length: i64, thresholds: Thresholds) -> CheckResult {
    if length >= thresholds.critical {
        CheckResult::critical(format!(
            "Redis sorted set {} length is above the CRITICAL limit: {} length / {} limit",
            key, length, thresholds.critical
        ))
    } else if length >= thresholds.warning {
        CheckResult::warning(format!(
            "Redis sorted set {} length is above the WARNING limit: {} length / {} limit",
            key, length, thresholds.warning
        ))
    } else {
        CheckResult::ok(format!("Redis sorted set {} length is below thresholds", key))
    }
}

/// Build the connection info for the `redis` client. The client issues AUTH
/// and SELECT itself during connection setup.
pub fn connection_info(config: &RedisConfig) -> ConnectionInfo {
    ConnectionInfo {
        addr: ConnectionAddr::Tcp(config.host.clone(), config.port),
        redis: RedisConnectionInfo {
            db: config.db,
            password: config.password.clone(),
            ..Default::default()
        },
    }
}

/// A single sorted set length check.
pub struct SortedSetCheck {
    config: CheckConfig,
}

impl SortedSetCheck {
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Count the members of the sorted set within the score range.
    pub fn count(&self) -> Result<i64, CheckError> {
        let redis = &self.config.redis;
        debug!(host = %redis.host, port = redis.port, db = redis.db, "connecting to redis");

        let client = redis::Client::open(connection_info(redis))?;
        let mut conn = client.get_connection()?;

        let range = self.config.range;
        debug!(key = %self.config.key, min = range.min, max = range.max, "ZCOUNT");

        let length: i64 = redis::cmd("ZCOUNT")
            .arg(&self.config.key)
            .arg(range.min)
            .arg(range.max)
            .query(&mut conn)?;

        if length < 0 {
            return Err(CheckError::NegativeCount(length));
        }

        Ok(length)
    }

    /// Run the check. Errors talking to Redis are reported as UNKNOWN.
    pub fn run(&self) -> CheckResult {
        let result = match self.count() {
            Ok(length) => classify(&self.config.key, length, self.config.thresholds),
            Err(e) => {
                warn!(error = %e, key = %self.config.key, "check failed");
                CheckResult::unknown(e.to_string())
            }
        };

        debug!(status = %result.status, "check complete");
        result
    }
}
