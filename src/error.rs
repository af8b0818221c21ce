/// Errors loading the TOML configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Errors turning the command line into a check configuration. The check does
/// not run when one of these is returned.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("{0}")]
    Getopts(#[from] getopts::Fail),
    #[error("missing required option --{0}")]
    MissingOption(&'static str),
    #[error("invalid value for --{option}: '{value}'")]
    InvalidValue { option: &'static str, value: String },
    #[error("config file: {0}")]
    Config(#[from] ConfigError),
}

/// Errors while talking to Redis. Every one of these is reported as UNKNOWN.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    #[error("{0}")]
    Redis(#[from] redis::RedisError),
    #[error("malformed ZCOUNT reply: negative count {0}")]
    NegativeCount(i64),
}
