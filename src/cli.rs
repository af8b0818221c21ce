//! Command line parsing.
//!
//! `-h` selects the Redis host, as monitoring checks conventionally do, so help
//! is only available as `--help`.

use crate::check::{CheckConfig, ScoreRange, Thresholds};
use crate::config::{Config, LoggingConfig};
use crate::error::UsageError;
use getopts::{Matches, Options};
use std::path::Path;
use std::str::FromStr;

/// What the binary should do after parsing its arguments.
#[derive(Debug)]
pub enum Invocation {
    /// Print usage and exit.
    Help(String),
    /// Run the check.
    Run {
        check: CheckConfig,
        logging: LoggingConfig,
    },
}

/// The option table.
pub fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("h", "host", "Redis Host to connect to", "HOST");
    opts.optopt("p", "port", "Redis Port to connect to", "PORT");
    opts.optopt(
        "n",
        "dbnumber",
        "Redis database number to connect to",
        "DATABASE",
    );
    opts.optopt("P", "password", "Redis Password to connect with", "PASSWORD");
    opts.optopt(
        "w",
        "warning",
        "COUNT warning threshold for number of items in Redis sorted set key in range",
        "COUNT",
    );
    opts.optopt(
        "c",
        "critical",
        "COUNT critical threshold for number of items in Redis sorted set key in range",
        "COUNT",
    );
    opts.optopt("k", "key", "Redis sorted set KEY to check", "KEY");
    opts.optopt("m", "score-min", "SCORE min score of the range to use", "SCORE");
    opts.optopt("M", "score-max", "SCORE max score of the range to use", "SCORE");
    opts.optopt(
        "C",
        "config",
        "TOML file with [redis] and [logging] settings",
        "PATH",
    );
    opts.optflag("v", "verbose", "Log debug output to stderr");
    opts.optflag("", "help", "Print this help and exit");
    opts
}

/// Usage text for `program`.
pub fn usage(program: &str) -> String {
    let brief = format!(
        "Usage: {} -w COUNT -c COUNT -k KEY -m SCORE -M SCORE [options]",
        program
    );
    options().usage(&brief)
}

/// Parse the arguments following the program name.
///
/// Values are resolved as defaults, then the config file (if `--config` is
/// given), then flags.
pub fn parse<I, S>(program: &str, args: I) -> Result<Invocation, UsageError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    let matches = options().parse(args)?;

    if matches.opt_present("help") {
        return Ok(Invocation::Help(usage(program)));
    }

    if !matches.free.is_empty() {
        return Err(getopts::Fail::UnrecognizedOption(matches.free[0].clone()).into());
    }

    let mut config = match matches.opt_str("config") {
        Some(path) => Config::load(Path::new(&path))?,
        None => Config::default(),
    };

    if let Some(host) = matches.opt_str("host") {
        config.redis.host = host;
    }
    if let Some(port) = parse_opt(&matches, "port")? {
        config.redis.port = port;
    }
    if let Some(db) = parse_opt(&matches, "dbnumber")? {
        config.redis.db = db;
    }
    if let Some(password) = matches.opt_str("password") {
        config.redis.password = Some(password);
    }
    if matches.opt_present("verbose") {
        config.logging.level = "debug".to_string();
    }

    let thresholds = Thresholds {
        warning: required(&matches, "warning")?,
        critical: required(&matches, "critical")?,
    };
    let key = matches
        .opt_str("key")
        .ok_or(UsageError::MissingOption("key"))?;
    let range = ScoreRange {
        min: required(&matches, "score-min")?,
        max: required(&matches, "score-max")?,
    };

    Ok(Invocation::Run {
        check: CheckConfig {
            redis: config.redis,
            key,
            range,
            thresholds,
        },
        logging: config.logging,
    })
}

fn parse_opt<T: FromStr>(
    matches: &Matches,
    option: &'static str,
) -> Result<Option<T>, UsageError> {
    match matches.opt_str(option) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| UsageError::InvalidValue { option, value }),
        None => Ok(None),
    }
}

fn required<T: FromStr>(matches: &Matches, option: &'static str) -> Result<T, UsageError> {
    parse_opt(matches, option)?.ok_or(UsageError::MissingOption(option))
}
