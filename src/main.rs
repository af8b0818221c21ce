//! `check-redis-sorted-set-length` binary.

use redis_sorted_set_check::cli::{self, Invocation};
use redis_sorted_set_check::{CheckResult, SortedSetCheck, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    // args_os: a non UTF-8 argument is a usage error, not a panic
    let mut args = std::env::args_os();
    let program = args
        .next()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| "check-redis-sorted-set-length".to_string());

    let (check, logging_config) = match cli::parse(&program, args) {
        Ok(Invocation::Help(usage)) => {
            print!("{}", usage);
            return ExitCode::SUCCESS;
        }
        Ok(Invocation::Run { check, logging }) => (check, logging),
        Err(e) => {
            let result = CheckResult::unknown(e.to_string());
            println!("{}", result);
            eprint!("{}", cli::usage(&program));
            return ExitCode::from(result.exit_code());
        }
    };

    logging::init(&logging_config);

    let result = SortedSetCheck::new(check).run();
    println!("{}", result);
    ExitCode::from(result.exit_code())
}
