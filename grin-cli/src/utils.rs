//! Utility functions for the CLI.

use grin_huffman::{ErrorKind, GrinError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags.
pub const LOG_ENV: &str = "GRIN_LOG";

/// Filter directive for the given `-v` count and `-q` flag.
pub fn log_level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber, preferring `GRIN_LOG` over the flags.
pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(log_level(verbose, quiet)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// User-facing message for a failed command on `input`.
pub fn describe_error(err: &GrinError, input: &Path) -> String {
    match err.kind() {
        ErrorKind::Resource => format!("Invalid file! {}", err),
        ErrorKind::Format => format!(
            "Error: {} is not a valid GRIN file ({})",
            input.display(),
            err
        ),
        ErrorKind::Logic => format!("Error: {}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(0, false), "warn");
        assert_eq!(log_level(1, false), "info");
        assert_eq!(log_level(2, false), "debug");
        assert_eq!(log_level(9, false), "trace");
        assert_eq!(log_level(3, true), "error");
    }

    #[test]
    fn test_describe_error() {
        let input = Path::new("data.grin");

        let err = GrinError::invalid_magic(0x736, 0);
        assert!(describe_error(&err, input).starts_with("Error: data.grin is not a valid GRIN file"));

        let err = GrinError::open("missing", io::Error::from(io::ErrorKind::NotFound));
        assert!(describe_error(&err, input).starts_with("Invalid file!"));

        let err = GrinError::internal("bad");
        assert_eq!(describe_error(&err, input), "Error: Internal error: bad");
    }
}
