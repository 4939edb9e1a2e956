use std::{ffi::OsString, time::Duration};

use clap::Parser;

use crate::server::util::parse::parse_duration;

/// Book catalog HTTP server.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// How long in-flight requests may keep running after a shutdown signal, e.g. 15s or 1m
    #[arg(long = "graceful-timeout", default_value = "15s", value_parser = parse_duration)]
    pub graceful_timeout: Duration,
}

impl Cli {
    /// Parses the process arguments, exiting with usage on error.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize(std::env::args_os()))
    }
}

/// Rewrites the single-dash `-graceful-timeout` spelling to its long form so both
/// `-graceful-timeout=5s` and `-graceful-timeout 5s` are accepted.
fn normalize<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| match arg.to_str() {
            Some(s) if s == "-graceful-timeout" || s.starts_with("-graceful-timeout=") => {
                OsString::from(format!("-{}", s))
            }
            _ => arg,
        })
        .collect()
}
