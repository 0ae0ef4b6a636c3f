use std::time::Duration;

use serde::Serialize;

/// Timeout for fetching a reference over HTTP in milliseconds (30 seconds)
pub const FETCH_TIMEOUT_MS: u64 = 30_000;

/// User agent sent when fetching a reference over HTTP
pub const USER_AGENT: &str = concat!("gomodsync/", env!("CARGO_PKG_VERSION"));

/// Environment variable overriding [`FETCH_TIMEOUT_MS`]
pub const FETCH_TIMEOUT_ENV: &str = "GOMODSYNC_FETCH_TIMEOUT_MS";

/// Environment variable holding a tracing filter directive (e.g. `gomodsync=trace`)
pub const LOG_ENV: &str = "GOMODSYNC_LOG";

/// Version metadata stamped into the binary at build time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: &'static str,
    pub date: &'static str,
}

impl BuildInfo {
    /// Build info of the running binary.
    /// Commit and date come from `GOMODSYNC_COMMIT` / `GOMODSYNC_BUILD_DATE` at compile time.
    pub const fn current() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION"),
            commit: match option_env!("GOMODSYNC_COMMIT") {
                Some(commit) => commit,
                None => "none",
            },
            date: match option_env!("GOMODSYNC_BUILD_DATE") {
                Some(date) => date,
                None => "unknown",
            },
        }
    }
}

/// Returns the HTTP timeout for reference fetches.
pub fn fetch_timeout() -> Duration {
    fetch_timeout_with_env(std::env::var(FETCH_TIMEOUT_ENV).ok())
}

fn fetch_timeout_with_env(value: Option<String>) -> Duration {
    let millis = value
        .and_then(|v| v.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(FETCH_TIMEOUT_MS);

    Duration::from_millis(millis)
}
