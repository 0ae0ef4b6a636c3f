//! Tracing subscriber setup for the CLI

use tracing_subscriber::EnvFilter;

use crate::config::LOG_ENV;

/// Install a stderr subscriber.
/// `verbose` raises the default level; `GOMODSYNC_LOG` overrides both.
pub fn init(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

pub fn log_filter(verbose: bool) -> EnvFilter {
    log_filter_with_env(std::env::var(LOG_ENV).ok(), verbose)
}

fn log_filter_with_env(directive: Option<String>, verbose: bool) -> EnvFilter {
    if let Some(filter) = directive.and_then(|d| EnvFilter::try_new(d).ok()) {
        return filter;
    }

    if verbose {
        EnvFilter::new("gomodsync=debug")
    } else {
        EnvFilter::new("gomodsync=warn")
    }
}
