//! Structured logging for the inventory server.
//!
//! Events are grouped by target so a deployment can turn one concern up
//! without the rest:
//! - `session`: flow transitions (start, rank, submit, reset, eviction).
//! - `scoring`: each classification with its axis deltas.
//! - `kolb_backend`: config loading, bind address, shutdown.
//!
//! `LOG_LEVEL` takes an EnvFilter directive string and replaces the default
//! filter outright. `LOG_FORMAT=json` emits one JSON object per event for
//! log shippers; anything else prints human-readable lines.

use tracing_subscriber::EnvFilter;

/// Flow and scoring at debug, the rest of the stack at info.
pub const DEFAULT_FILTER: &str = "info,session=debug,scoring=debug,kolb_backend=debug,tower_http=info,axum=info";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(s) if s.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// `LOG_LEVEL` if it parses, otherwise `DEFAULT_FILTER`.
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

pub fn init_tracing() {
    let format = LogFormat::parse(std::env::var("LOG_FORMAT").ok().as_deref());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter_from_env())
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}
