//! Tracing setup for the server binary.
//!
//! `LOG_LEVEL` holds the filter directives (e.g. `"debug"` or
//! `"info,math_worksheet_gen=debug"`); `LOG_FORMAT=json` switches to
//! structured JSON lines, anything else prints human-readable output.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,math_worksheet_gen=info,tower_http=info,axum=info";

pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true);

    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
