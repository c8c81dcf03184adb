//! Global tracing subscriber setup.
//!
//! The level comes from `RUST_LOG` (default `info`); `LOG_FORMAT=json` switches
//! to one JSON object per line. Load `.env` before calling [`init_tracing`].

use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let json = env::var("LOG_FORMAT").is_ok_and(|format| format.eq_ignore_ascii_case("json"));

    let registry = Registry::default().with(env_filter);
    let result = if json {
        registry.with(fmt::layer().json().with_target(true)).try_init()
    } else {
        registry.with(fmt::layer().with_target(true)).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))
}
