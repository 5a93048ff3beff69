use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 3] = ["vidpace", "ffmpeg_source", "ffmpeg_decode"];

/**
    Default filter directives for a verbosity level.

    `-q` maps to -1, no flag to 0, and each `-v` adds one.
*/
pub fn default_directives(verbosity: i8) -> String {
    let level = match verbosity {
        i8::MIN..=-1 => "warn",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/**
    Install the global tracing subscriber, writing to stderr.

    `RUST_LOG` takes precedence over the verbosity flags when set.
*/
pub fn init(verbosity: i8) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_directives(verbosity))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))
}
