use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable that overrides `-v` flags with a full filter directive
pub const LOG_ENV_VAR: &str = "RUST_LOG";

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "warn,chat_export_parser=debug",
        _ => "warn,chat_export_parser=trace",
    }
}

/// Install the global tracing subscriber, writing to stderr.
///
/// stdout is reserved for command output (transcripts, JSON), so logs never
/// mix with it. Calling this twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
