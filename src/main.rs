use anyhow::Result;
use tracing_subscriber::EnvFilter;
use ttrack::commands::Cli;
use ttrack::libs::messages::macros::is_debug_mode;

fn main() -> Result<()> {
    // In debug mode the message macros route through tracing; install a
    // subscriber so that output actually lands somewhere.
    if is_debug_mode() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .init();
    }

    Cli::menu()
}
