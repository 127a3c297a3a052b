use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::SessionConfig;

pub const DEFAULT_FILTER: &str = "memory_match=info";

/// Install the global subscriber.
///
/// Output goes to `config.log_path` when set. Without a path nothing is
/// installed: the terminal UI owns stdout and stderr.
pub fn init_logging(config: &SessionConfig) -> anyhow::Result<()> {
    let Some(path) = config.log_path.as_ref() else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .compact(),
        )
        .try_init()?;
    Ok(())
}
