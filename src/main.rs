use anyhow::Result;
use tracing_subscriber::EnvFilter;

use track_command::config::AppConfig;
use track_command::ui::{App, Dashboard};

fn main() -> Result<()> {
    let config = AppConfig::from_env();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone())),
        )
        .init();

    // Generation calls run on this runtime while the event loop blocks
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let app = App::new(&config, runtime.handle().clone());
    let mut dashboard = Dashboard::new(app)?;
    dashboard.run()
}
