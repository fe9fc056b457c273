use std::sync::Arc;

use scada_layout_server::configs::Settings;
use scada_layout_server::run;
use scada_layout_server::services::LocalTimeProvider;

fn main() -> anyhow::Result<()> {
    let settings = Arc::new(Settings::new()?);

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            let app_name = env!("CARGO_PKG_NAME").replace('-', "_");
            let level = settings.logger.level.as_str();

            format!("{app_name}={level},tower_http={level}").into()
        }))
        .init();

    // The local offset can only be read while the process is single threaded
    let time_provider = Arc::new(LocalTimeProvider::new());

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(&settings, time_provider))
}
