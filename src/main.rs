use tracing::{error, info};

use reelgrid::config::Config;
use reelgrid::omdb::OmdbClient;
use reelgrid::ui;

fn main() {
    // Use RUST_LOG if set, otherwise default to info level.
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_filter).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(err) => {
            error!("configuration error: {err}");
            std::process::exit(1);
        }
    };

    let client = match OmdbClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            error!("failed to build catalog client: {err}");
            std::process::exit(1);
        }
    };

    info!("starting reelgrid");

    dioxus::LaunchBuilder::desktop()
        .with_cfg(ui::make_config())
        .with_context(config)
        .with_context(client)
        .launch(ui::App);
}
