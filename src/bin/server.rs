use suyatrade::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let config = Config::new();
    info!("suyatrade {} starting", version());
    info!("Remote API: {}", config.base_url());
    if config.debug {
        debug!("Configuration: {}", config);
    }

    let bind_addr = config.server.bind_addr.clone();
    let settings = SettingsStore::open(&config.storage.data_dir).await?;
    let client = Client::new(config)?;

    start_server(AppState::new(client, settings), &bind_addr).await?;
    Ok(())
}
