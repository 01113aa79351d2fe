use tracing::{info, warn};
use vmanage_records::app_config::AppConfig;
use vmanage_records::dump::load_dumps_from;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let dumps = load_dumps_from(config.dumps().directory(), config.dumps().extension()).await?;

    for dump in &dumps {
        match dump.describe() {
            Ok(records) => records.iter().for_each(|record| println!("{}", record)),
            Err(err) => warn!("⚠️ Unable to decode '{}' as {}: {}", dump.path().display(), dump.kind(), err),
        }
    }

    info!("🔥 Described {} payload dumps", dumps.len());
    Ok(())
}
