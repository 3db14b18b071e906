use anyhow::Context;
use clap::Parser;
use exoplanet_catalog::utils::{logger, validation::Validate};
use exoplanet_catalog::{
    ApiRequest, ApiResponse, CatalogConfig, CatalogError, CliConfig, ExoplanetRouter,
    ExoplanetStore,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

fn exit_with(e: &CatalogError) -> ! {
    tracing::error!("❌ {} (Category: {:?}, Severity: {:?})", e, e.category(), e.severity());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 建議: {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    if let Err(e) = cli.validate() {
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    // 先載入配置，日誌格式取決於配置內容
    let catalog = match &cli.config {
        Some(path) => match CatalogConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let verbose = cli.verbose || catalog.as_ref().is_some_and(|c| c.verbose());
    if cli.json_logs || catalog.as_ref().is_some_and(|c| c.json_logs()) {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    tracing::info!("🚀 Starting exoplanet catalog");

    let store = Arc::new(ExoplanetStore::new());

    if let Some(config) = &catalog {
        if let Err(e) = config.validate() {
            exit_with(&e);
        }
        match config.seed(store.as_ref()) {
            Ok(seeded) => tracing::info!(
                "📁 Catalog '{}' seeded with {} exoplanets",
                config.catalog.name,
                seeded.len()
            ),
            Err(e) => exit_with(&e),
        }
    }

    let router = ExoplanetRouter::new(Arc::clone(&store));
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await.context("reading request line")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<ApiRequest>(line) {
            Ok(request) => router.handle(&request),
            Err(e) => {
                tracing::warn!("Malformed request line: {}", e);
                ApiResponse::error(400, &format!("invalid request line: {}", e))
            }
        };

        let mut encoded = serde_json::to_string(&response).context("encoding response")?;
        encoded.push('\n');
        stdout.write_all(encoded.as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("✅ Input closed, catalog held {} exoplanets", store.len());
    Ok(())
}
