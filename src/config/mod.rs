pub mod toml_config;

pub use toml_config::CatalogConfig;

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "exoplanet-catalog")]
#[command(about = "In-memory exoplanet catalog serving JSON-line requests on stdin")]
pub struct CliConfig {
    /// Path to a TOML catalog file with seed records
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON instead of the compact format
    #[arg(long)]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validate_file_path("config", path)?;
        }
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli_flags() {
        let config =
            CliConfig::parse_from(["exoplanet-catalog", "--config", "demos/catalog.toml", "-v"]);
        assert_eq!(config.config.as_deref(), Some("demos/catalog.toml"));
        assert!(config.verbose);
        assert!(!config.json_logs);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_path_is_invalid() {
        let config = CliConfig::parse_from(["exoplanet-catalog", "--config", ""]);
        assert!(config.validate().is_err());
    }
}
