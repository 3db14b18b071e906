use crate::domain::model::Exoplanet;
use crate::domain::ports::ExoplanetRepository;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

const LOG_FORMATS: [&str; 2] = ["compact", "json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub catalog: CatalogInfo,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub exoplanets: Vec<Exoplanet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub format: Option<String>,
    pub verbose: Option<bool>,
}

impl CatalogConfig {
    /// 讀取目錄檔；檔案不存在時回傳 IoError
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        std::fs::read_to_string(path.as_ref())?.parse()
    }

    /// 替換環境變數 (例如 ${CATALOG_NAME})，未定義的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CatalogError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("catalog.name", &self.catalog.name)?;
        validate_one_of("logging.format", self.log_format(), &LOG_FORMATS)?;
        Ok(())
    }

    pub fn log_format(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|l| l.format.as_deref())
            .unwrap_or("compact")
    }

    pub fn json_logs(&self) -> bool {
        self.log_format() == "json"
    }

    pub fn verbose(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.verbose)
            .unwrap_or(false)
    }

    /// Add every seed record through the repository. Seeds pass the same
    /// required-field check as a created record, then the store's own
    /// validation. Stops at the first rejected seed.
    pub fn seed<R: ExoplanetRepository + ?Sized>(&self, repository: &R) -> Result<Vec<Exoplanet>> {
        self.exoplanets
            .iter()
            .enumerate()
            .map(|(index, planet)| {
                planet
                    .require_fields()
                    .and_then(|()| repository.add(planet.clone()))
                    .map_err(|e| CatalogError::ConfigValidationError {
                        field: format!("exoplanets[{}]", index),
                        message: e.to_string(),
                    })
            })
            .collect()
    }
}

impl FromStr for CatalogConfig {
    type Err = CatalogError;

    fn from_str(content: &str) -> Result<Self> {
        let expanded = Self::substitute_env_vars(content)?;
        toml::from_str(&expanded).map_err(|e| CatalogError::ConfigError {
            message: format!("catalog file is not valid TOML: {}", e),
        })
    }
}

impl Validate for CatalogConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
