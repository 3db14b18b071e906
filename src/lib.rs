pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::http::{ApiRequest, ApiResponse, ExoplanetRouter};
pub use crate::config::CatalogConfig;
pub use crate::core::store::ExoplanetStore;
pub use crate::domain::model::{Exoplanet, ExoplanetType, FuelEstimate};
pub use crate::domain::ports::ExoplanetRepository;
pub use crate::utils::error::{CatalogError, Result};
