pub mod fuel;
pub mod store;

pub use crate::domain::model::{Exoplanet, ExoplanetType, FuelEstimate};
pub use crate::domain::ports::ExoplanetRepository;
pub use crate::utils::error::Result;
