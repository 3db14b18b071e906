use crate::domain::model::Exoplanet;
use crate::utils::error::Result;

/// The catalog's contract surface. Implementations must be safe to share
/// across request handlers and must hand out owned copies only.
pub trait ExoplanetRepository: Send + Sync {
    fn add(&self, candidate: Exoplanet) -> Result<Exoplanet>;
    fn list(&self) -> Vec<Exoplanet>;
    fn get_by_id(&self, id: &str) -> Result<Exoplanet>;
    fn update(&self, id: &str, patch: Exoplanet) -> Result<Exoplanet>;
    fn delete(&self, id: &str) -> Result<()>;
    fn estimate_fuel(&self, id: &str, crew_capacity: i64) -> Result<f64>;
}
