use crate::domain::model::{Exoplanet, ExoplanetType};
use crate::utils::error::{CatalogError, Result};

/// Surface-gravity stand-in used by the fuel model. Gas giants use a fixed
/// 0.5 in place of mass.
pub fn gravity(planet: &Exoplanet) -> Result<f64> {
    let radius_squared = planet.radius.powi(2);
    match &planet.planet_type {
        ExoplanetType::GasGiant => Ok(0.5 / radius_squared),
        ExoplanetType::Terrestrial => Ok(planet.mass / radius_squared),
        other => Err(CatalogError::InvalidType {
            value: other.to_string(),
        }),
    }
}

/// `distance / gravity^2 * crew_capacity`, in plain IEEE arithmetic.
/// Crew capacity is taken as given, so zero or negative crews flow through.
pub fn estimate(planet: &Exoplanet, crew_capacity: i64) -> Result<f64> {
    let gravity = gravity(planet)?;
    Ok(planet.distance as f64 / gravity.powi(2) * crew_capacity as f64)
}
