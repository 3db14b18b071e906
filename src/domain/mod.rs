// Domain layer: the exoplanet record and the repository port. No I/O here.

pub mod model;
pub mod ports;
