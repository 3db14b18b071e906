use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

pub const DISTANCE_RANGE: RangeInclusive<i64> = 10..=1000;
pub const RADIUS_RANGE: RangeInclusive<f64> = 0.1..=10.0;
pub const TERRESTRIAL_MASS_RANGE: RangeInclusive<f64> = 0.1..=10.0;

/// Planet classification.
///
/// Only `GasGiant` and `Terrestrial` are ever stored. `Unset` is the zero
/// value a patch uses to mean "keep the existing type"; `Other` carries any
/// unrecognised string so it can be rejected by validation instead of at
/// deserialization time.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ExoplanetType {
    GasGiant,
    Terrestrial,
    #[default]
    Unset,
    Other(String),
}

impl ExoplanetType {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::GasGiant => "GasGiant",
            Self::Terrestrial => "Terrestrial",
            Self::Unset => "",
            Self::Other(value) => value,
        }
    }
}

impl From<String> for ExoplanetType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "GasGiant" => Self::GasGiant,
            "Terrestrial" => Self::Terrestrial,
            "" => Self::Unset,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for ExoplanetType {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ExoplanetType> for String {
    fn from(value: ExoplanetType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for ExoplanetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One catalog entry. Also used as the Add candidate and the Update patch,
/// where every missing field deserializes to its zero value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Exoplanet {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Light-years from the reference point.
    pub distance: i64,
    /// Earth-radius units.
    pub radius: f64,
    /// Earth-mass units; only meaningful for terrestrial planets.
    #[serde(skip_serializing_if = "is_zero")]
    pub mass: f64,
    #[serde(rename = "type")]
    pub planet_type: ExoplanetType,
}

fn is_zero(value: &f64) -> bool {
    *value == 0.0
}

impl Exoplanet {
    /// Creation needs a name, distance, radius and type that are not their
    /// zero values. Updates skip this so zero fields can mean "unchanged".
    pub fn require_fields(&self) -> Result<()> {
        let missing = if self.name.is_empty() {
            Some("name")
        } else if self.distance == 0 {
            Some("distance")
        } else if self.radius == 0.0 {
            Some("radius")
        } else if self.planet_type.is_unset() {
            Some("type")
        } else {
            None
        };

        match missing {
            Some(field) => Err(CatalogError::validation(format!("{} is required", field))),
            None => Ok(()),
        }
    }

    /// Fold this patch onto `existing`. Any zero-valued field in the patch
    /// falls back to the existing value, so a patch can never clear a field.
    /// Mass falls back only when the merged type is terrestrial.
    pub fn merged_onto(self, existing: &Exoplanet) -> Exoplanet {
        let mut merged = self;
        merged.id = existing.id.clone();

        if merged.name.is_empty() {
            merged.name = existing.name.clone();
        }
        if merged.description.is_empty() {
            merged.description = existing.description.clone();
        }
        if merged.distance == 0 {
            merged.distance = existing.distance;
        }
        if merged.radius == 0.0 {
            merged.radius = existing.radius;
        }
        if merged.planet_type.is_unset() {
            merged.planet_type = existing.planet_type.clone();
        }
        if merged.planet_type == ExoplanetType::Terrestrial && merged.mass == 0.0 {
            merged.mass = existing.mass;
        }

        merged
    }
}

impl Validate for Exoplanet {
    /// Range and type checks in fixed order; the first failure is reported.
    fn validate(&self) -> Result<()> {
        if !DISTANCE_RANGE.contains(&self.distance) {
            return Err(CatalogError::validation("distance out of range"));
        }
        if !RADIUS_RANGE.contains(&self.radius) {
            return Err(CatalogError::validation("radius out of range"));
        }
        if self.planet_type == ExoplanetType::Terrestrial
            && !TERRESTRIAL_MASS_RANGE.contains(&self.mass)
        {
            return Err(CatalogError::validation("mass out of range for terrestrial"));
        }
        if !matches!(
            self.planet_type,
            ExoplanetType::GasGiant | ExoplanetType::Terrestrial
        ) {
            return Err(CatalogError::validation("invalid type"));
        }
        Ok(())
    }
}

/// Response payload of the fuel-estimation route.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FuelEstimate {
    #[serde(rename = "fuelEstimation")]
    pub fuel_estimation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terrestrial() -> Exoplanet {
        Exoplanet {
            id: String::new(),
            name: "Kepler-22b".to_string(),
            description: "super-Earth".to_string(),
            distance: 600,
            radius: 2.4,
            mass: 6.4,
            planet_type: ExoplanetType::Terrestrial,
        }
    }

    fn message(result: Result<()>) -> String {
        match result {
            Err(CatalogError::ValidationError { message }) => message,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_distance_boundaries() {
        for (distance, ok) in [(10, true), (1000, true), (9, false), (1001, false)] {
            let planet = Exoplanet {
                distance,
                ..terrestrial()
            };
            assert_eq!(planet.validate().is_ok(), ok, "distance {}", distance);
        }
        let planet = Exoplanet {
            distance: 9,
            ..terrestrial()
        };
        assert_eq!(message(planet.validate()), "distance out of range");
    }

    #[test]
    fn test_radius_boundaries() {
        for (radius, ok) in [(0.1, true), (10.0, true), (0.09, false), (10.01, false)] {
            let planet = Exoplanet {
                radius,
                ..terrestrial()
            };
            assert_eq!(planet.validate().is_ok(), ok, "radius {}", radius);
        }
        let planet = Exoplanet {
            radius: f64::NAN,
            ..terrestrial()
        };
        assert_eq!(message(planet.validate()), "radius out of range");
    }

    #[test]
    fn test_terrestrial_mass_boundaries() {
        for (mass, ok) in [
            (0.1, true),
            (10.0, true),
            (0.09, false),
            (10.01, false),
            (0.0, false),
        ] {
            let planet = Exoplanet {
                mass,
                ..terrestrial()
            };
            assert_eq!(planet.validate().is_ok(), ok, "mass {}", mass);
        }
        let planet = Exoplanet {
            mass: 0.0,
            ..terrestrial()
        };
        assert_eq!(message(planet.validate()), "mass out of range for terrestrial");
    }

    #[test]
    fn test_gas_giant_ignores_mass() {
        let planet = Exoplanet {
            mass: 5000.0,
            planet_type: ExoplanetType::GasGiant,
            ..terrestrial()
        };
        assert!(planet.validate().is_ok());
    }

    #[test]
    fn test_type_checked_last() {
        let unknown = Exoplanet {
            planet_type: ExoplanetType::from("Rocky"),
            ..terrestrial()
        };
        assert_eq!(message(unknown.validate()), "invalid type");

        let unset = Exoplanet {
            planet_type: ExoplanetType::Unset,
            ..terrestrial()
        };
        assert_eq!(message(unset.validate()), "invalid type");

        // 距離錯誤優先於型別錯誤
        let both = Exoplanet {
            distance: 5,
            planet_type: ExoplanetType::from("Rocky"),
            ..terrestrial()
        };
        assert_eq!(message(both.validate()), "distance out of range");
    }

    #[test]
    fn test_type_serde() {
        let planet: Exoplanet = serde_json::from_str(
            r#"{"name":"HD 189733 b","distance":64,"radius":1.1,"type":"GasGiant"}"#,
        )
        .unwrap();
        assert_eq!(planet.planet_type, ExoplanetType::GasGiant);
        assert_eq!(planet.mass, 0.0);
        assert!(planet.description.is_empty());

        let json = serde_json::to_value(&planet).unwrap();
        assert_eq!(json["type"], "GasGiant");
        assert!(json.get("mass").is_none());

        let odd: Exoplanet = serde_json::from_str(r#"{"type":"Rocky"}"#).unwrap();
        assert_eq!(odd.planet_type, ExoplanetType::Other("Rocky".to_string()));
    }

    #[test]
    fn test_require_fields_in_order() {
        assert!(terrestrial().require_fields().is_ok());

        let unnamed = Exoplanet {
            name: String::new(),
            distance: 0,
            ..terrestrial()
        };
        assert_eq!(message(unnamed.require_fields()), "name is required");

        let no_type = Exoplanet {
            planet_type: ExoplanetType::Unset,
            ..terrestrial()
        };
        assert_eq!(message(no_type.require_fields()), "type is required");
    }

    #[test]
    fn test_merge_keeps_existing_on_zero_values() {
        let existing = Exoplanet {
            id: "abc".to_string(),
            ..terrestrial()
        };
        let patch = Exoplanet {
            id: "ignored".to_string(),
            distance: 700,
            ..Exoplanet::default()
        };

        let merged = patch.merged_onto(&existing);
        assert_eq!(merged.id, "abc");
        assert_eq!(merged.distance, 700);
        assert_eq!(merged.name, existing.name);
        assert_eq!(merged.description, existing.description);
        assert_eq!(merged.radius, existing.radius);
        assert_eq!(merged.mass, existing.mass);
        assert_eq!(merged.planet_type, ExoplanetType::Terrestrial);
    }

    #[test]
    fn test_merge_cannot_clear_fields() {
        let existing = terrestrial();
        let patch = Exoplanet {
            description: String::new(),
            ..Exoplanet::default()
        };
        assert_eq!(patch.merged_onto(&existing).description, "super-Earth");
    }

    #[test]
    fn test_merge_mass_follows_resulting_type() {
        let gas = Exoplanet {
            mass: 300.0,
            planet_type: ExoplanetType::GasGiant,
            ..terrestrial()
        };

        // 轉成岩石行星但沒給質量：沿用舊值
        let patch = Exoplanet {
            planet_type: ExoplanetType::Terrestrial,
            ..Exoplanet::default()
        };
        let merged = patch.merged_onto(&gas);
        assert_eq!(merged.mass, 300.0);
        assert!(merged.validate().is_err());

        // 氣體巨行星不沿用質量
        let patch = Exoplanet::default();
        let merged = patch.merged_onto(&gas);
        assert_eq!(merged.planet_type, ExoplanetType::GasGiant);
        assert_eq!(merged.mass, 0.0);
    }
}
