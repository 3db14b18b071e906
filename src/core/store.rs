use crate::core::fuel;
use crate::domain::model::Exoplanet;
use crate::domain::ports::ExoplanetRepository;
use crate::utils::error::{CatalogError, Result};
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use uuid::Uuid;

/// In-process exoplanet catalog.
///
/// Every operation, reads included, runs under one exclusive lock, and every
/// read hands back a clone. Writes validate before they touch the map, so a
/// failed write leaves the catalog as it was.
#[derive(Debug, Default)]
pub struct ExoplanetStore {
    records: Mutex<HashMap<String, Exoplanet>>,
}

impl ExoplanetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, Exoplanet>> {
        // 寫入前已完成驗證，且每次只做單一 insert/remove，poison 後資料仍一致
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }

    #[cfg(test)]
    pub(crate) fn insert_unchecked(&self, record: Exoplanet) {
        self.lock().insert(record.id.clone(), record);
    }
}

impl ExoplanetRepository for ExoplanetStore {
    fn add(&self, candidate: Exoplanet) -> Result<Exoplanet> {
        candidate.validate()?;

        let record = Exoplanet {
            id: Uuid::new_v4().to_string(),
            ..candidate
        };
        self.lock().insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn list(&self) -> Vec<Exoplanet> {
        self.lock().values().cloned().collect()
    }

    fn get_by_id(&self, id: &str) -> Result<Exoplanet> {
        self.lock()
            .get(id)
            .cloned()
            .ok_or_else(|| CatalogError::not_found(id))
    }

    fn update(&self, id: &str, patch: Exoplanet) -> Result<Exoplanet> {
        let mut records = self.lock();
        let existing = records.get(id).ok_or_else(|| CatalogError::not_found(id))?;

        let merged = patch.merged_onto(existing);
        merged.validate()?;

        records.insert(id.to_string(), merged.clone());
        Ok(merged)
    }

    fn delete(&self, id: &str) -> Result<()> {
        self.lock()
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| CatalogError::not_found(id))
    }

    fn estimate_fuel(&self, id: &str, crew_capacity: i64) -> Result<f64> {
        let records = self.lock();
        let planet = records.get(id).ok_or_else(|| CatalogError::not_found(id))?;
        fuel::estimate(planet, crew_capacity)
    }
}
