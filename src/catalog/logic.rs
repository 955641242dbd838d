//! Catalog loading, region filtering and country search.

use super::{Country, Region};
use crate::core::constants::RANDOM_SEARCH_QUERY;
use crate::error::{GeoError, Result};
use crate::text::normalize;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// The immutable, non-empty list of countries for a session.
#[derive(Debug, Clone)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new(countries: Vec<Country>) -> Result<Self> {
        if countries.is_empty() {
            return Err(GeoError::EmptyCatalog);
        }
        Ok(Self { countries })
    }

    /// Load the catalog from a JSON array of country records.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(GeoError::DatasetMissing {
                path: path.to_path_buf(),
            });
        }
        let json = fs::read_to_string(path)?;
        let countries: Vec<Country> =
            serde_json::from_str(&json).map_err(|source| GeoError::DatasetMalformed {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::new(countries)?;
        info!(path = %path.display(), countries = catalog.len(), "loaded country dataset");
        Ok(catalog)
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Countries in `region`, in catalog order. `Region::All` returns every country.
    pub fn filter_by_region(&self, region: Region) -> Vec<&Country> {
        let selected: Vec<&Country> = self
            .countries
            .iter()
            .filter(|c| region.contains(c.continent))
            .collect();
        debug!(region = region.name(), count = selected.len(), "filtered catalog");
        selected
    }

    /// Filter by a region label. Unknown labels fall back to an exact continent-name
    /// match, which is empty for anything that is not a continent.
    pub fn filter_by_label(&self, label: &str) -> Vec<&Country> {
        match Region::from_name(label) {
            Some(region) => self.filter_by_region(region),
            None => self
                .countries
                .iter()
                .filter(|c| c.continent.name() == label)
                .collect(),
        }
    }

    pub fn random<R: Rng>(&self, rng: &mut R) -> Option<&Country> {
        self.countries.choose(rng)
    }

    /// Find a country by accent/case-insensitive name, or a random one for "random".
    pub fn search<R: Rng>(&self, query: &str, rng: &mut R) -> Option<&Country> {
        let query = query.trim();
        if query.eq_ignore_ascii_case(RANDOM_SEARCH_QUERY) {
            return self.random(rng);
        }
        let wanted = normalize(query);
        self.countries.iter().find(|c| normalize(&c.name) == wanted)
    }
}
