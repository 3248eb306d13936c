//! The set of city networks served by one process.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::network::{Network, NetworkDescription};

use super::error::CatalogError;

/// Top-level shape of a description file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDescription {
    #[serde(default)]
    pub networks: Vec<NetworkDescription>,
}

/// Independent city networks, keyed by slug.
///
/// Networks never share stations or lines; every query is scoped to one.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    networks: Vec<Network>,
}

impl Catalog {
    /// Validate every network in a description and build its graph.
    pub fn from_description(description: CatalogDescription) -> Result<Self, CatalogError> {
        let mut slugs = HashSet::new();
        let mut networks = Vec::with_capacity(description.networks.len());

        for desc in description.networks {
            let slug = desc.slug();
            if !slugs.insert(slug.clone()) {
                return Err(CatalogError::DuplicateNetwork(slug));
            }

            let city = desc.city.clone();
            let network =
                Network::build(desc).map_err(|source| CatalogError::Network { city, source })?;

            debug!(
                slug = %network.slug(),
                lines = network.lines().len(),
                stations = network.stations().len(),
                interchanges = network.interchange_stations().len(),
                "Built network graph"
            );
            networks.push(network);
        }

        Ok(Self { networks })
    }

    /// Parse and build a catalog from JSON text.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let description: CatalogDescription = serde_json::from_str(json)?;
        Self::from_description(description)
    }

    /// Read, parse and build a catalog from a description file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&json)?;

        info!(
            path = %path.display(),
            networks = catalog.len(),
            "Loaded network catalog"
        );
        Ok(catalog)
    }

    /// Look up a network by slug, ignoring case.
    pub fn get(&self, slug: &str) -> Option<&Network> {
        let slug = slug.to_lowercase();
        self.networks.iter().find(|n| n.slug() == slug)
    }

    /// Networks in declaration order.
    pub fn networks(&self) -> &[Network] {
        &self.networks
    }

    pub fn len(&self) -> usize {
        self.networks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.networks.is_empty()
    }
}
