//! Region geometry: identifiers, the closed catalog, geometry sources and
//! the registry of parsed paths.

pub mod catalog;
pub mod registry;
pub mod source;

use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

pub use catalog::{RegionCatalog, RegionInfo};
pub use registry::{Region, RegionPath, RegionRegistry};
pub use source::{
    parse_properties, GeometryMap, GeometrySource, JsonGeometrySource, PropertiesGeometrySource,
    Resolution, StaticGeometrySource,
};

/// Unique name of a region, e.g. an ISO country code
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for RegionId {
    fn borrow(&self) -> &str {
        &self.0
    }
}
