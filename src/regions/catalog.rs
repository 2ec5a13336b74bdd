use crate::{core::style::Color, prelude::HashMap, regions::RegionId, MapError, Result};
use serde::{Deserialize, Serialize};

/// Per-region catalog entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionInfo {
    /// Display name
    pub name: Option<String>,
    /// Fill that always wins over the theme fill
    pub color: Option<Color>,
    /// Stroke that always wins over the theme stroke
    pub stroke: Option<Color>,
}

impl RegionInfo {
    pub fn with_color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }
}

/// Closed catalog of valid region ids, their overrides and named groups.
///
/// An empty catalog accepts every region the geometry source provides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionCatalog {
    regions: HashMap<RegionId, RegionInfo>,
    groups: HashMap<String, Vec<RegionId>>,
}

impl RegionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn with_region(mut self, id: impl Into<RegionId>, info: RegionInfo) -> Self {
        self.regions.insert(id.into(), info);
        self
    }

    pub fn with_group<I>(mut self, name: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<RegionId>,
    {
        self.groups
            .insert(name.into(), members.into_iter().map(Into::into).collect());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.regions.contains_key(id)
    }

    pub fn info(&self, id: &str) -> Option<&RegionInfo> {
        self.regions.get(id)
    }

    pub fn override_color(&self, id: &str) -> Option<Color> {
        self.info(id).and_then(|info| info.color)
    }

    pub fn override_stroke(&self, id: &str) -> Option<Color> {
        self.info(id).and_then(|info| info.stroke)
    }

    /// Members of a named group
    pub fn group(&self, name: &str) -> Result<&[RegionId]> {
        self.groups
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| MapError::UnknownGroup(name.to_string()))
    }

    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_from_json() {
        let catalog = RegionCatalog::from_json(
            r##"{
                "regions": {
                    "DE": {"name": "Germany"},
                    "FR": {"color": "#ff0000"}
                },
                "groups": {"EUROPE": ["DE", "FR"]}
            }"##,
        )
        .unwrap();

        assert!(catalog.contains("DE"));
        assert_eq!(catalog.override_color("DE"), None);
        assert_eq!(catalog.override_color("FR"), Some(Color::RED));
        assert_eq!(catalog.group("EUROPE").unwrap().len(), 2);
        assert!(matches!(
            catalog.group("ATLANTIS"),
            Err(MapError::UnknownGroup(_))
        ));
    }

    #[test]
    fn test_builder_api() {
        let catalog = RegionCatalog::new()
            .with_region("GR", RegionInfo::with_color(Color::WHITE))
            .with_group("SOUTH", ["GR", "IT"]);
        assert_eq!(catalog.override_color("GR"), Some(Color::WHITE));
        assert_eq!(catalog.override_stroke("GR"), None);
        assert_eq!(catalog.group_names().collect::<Vec<_>>(), vec!["SOUTH"]);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result = RegionCatalog::from_json(r#"{"regions": {"DE": {"color": "blue"}}}"#);
        assert!(matches!(result, Err(MapError::Serialization(_))));
    }
}
