//! Geometry sources: where the per-region SVG path data comes from.
//!
//! The bundled data sets are Java-style `.properties` files mapping a region
//! id to a `;`-separated list of path strings, one per disjoint shape.

use crate::{prelude::HashMap, regions::RegionId, MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Region id to its path-data strings
pub type GeometryMap = HashMap<RegionId, Vec<String>>;

/// Selects one of the two bundled geometry sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Resolution {
    #[default]
    HiRes,
    LoRes,
}

/// Supplies region geometry for a resolution preset
pub trait GeometrySource {
    fn load(&self, resolution: Resolution) -> Result<GeometryMap>;
}

impl<F> GeometrySource for F
where
    F: Fn(Resolution) -> Result<GeometryMap>,
{
    fn load(&self, resolution: Resolution) -> Result<GeometryMap> {
        self(resolution)
    }
}

/// Splits a `;`-separated path list, dropping empty entries
pub fn split_paths(value: &str) -> Vec<String> {
    value
        .split(';')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parses `.properties` text into a geometry map.
///
/// Supports `#`/`!` comment lines, `=` or `:` separators and lines continued
/// with a trailing backslash.
pub fn parse_properties(text: &str) -> GeometryMap {
    let mut geometry = GeometryMap::default();
    let mut logical = String::new();

    for raw in text.lines() {
        let line = if logical.is_empty() {
            raw.trim_start()
        } else {
            raw.trim()
        };
        if logical.is_empty() && (line.is_empty() || line.starts_with('#') || line.starts_with('!'))
        {
            continue;
        }

        let trailing = line.len() - line.trim_end_matches('\\').len();
        if trailing % 2 == 1 {
            logical.push_str(&line[..line.len() - 1]);
            continue;
        }
        logical.push_str(line);

        let entry = std::mem::take(&mut logical);
        if let Some((key, value)) = split_entry(&entry) {
            geometry.insert(RegionId::new(key), split_paths(value));
        }
    }

    if !logical.is_empty() {
        if let Some((key, value)) = split_entry(&logical) {
            geometry.insert(RegionId::new(key), split_paths(value));
        }
    }

    geometry
}

fn split_entry(entry: &str) -> Option<(&str, &str)> {
    let at = entry.find(['=', ':'])?;
    let key = entry[..at].trim();
    if key.is_empty() {
        return None;
    }
    Some((key, entry[at + 1..].trim_start()))
}

/// Geometry held in memory, e.g. embedded with `include_str!` or built in tests
#[derive(Debug, Clone, Default)]
pub struct StaticGeometrySource {
    hi_res: GeometryMap,
    lo_res: Option<GeometryMap>,
}

impl StaticGeometrySource {
    /// One geometry set served for both resolutions
    pub fn new(geometry: GeometryMap) -> Self {
        Self {
            hi_res: geometry,
            lo_res: None,
        }
    }

    pub fn with_lo_res(mut self, geometry: GeometryMap) -> Self {
        self.lo_res = Some(geometry);
        self
    }

    /// Builds a source from `(id, "path;path")` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let geometry = pairs
            .into_iter()
            .map(|(id, paths)| (RegionId::new(id), split_paths(paths)))
            .collect();
        Self::new(geometry)
    }
}

impl GeometrySource for StaticGeometrySource {
    fn load(&self, resolution: Resolution) -> Result<GeometryMap> {
        match (resolution, &self.lo_res) {
            (Resolution::LoRes, Some(lo_res)) => Ok(lo_res.clone()),
            _ => Ok(self.hi_res.clone()),
        }
    }
}

/// Reads one `.properties` file per resolution
#[derive(Debug, Clone)]
pub struct PropertiesGeometrySource {
    hi_res: PathBuf,
    lo_res: PathBuf,
}

impl PropertiesGeometrySource {
    pub fn new(hi_res: impl Into<PathBuf>, lo_res: impl Into<PathBuf>) -> Self {
        Self {
            hi_res: hi_res.into(),
            lo_res: lo_res.into(),
        }
    }

    /// Looks for `hires.properties` and `lores.properties` in `dir`
    pub fn from_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join("hires.properties"), dir.join("lores.properties"))
    }

    fn path_for(&self, resolution: Resolution) -> &Path {
        match resolution {
            Resolution::HiRes => &self.hi_res,
            Resolution::LoRes => &self.lo_res,
        }
    }
}

impl GeometrySource for PropertiesGeometrySource {
    fn load(&self, resolution: Resolution) -> Result<GeometryMap> {
        let path = self.path_for(resolution);
        log::debug!("Loading region geometry from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Ok(parse_properties(&text))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonPaths {
    Joined(String),
    List(Vec<String>),
}

/// Reads geometry from JSON objects: `{"DE": "M..;M.."}` or `{"DE": ["M..", "M.."]}`
#[derive(Debug, Clone)]
pub struct JsonGeometrySource {
    hi_res: PathBuf,
    lo_res: PathBuf,
}

impl JsonGeometrySource {
    pub fn new(hi_res: impl Into<PathBuf>, lo_res: impl Into<PathBuf>) -> Self {
        Self {
            hi_res: hi_res.into(),
            lo_res: lo_res.into(),
        }
    }

    pub fn parse(text: &str) -> Result<GeometryMap> {
        let raw: HashMap<RegionId, JsonPaths> = serde_json::from_str(text)?;
        let geometry = raw
            .into_iter()
            .map(|(id, paths)| {
                let paths = match paths {
                    JsonPaths::Joined(joined) => split_paths(&joined),
                    JsonPaths::List(list) => list
                        .into_iter()
                        .filter(|p| !p.trim().is_empty())
                        .collect(),
                };
                (id, paths)
            })
            .collect();
        Ok(geometry)
    }
}

impl GeometrySource for JsonGeometrySource {
    fn load(&self, resolution: Resolution) -> Result<GeometryMap> {
        let path = match resolution {
            Resolution::HiRes => &self.hi_res,
            Resolution::LoRes => &self.lo_res,
        };
        log::debug!("Loading region geometry from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text).map_err(|e| {
            MapError::GeometrySource(format!("{}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_properties() {
        let text = "# world geometry\n\
                    ! another comment\n\
                    \n\
                    DE=M 0 0 L 10 0 L 10 10 Z\n\
                    GR = M 1 1 L 2 2 Z;M 5 5 L 6 6 Z;\n\
                    FR:M 3 3 L 4 4 Z\n";
        let geometry = parse_properties(text);
        assert_eq!(geometry.len(), 3);
        assert_eq!(geometry["DE"], vec!["M 0 0 L 10 0 L 10 10 Z".to_string()]);
        assert_eq!(geometry["GR"].len(), 2);
        assert_eq!(geometry["FR"], vec!["M 3 3 L 4 4 Z".to_string()]);
    }

    #[test]
    fn test_parse_properties_continuation() {
        let text = "IT=M 0 0 L 1 1 Z;\\\n    M 2 2 L 3 3 Z\nES=M 9 9 Z";
        let geometry = parse_properties(text);
        assert_eq!(
            geometry["IT"],
            vec!["M 0 0 L 1 1 Z".to_string(), "M 2 2 L 3 3 Z".to_string()]
        );
        assert_eq!(geometry["ES"].len(), 1);
    }

    #[test]
    fn test_static_source_resolutions() {
        let source = StaticGeometrySource::from_pairs([("A", "M 0 0 L 1 1 Z")])
            .with_lo_res(parse_properties("A=M 0 0 Z\nB=M 1 1 Z"));
        assert_eq!(source.load(Resolution::HiRes).unwrap().len(), 1);
        assert_eq!(source.load(Resolution::LoRes).unwrap().len(), 2);
    }

    #[test]
    fn test_json_source_accepts_both_shapes() {
        let geometry =
            JsonGeometrySource::parse(r#"{"A": "M 0 0 Z;M 1 1 Z", "B": ["M 2 2 Z", " "]}"#)
                .unwrap();
        assert_eq!(geometry["A"].len(), 2);
        assert_eq!(geometry["B"], vec!["M 2 2 Z".to_string()]);
        assert!(JsonGeometrySource::parse("[1, 2]").is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let source = PropertiesGeometrySource::from_dir("/definitely/not/here");
        assert!(matches!(
            source.load(Resolution::LoRes),
            Err(MapError::Io(_))
        ));
    }

    #[test]
    fn test_closure_source() {
        let source = |_: Resolution| -> Result<GeometryMap> {
            Err(MapError::GeometrySource("offline".into()))
        };
        assert!(source.load(Resolution::HiRes).is_err());
    }
}
