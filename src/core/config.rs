//! Map configuration.
//!
//! Everything here is serde serialisable so a host can keep its map setup
//! in a JSON file; missing fields fall back to the defaults.

use crate::{
    core::{
        constants::{CANVAS_HEIGHT, CANVAS_WIDTH},
        style::Theme,
    },
    regions::Resolution,
    Result,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapOptions {
    /// Geometry set to load
    pub resolution: Resolution,
    /// Initial widget width
    pub width: f64,
    /// Initial widget height
    pub height: f64,
    pub hover_enabled: bool,
    pub selection_enabled: bool,
    /// Scroll zoom and zoom-to-region
    pub zoom_enabled: bool,
    /// Pan by dragging the map
    pub dragging: bool,
    pub show_markers: bool,
    pub theme: Theme,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            resolution: Resolution::HiRes,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            hover_enabled: true,
            selection_enabled: false,
            zoom_enabled: false,
            dragging: true,
            show_markers: true,
            theme: Theme::default(),
        }
    }
}

impl MapOptions {
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Preset for a map that only displays: no hover, selection or zoom
    pub fn static_map() -> Self {
        Self {
            hover_enabled: false,
            dragging: false,
            ..Self::default()
        }
    }

    /// Preset with every interaction turned on
    pub fn interactive() -> Self {
        Self {
            selection_enabled: true,
            zoom_enabled: true,
            ..Self::default()
        }
    }
}
