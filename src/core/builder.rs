//! Fluent construction of [`WorldMap`] instances.

use crate::{
    core::{config::MapOptions, map::WorldMap, style::Theme},
    regions::{GeometrySource, RegionCatalog, Resolution, StaticGeometrySource},
};

/// Builder for creating and configuring WorldMap instances
pub struct WorldMapBuilder {
    options: MapOptions,
    source: Option<Box<dyn GeometrySource>>,
    catalog: RegionCatalog,
}

impl WorldMapBuilder {
    pub fn new() -> Self {
        Self {
            options: MapOptions::default(),
            source: None,
            catalog: RegionCatalog::default(),
        }
    }

    /// Replace all options at once
    pub fn with_options(mut self, options: MapOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_geometry_source(mut self, source: impl GeometrySource + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn with_catalog(mut self, catalog: RegionCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn with_resolution(mut self, resolution: Resolution) -> Self {
        self.options.resolution = resolution;
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.options.width = width;
        self.options.height = height;
        self
    }

    pub fn with_hover(mut self, enabled: bool) -> Self {
        self.options.hover_enabled = enabled;
        self
    }

    pub fn with_selection(mut self, enabled: bool) -> Self {
        self.options.selection_enabled = enabled;
        self
    }

    pub fn with_zoom(mut self, enabled: bool) -> Self {
        self.options.zoom_enabled = enabled;
        self
    }

    pub fn with_dragging(mut self, enabled: bool) -> Self {
        self.options.dragging = enabled;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.options.theme = theme;
        self
    }

    /// Builds the map. A failing geometry source does not abort
    /// construction; see [`WorldMap::load_warning`].
    pub fn build(self) -> WorldMap {
        let source = self
            .source
            .unwrap_or_else(|| Box::new(StaticGeometrySource::default()));
        WorldMap::new(self.options, source.as_ref(), self.catalog)
    }
}

impl Default for WorldMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
