//! # worldmap
//!
//! An interactive vector world map engine: named country regions drawn from
//! SVG path data, hover/press/selection highlighting, scroll zoom around
//! the pointer, zoom-to-region and lat/lon markers.
//!
//! The engine is host agnostic. A host feeds [`InputEvent`]s into a
//! [`WorldMap`] and drains the resulting [`DrawCommand`]s; the optional
//! `egui` feature ships a ready-made widget.

pub mod core;
pub mod input;
pub mod layers;
pub mod prelude;
pub mod regions;
pub mod rendering;
#[cfg(feature = "egui")]
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    bounds::Bounds,
    builder::WorldMapBuilder,
    config::MapOptions,
    geo::{LatLng, Point},
    map::WorldMap,
    projection::lat_lon_to_xy,
    style::{Color, Theme},
    viewport::{ViewTransform, Viewport},
};

pub use input::{
    EventHandled, InputEvent, InteractionStateMachine, MarkerEvent, PointerKind, RegionEvent,
};

pub use layers::marker::{Marker, MarkerId, MarkerLayer, MarkerShape};

pub use regions::{
    GeometrySource, JsonGeometrySource, PropertiesGeometrySource, RegionCatalog, RegionId,
    RegionInfo, RegionRegistry, Resolution, StaticGeometrySource,
};

pub use rendering::{DrawCommand, RenderContext};

#[cfg(feature = "egui")]
pub use ui::{WorldMapUiExt, WorldMapWidget};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Geometry source error: {0}")]
    GeometrySource(String),

    #[error("Invalid path for region {region}: {reason}")]
    InvalidPath { region: RegionId, reason: String },

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    #[error("Unknown region: {0}")]
    UnknownRegion(RegionId),

    #[error("Unknown region group: {0}")]
    UnknownGroup(String),

    #[error("Unknown marker: {0}")]
    UnknownMarker(MarkerId),

    #[error("Degenerate bounds: {0:?}")]
    DegenerateBounds(Bounds),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger`, honoring `RUST_LOG`. Repeated calls are ignored.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let _ = env_logger::builder().format_timestamp_millis().try_init();
}
