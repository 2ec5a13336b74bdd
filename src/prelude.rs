//! Prelude module for common worldmap types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use worldmap::prelude::*;`

pub use crate::core::{
    bounds::Bounds,
    builder::WorldMapBuilder,
    config::MapOptions,
    geo::{LatLng, Point},
    map::{RegionCallback, WorldMap},
    style::{Color, Theme},
    viewport::{ViewTransform, Viewport},
};

pub use crate::input::{
    events::{EventHandled, InputEvent, MarkerEvent, PointerKind, RegionEvent},
    handler::{InteractionStateMachine, Repaint},
};

pub use crate::layers::marker::{Marker, MarkerCallback, MarkerId, MarkerLayer, MarkerShape};

pub use crate::regions::{
    GeometryMap, GeometrySource, JsonGeometrySource, PropertiesGeometrySource, RegionCatalog,
    RegionId, RegionInfo, RegionRegistry, Resolution, StaticGeometrySource,
};

pub use crate::rendering::context::{DrawCommand, RenderContext};

#[cfg(feature = "egui")]
pub use crate::ui::{WorldMapUiExt, WorldMapWidget};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
