//! egui host surface, enabled with the `egui` feature.

pub mod widget;

pub use widget::{WorldMapUiExt, WorldMapWidget};
