pub mod marker;

pub use marker::{Marker, MarkerCallback, MarkerId, MarkerLayer, MarkerShape};
