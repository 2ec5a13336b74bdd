//! Core constants of the reference world canvas and the zoom behaviour.
//! Keeping them in a single place makes it easier to tweak engine-wide magic numbers.

/// Width of the logical canvas the region geometry is drawn in.
pub const CANVAS_WIDTH: f64 = 1009.0;

/// Height of the logical canvas the region geometry is drawn in.
pub const CANVAS_HEIGHT: f64 = 665.0;

/// Horizontal calibration so projected points line up with the geometry data.
pub const MAP_OFFSET_X: f64 = -CANVAS_WIDTH * 0.0285;

/// Vertical calibration so projected points line up with the geometry data.
pub const MAP_OFFSET_Y: f64 = CANVAS_HEIGHT * 0.195;

/// Height / width of the canvas; the fitted map keeps this ratio.
pub const ASPECT_RATIO: f64 = CANVAS_HEIGHT / CANVAS_WIDTH;

/// Smallest size the widget reports as its minimum.
pub const MINIMUM_SIZE: (f64, f64) = (100.0, 66.0);

/// Multiplicative step applied per scroll notch.
pub const ZOOM_STEP: f64 = 1.2;

/// Lower bound of the scale factor (unzoomed).
pub const MIN_SCALE_FACTOR: f64 = 1.0;

/// Upper bound of the scale factor.
pub const MAX_SCALE_FACTOR: f64 = 10.0;

/// Stroke width applied to every region path.
pub const REGION_STROKE_WIDTH: f64 = 0.2;

/// Marker icon default size.
pub const MARKER_ICON_SIZE: f64 = 12.0;

/// Icon used for markers that do not name one.
pub const DEFAULT_MARKER_ICON: &str = "circle";
