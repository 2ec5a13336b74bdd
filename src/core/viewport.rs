use crate::{
    core::{
        bounds::Bounds,
        constants::{
            ASPECT_RATIO, CANVAS_HEIGHT, CANVAS_WIDTH, MAX_SCALE_FACTOR, MIN_SCALE_FACTOR,
            ZOOM_STEP,
        },
        geo::Point,
    },
    MapError, Result,
};
use serde::{Deserialize, Serialize};

/// Snapshot of everything the host needs to place the map group on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransform {
    /// Uniform scale applied around the widget center
    pub scale: f64,
    /// Ad-hoc pivot translation of the widget (scroll zoom, drag)
    pub translate: Point,
    /// Translation of the inner group set by zoom-to-bounds
    pub group_translate: Point,
    /// Canvas to widget scale of the fitted map
    pub pane_scale: Point,
    /// Offset centering the fitted map inside the widget
    pub pane_offset: Point,
    /// Widget position in scene coordinates
    pub origin: Point,
    /// Widget size
    pub size: Point,
}

impl ViewTransform {
    /// Maps a canvas coordinate to scene coordinates
    pub fn canvas_to_scene(&self, canvas: &Point) -> Point {
        let local = Point::new(
            self.pane_offset.x + canvas.x * self.pane_scale.x + self.group_translate.x,
            self.pane_offset.y + canvas.y * self.pane_scale.y + self.group_translate.y,
        );
        self.local_to_scene(&local)
    }

    /// Maps a widget-local (unscaled) coordinate to scene coordinates
    pub fn local_to_scene(&self, local: &Point) -> Point {
        let half = self.size.multiply(0.5);
        self.origin
            .add(&half)
            .add(&local.subtract(&half).multiply(self.scale))
            .add(&self.translate)
    }

    /// Inverse of [`ViewTransform::canvas_to_scene`]
    pub fn scene_to_canvas(&self, scene: &Point) -> Point {
        let half = self.size.multiply(0.5);
        let local = scene
            .subtract(&self.translate)
            .subtract(&self.origin)
            .subtract(&half)
            .multiply(1.0 / self.scale)
            .add(&half);
        Point::new(
            (local.x - self.group_translate.x - self.pane_offset.x) / self.pane_scale.x,
            (local.y - self.group_translate.y - self.pane_offset.y) / self.pane_scale.y,
        )
    }
}

/// Owns the scale factor and the two translation channels of the map.
///
/// `translate` is driven by scroll zoom and dragging, `group_translate` only
/// by zoom-to-bounds. They are never merged; only [`Viewport::reset`]
/// clears both.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    scale_factor: f64,
    translate: Point,
    group_translate: Point,
    origin: Point,
    size: Point,
    fitted: Point,
    drag_anchor: Option<Point>,
}

impl Viewport {
    /// Creates a viewport for a widget of the given size
    pub fn new(width: f64, height: f64) -> Self {
        let mut viewport = Self {
            scale_factor: MIN_SCALE_FACTOR,
            translate: Point::default(),
            group_translate: Point::default(),
            origin: Point::default(),
            size: Point::default(),
            fitted: Point::default(),
            drag_anchor: None,
        };
        viewport.resize(width, height);
        viewport
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Sets the scale factor, clamped to [1, 10]. Non-finite values are ignored.
    pub fn set_scale_factor(&mut self, factor: f64) {
        if factor.is_finite() {
            self.scale_factor = factor.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);
        }
    }

    pub fn translate(&self) -> Point {
        self.translate
    }

    pub fn group_translate(&self) -> Point {
        self.group_translate
    }

    pub fn size(&self) -> Point {
        self.size
    }

    /// Size of the map inside the widget after keeping the canvas aspect ratio
    pub fn fitted_size(&self) -> Point {
        self.fitted
    }

    /// Widget position in scene coordinates; scroll pivots are relative to it
    pub fn set_origin(&mut self, origin: Point) {
        self.origin = origin;
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Restores the unzoomed state
    pub fn reset(&mut self) {
        self.scale_factor = MIN_SCALE_FACTOR;
        self.translate = Point::default();
        self.group_translate = Point::default();
    }

    /// Current on-screen center of the widget
    pub fn screen_center(&self) -> Point {
        self.origin
            .add(&self.size.multiply(0.5))
            .add(&self.translate)
    }

    /// Scroll zoom anchored at `screen_point`.
    ///
    /// `delta` is the scroll amount; only its sign matters. A zero delta
    /// keeps the scale.
    pub fn zoom_at(&mut self, screen_point: Point, delta: f64) {
        if !self.group_translate.is_zero() {
            self.reset();
        }

        let old_scale = self.scale_factor;
        let mut scale = old_scale;
        if delta < 0.0 {
            scale /= ZOOM_STEP;
        } else if delta > 0.0 {
            scale *= ZOOM_STEP;
        }
        let scale = scale.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);

        if scale == MIN_SCALE_FACTOR {
            self.reset();
            return;
        }

        let factor = scale / old_scale - 1.0;
        let pivot = screen_point.subtract(&self.screen_center()).multiply(factor);

        self.scale_factor = scale;
        self.translate = self.translate.subtract(&pivot);
    }

    /// Fits `rect` (in widget coordinates) into a `viewport_width` x
    /// `viewport_height` viewport and centers it via the group translation.
    pub fn zoom_to_bounds(
        &mut self,
        rect: &Bounds,
        viewport_width: f64,
        viewport_height: f64,
    ) -> Result<()> {
        if rect.is_degenerate() || viewport_width <= 0.0 || viewport_height <= 0.0 {
            return Err(MapError::DegenerateBounds(*rect));
        }
        self.group_translate = Point::default();

        let width = rect.width();
        let height = rect.height();
        let center = rect.center();

        let scale = if height / viewport_height > width / viewport_width {
            1.0 / (height / viewport_height)
        } else {
            1.0 / (width / viewport_width)
        };

        self.scale_factor = scale.clamp(MIN_SCALE_FACTOR, MAX_SCALE_FACTOR);
        self.group_translate = Point::new(
            viewport_width * 0.5 - center.x,
            viewport_height * 0.5 - center.y,
        );
        Ok(())
    }

    /// Records the start of a drag gesture
    pub fn begin_drag(&mut self, scene_point: Point) {
        self.drag_anchor = Some(scene_point);
    }

    /// Pans by the pointer movement since the previous drag point
    pub fn drag_to(&mut self, scene_point: Point) {
        if let Some(anchor) = self.drag_anchor {
            self.translate = self.translate.add(&scene_point.subtract(&anchor));
            self.drag_anchor = Some(scene_point);
        }
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Updates the widget size and refits the map keeping the canvas aspect
    /// ratio. Returns whether the fitted area is non-empty.
    pub fn resize(&mut self, width: f64, height: f64) -> bool {
        self.size = Point::new(width, height);

        let mut fitted_width = width;
        let mut fitted_height = height;
        if ASPECT_RATIO * fitted_width > fitted_height {
            fitted_width = fitted_height / ASPECT_RATIO;
        } else if fitted_height / ASPECT_RATIO > fitted_width {
            fitted_height = ASPECT_RATIO * fitted_width;
        }
        self.fitted = Point::new(fitted_width, fitted_height);

        fitted_width > 0.0 && fitted_height > 0.0
    }

    pub fn pane_scale(&self) -> Point {
        Point::new(self.fitted.x / CANVAS_WIDTH, self.fitted.y / CANVAS_HEIGHT)
    }

    pub fn pane_offset(&self) -> Point {
        Point::new(
            (self.size.x - self.fitted.x) * 0.5,
            (self.size.y - self.fitted.y) * 0.5,
        )
    }

    pub fn transform(&self) -> ViewTransform {
        ViewTransform {
            scale: self.scale_factor,
            translate: self.translate,
            group_translate: self.group_translate,
            pane_scale: self.pane_scale(),
            pane_offset: self.pane_offset(),
            origin: self.origin,
            size: self.size,
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}
