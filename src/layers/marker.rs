use crate::{
    core::{
        constants::{DEFAULT_MARKER_ICON, MARKER_ICON_SIZE},
        geo::LatLng,
        style::Color,
    },
    input::events::{MarkerEvent, PointerKind},
    prelude::HashMap,
    Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Marker event handler
pub type MarkerCallback = Box<dyn FnMut(&MarkerEvent)>;

/// Identity of a marker; adding a marker with an existing id replaces it
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkerId(String);

impl MarkerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MarkerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MarkerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[derive(Default)]
struct MarkerHandlers {
    enter: Option<MarkerCallback>,
    press: Option<MarkerCallback>,
    release: Option<MarkerCallback>,
    exit: Option<MarkerCallback>,
}

impl MarkerHandlers {
    fn slot(&mut self, kind: PointerKind) -> &mut Option<MarkerCallback> {
        match kind {
            PointerKind::Enter => &mut self.enter,
            PointerKind::Press => &mut self.press,
            PointerKind::Release => &mut self.release,
            PointerKind::Exit => &mut self.exit,
        }
    }

    fn registered(&self) -> Vec<PointerKind> {
        [
            (PointerKind::Enter, self.enter.is_some()),
            (PointerKind::Press, self.press.is_some()),
            (PointerKind::Release, self.release.is_some()),
            (PointerKind::Exit, self.exit.is_some()),
        ]
        .into_iter()
        .filter_map(|(kind, set)| set.then_some(kind))
        .collect()
    }
}

/// A point of interest placed by latitude/longitude
pub struct Marker {
    id: MarkerId,
    position: LatLng,
    name: Option<String>,
    info: Option<String>,
    color: Option<Color>,
    icon: Option<String>,
    icon_size: f64,
    handlers: MarkerHandlers,
}

impl Marker {
    pub fn new(id: impl Into<MarkerId>, lat: f64, lng: f64) -> Self {
        Self {
            id: id.into(),
            position: LatLng::new(lat, lng),
            name: None,
            info: None,
            color: None,
            icon: None,
            icon_size: MARKER_ICON_SIZE,
            handlers: MarkerHandlers::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = Some(info.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_icon_size(mut self, size: f64) -> Self {
        self.icon_size = size;
        self
    }

    pub fn on_enter(mut self, handler: impl FnMut(&MarkerEvent) + 'static) -> Self {
        self.handlers.enter = Some(Box::new(handler));
        self
    }

    pub fn on_press(mut self, handler: impl FnMut(&MarkerEvent) + 'static) -> Self {
        self.handlers.press = Some(Box::new(handler));
        self
    }

    pub fn on_release(mut self, handler: impl FnMut(&MarkerEvent) + 'static) -> Self {
        self.handlers.release = Some(Box::new(handler));
        self
    }

    pub fn on_exit(mut self, handler: impl FnMut(&MarkerEvent) + 'static) -> Self {
        self.handlers.exit = Some(Box::new(handler));
        self
    }

    pub fn id(&self) -> &MarkerId {
        &self.id
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn icon(&self) -> &str {
        self.icon.as_deref().unwrap_or(DEFAULT_MARKER_ICON)
    }

    pub fn icon_size(&self) -> f64 {
        self.icon_size
    }

    /// Name and info on separate lines; `None` when both are empty
    pub fn tooltip(&self) -> Option<String> {
        let name = self.name.as_deref().filter(|s| !s.is_empty());
        let info = self.info.as_deref().filter(|s| !s.is_empty());
        match (name, info) {
            (Some(name), Some(info)) => Some(format!("{}\n{}", name, info)),
            (Some(text), None) | (None, Some(text)) => Some(text.to_string()),
            (None, None) => None,
        }
    }

    /// Builds the renderable shape. The icon is centered horizontally on
    /// the projected point and hangs from it vertically.
    pub fn shape(&self, marker_color: Color, visible: bool) -> MarkerShape {
        let point = self.position.project();
        MarkerShape {
            id: self.id.clone(),
            icon: self.icon().to_string(),
            x: point.x - self.icon_size / 2.0,
            y: point.y,
            size: self.icon_size,
            fill: self.color.unwrap_or(marker_color),
            tooltip: self.tooltip(),
            visible,
        }
    }
}

impl fmt::Debug for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Marker")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("name", &self.name)
            .field("info", &self.info)
            .field("color", &self.color)
            .field("icon", &self.icon())
            .field("icon_size", &self.icon_size)
            .field("handlers", &self.handlers.registered())
            .finish()
    }
}

/// What the host draws for one marker, in canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarkerShape {
    pub id: MarkerId,
    pub icon: String,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: Color,
    pub tooltip: Option<String>,
    pub visible: bool,
}

/// Owns every marker of the map keyed by identity
#[derive(Debug)]
pub struct MarkerLayer {
    markers: HashMap<MarkerId, Marker>,
    marker_color: Color,
    visible: bool,
}

impl MarkerLayer {
    pub fn new(marker_color: Color) -> Self {
        Self {
            markers: HashMap::default(),
            marker_color,
            visible: true,
        }
    }

    /// Adds or replaces a marker and returns its shape
    pub fn add(&mut self, marker: Marker) -> MarkerShape {
        let shape = marker.shape(self.marker_color, self.visible);
        if self.markers.insert(marker.id.clone(), marker).is_some() {
            log::debug!("Replaced marker {}", shape.id);
        }
        shape
    }

    pub fn remove(&mut self, id: &MarkerId) -> Option<Marker> {
        self.markers.remove(id)
    }

    /// Removes every marker and returns the removed ids
    pub fn clear(&mut self) -> Vec<MarkerId> {
        let mut ids: Vec<MarkerId> = self.markers.drain().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    pub fn show(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn marker_color(&self) -> Color {
        self.marker_color
    }

    /// Changes the theme marker color and returns the markers whose fill
    /// changed; markers with their own color keep it.
    pub fn set_marker_color(&mut self, color: Color) -> Vec<(MarkerId, Color)> {
        self.marker_color = color;
        let mut changed: Vec<(MarkerId, Color)> = self
            .markers
            .values()
            .filter(|marker| marker.color.is_none())
            .map(|marker| (marker.id.clone(), color))
            .collect();
        changed.sort_by(|a, b| a.0.cmp(&b.0));
        changed
    }

    /// Invokes the marker's handler for `event.kind`, if one is registered
    pub fn dispatch(&mut self, event: &MarkerEvent) -> Result<bool> {
        let marker = self
            .markers
            .get_mut(&event.marker)
            .ok_or_else(|| crate::MapError::UnknownMarker(event.marker.clone()))?;
        match marker.handlers.slot(event.kind) {
            Some(handler) => {
                handler(event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn get(&self, id: &MarkerId) -> Option<&Marker> {
        self.markers.get(id)
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Current shapes sorted by id
    pub fn shapes(&self) -> Vec<MarkerShape> {
        let mut shapes: Vec<MarkerShape> = self
            .markers
            .values()
            .map(|marker| marker.shape(self.marker_color, self.visible))
            .collect();
        shapes.sort_by(|a, b| a.id.cmp(&b.id));
        shapes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{geo::Point, projection::lat_lon_to_xy};
    use std::{cell::RefCell, rc::Rc};

    #[test]
    fn test_add_remove_round_trip() {
        let mut layer = MarkerLayer::new(Color::RED);
        layer.add(Marker::new("origin", 0.0, 0.0));
        assert_eq!(layer.len(), 1);
        assert!(layer.remove(&MarkerId::new("origin")).is_some());
        assert!(layer.is_empty());
        assert!(layer.remove(&MarkerId::new("origin")).is_none());
    }

    #[test]
    fn test_shape_position_and_defaults() {
        let mut layer = MarkerLayer::new(Color::RED);
        let shape = layer.add(Marker::new("zurich", 47.37, 8.54));
        let point = lat_lon_to_xy(47.37, 8.54);

        assert_eq!(shape.x, point.x - 6.0);
        assert_eq!(shape.y, point.y);
        assert_eq!(shape.icon, "circle");
        assert_eq!(shape.size, 12.0);
        assert_eq!(shape.fill, Color::RED);
        assert!(shape.visible);
    }

    #[test]
    fn test_tooltip_text() {
        let both = Marker::new("a", 0.0, 0.0).with_name("Bern").with_info("Capital");
        assert_eq!(both.tooltip().as_deref(), Some("Bern\nCapital"));

        let info_only = Marker::new("b", 0.0, 0.0).with_info("Capital");
        assert_eq!(info_only.tooltip().as_deref(), Some("Capital"));

        let empty = Marker::new("c", 0.0, 0.0).with_name("");
        assert_eq!(empty.tooltip(), None);
    }

    #[test]
    fn test_marker_color_respects_override() {
        let mut layer = MarkerLayer::new(Color::RED);
        layer.add(Marker::new("plain", 10.0, 10.0));
        layer.add(Marker::new("blue", 20.0, 20.0).with_color(Color::rgb(0, 0, 255)));

        let changed = layer.set_marker_color(Color::WHITE);
        assert_eq!(changed, vec![(MarkerId::new("plain"), Color::WHITE)]);

        let shapes = layer.shapes();
        assert_eq!(shapes[0].fill, Color::rgb(0, 0, 255));
        assert_eq!(shapes[1].fill, Color::WHITE);
    }

    #[test]
    fn test_same_id_replaces() {
        let mut layer = MarkerLayer::new(Color::RED);
        layer.add(Marker::new("m", 0.0, 0.0));
        layer.add(Marker::new("m", 45.0, 90.0));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.get(&MarkerId::new("m")).unwrap().position().lat, 45.0);
    }

    #[test]
    fn test_dispatch_invokes_handler() {
        let presses = Rc::new(RefCell::new(0));
        let counter = presses.clone();
        let mut layer = MarkerLayer::new(Color::RED);
        layer.add(Marker::new("m", 0.0, 0.0).on_press(move |_| *counter.borrow_mut() += 1));

        let mut event = MarkerEvent {
            marker: MarkerId::new("m"),
            kind: PointerKind::Press,
            position: Point::new(0.0, 0.0),
        };
        assert!(layer.dispatch(&event).unwrap());
        event.kind = PointerKind::Exit;
        assert!(!layer.dispatch(&event).unwrap());
        assert_eq!(*presses.borrow(), 1);

        event.marker = MarkerId::new("missing");
        assert!(layer.dispatch(&event).is_err());
    }

    #[test]
    fn test_clear_and_visibility() {
        let mut layer = MarkerLayer::new(Color::RED);
        layer.add(Marker::new("b", 0.0, 0.0));
        layer.add(Marker::new("a", 1.0, 1.0));
        layer.show(false);
        assert!(layer.shapes().iter().all(|s| !s.visible));
        assert_eq!(layer.clear(), vec![MarkerId::new("a"), MarkerId::new("b")]);
        assert!(layer.is_empty());
    }
}
