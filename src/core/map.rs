use crate::{
    core::{
        bounds::Bounds,
        config::MapOptions,
        geo::Point,
        projection,
        style::{Color, Theme},
        viewport::Viewport,
    },
    input::{
        EventHandled, InputEvent, InteractionStateMachine, MarkerEvent, PointerKind,
        RegionEvent, Repaint,
    },
    layers::marker::{Marker, MarkerId, MarkerLayer},
    regions::{GeometrySource, RegionCatalog, RegionId, RegionRegistry},
    rendering::context::{DrawCommand, RenderContext},
    Result,
};

/// Host callback for region pointer events
pub type RegionCallback = Box<dyn FnMut(&RegionEvent)>;

#[derive(Default)]
struct RegionCallbacks {
    enter: Option<RegionCallback>,
    press: Option<RegionCallback>,
    release: Option<RegionCallback>,
    exit: Option<RegionCallback>,
}

impl RegionCallbacks {
    fn slot(&mut self, kind: PointerKind) -> &mut Option<RegionCallback> {
        match kind {
            PointerKind::Enter => &mut self.enter,
            PointerKind::Press => &mut self.press,
            PointerKind::Release => &mut self.release,
            PointerKind::Exit => &mut self.exit,
        }
    }
}

/// The interactive world map widget.
///
/// Owns the region registry, the viewport, the selection state and the
/// markers. Every state change is reported as [`DrawCommand`]s which the
/// host drains once per frame with [`WorldMap::drain_commands`].
pub struct WorldMap {
    options: MapOptions,
    catalog: RegionCatalog,
    registry: RegionRegistry,
    viewport: Viewport,
    interaction: InteractionStateMachine,
    markers: MarkerLayer,
    context: RenderContext,
    callbacks: RegionCallbacks,
    load_warning: Option<String>,
    // hit-test state for raw pointer input
    hovered: Option<RegionId>,
    pressed: Option<RegionId>,
}

impl WorldMap {
    /// Loads the geometry for `options.resolution` and paints the initial
    /// state. A failing source leaves the map empty and records a warning.
    pub fn new(options: MapOptions, source: &dyn GeometrySource, catalog: RegionCatalog) -> Self {
        let (registry, load_warning) = match source.load(options.resolution) {
            Ok(geometry) => (
                RegionRegistry::from_geometry(geometry, &catalog, &options.theme),
                None,
            ),
            Err(e) => {
                log::warn!("Failed to load {:?} region geometry: {}", options.resolution, e);
                (RegionRegistry::empty(), Some(e.to_string()))
            }
        };

        let mut markers = MarkerLayer::new(options.theme.marker_color);
        markers.show(options.show_markers);

        let mut map = Self {
            viewport: Viewport::new(options.width, options.height),
            interaction: InteractionStateMachine::new(
                options.hover_enabled,
                options.selection_enabled,
            ),
            markers,
            context: RenderContext::new(),
            callbacks: RegionCallbacks::default(),
            load_warning,
            hovered: None,
            pressed: None,
            catalog,
            registry,
            options,
        };

        map.context.push(DrawCommand::Background {
            color: map.options.theme.background_color,
        });
        map.repaint_all();
        map.push_transform();
        map
    }

    pub fn builder() -> crate::core::builder::WorldMapBuilder {
        crate::core::builder::WorldMapBuilder::new()
    }

    /// Converts latitude/longitude to canvas coordinates
    pub fn lat_lon_to_xy(lat: f64, lon: f64) -> Point {
        projection::lat_lon_to_xy(lat, lon)
    }

    pub fn options(&self) -> &MapOptions {
        &self.options
    }

    pub fn registry(&self) -> &RegionRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &RegionCatalog {
        &self.catalog
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn markers(&self) -> &MarkerLayer {
        &self.markers
    }

    pub fn theme(&self) -> &Theme {
        &self.options.theme
    }

    /// Why the geometry could not be loaded, if it could not
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    // ---- interaction flags -------------------------------------------------

    pub fn is_hover_enabled(&self) -> bool {
        self.interaction.is_hover_enabled()
    }

    pub fn set_hover_enabled(&mut self, enabled: bool) {
        self.options.hover_enabled = enabled;
        self.interaction.set_hover_enabled(enabled);
    }

    pub fn is_selection_enabled(&self) -> bool {
        self.interaction.is_selection_enabled()
    }

    pub fn set_selection_enabled(&mut self, enabled: bool) {
        self.options.selection_enabled = enabled;
        self.interaction.set_selection_enabled(enabled);
    }

    pub fn selected_region(&self) -> Option<&RegionId> {
        self.interaction.selected()
    }

    /// Changes the selection bookkeeping without repainting
    pub fn set_selected_region(&mut self, region: Option<RegionId>) -> Result<()> {
        if let Some(id) = &region {
            self.registry.region(id.as_str())?;
        }
        self.interaction.set_selected(region);
        Ok(())
    }

    pub fn is_zoom_enabled(&self) -> bool {
        self.options.zoom_enabled
    }

    pub fn set_zoom_enabled(&mut self, enabled: bool) {
        self.options.zoom_enabled = enabled;
        if enabled {
            self.push_transform();
        }
    }

    // ---- zoom ----------------------------------------------------------------

    pub fn scale_factor(&self) -> f64 {
        self.viewport.scale_factor()
    }

    /// Stores the scale factor (clamped to [1, 10]); it only reaches the
    /// screen while zoom is enabled.
    pub fn set_scale_factor(&mut self, factor: f64) {
        self.viewport.set_scale_factor(factor);
        if self.options.zoom_enabled {
            self.push_transform();
        }
    }

    pub fn reset_zoom(&mut self) {
        self.viewport.reset();
        self.push_transform();
    }

    pub fn zoom_to_region(&mut self, region: &str) -> Result<()> {
        self.zoom_to_regions(&[region])
    }

    /// Fits the union of the regions into the widget. A no-op while zoom is
    /// disabled. The current selection is repainted at its resting colors.
    pub fn zoom_to_regions<S: AsRef<str>>(&mut self, regions: &[S]) -> Result<()> {
        if !self.options.zoom_enabled {
            return Ok(());
        }
        let bounds = self.registry.bounds_of(regions)?;
        self.zoom_to_canvas_bounds(&bounds)
    }

    /// Zooms to a named group of the region catalog
    pub fn zoom_to_group(&mut self, group: &str) -> Result<()> {
        let members = self.catalog.group(group)?.to_vec();
        self.zoom_to_regions(&members)
    }

    fn zoom_to_canvas_bounds(&mut self, bounds: &Bounds) -> Result<()> {
        if bounds.is_degenerate() {
            return Err(crate::MapError::DegenerateBounds(*bounds));
        }

        let resting = match self.interaction.selected() {
            Some(selected) => {
                let region = self.registry.region(selected.as_str())?;
                Some((
                    selected.clone(),
                    region.resting_fill(&self.options.theme),
                    region.resting_stroke(&self.options.theme),
                ))
            }
            None => None,
        };

        // fails on a zero-sized widget before anything is repainted
        let pane_scale = self.viewport.pane_scale();
        let fitted = self.viewport.fitted_size();
        let rect = bounds.scaled(pane_scale.x, pane_scale.y);
        self.viewport.zoom_to_bounds(&rect, fitted.x, fitted.y)?;

        if let Some((selected, fill, stroke)) = resting {
            self.paint(&selected, fill, stroke)?;
        }
        log::debug!(
            "Zoomed to {:?} at scale {:.3}",
            bounds,
            self.viewport.scale_factor()
        );
        self.push_transform();
        Ok(())
    }

    // ---- markers -------------------------------------------------------------

    pub fn add_marker(&mut self, marker: Marker) {
        let replaced = self.markers.get(marker.id()).is_some();
        let id = marker.id().clone();
        let shape = self.markers.add(marker);
        if self.context.is_attached() {
            if replaced {
                self.context.defer(DrawCommand::RemoveMarkers { ids: vec![id] });
            }
            self.context.defer(DrawCommand::InsertMarkers {
                shapes: vec![shape],
            });
        }
    }

    pub fn add_markers(&mut self, markers: impl IntoIterator<Item = Marker>) {
        markers.into_iter().for_each(|marker| self.add_marker(marker));
    }

    /// Removes a marker from the model now; the icon disappears on the next tick
    pub fn remove_marker(&mut self, id: &MarkerId) -> Option<Marker> {
        let removed = self.markers.remove(id)?;
        if self.context.is_attached() {
            self.context.defer(DrawCommand::RemoveMarkers {
                ids: vec![id.clone()],
            });
        }
        Some(removed)
    }

    pub fn clear_markers(&mut self) {
        let ids = self.markers.clear();
        if self.context.is_attached() && !ids.is_empty() {
            self.context.defer(DrawCommand::RemoveMarkers { ids });
        }
    }

    pub fn show_markers(&mut self, visible: bool) {
        self.options.show_markers = visible;
        self.markers.show(visible);
        self.context.push(DrawCommand::MarkersVisible { visible });
    }

    // ---- theme -----------------------------------------------------------------

    pub fn background_color(&self) -> Color {
        self.options.theme.background_color
    }

    pub fn set_background_color(&mut self, color: Color) {
        self.options.theme.background_color = color;
        self.context.push(DrawCommand::Background { color });
    }

    pub fn fill_color(&self) -> Color {
        self.options.theme.fill_color
    }

    /// Repaints every region; overrides keep their color
    pub fn set_fill_color(&mut self, color: Color) {
        self.options.theme.fill_color = color;
        self.repaint_all();
    }

    pub fn stroke_color(&self) -> Color {
        self.options.theme.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.options.theme.stroke_color = color;
        self.repaint_all();
    }

    pub fn hover_color(&self) -> Color {
        self.options.theme.hover_color
    }

    pub fn set_hover_color(&mut self, color: Color) {
        self.options.theme.hover_color = color;
    }

    pub fn pressed_color(&self) -> Color {
        self.options.theme.pressed_color
    }

    pub fn set_pressed_color(&mut self, color: Color) {
        self.options.theme.pressed_color = color;
    }

    pub fn selected_color(&self) -> Color {
        self.options.theme.selected_color
    }

    pub fn set_selected_color(&mut self, color: Color) {
        self.options.theme.selected_color = color;
    }

    pub fn marker_color(&self) -> Color {
        self.options.theme.marker_color
    }

    pub fn set_marker_color(&mut self, color: Color) {
        self.options.theme.marker_color = color;
        for (id, fill) in self.markers.set_marker_color(color) {
            self.context.push(DrawCommand::MarkerFill { id, fill });
        }
    }

    // ---- callbacks -------------------------------------------------------------

    pub fn on_region_enter(&mut self, callback: impl FnMut(&RegionEvent) + 'static) {
        self.callbacks.enter = Some(Box::new(callback));
    }

    pub fn on_region_press(&mut self, callback: impl FnMut(&RegionEvent) + 'static) {
        self.callbacks.press = Some(Box::new(callback));
    }

    pub fn on_region_release(&mut self, callback: impl FnMut(&RegionEvent) + 'static) {
        self.callbacks.release = Some(Box::new(callback));
    }

    pub fn on_region_exit(&mut self, callback: impl FnMut(&RegionEvent) + 'static) {
        self.callbacks.exit = Some(Box::new(callback));
    }

    // ---- host plumbing ---------------------------------------------------------

    /// Marks the widget as part of a live rendering surface. Markers added
    /// before this point are inserted on the next tick.
    pub fn attach(&mut self) {
        if self.context.is_attached() {
            return;
        }
        self.context.attach();
        let shapes = self.markers.shapes();
        if !shapes.is_empty() {
            self.context.defer(DrawCommand::InsertMarkers { shapes });
        }
    }

    pub fn detach(&mut self) {
        self.context.detach();
    }

    pub fn is_attached(&self) -> bool {
        self.context.is_attached()
    }

    /// Runs deferred work; call once per UI frame
    pub fn tick(&mut self) -> usize {
        self.context.tick()
    }

    pub fn drain_commands(&mut self) -> Vec<DrawCommand> {
        self.context.drain()
    }

    /// Refits the map into a new widget size. Resets the zoom while zoom is
    /// enabled.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.options.width = width;
        self.options.height = height;
        if self.viewport.resize(width, height) && self.options.zoom_enabled {
            self.viewport.reset();
        }
        self.push_transform();
    }

    /// Widget position in scene coordinates
    pub fn set_origin(&mut self, origin: Point) {
        self.viewport.set_origin(origin);
        self.push_transform();
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Result<EventHandled> {
        match event {
            InputEvent::Region {
                region,
                kind,
                position,
            } => {
                self.region_event(region, kind, position)?;
                Ok(EventHandled::Handled)
            }
            InputEvent::Marker {
                marker,
                kind,
                position,
            } => {
                let handled = self.markers.dispatch(&MarkerEvent {
                    marker,
                    kind,
                    position,
                })?;
                Ok(if handled {
                    EventHandled::Handled
                } else {
                    EventHandled::NotHandled
                })
            }
            InputEvent::PointerMove { position } => {
                let target = self.region_under(&position);
                if target == self.hovered {
                    return Ok(EventHandled::NotHandled);
                }
                if let Some(previous) = self.hovered.take() {
                    self.region_event(previous, PointerKind::Exit, position)?;
                }
                if let Some(next) = target {
                    self.region_event(next.clone(), PointerKind::Enter, position)?;
                    self.hovered = Some(next);
                }
                Ok(EventHandled::Handled)
            }
            InputEvent::PointerDown { position } => match self.region_under(&position) {
                Some(region) => {
                    self.pressed = Some(region.clone());
                    self.region_event(region, PointerKind::Press, position)?;
                    Ok(EventHandled::Handled)
                }
                None => Ok(EventHandled::NotHandled),
            },
            InputEvent::PointerUp { position } => match self.pressed.take() {
                // the release goes to the region that received the press
                Some(region) => {
                    self.region_event(region, PointerKind::Release, position)?;
                    Ok(EventHandled::Handled)
                }
                None => Ok(EventHandled::NotHandled),
            },
            InputEvent::PointerLeave => match self.hovered.take() {
                Some(region) => {
                    self.region_event(region, PointerKind::Exit, Point::default())?;
                    Ok(EventHandled::Handled)
                }
                None => Ok(EventHandled::NotHandled),
            },
            InputEvent::Scroll { delta, position } => {
                if !self.options.zoom_enabled {
                    return Ok(EventHandled::NotHandled);
                }
                self.viewport.zoom_at(position, delta);
                self.push_transform();
                Ok(EventHandled::Handled)
            }
            InputEvent::DragStart { position } => {
                if !self.options.dragging {
                    return Ok(EventHandled::NotHandled);
                }
                self.viewport.begin_drag(position);
                Ok(EventHandled::Handled)
            }
            InputEvent::Drag { position } => {
                if !self.viewport.is_dragging() {
                    return Ok(EventHandled::NotHandled);
                }
                self.viewport.drag_to(position);
                self.push_transform();
                Ok(EventHandled::Handled)
            }
            InputEvent::DragEnd => {
                self.viewport.end_drag();
                Ok(EventHandled::Handled)
            }
            InputEvent::Resize { width, height } => {
                self.resize(width, height);
                Ok(EventHandled::Handled)
            }
        }
    }

    fn region_event(&mut self, region: RegionId, kind: PointerKind, position: Point) -> Result<()> {
        let repaints =
            self.interaction
                .handle(kind, &region, &self.registry, &self.options.theme)?;
        for Repaint { region: target, fill } in repaints {
            let stroke = self
                .registry
                .region(target.as_str())?
                .resting_stroke(&self.options.theme);
            self.paint(&target, fill, stroke)?;
        }

        if let Some(callback) = self.callbacks.slot(kind) {
            callback(&RegionEvent {
                region,
                kind,
                position,
            });
        }
        Ok(())
    }

    fn region_under(&self, scene: &Point) -> Option<RegionId> {
        let canvas = self.viewport.transform().scene_to_canvas(scene);
        self.registry.region_at(&canvas).cloned()
    }

    fn paint(&mut self, region: &RegionId, fill: Color, stroke: Color) -> Result<()> {
        self.registry.paint_region(region.as_str(), fill, stroke)?;
        self.context.push(DrawCommand::PaintRegion {
            region: region.clone(),
            fill,
            stroke,
        });
        Ok(())
    }

    fn repaint_all(&mut self) {
        let theme = &self.options.theme;
        let styles: Vec<(RegionId, Color, Color)> = self
            .registry
            .regions()
            .map(|r| (r.id().clone(), r.resting_fill(theme), r.resting_stroke(theme)))
            .collect();
        for (region, fill, stroke) in styles {
            if let Err(e) = self.paint(&region, fill, stroke) {
                log::warn!("Failed to repaint {}: {}", region, e);
            }
        }
    }

    fn push_transform(&mut self) {
        let mut transform = self.viewport.transform();
        if !self.options.zoom_enabled {
            transform.scale = 1.0;
        }
        self.context.push(DrawCommand::Transform { transform });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        core::constants::CANVAS_WIDTH,
        regions::{RegionInfo, StaticGeometrySource},
        MapError,
    };
    use std::{cell::RefCell, rc::Rc};

    const OVERRIDE: Color = Color::rgb(10, 20, 30);

    fn map(options: MapOptions) -> WorldMap {
        let source = StaticGeometrySource::from_pairs([
            ("A", "M 0 0 L 10 0 L 10 10 L 0 10 Z"),
            ("B", "M 20 5 L 30 5 L 30 15 L 20 15 Z"),
            ("O", "M 100 100 L 200 100 L 200 150 L 100 150 Z"),
        ]);
        let catalog = RegionCatalog::new()
            .with_region("A", RegionInfo::default())
            .with_region("B", RegionInfo::default())
            .with_region("O", RegionInfo::with_color(OVERRIDE))
            .with_group("AB", ["A", "B"]);
        WorldMap::new(options, &source, catalog)
    }

    fn region(id: &str, kind: PointerKind) -> InputEvent {
        InputEvent::Region {
            region: RegionId::new(id),
            kind,
            position: Point::default(),
        }
    }

    fn fill_of(map: &WorldMap, id: &str) -> Color {
        map.registry().paths_of(id).unwrap()[0].fill()
    }

    #[test]
    fn test_initial_commands() {
        let mut map = map(MapOptions::default());
        let commands = map.drain_commands();
        assert!(matches!(commands[0], DrawCommand::Background { .. }));
        assert_eq!(
            commands
                .iter()
                .filter(|c| matches!(c, DrawCommand::PaintRegion { .. }))
                .count(),
            3
        );
        assert!(matches!(commands.last(), Some(DrawCommand::Transform { .. })));
        assert!(map.drain_commands().is_empty());
    }

    #[test]
    fn test_selection_toggle_through_events() {
        let mut map = map(MapOptions {
            hover_enabled: false,
            selection_enabled: true,
            ..MapOptions::default()
        });
        let theme = map.theme().clone();

        map.handle_event(region("A", PointerKind::Press)).unwrap();
        map.handle_event(region("A", PointerKind::Release)).unwrap();
        assert_eq!(map.selected_region(), Some(&RegionId::new("A")));
        assert_eq!(fill_of(&map, "A"), theme.selected_color);

        map.handle_event(region("A", PointerKind::Press)).unwrap();
        map.handle_event(region("A", PointerKind::Release)).unwrap();
        assert_eq!(map.selected_region(), None);
        assert_eq!(fill_of(&map, "A"), theme.fill_color);
    }

    #[test]
    fn test_region_callbacks_run_after_repaint() {
        let mut map = map(MapOptions::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        map.on_region_enter(move |event| log.borrow_mut().push(event.region.clone()));

        map.handle_event(region("B", PointerKind::Enter)).unwrap();
        assert_eq!(*seen.borrow(), vec![RegionId::new("B")]);
        assert_eq!(fill_of(&map, "B"), map.hover_color());
    }

    #[test]
    fn test_unknown_region_event_is_error() {
        let mut map = map(MapOptions::default());
        assert!(matches!(
            map.handle_event(region("ZZ", PointerKind::Enter)),
            Err(MapError::UnknownRegion(_))
        ));
    }

    #[test]
    fn test_fill_setter_keeps_overrides() {
        let mut map = map(MapOptions::default());
        map.set_fill_color(Color::WHITE);
        assert_eq!(fill_of(&map, "A"), Color::WHITE);
        assert_eq!(fill_of(&map, "O"), OVERRIDE);
        map.set_stroke_color(Color::RED);
        assert_eq!(map.registry().paths_of("O").unwrap()[0].stroke(), Color::RED);
    }

    #[test]
    fn test_scroll_requires_zoom_enabled() {
        let mut map = map(MapOptions::default());
        let scroll = InputEvent::Scroll {
            delta: 1.0,
            position: Point::new(10.0, 10.0),
        };
        assert_eq!(map.handle_event(scroll.clone()).unwrap(), EventHandled::NotHandled);
        assert_eq!(map.scale_factor(), 1.0);

        map.set_zoom_enabled(true);
        assert_eq!(map.handle_event(scroll).unwrap(), EventHandled::Handled);
        assert!((map.scale_factor() - 1.2).abs() < 1e-12);
    }

    #[test]
    fn test_zoom_to_region_centers_bounds() {
        let mut map = map(MapOptions::interactive());
        map.zoom_to_region("O").unwrap();

        let transform = map.viewport().transform();
        let center = transform.canvas_to_scene(&Point::new(150.0, 125.0));
        assert!((center.x - CANVAS_WIDTH / 2.0).abs() < 1e-9);
        // 1009 / 100 is above the maximum
        assert_eq!(map.scale_factor(), 10.0);
    }

    #[test]
    fn test_zoom_to_regions_rejects_empty_list() {
        let mut map = map(MapOptions::interactive());
        let before = map.viewport().clone();
        assert!(matches!(
            map.zoom_to_regions::<&str>(&[]),
            Err(MapError::DegenerateBounds(_))
        ));
        assert_eq!(map.viewport(), &before);
    }

    #[test]
    fn test_zoom_disabled_is_noop() {
        let mut map = map(MapOptions::default());
        map.zoom_to_group("AB").unwrap();
        assert_eq!(map.scale_factor(), 1.0);
        assert!(map.zoom_to_group("NOPE").is_err());
    }

    #[test]
    fn test_zoom_restores_selected_region() {
        let mut map = map(MapOptions::interactive());
        map.handle_event(region("O", PointerKind::Press)).unwrap();
        map.handle_event(region("O", PointerKind::Release)).unwrap();
        assert_eq!(fill_of(&map, "O"), map.selected_color());

        map.zoom_to_group("AB").unwrap();
        assert_eq!(fill_of(&map, "O"), OVERRIDE);
        assert_eq!(map.selected_region(), Some(&RegionId::new("O")));
    }

    #[test]
    fn test_zoom_in_empty_widget_leaves_selection_painted() {
        let mut map = map(MapOptions::interactive());
        map.handle_event(region("A", PointerKind::Press)).unwrap();
        map.handle_event(region("A", PointerKind::Release)).unwrap();
        map.resize(0.0, 0.0);
        map.drain_commands();

        assert!(matches!(
            map.zoom_to_region("B"),
            Err(MapError::DegenerateBounds(_))
        ));
        assert_eq!(fill_of(&map, "A"), map.selected_color());
        assert!(map.drain_commands().is_empty());
        assert_eq!(map.scale_factor(), 1.0);
    }

    #[test]
    fn test_markers_wait_for_attach() {
        let mut map = map(MapOptions::default());
        map.drain_commands();
        map.add_marker(Marker::new("zrh", 47.37, 8.54));
        map.tick();
        assert!(map.drain_commands().is_empty());

        map.attach();
        assert!(map.drain_commands().is_empty());
        assert_eq!(map.tick(), 1);
        assert!(matches!(
            map.drain_commands().as_slice(),
            [DrawCommand::InsertMarkers { shapes }] if shapes.len() == 1
        ));
    }

    #[test]
    fn test_marker_removal_is_immediate_in_model() {
        let mut map = map(MapOptions::default());
        map.attach();
        map.add_marker(Marker::new("m", 0.0, 0.0));
        assert!(map.remove_marker(&MarkerId::new("m")).is_some());
        assert!(map.markers().is_empty());
        map.drain_commands();
        assert_eq!(map.tick(), 2);
    }

    #[test]
    fn test_set_selected_region_validates() {
        let mut map = map(MapOptions::default());
        assert!(map.set_selected_region(Some(RegionId::new("ZZ"))).is_err());
        map.set_selected_region(Some(RegionId::new("A"))).unwrap();
        assert_eq!(map.selected_region(), Some(&RegionId::new("A")));
        assert_eq!(fill_of(&map, "A"), map.fill_color());
    }
}
