//! egui host for [`WorldMap`].
//!
//! The widget forwards egui pointer input as [`InputEvent`]s and paints the
//! current region and marker state. Region rings are filled through an
//! ear-clipped mesh and stroked separately.

use crate::{
    core::{
        constants::MINIMUM_SIZE,
        geo::Point,
        map::WorldMap,
    },
    input::InputEvent,
    Result,
};
use earcutr::earcut;
use egui::{epaint::PathShape, Color32, Mesh, Pos2, Response, Sense, Shape, Stroke, Ui, Widget};
use kurbo::PathEl;

/// Flattening tolerance in canvas units
const FLATTEN_TOLERANCE: f64 = 0.1;

pub struct WorldMapWidget<'a> {
    map: &'a mut WorldMap,
    size: Option<egui::Vec2>,
}

impl<'a> WorldMapWidget<'a> {
    pub fn new(map: &'a mut WorldMap) -> Self {
        Self { map, size: None }
    }

    /// Fixed widget size; defaults to the available space
    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.size = Some(egui::vec2(width, height));
        self
    }

    fn forward_input(&mut self, ui: &Ui, response: &Response) -> Result<()> {
        let map = &mut *self.map;

        match response.hover_pos() {
            Some(pos) => {
                map.handle_event(InputEvent::PointerMove {
                    position: to_point(pos),
                })?;
            }
            None => {
                map.handle_event(InputEvent::PointerLeave)?;
            }
        }

        let (pressed, released, pointer) = ui.input(|i| {
            (
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.interact_pos(),
            )
        });
        if let Some(pos) = pointer {
            if pressed && response.hovered() {
                map.handle_event(InputEvent::PointerDown {
                    position: to_point(pos),
                })?;
            }
            if released {
                map.handle_event(InputEvent::PointerUp {
                    position: to_point(pos),
                })?;
            }
        }

        if response.hovered() {
            let scroll_delta = ui.input(|i| i.raw_scroll_delta.y);
            if scroll_delta != 0.0 {
                let position = response.hover_pos().map(to_point).unwrap_or_default();
                map.handle_event(InputEvent::Scroll {
                    delta: scroll_delta as f64,
                    position,
                })?;
            }
        }

        if let Some(pos) = response.interact_pointer_pos() {
            if response.drag_started() {
                map.handle_event(InputEvent::DragStart {
                    position: to_point(pos),
                })?;
            } else if response.dragged() {
                map.handle_event(InputEvent::Drag {
                    position: to_point(pos),
                })?;
            }
        }
        if response.drag_released() {
            map.handle_event(InputEvent::DragEnd)?;
        }
        Ok(())
    }

    fn paint(&self, ui: &Ui, rect: egui::Rect) {
        let painter = ui.painter_at(rect);
        let transform = self.map.viewport().transform();
        #[cfg(feature = "debug")]
        log::trace!(
            "Painting {} regions at scale {:.2}",
            self.map.registry().len(),
            transform.scale
        );
        let screen = |canvas: kurbo::Point| {
            let scene = transform.canvas_to_scene(&Point::new(canvas.x, canvas.y));
            Pos2::new(scene.x as f32, scene.y as f32)
        };

        painter.rect_filled(rect, 0.0, Color32::from(self.map.background_color()));

        let stroke_scale = transform.pane_scale.x * transform.scale;
        for region in self.map.registry().regions() {
            for path in region.paths() {
                let width = (path.stroke_width() * stroke_scale) as f32;
                let stroke = Stroke::new(width.max(0.5), Color32::from(path.stroke()));
                let fill = Color32::from(path.fill());

                let mut points: Vec<Pos2> = Vec::new();
                let flush = |points: &mut Vec<Pos2>, closed: bool| {
                    if points.len() > 1 {
                        if closed {
                            if let Some(mesh) = fill_mesh(points, fill) {
                                painter.add(Shape::mesh(mesh));
                            }
                        }
                        painter.add(Shape::Path(PathShape {
                            points: std::mem::take(points),
                            closed,
                            fill: Color32::TRANSPARENT,
                            stroke,
                        }));
                    }
                    points.clear();
                };

                path.geometry().flatten(FLATTEN_TOLERANCE, |el| match el {
                    PathEl::MoveTo(p) => {
                        flush(&mut points, false);
                        points.push(screen(p));
                    }
                    PathEl::LineTo(p) => points.push(screen(p)),
                    PathEl::ClosePath => flush(&mut points, true),
                    _ => {}
                });
                flush(&mut points, false);
            }
        }

        if !self.map.markers().is_visible() {
            return;
        }
        let radius_scale = transform.pane_scale.x * transform.scale;
        for shape in self.map.markers().shapes() {
            let center = screen(kurbo::Point::new(shape.x + shape.size / 2.0, shape.y));
            let radius = (shape.size / 2.0 * radius_scale) as f32;
            painter.circle_filled(center, radius, Color32::from(shape.fill));

            if let (Some(tooltip), Some(hover)) = (&shape.tooltip, ui.ctx().pointer_hover_pos()) {
                if hover.distance(center) <= radius {
                    egui::show_tooltip_at_pointer(
                        ui.ctx(),
                        egui::Id::new(("worldmap_marker", shape.id.as_str())),
                        |ui| ui.label(tooltip),
                    );
                }
            }
        }
    }
}

impl<'a> Widget for WorldMapWidget<'a> {
    fn ui(mut self, ui: &mut Ui) -> Response {
        let desired_size = self
            .size
            .unwrap_or_else(|| ui.available_size())
            .max(egui::vec2(MINIMUM_SIZE.0 as f32, MINIMUM_SIZE.1 as f32));
        let (rect, response) = ui.allocate_exact_size(desired_size, Sense::click_and_drag());

        let size = self.map.viewport().size();
        if (size.x as f32, size.y as f32) != (rect.width(), rect.height()) {
            self.map.resize(rect.width() as f64, rect.height() as f64);
        }
        let origin = to_point(rect.min);
        if self.map.viewport().origin() != origin {
            self.map.set_origin(origin);
        }

        self.map.attach();
        self.map.tick();

        if let Err(e) = self.forward_input(ui, &response) {
            log::warn!("Dropped map input: {}", e);
        }

        // the painter reads the registry directly
        self.map.drain_commands();
        self.paint(ui, rect);
        response
    }
}

/// Convenience for `ui.add(WorldMapWidget::new(map))`
pub trait WorldMapUiExt {
    fn world_map(&mut self, map: &mut WorldMap) -> Response;
}

impl WorldMapUiExt for Ui {
    fn world_map(&mut self, map: &mut WorldMap) -> Response {
        self.add(WorldMapWidget::new(map))
    }
}

fn to_point(pos: Pos2) -> Point {
    Point::new(pos.x as f64, pos.y as f64)
}

/// Triangulates a closed ring so concave outlines fill correctly
fn fill_mesh(ring: &[Pos2], fill: Color32) -> Option<Mesh> {
    let mut ring = ring;
    if let (Some(first), Some(last)) = (ring.first(), ring.last()) {
        if ring.len() > 1 && first.distance(*last) < f32::EPSILON {
            ring = &ring[..ring.len() - 1];
        }
    }
    if ring.len() < 3 {
        return None;
    }

    let coords: Vec<f64> = ring
        .iter()
        .flat_map(|p| [p.x as f64, p.y as f64])
        .collect();
    let indices = match earcut(&coords, &[], 2) {
        Ok(indices) if !indices.is_empty() => indices,
        Ok(_) => return None,
        Err(_) => {
            log::debug!("Skipping fill of a ring with {} points", ring.len());
            return None;
        }
    };

    let mut mesh = Mesh::default();
    for p in ring {
        mesh.colored_vertex(*p, fill);
    }
    for triangle in indices.chunks_exact(3) {
        mesh.add_triangle(triangle[0] as u32, triangle[1] as u32, triangle[2] as u32);
    }
    Some(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area(mesh: &Mesh) -> f32 {
        mesh.indices
            .chunks_exact(3)
            .map(|t| {
                let (a, b, c) = (
                    mesh.vertices[t[0] as usize].pos,
                    mesh.vertices[t[1] as usize].pos,
                    mesh.vertices[t[2] as usize].pos,
                );
                ((b - a).x * (c - a).y - (b - a).y * (c - a).x).abs() / 2.0
            })
            .sum()
    }

    #[test]
    fn test_concave_ring_fills_exact_area() {
        // L shape: a 2x2 square missing its top right quadrant
        let ring = [
            Pos2::new(0.0, 0.0),
            Pos2::new(1.0, 0.0),
            Pos2::new(1.0, 1.0),
            Pos2::new(2.0, 1.0),
            Pos2::new(2.0, 2.0),
            Pos2::new(0.0, 2.0),
        ];
        let mesh = fill_mesh(&ring, Color32::RED).unwrap();
        assert_eq!(mesh.indices.len(), 12);
        assert!((area(&mesh) - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_closing_duplicate_is_dropped() {
        let ring = [
            Pos2::new(0.0, 0.0),
            Pos2::new(4.0, 0.0),
            Pos2::new(4.0, 3.0),
            Pos2::new(0.0, 0.0),
        ];
        let mesh = fill_mesh(&ring, Color32::RED).unwrap();
        assert_eq!(mesh.vertices.len(), 3);
        assert!((area(&mesh) - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_degenerate_ring_has_no_fill() {
        assert!(fill_mesh(&[Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0)], Color32::RED).is_none());
    }
}
