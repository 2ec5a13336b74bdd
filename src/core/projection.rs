//! Forward projection from geographic coordinates onto the reference canvas.
//!
//! This is a Web-Mercator style transform scaled to the canvas width and
//! shifted by the calibration offsets that align it with the bundled region
//! geometry. It is stateless so hosts can map coordinates without a widget.

use crate::core::{
    constants::{CANVAS_HEIGHT, CANVAS_WIDTH, MAP_OFFSET_X, MAP_OFFSET_Y},
    geo::Point,
};
use std::f64::consts::PI;

/// Projects `(lat, lon)` in degrees onto canvas coordinates.
///
/// Latitudes close to ±90° yield very large or infinite `y`; the input is
/// not clamped.
pub fn lat_lon_to_xy(lat: f64, lon: f64) -> Point {
    let x = (lon + 180.0) * (CANVAS_WIDTH / 360.0) + MAP_OFFSET_X;
    let y = (CANVAS_HEIGHT / 2.0)
        - (CANVAS_WIDTH * (PI / 4.0 + lat.to_radians() / 2.0).tan().ln()) / (2.0 * PI)
        + MAP_OFFSET_Y;
    Point::new(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equator_is_constant() {
        let expected = CANVAS_HEIGHT / 2.0 + MAP_OFFSET_Y;
        for lon in [-180.0, -90.0, 0.0, 45.5, 180.0] {
            let p = lat_lon_to_xy(0.0, lon);
            assert!((p.y - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_x_monotonic_in_longitude() {
        let mut last = f64::NEG_INFINITY;
        let mut lon = -180.0;
        while lon <= 180.0 {
            let p = lat_lon_to_xy(12.0, lon);
            assert!(p.x > last);
            last = p.x;
            lon += 7.5;
        }
    }

    #[test]
    fn test_origin() {
        let p = lat_lon_to_xy(0.0, 0.0);
        assert!((p.x - (CANVAS_WIDTH / 2.0 + MAP_OFFSET_X)).abs() < 1e-9);
    }

    #[test]
    fn test_north_is_up_and_deterministic() {
        let north = lat_lon_to_xy(60.0, 10.0);
        let south = lat_lon_to_xy(-60.0, 10.0);
        assert!(north.y < south.y);
        assert_eq!(north, lat_lon_to_xy(60.0, 10.0));
    }

    #[test]
    fn test_pole_does_not_panic() {
        let north = lat_lon_to_xy(90.0, 0.0);
        assert!(north.y < -CANVAS_HEIGHT);
        let south = lat_lon_to_xy(-90.0, 0.0);
        assert!(south.y.is_infinite());
    }
}
