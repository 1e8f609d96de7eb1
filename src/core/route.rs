//! Lattice routing between two map points.

use crate::core::Point;

/// Integer Bresenham line from `start` to `end`, both included.
///
/// Consecutive points differ by at most one unit on each axis. A single error term
/// `dx - dy` decides the steps: x advances when `2 * err > -dy`, y advances when
/// `2 * err < dx`, and both may advance on the same iteration.
#[must_use]
pub fn route(start: Point, end: Point) -> Vec<Point> {
    let (x0, y0) = (i64::from(start.x), i64::from(start.y));
    let (x1, y1) = (i64::from(end.x), i64::from(end.y));
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };

    let mut path = Vec::with_capacity(usize::try_from(dx.max(dy) + 1).unwrap_or(0));
    let (mut x, mut y) = (x0, y0);
    let mut err = dx - dy;

    loop {
        path.push(lattice(x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
    path
}

// The walk never leaves the bounding box of two i32 points.
#[allow(clippy::cast_possible_truncation)]
const fn lattice(x: i64, y: i64) -> Point {
    Point::new(x as i32, y as i32)
}
