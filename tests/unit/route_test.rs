//! Tests for route generation

use pickup_dispatch::core::{route, Point};

fn is_king_step(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() <= 1 && (a.y - b.y).abs() <= 1 && a != b
}

#[test]
fn test_route_same_point() {
    let p = Point::new(7, 7);
    assert_eq!(route(p, p), vec![p]);
}

#[test]
fn test_route_vertical_down() {
    assert_eq!(
        route(Point::new(2, 3), Point::new(2, 0)),
        vec![
            Point::new(2, 3),
            Point::new(2, 2),
            Point::new(2, 1),
            Point::new(2, 0)
        ]
    );
}

#[test]
fn test_route_steep_slope() {
    assert_eq!(
        route(Point::new(0, 0), Point::new(1, 3)),
        vec![
            Point::new(0, 0),
            Point::new(0, 1),
            Point::new(1, 2),
            Point::new(1, 3)
        ]
    );
}

#[test]
fn test_route_properties_over_grid() {
    let start = Point::new(5, 5);
    for x in 0..=10 {
        for y in 0..=10 {
            let end = Point::new(x, y);
            let path = route(start, end);
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            let steps = (x - 5).abs().max((y - 5).abs()) as usize;
            assert_eq!(path.len(), steps + 1, "route to {end:?}");
            assert!(path.windows(2).all(|w| is_king_step(w[0], w[1])));
        }
    }
}

#[test]
fn test_route_reverse_may_differ() {
    let forward = route(Point::new(0, 0), Point::new(2, 1));
    let mut backward = route(Point::new(2, 1), Point::new(0, 0));
    backward.reverse();
    assert_eq!(forward, vec![Point::new(0, 0), Point::new(1, 0), Point::new(2, 1)]);
    assert_eq!(backward, vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 1)]);
}
