use crate::model::Point;

/// Segment endpoints for a link between two node discs.
///
/// The segment runs along the centre line and is trimmed by each radius, so it touches both
/// boundaries. Coincident centres use a distance of 1; the resulting zero direction leaves
/// both endpoints on their centres.
pub fn trimmed_segment(a: Point, radius_a: f64, b: Point, radius_b: f64) -> (Point, Point) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let distance = dx.hypot(dy);
    let distance = if distance == 0.0 { 1.0 } else { distance };

    let ux = dx / distance;
    let uy = dy / distance;

    (
        Point::new(a.x + ux * radius_a, a.y + uy * radius_a),
        Point::new(b.x - ux * radius_b, b.y - uy * radius_b),
    )
}

/// Interface label anchor: segment midpoint, lifted straight up by `offset`.
pub fn label_anchor(start: Point, end: Point, offset: f64) -> Point {
    let mid = start.midpoint(end);
    Point::new(mid.x, mid.y - offset)
}
