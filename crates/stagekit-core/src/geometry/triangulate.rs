use super::Point;

/// Three vertices of a fan triangle; `0` is always the polygon's first vertex.
pub type Triangle = [Point; 3];

/// Fan-triangulate a polygon from its first vertex.
///
/// A polygon of `n >= 3` vertices yields `n - 2` triangles
/// `(v0, v1, v2), (v0, v2, v3), ...`. Concave polygons are not handled
/// specially, so triangles may cover area outside the outline. Fewer than
/// three vertices yield nothing.
///
/// # Examples
/// ```
/// use stagekit_core::{Point, polygon_to_triangles};
///
/// let quad = [
///     Point::new(0.0, 0.0),
///     Point::new(10.0, 0.0),
///     Point::new(10.0, 10.0),
///     Point::new(0.0, 10.0),
/// ];
/// assert_eq!(polygon_to_triangles(&quad).len(), 2);
/// ```
pub fn polygon_to_triangles(points: &[Point]) -> Vec<Triangle> {
    let Some((&anchor, rest)) = points.split_first() else {
        return Vec::new();
    };
    rest.windows(2)
        .map(|edge| [anchor, edge[0], edge[1]])
        .collect()
}
