/// The axis-aligned rectangle enclosing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox<T = f64> {
    pub min_x: T,
    pub max_x: T,
    pub min_y: T,
    pub max_y: T,
}

impl<T> From<BoundingBox<T>> for [T; 4] {
    /// Returns the bounds as `[min x, max x, min y, max y]`.
    fn from(bbox: BoundingBox<T>) -> Self {
        [bbox.min_x, bbox.max_x, bbox.min_y, bbox.max_y]
    }
}
