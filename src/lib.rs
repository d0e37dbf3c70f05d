mod bounding_box;
mod error;
mod point;
mod polygon;
mod polyline;
mod segment;

pub mod batch;
pub mod determinant;
pub mod multi_point;

pub use self::bounding_box::BoundingBox;
pub use self::error::{Error, Result};
pub use self::multi_point::MultiPoint;
pub use self::point::Point;
pub use self::polygon::Polygon;
pub use self::polyline::Polyline;
pub use self::segment::Segment;

/// A geometry described by an ordered sequence of connected vertices.
///
/// The order of the vertices defines which of them are connected by an edge, hence every
/// accessor preserves it.
pub trait Connected {
    /// The type of the coordinates.
    type Scalar;

    /// Returns the underlying coordinates of the geometry.
    fn coordinates(&self) -> &MultiPoint<Self::Scalar>;

    /// Returns the horizontal and vertical coordinates of the geometry, in order.
    fn coords(&self) -> (&[Self::Scalar], &[Self::Scalar]) {
        let coordinates = self.coordinates();
        (coordinates.xs(), coordinates.ys())
    }

    /// Returns the total amount of vertices in the geometry.
    fn len(&self) -> usize {
        self.coordinates().len()
    }

    fn is_empty(&self) -> bool {
        self.coordinates().is_empty()
    }

    /// Returns the box enclosing the geometry.
    fn bounding_box(&self) -> Result<BoundingBox<Self::Scalar>>
    where
        Self::Scalar: Copy + PartialOrd,
    {
        self.coordinates().bounding_box()
    }

    /// Returns the vertex at the given position.
    fn vertex(&self, index: usize) -> Result<Point<Self::Scalar>>
    where
        Self::Scalar: Copy,
    {
        self.coordinates().point(index)
    }

    /// Returns an ordered iterator over all the vertices of the geometry.
    fn vertices(&self) -> impl ExactSizeIterator<Item = Point<Self::Scalar>> + '_
    where
        Self::Scalar: Copy,
    {
        self.coordinates().points()
    }
}
