use num_traits::Float;

use crate::{Connected, Error, MultiPoint, Point, Result, Segment};

/// An ordered list of vertices describing an open shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline<T = f64> {
    coordinates: MultiPoint<T>,
}

impl<T> From<MultiPoint<T>> for Polyline<T> {
    fn from(coordinates: MultiPoint<T>) -> Self {
        Self { coordinates }
    }
}

impl<T, P> From<Vec<P>> for Polyline<T>
where
    P: Into<Point<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        Self {
            coordinates: MultiPoint::from_points(vertices),
        }
    }
}

impl<T> Connected for Polyline<T> {
    type Scalar = T;

    fn coordinates(&self) -> &MultiPoint<T> {
        &self.coordinates
    }
}

impl<T> Polyline<T> {
    /// Creates a new polyline from the given coordinates.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self> {
        MultiPoint::new(xs, ys).map(Self::from)
    }
}

impl<T> Polyline<T>
where
    T: Copy,
{
    /// Returns an ordered iterator over all the segments of the polyline.
    ///
    /// The last vertex is not connected back to the first one.
    pub fn segments(&self) -> impl Iterator<Item = Segment<T>> + '_ {
        self.vertices()
            .zip(self.vertices().skip(1))
            .map(|(from, to)| Segment { from, to })
    }

    /// Returns the first segment of the polyline.
    pub fn segment(&self) -> Result<Segment<T>> {
        self.segments().next().ok_or_else(|| {
            tracing::debug!(len = self.len(), "polyline without segments");
            Error::InvalidInput(format!(
                "a segment requires at least 2 vertices, got {}",
                self.len()
            ))
        })
    }
}

impl<T> Polyline<T>
where
    T: Float,
{
    /// Returns true if, and only if, the first segments of self and rhs cross properly.
    ///
    /// See [`Segment::intersects_proper`].
    pub fn intersects_proper(&self, rhs: &Self) -> Result<bool> {
        Ok(self.segment()?.intersects_proper(&rhs.segment()?))
    }

    /// Returns true if, and only if, the first segments of self and rhs share any point.
    ///
    /// See [`Segment::intersects`].
    pub fn intersects(&self, rhs: &Self) -> Result<bool> {
        Ok(self.segment()?.intersects(&rhs.segment()?))
    }
}
