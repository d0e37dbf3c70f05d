use num_traits::Float;

use crate::{determinant::Determinant, Point};

/// The straight line between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment<T = f64> {
    /// The first point in the segment.
    pub from: Point<T>,
    /// The last point in the segment.
    pub to: Point<T>,
}

impl<T> Segment<T> {
    pub fn new(from: impl Into<Point<T>>, to: impl Into<Point<T>>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl<T> Segment<T>
where
    T: Float,
{
    /// Returns true if, and only if, self and rhs cross each other at a single point that is
    /// interior to both of them.
    ///
    /// Touching endpoints, T-junctions and collinear overlaps are not proper intersections.
    pub fn intersects_proper(&self, rhs: &Self) -> bool {
        self.side(&rhs.from) * self.side(&rhs.to) < T::zero()
            && rhs.side(&self.from) * rhs.side(&self.to) < T::zero()
    }

    /// Returns true if, and only if, self and rhs share at least one point, endpoints included.
    ///
    /// Unlike [`Segment::intersects_proper`], a shared endpoint, an endpoint lying on the other
    /// segment and a collinear overlap all count as an intersection. The relation is symmetric.
    pub fn intersects(&self, rhs: &Self) -> bool {
        if self.intersects_proper(rhs) {
            return true;
        }

        let touches = |segment: &Self, point: &Point<T>| {
            segment.side(point).is_zero() && segment.spans(point)
        };

        touches(self, &rhs.from)
            || touches(self, &rhs.to)
            || touches(rhs, &self.from)
            || touches(rhs, &self.to)
    }

    /// Returns the signed, doubled area of the triangle formed by the segment and the given
    /// point; positive if the point lies at the left of the segment.
    fn side(&self, point: &Point<T>) -> T {
        Determinant::from([&self.from, &self.to, point]).into_inner()
    }

    /// Returns true if, and only if, the given point is inside the box spanned by the segment.
    fn spans(&self, point: &Point<T>) -> bool {
        self.from.x.min(self.to.x) <= point.x
            && point.x <= self.from.x.max(self.to.x)
            && self.from.y.min(self.to.y) <= point.y
            && point.y <= self.from.y.max(self.to.y)
    }
}
