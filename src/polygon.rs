use num_traits::Float;

use crate::{multi_point, Connected, Error, MultiPoint, Point, Result, Segment};

/// A polygon in the plain.
///
/// The vertices describe a closed ring: the last vertex is implicitly connected to the first
/// one.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon<T = f64> {
    coordinates: MultiPoint<T>,
}

impl<T> From<MultiPoint<T>> for Polygon<T> {
    fn from(coordinates: MultiPoint<T>) -> Self {
        Self { coordinates }
    }
}

impl<T, P> From<Vec<P>> for Polygon<T>
where
    P: Into<Point<T>>,
{
    fn from(vertices: Vec<P>) -> Self {
        Self {
            coordinates: MultiPoint::from_points(vertices),
        }
    }
}

impl<T> Connected for Polygon<T> {
    type Scalar = T;

    fn coordinates(&self) -> &MultiPoint<T> {
        &self.coordinates
    }
}

impl<T> Polygon<T> {
    /// Creates a new polygon from the given coordinates.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self> {
        MultiPoint::new(xs, ys).map(Self::from)
    }

    /// Fails if the polygon has not enough vertices to enclose an area.
    pub(crate) fn ensure_ring(&self, operation: &'static str) -> Result<()> {
        if self.len() < 3 {
            tracing::debug!(operation, len = self.len(), "degenerate polygon");
            return Err(Error::InvalidInput(format!(
                "{operation} requires a polygon of at least 3 vertices, got {}",
                self.len()
            )));
        }

        Ok(())
    }
}

impl<T> Polygon<T>
where
    T: Copy,
{
    /// Returns the edge starting at the given vertex.
    ///
    /// The edge starting at the last vertex ends at the first one.
    pub fn edge(&self, index: usize) -> Result<Segment<T>> {
        if index >= self.len() {
            tracing::debug!(index, len = self.len(), "edge index out of range");
            return Err(Error::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }

        Ok(self.ring_edge(index))
    }

    /// Returns an ordered iterator over all the edges of the polygon, including the one closing
    /// the ring.
    pub fn edges(&self) -> impl ExactSizeIterator<Item = Segment<T>> + '_ {
        (0..self.len()).map(move |index| self.ring_edge(index))
    }

    /// Returns the edge from the vertex at `index` to the following one in the ring.
    ///
    /// The index must be in range.
    fn ring_edge(&self, index: usize) -> Segment<T> {
        let (xs, ys) = self.coords();
        let next = (index + 1) % xs.len();

        Segment {
            from: Point {
                x: xs[index],
                y: ys[index],
            },
            to: Point {
                x: xs[next],
                y: ys[next],
            },
        }
    }
}

impl<T> Polygon<T>
where
    T: Float,
{
    /// Returns true if, and only if, the given point is inside the polygon.
    ///
    /// Implements the crossing number algorithm: a horizontal ray is shot from the left of the
    /// polygon to the point, and the point is inside if the ray crosses the boundary an odd
    /// amount of times. Only proper crossings are counted, so the result for points on the
    /// boundary, or for rays passing through a vertex, is not guaranteed.
    pub fn contains(&self, point: &Point<T>) -> Result<bool> {
        self.ensure_ring("contains")?;

        let ray = Segment {
            from: Point {
                x: multi_point::min(self.coordinates.xs())? - T::one(),
                y: point.y,
            },
            to: *point,
        };

        let crossings = self
            .edges()
            .filter(|edge| ray.intersects_proper(edge))
            .count();

        tracing::trace!(crossings, "crossing number");
        Ok(crossings % 2 == 1)
    }

    /// Returns true if, and only if, any vertex of either polygon is inside the other one.
    ///
    /// This is not a full overlap test: two polygons whose edges cross without any vertex of
    /// one lying inside the other (e.g. two bars forming a cross) are reported as not
    /// overlapping. Compose with an edge intersection test if that case matters.
    pub fn overlaps(&self, rhs: &Self) -> Result<bool> {
        self.ensure_ring("overlaps")?;
        rhs.ensure_ring("overlaps")?;

        if self.contains_any_vertex(rhs)? {
            tracing::trace!("rhs vertex inside self");
            return Ok(true);
        }

        if rhs.contains_any_vertex(self)? {
            tracing::trace!("self vertex inside rhs");
            return Ok(true);
        }

        Ok(false)
    }

    /// One-sided overlap: returns true if, and only if, some vertex of rhs is inside self.
    fn contains_any_vertex(&self, rhs: &Self) -> Result<bool> {
        for vertex in rhs.vertices() {
            if self.contains(&vertex)? {
                return Ok(true);
            }
        }

        Ok(false)
    }
}
