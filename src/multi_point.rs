use crate::{BoundingBox, Error, Point, Result};

/// Returns the smallest value in the given sequence.
///
/// Sequences of less than two values are rejected with [`Error::InvalidInput`], a single value
/// has no meaningful extent.
pub fn min<T>(values: &[T]) -> Result<T>
where
    T: Copy + PartialOrd,
{
    extreme(values, "min", |candidate, current| candidate < current)
}

/// Returns the greatest value in the given sequence.
///
/// Sequences of less than two values are rejected with [`Error::InvalidInput`].
pub fn max<T>(values: &[T]) -> Result<T>
where
    T: Copy + PartialOrd,
{
    extreme(values, "max", |candidate, current| candidate > current)
}

/// Scans the sequence keeping the first value no other value is preferred over.
fn extreme<T, F>(values: &[T], operation: &'static str, prefer: F) -> Result<T>
where
    T: Copy,
    F: Fn(&T, &T) -> bool,
{
    let [first, rest @ ..] = values else {
        return Err(too_short(operation, 0));
    };

    if rest.is_empty() {
        return Err(too_short(operation, 1));
    }

    Ok(rest
        .iter()
        .fold(*first, |current, value| {
            if prefer(value, &current) {
                *value
            } else {
                current
            }
        }))
}

fn too_short(operation: &'static str, len: usize) -> Error {
    tracing::debug!(operation, len, "reduction over a sequence shorter than 2");
    Error::InvalidInput(format!("{operation} requires at least 2 values, got {len}"))
}

/// An ordered sequence of points stored as two parallel coordinate sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoint<T = f64> {
    xs: Vec<T>,
    ys: Vec<T>,
}

impl<T> Default for MultiPoint<T> {
    fn default() -> Self {
        Self {
            xs: Vec::new(),
            ys: Vec::new(),
        }
    }
}

impl<T, P> FromIterator<P> for MultiPoint<T>
where
    P: Into<Point<T>>,
{
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::from_points(iter)
    }
}

impl<T> MultiPoint<T> {
    /// Creates a new multi point from the given coordinates, where index `i` of both sequences
    /// describes the same point.
    pub fn new(xs: Vec<T>, ys: Vec<T>) -> Result<Self> {
        if xs.len() != ys.len() {
            tracing::debug!(
                x_len = xs.len(),
                y_len = ys.len(),
                "mismatched coordinate sequences"
            );

            return Err(Error::InvalidInput(format!(
                "got {} x coordinates and {} y coordinates",
                xs.len(),
                ys.len()
            )));
        }

        Ok(Self { xs, ys })
    }

    /// Creates a new multi point from the given ordered points.
    pub fn from_points<P>(points: impl IntoIterator<Item = P>) -> Self
    where
        P: Into<Point<T>>,
    {
        let (xs, ys) = points
            .into_iter()
            .map(|point| {
                let Point { x, y } = point.into();
                (x, y)
            })
            .unzip();

        Self { xs, ys }
    }

    /// Returns the horizontal coordinates, in order.
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns the vertical coordinates, in order.
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the amount of points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T> MultiPoint<T>
where
    T: Copy,
{
    /// Returns the point at the given position.
    pub fn point(&self, index: usize) -> Result<Point<T>> {
        match (self.xs.get(index), self.ys.get(index)) {
            (Some(&x), Some(&y)) => Ok(Point { x, y }),
            _ => {
                tracing::debug!(index, len = self.len(), "vertex index out of range");
                Err(Error::IndexOutOfRange {
                    index,
                    len: self.len(),
                })
            }
        }
    }

    /// Returns an ordered iterator over all the points.
    pub fn points(&self) -> impl ExactSizeIterator<Item = Point<T>> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Point { x, y })
    }
}

impl<T> MultiPoint<T>
where
    T: Copy + PartialOrd,
{
    /// Returns the box enclosing all the points.
    pub fn bounding_box(&self) -> Result<BoundingBox<T>> {
        Ok(BoundingBox {
            min_x: min(&self.xs)?,
            max_x: max(&self.xs)?,
            min_y: min(&self.ys)?,
            max_y: max(&self.ys)?,
        })
    }
}
