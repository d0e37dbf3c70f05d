use std::ops::{Mul, Sub};

use num_traits::Zero;

use crate::Point;

/// Returns the cross product of the vectors `(x0, y0)` and `(x1, y1)`.
pub fn cross<T>(x0: T, x1: T, y0: T, y1: T) -> T
where
    T: Sub<Output = T> + Mul<Output = T>,
{
    x0 * y1 - x1 * y0
}

/// Returns twice the signed area of the triangle `(x0, y0)`, `(x1, y1)`, `(x2, y2)`.
///
/// The result is positive if the three points turn counter-clockwise, negative if they turn
/// clockwise and zero if they are collinear.
pub fn ccw<T>(x0: T, x1: T, x2: T, y0: T, y1: T, y2: T) -> T
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    cross(x1 - x0, x2 - x0, y1 - y0, y2 - y0)
}

/// The direction of the turn described by three consecutive points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

/// The scalar value representing the determinant of a matrix.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Determinant<T>(T);

impl<T> From<[&Point<T>; 3]> for Determinant<T>
where
    T: Copy + Sub<Output = T> + Mul<Output = T>,
{
    /// Being `A`, `B` and `C` the given [`Point`]s, returns the determinant of the matrix
    /// representing the direction vectors `AB` and `AC`.
    fn from([a, b, c]: [&Point<T>; 3]) -> Self {
        Self(ccw(a.x, b.x, c.x, a.y, b.y, c.y))
    }
}

impl<T> Determinant<T>
where
    T: Zero + PartialOrd,
{
    /// Returns the [`Orientation`] this determinant stands for.
    pub fn orientation(&self) -> Orientation {
        if self.0 > T::zero() {
            Orientation::CounterClockwise
        } else if self.0 < T::zero() {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

impl<T> Determinant<T> {
    /// Returns the inner value of self.
    pub fn into_inner(self) -> T {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        determinant::{ccw, cross, Determinant, Orientation},
        point, Point,
    };

    #[test]
    fn cross_product_sign() {
        assert_eq!(cross(1., 0., 0., 1.), 1.);
        assert_eq!(cross(0., 1., 1., 0.), -1.);
        assert_eq!(cross(2., 2., 3., 3.), 0.);
    }

    #[test]
    fn collinear_points() {
        assert_eq!(ccw(0., 1., 2., 0., 1., 2.), 0.);
        assert_eq!(ccw(-1., 0., 3., 5., 5., 5.), 0.);
    }

    #[test]
    fn determinant_of_vectors() {
        struct Test {
            name: &'static str,
            points: [Point<f64>; 3],
            want: Determinant<f64>,
            orientation: Orientation,
        }

        vec![
            Test {
                name: "clockwise vectors",
                points: [point!(0., 1.), point!(0., 0.), point!(-1., 0.)],
                want: Determinant(-1.),
                orientation: Orientation::Clockwise,
            },
            Test {
                name: "counter-clockwise vectors",
                points: [point!(0., 1.), point!(0., 0.), point!(1., 0.)],
                want: Determinant(1.),
                orientation: Orientation::CounterClockwise,
            },
            Test {
                name: "colinear vectors",
                points: [point!(4., 4.), point!(2., 2.), point!(0., 0.)],
                want: Determinant(0.),
                orientation: Orientation::Collinear,
            },
            Test {
                name: "unit triangle",
                points: [point!(0., 0.), point!(2., 0.), point!(0., 2.)],
                want: Determinant(4.),
                orientation: Orientation::CounterClockwise,
            },
        ]
        .into_iter()
        .for_each(|test| {
            let [a, b, c] = test.points;
            let got = Determinant::from([&a, &b, &c]);

            assert_eq!(got, test.want, "{}", test.name);
            assert_eq!(got.orientation(), test.orientation, "{}", test.name);
        });
    }
}
