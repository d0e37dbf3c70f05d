//! Evaluation of many independent predicates at once.
//!
//! Geometries are never mutated after construction, so every evaluation only needs shared
//! read access to its inputs and can run on any worker. With the `parallel` feature the
//! inputs are split in contiguous chunks, one per worker thread; otherwise they are evaluated
//! in order on the calling thread. Results are always returned in input order.

use num_traits::Float;

use crate::{Point, Polygon, Result};

/// The amount of worker threads a batch may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Workers {
    /// As many workers as available CPUs.
    #[default]
    Auto,
    /// A fixed amount of workers; zero is treated as one.
    Fixed(usize),
}

impl Workers {
    /// Returns the amount of workers this value stands for, never less than one.
    pub fn count(self) -> usize {
        match self {
            #[cfg(feature = "parallel")]
            Workers::Auto => num_cpus::get().max(1),
            #[cfg(not(feature = "parallel"))]
            Workers::Auto => 1,
            Workers::Fixed(count) => count.max(1),
        }
    }
}

/// Returns, for each of the given points and in the same order, whether it is inside the
/// polygon.
///
/// Fails if the polygon is degenerate, even when no points are given.
pub fn contains_all<T>(
    polygon: &Polygon<T>,
    points: &[Point<T>],
    workers: Workers,
) -> Result<Vec<bool>>
where
    T: Float + Send + Sync,
{
    polygon.ensure_ring("contains_all")?;
    evaluate(points, workers, |point| polygon.contains(point))
        .into_iter()
        .collect()
}

/// Returns, for each of the given pairs and in the same order, whether its polygons overlap.
///
/// A degenerate pair fails on its own, without affecting the result of any other pair.
pub fn overlaps_pairs<T>(
    pairs: &[(Polygon<T>, Polygon<T>)],
    workers: Workers,
) -> Vec<Result<bool>>
where
    T: Float + Send + Sync,
{
    evaluate(pairs, workers, |(polygon, rhs)| polygon.overlaps(rhs))
}

#[cfg(feature = "parallel")]
fn evaluate<I, O, F>(items: &[I], workers: Workers, f: F) -> Vec<O>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync,
{
    let workers = workers.count().min(items.len());
    if workers <= 1 {
        return items.iter().map(f).collect();
    }

    let chunk_size = items.len().div_ceil(workers);
    tracing::trace!(items = items.len(), workers, chunk_size, "batch fan-out");

    let f = &f;
    crossbeam_utils::thread::scope(|scope| {
        let handles: Vec<_> = items
            .chunks(chunk_size)
            .map(|chunk| scope.spawn(move |_| chunk.iter().map(f).collect::<Vec<_>>()))
            .collect();

        handles
            .into_iter()
            .flat_map(|handle| {
                handle
                    .join()
                    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
            })
            .collect()
    })
    .unwrap_or_else(|payload| std::panic::resume_unwind(payload))
}

#[cfg(not(feature = "parallel"))]
fn evaluate<I, O, F>(items: &[I], _: Workers, f: F) -> Vec<O>
where
    F: Fn(&I) -> O,
{
    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use crate::{
        batch::{contains_all, overlaps_pairs, Workers},
        Error, Point, Polygon,
    };

    fn square(min: f64, size: f64) -> Polygon<f64> {
        vec![
            [min, min],
            [min + size, min],
            [min + size, min + size],
            [min, min + size],
        ]
        .into()
    }

    #[test]
    fn workers_count() {
        assert_eq!(Workers::Fixed(0).count(), 1);
        assert_eq!(Workers::Fixed(3).count(), 3);
        assert!(Workers::Auto.count() >= 1);
    }

    #[test]
    fn contains_all_keeps_input_order() {
        let polygon = square(0., 4.);
        let points: Vec<Point<f64>> = (0..50)
            .map(|index| Point::new(index as f64 * 0.2 - 2., 2.))
            .collect();

        let want: Vec<bool> = points
            .iter()
            .map(|point| polygon.contains(point).unwrap())
            .collect();

        [Workers::Fixed(1), Workers::Fixed(4), Workers::Fixed(64), Workers::Auto]
            .into_iter()
            .for_each(|workers| {
                let got = contains_all(&polygon, &points, workers).unwrap();
                assert_eq!(got, want, "{workers:?}");
            });
    }

    #[test]
    fn contains_all_with_degenerate_polygon() {
        let polygon: Polygon<f64> = vec![[0., 0.], [1., 1.]].into();

        assert!(matches!(
            contains_all(&polygon, &[], Workers::Auto),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn overlaps_pairs_reports_each_pair() {
        let pairs = vec![
            (square(0., 4.), square(2., 4.)),
            (square(0., 1.), square(5., 1.)),
            (square(0., 4.), vec![[1., 1.], [2., 2.]].into()),
            (square(0., 4.), square(1., 2.)),
        ];

        let got = overlaps_pairs(&pairs, Workers::Fixed(2));

        assert_eq!(got.len(), 4);
        assert_eq!(got[0], Ok(true));
        assert_eq!(got[1], Ok(false));
        assert!(matches!(got[2], Err(Error::InvalidInput(_))));
        assert_eq!(got[3], Ok(true));
    }
}
