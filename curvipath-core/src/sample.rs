use curvipath_symbolic::Expr;

use crate::{
    grid::TimeGrid,
    observe::{Event, Observer},
};

/// Evaluates `expr` at every instant of `grid`.
///
/// The whole grid is evaluated in one pass first. If that pass fails
/// anywhere, each sample is evaluated on its own and any sample that cannot
/// be computed becomes `0.0`. The result therefore always has the grid's
/// length and contains only finite values.
pub fn sample<O>(expr: &Expr, grid: &TimeGrid, observer: &mut O) -> Vec<f64>
where
    O: for<'a> Observer<Event<'a>>,
{
    match expr.eval_array(grid.view()) {
        Ok(values) => values.to_vec(),
        Err(error) => {
            observer.observe(&Event::VectorizedFallback { error: &error });
            grid.iter()
                .map(|t| match expr.eval(t) {
                    Ok(value) => value,
                    Err(error) => {
                        observer.observe(&Event::SampleDefaulted { t, error: &error });
                        0.0
                    }
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use curvipath_symbolic::parse;
    use uom::si::time::second;

    fn grid(t_max: f64, intervals: usize) -> TimeGrid {
        TimeGrid::new::<second>(t_max, intervals).unwrap()
    }

    #[test]
    fn matches_grid_length() {
        let grid = grid(10.0, 100);
        for source in ["t", "5", "sin(t)/t", "sqrt(t-5)", "log(t)"] {
            let expr = parse(source).unwrap();
            let values = sample(&expr, &grid, &mut ());
            assert_eq!(values.len(), grid.len(), "source: {source}");
            assert!(values.iter().all(|v| v.is_finite()), "source: {source}");
        }
    }

    #[test]
    fn constants_broadcast_over_the_grid() {
        let grid = grid(2.0, 4);
        let values = sample(&parse("7").unwrap(), &grid, &mut ());
        assert_eq!(values, vec![7.0; 5]);
    }

    #[test]
    fn failed_samples_default_to_zero() {
        let grid = grid(10.0, 100);
        let expr = parse("sin(t)/t").unwrap();

        let mut fallbacks = 0;
        let mut defaulted = Vec::new();
        let values = sample(&expr, &grid, &mut |event: &Event<'_>| match event {
            Event::VectorizedFallback { .. } => fallbacks += 1,
            Event::SampleDefaulted { t, .. } => defaulted.push(*t),
            _ => {}
        });

        assert_eq!(fallbacks, 1);
        assert_eq!(defaulted, vec![0.0]);
        assert_eq!(values[0], 0.0);
        for (value, t) in values.iter().zip(grid.iter()).skip(1) {
            assert_relative_eq!(*value, t.sin() / t, epsilon = 1e-12);
        }
    }

    #[test]
    fn out_of_domain_region_is_zeroed() {
        let grid = grid(4.0, 4);
        let values = sample(&parse("sqrt(t-2)").unwrap(), &grid, &mut ());
        assert_eq!(&values[..2], &[0.0, 0.0]);
        assert_relative_eq!(values[2], 0.0);
        assert_relative_eq!(values[3], 1.0);
        assert_relative_eq!(values[4], 2.0_f64.sqrt());
    }
}
