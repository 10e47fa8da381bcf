use ndarray::{Array1, ArrayView1};
use thiserror::Error;
use uom::{
    Conversion,
    si::{f64::Time, time},
};

/// Evenly spaced time samples over `[0, t_max]`.
///
/// A grid built from `intervals` intervals holds `intervals + 1` strictly
/// increasing samples, stored in seconds. Grids are read-only once built
/// and are shared by every evaluation in a request.
///
/// # Construction
///
/// ```
/// use curvipath_core::grid::TimeGrid;
/// use uom::si::time::second;
///
/// let grid = TimeGrid::new::<second>(10.0, 100)?;
/// assert_eq!(grid.len(), 101);
/// # Ok::<(), curvipath_core::grid::GridError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    samples: Array1<f64>,
}

/// Error returned when constructing an invalid [`TimeGrid`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum GridError {
    #[error("t_max must be a finite number, got {0}")]
    NonFinite(f64),

    #[error("t_max must be greater than zero, got {0} s")]
    NotPositive(f64),

    #[error("intervals must be greater than zero")]
    NoIntervals,
}

impl TimeGrid {
    /// Constructs a grid from a duration magnitude and a [`uom`] time unit.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if `t_max` is not a finite, strictly positive
    /// duration or if `intervals` is zero.
    pub fn new<U>(t_max: f64, intervals: usize) -> Result<Self, GridError>
    where
        U: time::Unit + Conversion<f64, T = f64>,
    {
        if !t_max.is_finite() {
            return Err(GridError::NonFinite(t_max));
        }
        Self::from_duration(Time::new::<U>(t_max), intervals)
    }

    /// Constructs a grid spanning an existing [`Time`] value.
    ///
    /// # Errors
    ///
    /// Returns a [`GridError`] if the duration is not finite and strictly
    /// positive or if `intervals` is zero.
    pub fn from_duration(t_max: Time, intervals: usize) -> Result<Self, GridError> {
        let seconds = t_max.get::<time::second>();
        if !seconds.is_finite() {
            return Err(GridError::NonFinite(seconds));
        }
        if seconds <= 0.0 {
            return Err(GridError::NotPositive(seconds));
        }
        if intervals == 0 {
            return Err(GridError::NoIntervals);
        }

        Ok(Self {
            samples: Array1::linspace(0.0, seconds, intervals + 1),
        })
    }

    /// Number of samples, always `intervals + 1`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// A grid is never empty; provided for API symmetry with collections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The last sample, equal to `t_max` in seconds.
    #[must_use]
    pub fn t_max(&self) -> Time {
        let last = self.samples.last().copied().unwrap_or_default();
        Time::new::<time::second>(last)
    }

    /// Samples in seconds.
    #[must_use]
    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.samples.view()
    }

    /// Samples in seconds as a plain slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        self.samples.as_slice().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().copied()
    }
}
