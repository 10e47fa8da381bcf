//! Intrinsic description of a vector function's path.
//!
//! From the sampled position, velocity and acceleration of one slot this
//! derives the distance travelled along the path, its curvature, and the
//! split of acceleration into a tangential part (change of speed) and a
//! normal part (change of direction). Axes without an equation count as
//! zero, so a slot with only `x` and `y` is a plane curve.

use crate::motion::{Axis, EquationId, Kind, ResultBundle, Slot, bundle_key};

/// Speeds below this are treated as being at rest.
const REST_SPEED: f64 = 1e-12;

type Vector = [f64; 3];

/// A curve derived from a whole slot rather than a single component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    /// Cumulative distance along the path since the first sample.
    ArcLength,
    Curvature,
    TangentialAcceleration,
    NormalAcceleration,
}

impl Measure {
    pub const ALL: [Measure; 4] = [
        Measure::ArcLength,
        Measure::Curvature,
        Measure::TangentialAcceleration,
        Measure::NormalAcceleration,
    ];

    #[must_use]
    pub fn tag(self) -> &'static str {
        match self {
            Measure::ArcLength => "s",
            Measure::Curvature => "curvature",
            Measure::TangentialAcceleration => "a_t",
            Measure::NormalAcceleration => "a_n",
        }
    }
}

/// Bundle key for a slot measure, e.g. `curvature_2`.
#[must_use]
pub fn measure_key(slot: usize, measure: Measure) -> String {
    format!("{}_{slot}", measure.tag())
}

/// Sampled kinematics of one vector-function slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub position: Vec<Vector>,
    pub velocity: Vec<Vector>,
    pub acceleration: Vec<Vector>,
}

impl Trajectory {
    /// Collects the curves of slot `slot` from `bundle`.
    ///
    /// Returns `None` if the slot has no component at all.
    #[must_use]
    pub fn from_bundle(bundle: &ResultBundle, slot: usize) -> Option<Self> {
        let curves = |kind: Kind| {
            Axis::ALL.map(|axis| {
                let equation = EquationId {
                    axis,
                    slot: Slot::Indexed(slot),
                };
                bundle.get(&bundle_key(equation, kind))
            })
        };

        let position = curves(Kind::Position);
        let len = position.iter().flatten().map(|values| values.len()).next()?;
        Some(Self {
            position: vectors(position, len),
            velocity: vectors(curves(Kind::Velocity), len),
            acceleration: vectors(curves(Kind::Acceleration), len),
        })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.position.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_empty()
    }

    #[must_use]
    pub fn measure(&self, measure: Measure) -> Vec<f64> {
        match measure {
            Measure::ArcLength => self.arc_length(),
            Measure::Curvature => self.curvature(),
            Measure::TangentialAcceleration => self.tangential_acceleration(),
            Measure::NormalAcceleration => self.normal_acceleration(),
        }
    }

    /// Sum of chord lengths between consecutive position samples.
    #[must_use]
    pub fn arc_length(&self) -> Vec<f64> {
        let mut total = 0.0;
        let mut lengths = Vec::with_capacity(self.len());
        let mut previous: Option<&Vector> = None;
        for point in &self.position {
            if let Some(previous) = previous {
                total += norm(&sub(point, previous));
            }
            lengths.push(total);
            previous = Some(point);
        }
        lengths
    }

    /// `|v × a| / |v|³`, zero where the body is at rest.
    #[must_use]
    pub fn curvature(&self) -> Vec<f64> {
        self.per_sample(|v, a, speed| norm(&cross(v, a)) / speed.powi(3))
    }

    /// `v · a / |v|`, zero where the body is at rest.
    #[must_use]
    pub fn tangential_acceleration(&self) -> Vec<f64> {
        self.per_sample(|v, a, speed| dot(v, a) / speed)
    }

    /// `|v × a| / |v|`, zero where the body is at rest.
    #[must_use]
    pub fn normal_acceleration(&self) -> Vec<f64> {
        self.per_sample(|v, a, speed| norm(&cross(v, a)) / speed)
    }

    /// Direction of motion at sample `index`.
    #[must_use]
    pub fn unit_tangent(&self, index: usize) -> Option<Vector> {
        let velocity = self.velocity.get(index)?;
        unit(velocity)
    }

    /// Direction the path turns towards at sample `index`.
    ///
    /// Returns `None` at rest or where the path is locally straight.
    #[must_use]
    pub fn unit_normal(&self, index: usize) -> Option<Vector> {
        let tangent = self.unit_tangent(index)?;
        let acceleration = self.acceleration.get(index)?;
        let along = dot(acceleration, &tangent);
        unit(&sub(acceleration, &tangent.map(|component| component * along)))
    }

    fn per_sample(&self, measure: impl Fn(&Vector, &Vector, f64) -> f64) -> Vec<f64> {
        self.velocity
            .iter()
            .zip(&self.acceleration)
            .map(|(v, a)| {
                let speed = norm(v);
                if speed < REST_SPEED {
                    0.0
                } else {
                    measure(v, a, speed)
                }
            })
            .collect()
    }
}

/// Adds the [`Measure`] curves of every indexed slot to `bundle`.
pub(crate) fn add_measures(bundle: &mut ResultBundle, slot_count: usize) {
    for slot in 1..=slot_count {
        let Some(trajectory) = Trajectory::from_bundle(bundle, slot) else {
            continue;
        };
        for measure in Measure::ALL {
            bundle.insert_key(measure_key(slot, measure), trajectory.measure(measure));
        }
    }
}

fn vectors(axes: [Option<&[f64]>; 3], len: usize) -> Vec<Vector> {
    (0..len)
        .map(|i| axes.map(|values| values.and_then(|values| values.get(i)).map_or(0.0, |v| *v)))
        .collect()
}

fn dot(a: &Vector, b: &Vector) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

fn cross(a: &Vector, b: &Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

fn sub(a: &Vector, b: &Vector) -> Vector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

fn norm(a: &Vector) -> f64 {
    dot(a, a).sqrt()
}

fn unit(a: &Vector) -> Option<Vector> {
    let length = norm(a);
    (length >= REST_SPEED).then(|| a.map(|component| component / length))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    /// Uniform circular motion of radius `r` at angular speed `w`.
    fn circle(r: f64, w: f64, times: &[f64]) -> Trajectory {
        let at = |f: &dyn Fn(f64) -> Vector| -> Vec<Vector> {
            times.iter().map(|&t| f(t)).collect()
        };
        Trajectory {
            position: at(&|t| [r * (w * t).cos(), r * (w * t).sin(), 0.0]),
            velocity: at(&|t| [-r * w * (w * t).sin(), r * w * (w * t).cos(), 0.0]),
            acceleration: at(&|t| {
                let a = r * w * w;
                [-a * (w * t).cos(), -a * (w * t).sin(), 0.0]
            }),
        }
    }

    #[test]
    fn circle_has_curvature_one_over_radius() {
        let times: Vec<f64> = (0..20).map(|i| f64::from(i) * 0.3).collect();
        let path = circle(4.0, 1.5, &times);

        for kappa in path.curvature() {
            assert_relative_eq!(kappa, 0.25, epsilon = 1e-12);
        }
        for a_t in path.tangential_acceleration() {
            assert_relative_eq!(a_t, 0.0, epsilon = 1e-12);
        }
        for a_n in path.normal_acceleration() {
            assert_relative_eq!(a_n, 4.0 * 1.5 * 1.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn circle_normal_points_to_the_centre() {
        let path = circle(2.0, 1.0, &[0.0, 1.0]);
        let normal = path.unit_normal(0).unwrap();
        assert_relative_eq!(normal[0], -1.0, epsilon = 1e-12);
        assert_relative_eq!(normal[1], 0.0, epsilon = 1e-12);
        let tangent = path.unit_tangent(0).unwrap();
        assert_relative_eq!(tangent[1], 1.0, epsilon = 1e-12);
        assert_eq!(path.unit_tangent(2), None);
    }

    #[test]
    fn straight_line_speeding_up() {
        // x = t^2 along the diagonal of the xy plane.
        let times = [0.0, 1.0, 2.0];
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let path = Trajectory {
            position: times.iter().map(|t| [s * t * t, s * t * t, 0.0]).collect(),
            velocity: times.iter().map(|t| [2.0 * s * t, 2.0 * s * t, 0.0]).collect(),
            acceleration: vec![[2.0 * s, 2.0 * s, 0.0]; 3],
        };

        assert_eq!(path.tangential_acceleration()[0], 0.0);
        assert_relative_eq!(path.tangential_acceleration()[2], 2.0, epsilon = 1e-12);
        assert_relative_eq!(path.curvature()[1], 0.0, epsilon = 1e-12);
        assert_eq!(path.unit_normal(1), None);

        let lengths = path.arc_length();
        assert_eq!(lengths[0], 0.0);
        assert_relative_eq!(lengths[2], 4.0, epsilon = 1e-12);
    }
}
