/// Configuration for the formula solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    /// Launch angles with a magnitude below this (in radians) are treated as
    /// horizontal.
    pub degenerate_angle_tol: f64,
    /// Gravitational acceleration assumed when a projectile request omits `g`.
    pub default_gravity: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            degenerate_angle_tol: 1e-6,
            default_gravity: 9.81,
        }
    }
}

impl Config {
    /// Validates the tolerance and the default gravity.
    ///
    /// # Errors
    ///
    /// Returns an error if the tolerance is negative or non-finite, or if the
    /// default gravity is not finite and strictly positive.
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.degenerate_angle_tol.is_finite() || self.degenerate_angle_tol < 0.0 {
            return Err("degenerate_angle_tol must be finite and non-negative");
        }
        if !self.default_gravity.is_finite() || self.default_gravity <= 0.0 {
            return Err("default_gravity must be finite and positive");
        }
        Ok(())
    }
}
