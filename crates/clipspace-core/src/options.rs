//! Numerical tolerances for the transform pipeline.

use serde::{Deserialize, Serialize};

/// Thresholds used to detect degenerate inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Minimum length of `target - eye`, and minimum sine of the angle between
    /// `forward` and `up`, before the camera basis is considered degenerate.
    pub basis_epsilon: f64,

    /// A clip-space `w` with magnitude at or below this value lies on the
    /// camera plane and is not divided.
    pub divide_epsilon: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            basis_epsilon: 1e-9,
            divide_epsilon: 1e-12,
        }
    }
}

impl Tolerances {
    /// Sets the basis epsilon.
    #[must_use]
    pub fn with_basis_epsilon(mut self, epsilon: f64) -> Self {
        self.basis_epsilon = epsilon;
        self
    }

    /// Sets the divide epsilon.
    #[must_use]
    pub fn with_divide_epsilon(mut self, epsilon: f64) -> Self {
        self.divide_epsilon = epsilon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let tol: Tolerances = serde_json::from_str(r#"{ "divide_epsilon": 0.001 }"#).unwrap();
        assert_eq!(tol.divide_epsilon, 0.001);
        assert_eq!(tol.basis_epsilon, Tolerances::default().basis_epsilon);
    }
}
