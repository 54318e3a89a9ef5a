// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Numeric tolerances for arc construction and checks

/// Tolerance settings
///
/// `collinear_epsilon` bounds the determinant of the three-point circle fit;
/// below it the points are treated as collinear. `distance_epsilon` is the
/// absolute slack (scaled by the radius for radii above one) used when
/// checking that derived points sit on their circle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tolerance {
    pub collinear_epsilon: f64,
    pub distance_epsilon: f64,
}

impl Tolerance {
    pub const DEFAULT_COLLINEAR_EPSILON: f64 = 1.0e-10;
    pub const DEFAULT_DISTANCE_EPSILON: f64 = 1.0e-9;

    /// Create tolerance settings
    pub const fn new(collinear_epsilon: f64, distance_epsilon: f64) -> Self {
        Self {
            collinear_epsilon,
            distance_epsilon,
        }
    }

    /// Loose tolerances for imported or hand-measured input
    pub fn loose() -> Self {
        Self::new(1.0e-6, 1.0e-6)
    }

    /// Set the collinearity threshold
    pub fn with_collinear_epsilon(mut self, epsilon: f64) -> Self {
        self.collinear_epsilon = epsilon;
        self
    }

    /// Check whether `value` lies within the distance slack of `expected`
    pub fn distance_matches(&self, value: f64, expected: f64) -> bool {
        (value - expected).abs() <= self.distance_epsilon * expected.abs().max(1.0)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLLINEAR_EPSILON, Self::DEFAULT_DISTANCE_EPSILON)
    }
}
