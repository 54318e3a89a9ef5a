// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Straight line segments

use daiku_model::{GeoEntity, Vector3};
use nalgebra::Point3;
use serde::{Deserialize, Serialize};

/// A line segment from `s` to `e`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub gid: String,
    pub s: Vector3,
    pub e: Vector3,
}

impl Line {
    /// Create a new line segment
    pub fn new(gid: impl Into<String>, s: Vector3, e: Vector3) -> Self {
        Self { gid: gid.into(), s, e }
    }

    pub fn length(&self) -> f64 {
        nalgebra::distance(&Point3::from(self.s), &Point3::from(self.e))
    }

    pub fn midpoint(&self) -> Vector3 {
        nalgebra::center(&Point3::from(self.s), &Point3::from(self.e)).into()
    }

    /// Check if start and end coincide
    pub fn is_degenerate(&self) -> bool {
        self.s == self.e
    }
}

impl GeoEntity for Line {
    fn gid(&self) -> &str {
        &self.gid
    }
}
