// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc strategies - Implementations for each arc parameterization
//!
//! Each strategy derives the canonical [`ArcGeometry`] from a different
//! minimal input set:
//!
//! - [`CenterArcConfig`]: center, radius, start/end angle and direction
//! - [`ThreePointArcConfig`]: start, a point on the arc, end
//! - [`EndpointsArcConfig`]: start, end, radius and direction
//!
//! Circle fits are planar (XY projection); z values are carried through from
//! the inputs, never computed.

use crate::config::{mid_angle, planar, point_from_angle, ArcConfig, ArcGeometry};
use crate::{Error, Result, Tolerance};
use daiku_model::{ArcDirection, Vector3};
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Center-based arc
///
/// Boundary points are placed on the circle from the angles. The midpoint is
/// taken halfway along the travelled sweep, so it always lies on the arc
/// itself and never on its complement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CenterArcConfig {
    pub center: Vector3,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    #[serde(default)]
    pub direction: ArcDirection,
}

impl CenterArcConfig {
    /// Create a counter-clockwise center-based configuration
    pub fn new(center: Vector3, radius: f64, start_angle: f64, end_angle: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            end_angle,
            direction: ArcDirection::Ccw,
        }
    }

    /// Set the travel direction
    pub fn with_direction(mut self, direction: ArcDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl ArcConfig for CenterArcConfig {
    fn compute(&self) -> Result<ArcGeometry> {
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidRadius(self.radius));
        }

        let start = point_from_angle(self.center, self.radius, self.start_angle);
        let end = point_from_angle(self.center, self.radius, self.end_angle);
        let mid = point_from_angle(
            self.center,
            self.radius,
            mid_angle(self.start_angle, self.end_angle, self.direction),
        );

        Ok(ArcGeometry {
            center: self.center,
            radius: self.radius,
            start_angle: self.start_angle,
            end_angle: self.end_angle,
            direction: self.direction,
            start,
            end,
            mid,
        })
    }

    fn name(&self) -> &'static str {
        "center"
    }
}

/// Three-point arc
///
/// Fits the unique circle through `start`, `mid` and `end` by solving the
/// perpendicular-bisector system. Direction comes from the winding of the
/// three points alone. The output boundary points are the inputs unchanged,
/// so caller-supplied z values survive the planar fit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreePointArcConfig {
    pub start: Vector3,
    pub mid: Vector3,
    pub end: Vector3,
    #[serde(skip)]
    pub tolerance: Tolerance,
}

impl ThreePointArcConfig {
    /// Create a three-point configuration with default tolerances
    pub fn new(start: Vector3, mid: Vector3, end: Vector3) -> Self {
        Self {
            start,
            mid,
            end,
            tolerance: Tolerance::default(),
        }
    }

    /// Use custom tolerances for the collinearity check
    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl ArcConfig for ThreePointArcConfig {
    fn compute(&self) -> Result<ArcGeometry> {
        let (x1, y1) = (self.start.x, self.start.y);
        let (x2, y2) = (self.mid.x, self.mid.y);
        let (x3, y3) = (self.end.x, self.end.y);

        let temp = x2 * x2 + y2 * y2;
        let bc = (x1 * x1 + y1 * y1 - temp) / 2.0;
        let cd = (temp - x3 * x3 - y3 * y3) / 2.0;
        let det = (x1 - x2) * (y2 - y3) - (x2 - x3) * (y1 - y2);
        if det.abs() < self.tolerance.collinear_epsilon {
            log::trace!("three-point fit rejected, det = {det:e}");
            return Err(Error::CollinearPoints { det });
        }

        let cx = (bc * (y2 - y3) - cd * (y1 - y2)) / det;
        let cy = ((x1 - x2) * cd - (x2 - x3) * bc) / det;
        let center = Vector3::new(cx, cy, self.start.z);
        let radius = (x1 - cx).hypot(y1 - cy);

        let start_angle = (y1 - cy).atan2(x1 - cx);
        let end_angle = (y3 - cy).atan2(x3 - cx);

        // z of (mid - start) x (end - start)
        let orientation = (x2 - x1) * (y3 - y1) - (y2 - y1) * (x3 - x1);
        let direction = if orientation > 0.0 {
            ArcDirection::Ccw
        } else {
            ArcDirection::Cw
        };

        Ok(ArcGeometry {
            center,
            radius,
            start_angle,
            end_angle,
            direction,
            start: self.start,
            end: self.end,
            mid: self.mid,
        })
    }

    fn name(&self) -> &'static str {
        "three_point"
    }
}

/// Endpoints-and-radius arc
///
/// Two circles of a given radius pass through two distinct points. The
/// center is offset from the chord midpoint along the left-hand normal of
/// the chord for CCW travel and along the right-hand normal for CW travel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EndpointsArcConfig {
    pub start: Vector3,
    pub end: Vector3,
    pub radius: f64,
    #[serde(default)]
    pub direction: ArcDirection,
}

impl EndpointsArcConfig {
    /// Create a counter-clockwise endpoints configuration
    pub fn new(start: Vector3, end: Vector3, radius: f64) -> Self {
        Self {
            start,
            end,
            radius,
            direction: ArcDirection::Ccw,
        }
    }

    /// Set the travel direction
    pub fn with_direction(mut self, direction: ArcDirection) -> Self {
        self.direction = direction;
        self
    }
}

impl ArcConfig for EndpointsArcConfig {
    fn compute(&self) -> Result<ArcGeometry> {
        let a = planar(&self.start);
        let b = planar(&self.end);
        let chord = b - a;
        let q = chord.norm();
        if q == 0.0 {
            return Err(Error::degenerate(
                "start and end coincide, no unique chord",
            ));
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return Err(Error::InvalidRadius(self.radius));
        }

        let half_chord = q / 2.0;
        if self.radius < half_chord {
            return Err(Error::RadiusTooSmall {
                radius: self.radius,
                half_chord,
            });
        }

        // Clamped so a radius equal to the half chord up to round-off gives h = 0
        let h = (self.radius * self.radius - half_chord * half_chord)
            .max(0.0)
            .sqrt();
        let normal = Vector2::new(-chord.y, chord.x) / q;
        let m = nalgebra::center(&a, &b);
        let c = match self.direction {
            ArcDirection::Ccw => m + normal * h,
            ArcDirection::Cw => m - normal * h,
        };
        let center = Vector3::new(c.x, c.y, self.start.z);

        let start_angle = (a.y - c.y).atan2(a.x - c.x);
        let end_angle = (b.y - c.y).atan2(b.x - c.x);
        let mid = point_from_angle(
            center,
            self.radius,
            mid_angle(start_angle, end_angle, self.direction),
        );

        Ok(ArcGeometry {
            center,
            radius: self.radius,
            start_angle,
            end_angle,
            direction: self.direction,
            start: self.start,
            end: self.end,
            mid,
        })
    }

    fn name(&self) -> &'static str {
        "endpoints"
    }
}
