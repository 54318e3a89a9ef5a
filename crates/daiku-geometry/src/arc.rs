// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc entity built from a configuration strategy

use crate::config::{planar, sweep_angle, ArcConfig, ArcGeometry};
use crate::strategies::{CenterArcConfig, EndpointsArcConfig, ThreePointArcConfig};
use crate::{Result, Tolerance};
use daiku_model::{ArcDirection, GeoEntity, Vector3};
use serde::Serialize;
use std::f64::consts::TAU;

/// A circular arc
///
/// Every field is fixed at construction by the strategy the arc was built
/// from. Serializes flat: `gid` followed by the eight canonical fields.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Arc {
    gid: String,
    #[serde(flatten)]
    geometry: ArcGeometry,
}

impl Arc {
    /// Build an arc from any configuration strategy
    pub fn new(gid: impl Into<String>, config: &dyn ArcConfig) -> Result<Self> {
        let gid = gid.into();
        let geometry = config.compute()?;
        log::debug!(
            "arc {gid} from {}: center {} r={} {}",
            config.name(),
            geometry.center,
            geometry.radius,
            geometry.direction
        );
        Ok(Self { gid, geometry })
    }

    /// Build an arc from a center-based description
    pub fn from_center(
        gid: impl Into<String>,
        center: Vector3,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        direction: ArcDirection,
    ) -> Result<Self> {
        let config =
            CenterArcConfig::new(center, radius, start_angle, end_angle).with_direction(direction);
        Self::new(gid, &config)
    }

    /// Build an arc through three points
    pub fn from_points(
        gid: impl Into<String>,
        start: Vector3,
        mid: Vector3,
        end: Vector3,
    ) -> Result<Self> {
        Self::new(gid, &ThreePointArcConfig::new(start, mid, end))
    }

    /// Build an arc from its endpoints and a radius
    pub fn from_endpoints(
        gid: impl Into<String>,
        start: Vector3,
        end: Vector3,
        radius: f64,
        direction: ArcDirection,
    ) -> Result<Self> {
        let config = EndpointsArcConfig::new(start, end, radius).with_direction(direction);
        Self::new(gid, &config)
    }

    pub fn center(&self) -> Vector3 {
        self.geometry.center
    }

    pub fn radius(&self) -> f64 {
        self.geometry.radius
    }

    /// Start angle in radians, as produced by the strategy
    pub fn start_angle(&self) -> f64 {
        self.geometry.start_angle
    }

    /// End angle in radians, as produced by the strategy
    pub fn end_angle(&self) -> f64 {
        self.geometry.end_angle
    }

    pub fn direction(&self) -> ArcDirection {
        self.geometry.direction
    }

    pub fn start(&self) -> Vector3 {
        self.geometry.start
    }

    pub fn end(&self) -> Vector3 {
        self.geometry.end
    }

    pub fn mid(&self) -> Vector3 {
        self.geometry.mid
    }

    /// Get the full canonical description
    pub fn geometry(&self) -> &ArcGeometry {
        &self.geometry
    }

    /// Angular extent in the travel direction, in `[0, 2π)`
    pub fn sweep(&self) -> f64 {
        sweep_angle(
            self.geometry.start_angle,
            self.geometry.end_angle,
            self.geometry.direction,
        )
    }

    /// Length along the circle
    pub fn length(&self) -> f64 {
        self.geometry.radius * self.sweep()
    }

    /// Check that the boundary points sit on the circle and `mid` lies on
    /// the travelled path
    pub fn is_consistent(&self, tolerance: &Tolerance) -> bool {
        let g = &self.geometry;
        let center = planar(&g.center);
        let on_circle = [g.start, g.end, g.mid].iter().all(|p| {
            tolerance.distance_matches(nalgebra::distance(&center, &planar(p)), g.radius)
        });
        if !on_circle {
            return false;
        }

        let mid_angle = (g.mid.y - g.center.y).atan2(g.mid.x - g.center.x);
        let travelled = sweep_angle(g.start_angle, mid_angle, g.direction);
        // Angular slack equivalent to the distance slack on this circle
        let slack = tolerance.distance_epsilon * g.radius.max(1.0) / g.radius;
        travelled <= self.sweep() + slack || travelled >= TAU - slack
    }
}

impl GeoEntity for Arc {
    fn gid(&self) -> &str {
        &self.gid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_arc_initializes_components() {
        let center = Vector3::new(1.0, 2.0, 3.0);
        let arc = Arc::from_center("gid", center, 5.0, 0.0, 1.0, ArcDirection::Cw).unwrap();

        assert_eq!(arc.gid(), "gid");
        assert_eq!(arc.center(), center);
        assert_eq!(arc.radius(), 5.0);
        assert_eq!(arc.start_angle(), 0.0);
        assert_eq!(arc.end_angle(), 1.0);
        assert_eq!(arc.direction(), ArcDirection::Cw);
    }

    #[test]
    fn test_sweep_and_length() {
        let arc = Arc::from_center("a", Vector3::zero(), 2.0, 0.0, FRAC_PI_2, ArcDirection::Ccw)
            .unwrap();
        assert_abs_diff_eq!(arc.sweep(), FRAC_PI_2, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.length(), PI, epsilon = 1e-12);

        let cw = Arc::from_center("b", Vector3::zero(), 2.0, 0.0, FRAC_PI_2, ArcDirection::Cw)
            .unwrap();
        assert_abs_diff_eq!(cw.sweep(), 1.5 * PI, epsilon = 1e-12);
    }

    #[test]
    fn test_new_accepts_any_strategy() {
        let config =
            EndpointsArcConfig::new(Vector3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 1.0, 0.0), 1.0);
        let arc = Arc::new("e", &config).unwrap();
        assert!(arc.is_consistent(&Tolerance::default()));
    }

    #[test]
    fn test_errors_propagate() {
        let p = Vector3::new(1.0, 1.0, 0.0);
        let err = Arc::from_endpoints("x", p, p, 1.0, ArcDirection::Ccw).unwrap_err();
        assert!(matches!(err, Error::DegenerateInput(_)));
    }

    #[test]
    fn test_consistency_detects_tampered_mid() {
        let mut arc =
            Arc::from_center("a", Vector3::zero(), 1.0, 0.0, FRAC_PI_2, ArcDirection::Ccw)
                .unwrap();
        assert!(arc.is_consistent(&Tolerance::default()));

        // Same circle, wrong side of the chord
        arc.geometry.mid = Vector3::new(-1.0, 0.0, 0.0);
        assert!(!arc.is_consistent(&Tolerance::default()));

        arc.geometry.mid = Vector3::new(2.0, 0.0, 0.0);
        assert!(!arc.is_consistent(&Tolerance::default()));
    }

    #[test]
    fn test_serializes_flat() {
        let arc = Arc::from_center("a", Vector3::zero(), 1.0, 0.0, PI, ArcDirection::Ccw).unwrap();
        let json = serde_json::to_value(&arc).unwrap();
        assert_eq!(json["gid"], "a");
        assert_eq!(json["radius"], 1.0);
        assert_eq!(json["direction"], "ccw");
        assert_eq!(json["center"]["z"], 0.0);
        assert!(json["mid"]["y"].as_f64().unwrap() > 0.99);
    }
}
