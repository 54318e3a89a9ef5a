// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Arc configuration - the strategy seam for arc construction
//!
//! Each parameterization of an arc implements [`ArcConfig`] and produces the
//! same canonical [`ArcGeometry`]. [`ArcConfigKind`] wraps the built-in
//! strategies as data so a transport layer can pick one by tag.

use crate::strategies::{CenterArcConfig, EndpointsArcConfig, ThreePointArcConfig};
use crate::Result;
use daiku_model::{ArcDirection, Vector3};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Arc configuration strategy
///
/// Implementations derive the full arc description from their own minimal
/// input set. New parameterizations can be added without touching
/// [`crate::Arc`].
pub trait ArcConfig: Send + Sync {
    /// Compute the canonical arc description
    ///
    /// # Returns
    /// The derived geometry, or an error if the inputs admit no arc
    fn compute(&self) -> Result<ArcGeometry>;

    /// Short name of the parameterization, used in log records
    fn name(&self) -> &'static str;
}

/// Canonical arc description
///
/// Angles are in radians and are NOT normalized into a fixed range; they keep
/// whatever sign and magnitude the originating strategy produced.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ArcGeometry {
    pub center: Vector3,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub direction: ArcDirection,
    pub start: Vector3,
    pub end: Vector3,
    pub mid: Vector3,
}

/// Built-in arc configurations as tagged data
///
/// Deserializes from `{"kind": "center" | "three_point" | "endpoints", ...}`
/// with the strategy's own fields alongside the tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ArcConfigKind {
    Center(CenterArcConfig),
    ThreePoint(ThreePointArcConfig),
    Endpoints(EndpointsArcConfig),
}

impl ArcConfigKind {
    /// Borrow the wrapped strategy
    pub fn as_config(&self) -> &dyn ArcConfig {
        match self {
            ArcConfigKind::Center(config) => config,
            ArcConfigKind::ThreePoint(config) => config,
            ArcConfigKind::Endpoints(config) => config,
        }
    }
}

impl ArcConfig for ArcConfigKind {
    fn compute(&self) -> Result<ArcGeometry> {
        self.as_config().compute()
    }

    fn name(&self) -> &'static str {
        self.as_config().name()
    }
}

impl From<CenterArcConfig> for ArcConfigKind {
    fn from(config: CenterArcConfig) -> Self {
        ArcConfigKind::Center(config)
    }
}

impl From<ThreePointArcConfig> for ArcConfigKind {
    fn from(config: ThreePointArcConfig) -> Self {
        ArcConfigKind::ThreePoint(config)
    }
}

impl From<EndpointsArcConfig> for ArcConfigKind {
    fn from(config: EndpointsArcConfig) -> Self {
        ArcConfigKind::Endpoints(config)
    }
}

/// XY projection of a point
#[inline]
pub(crate) fn planar(v: &Vector3) -> Point2<f64> {
    Point2::new(v.x, v.y)
}

/// Point on a circle at `angle`, carrying the center's z
#[inline]
pub fn point_from_angle(center: Vector3, radius: f64, angle: f64) -> Vector3 {
    Vector3::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
        center.z,
    )
}

/// Angular extent travelled from `start_angle` to `end_angle`
///
/// Always in `[0, 2π)`, whatever the range of the inputs.
#[inline]
pub fn sweep_angle(start_angle: f64, end_angle: f64, direction: ArcDirection) -> f64 {
    match direction {
        ArcDirection::Ccw => (end_angle - start_angle).rem_euclid(TAU),
        ArcDirection::Cw => (start_angle - end_angle).rem_euclid(TAU),
    }
}

/// Angle halfway along the travelled path
#[inline]
pub fn mid_angle(start_angle: f64, end_angle: f64, direction: ArcDirection) -> f64 {
    let half = sweep_angle(start_angle, end_angle, direction) / 2.0;
    match direction {
        ArcDirection::Ccw => start_angle + half,
        ArcDirection::Cw => start_angle - half,
    }
}
