// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core types for part and sketch geometry
//!
//! This module defines the coordinate values and small enumerations used
//! throughout the daiku crates.

use crate::{GeoEntity, ModelError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 2D coordinate value
///
/// Used for feature shapes drawn on a part face.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 3D coordinate value
///
/// Equality via `==` is exact; use [`Vector3::approx_eq`] for values that
/// were derived through floating point arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    /// Optional on input, defaults to `0.0`
    #[serde(default)]
    pub z: f64,
}

impl Vector3 {
    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The zero vector
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Compare with another vector using an absolute tolerance per component
    pub fn approx_eq(&self, other: &Vector3, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon
            && (self.y - other.y).abs() <= epsilon
            && (self.z - other.z).abs() <= epsilon
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A located point with an identifier
///
/// Serialized flat as `{ "gid", "x", "y", "z" }`. Both `gid` and `z` are
/// optional on input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub gid: String,
    #[serde(flatten)]
    position: Vector3,
}

impl Point {
    /// Create a new point
    pub fn new(gid: impl Into<String>, x: f64, y: f64, z: f64) -> Self {
        Self {
            gid: gid.into(),
            position: Vector3::new(x, y, z),
        }
    }

    /// Create a point at the given position
    pub fn from_vector(gid: impl Into<String>, position: Vector3) -> Self {
        Self {
            gid: gid.into(),
            position,
        }
    }

    /// Get the coordinates
    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn x(&self) -> f64 {
        self.position.x
    }

    pub fn y(&self) -> f64 {
        self.position.y
    }

    pub fn z(&self) -> f64 {
        self.position.z
    }

    pub fn set_x(&mut self, value: f64) {
        self.position.x = value;
    }

    pub fn set_y(&mut self, value: f64) {
        self.position.y = value;
    }

    pub fn set_z(&mut self, value: f64) {
        self.position.z = value;
    }
}

impl GeoEntity for Point {
    fn gid(&self) -> &str {
        &self.gid
    }
}

/// Travel direction of an arc
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArcDirection {
    /// Clockwise
    Cw,
    /// Counter-clockwise
    #[default]
    Ccw,
}

impl ArcDirection {
    /// Get the opposite direction
    pub fn reversed(self) -> Self {
        match self {
            ArcDirection::Cw => ArcDirection::Ccw,
            ArcDirection::Ccw => ArcDirection::Cw,
        }
    }

    /// Wire name ("cw" / "ccw")
    pub fn as_str(&self) -> &'static str {
        match self {
            ArcDirection::Cw => "cw",
            ArcDirection::Ccw => "ccw",
        }
    }
}

impl fmt::Display for ArcDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named face of a rectangular block
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceName {
    Front,
    Back,
    Left,
    Right,
    Bottom,
    Top,
}

impl FaceName {
    /// All faces in derivation order
    pub const ALL: [FaceName; 6] = [
        FaceName::Front,
        FaceName::Back,
        FaceName::Left,
        FaceName::Right,
        FaceName::Bottom,
        FaceName::Top,
    ];

    /// Lowercase face name as used in identifiers and lookups
    pub fn as_str(&self) -> &'static str {
        match self {
            FaceName::Front => "front",
            FaceName::Back => "back",
            FaceName::Left => "left",
            FaceName::Right => "right",
            FaceName::Bottom => "bottom",
            FaceName::Top => "top",
        }
    }

    /// Position of this face in [`FaceName::ALL`]
    pub fn index(&self) -> usize {
        match self {
            FaceName::Front => 0,
            FaceName::Back => 1,
            FaceName::Left => 2,
            FaceName::Right => 3,
            FaceName::Bottom => 4,
            FaceName::Top => 5,
        }
    }

    /// Outward unit normal of this face on an axis-aligned block
    pub fn normal(&self) -> Vector3 {
        match self {
            FaceName::Front => Vector3::new(0.0, 0.0, 1.0),
            FaceName::Back => Vector3::new(0.0, 0.0, -1.0),
            FaceName::Left => Vector3::new(-1.0, 0.0, 0.0),
            FaceName::Right => Vector3::new(1.0, 0.0, 0.0),
            FaceName::Bottom => Vector3::new(0.0, -1.0, 0.0),
            FaceName::Top => Vector3::new(0.0, 1.0, 0.0),
        }
    }
}

impl FromStr for FaceName {
    type Err = ModelError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "front" => Ok(FaceName::Front),
            "back" => Ok(FaceName::Back),
            "left" => Ok(FaceName::Left),
            "right" => Ok(FaceName::Right),
            "bottom" => Ok(FaceName::Bottom),
            "top" => Ok(FaceName::Top),
            _ => Err(ModelError::unknown_face(s)),
        }
    }
}

impl fmt::Display for FaceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
