// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Planar faces carrying 2D feature shapes
//!
//! A [`Plane`] is one flat side of a part. Besides its origin and outward
//! normal it holds an ordered list of 2D shapes (cut-outs, tool paths) that
//! downstream tooling turns into machining operations. Shapes are opaque
//! here: no closure, winding or self-intersection checks are made.

use daiku_model::{GeoEntity, Point, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// A 2D shape: an ordered run of points in face coordinates
pub type Shape = Vec<Vector2>;

/// A single planar face
///
/// Identifier, origin and normal are fixed once the plane is built; only the
/// shape list grows.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    gid: String,
    origin: Point,
    normal: Vector3,
    #[serde(default)]
    shapes: Vec<Shape>,
}

impl Plane {
    /// Create a plane with no shapes
    pub fn new(gid: impl Into<String>, origin: Point, normal: Vector3) -> Self {
        Self {
            gid: gid.into(),
            origin,
            normal,
            shapes: Vec::new(),
        }
    }

    /// A point on the plane, typically the lower-left corner of the face
    pub fn origin(&self) -> &Point {
        &self.origin
    }

    /// Outward facing normal, unit length by convention
    pub fn normal(&self) -> Vector3 {
        self.normal
    }

    /// Attach a 2D shape to this plane
    pub fn add_shape(&mut self, shape: Shape) {
        log::trace!("plane {}: shape with {} points", self.gid, shape.len());
        self.shapes.push(shape);
    }

    /// Get attached shapes in insertion order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Get number of attached shapes
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Check if any shapes are attached
    pub fn has_shapes(&self) -> bool {
        !self.shapes.is_empty()
    }
}

impl GeoEntity for Plane {
    fn gid(&self) -> &str {
        &self.gid
    }
}
