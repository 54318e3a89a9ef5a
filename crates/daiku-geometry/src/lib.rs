// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Daiku Geometry
//!
//! Arc construction and part face derivation for the daiku woodworking
//! tool. This crate builds on the plain value types in `daiku-model`.
//!
//! ## Overview
//!
//! - **Arc Strategies**: derive a canonical arc (center, radius, angles,
//!   direction, start/end/mid points) from center+angles, three points, or
//!   two endpoints and a radius
//! - **Parts**: axis-aligned blocks with six derived, oriented faces
//! - **Planes**: faces carrying 2D feature shapes for machining
//!
//! ## Architecture
//!
//! - `ArcConfig`: trait implemented by each arc parameterization
//! - `ArcConfigKind`: the built-in strategies as serde-tagged data
//! - `Arc`: thin entity that delegates all field computation to a strategy
//!
//! ## Quick Start
//!
//! ```rust
//! use daiku_geometry::{Arc, ArcDirection, Part, Point, Vector2, Vector3};
//!
//! let arc = Arc::from_endpoints(
//!     "a1",
//!     Vector3::new(1.0, 0.0, 0.0),
//!     Vector3::new(0.0, 1.0, 0.0),
//!     1.0,
//!     ArcDirection::Ccw,
//! )?;
//! assert!((arc.center().x).abs() < 1e-9);
//!
//! let mut part = Part::new("p1", Point::new("o", 0.0, 0.0, 0.0), 10.0, 20.0, 30.0)?;
//! part.add_shape("top", vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0)])?;
//! assert_eq!(part.get_side("top")?.shape_count(), 1);
//! # Ok::<(), daiku_geometry::Error>(())
//! ```

pub mod arc;
pub mod config;
pub mod error;
pub mod line;
pub mod part;
pub mod plane;
pub mod position;
pub mod strategies;
pub mod tolerance;

// Re-export model types for convenience
pub use daiku_model::{ArcDirection, FaceName, GeoEntity, Point, Vector2, Vector3};

// Re-export main types
pub use arc::Arc;
pub use config::{
    mid_angle, point_from_angle, sweep_angle, ArcConfig, ArcConfigKind, ArcGeometry,
};
pub use error::{Error, Result};
pub use line::Line;
pub use part::Part;
pub use plane::{Plane, Shape};
pub use position::Position;
pub use tolerance::Tolerance;

// Re-export strategies
pub use strategies::{CenterArcConfig, EndpointsArcConfig, ThreePointArcConfig};
