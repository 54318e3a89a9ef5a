// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Daiku Model - Shared primitives for parts and sketch geometry
//!
//! This crate holds the plain value types that every other daiku crate
//! passes around: coordinate tuples, identified points, arc travel direction
//! and the names of a block's faces. It performs no geometric construction
//! itself; see `daiku-geometry` for that.
//!
//! # Example
//!
//! ```
//! use daiku_model::{FaceName, GeoEntity, Point, Vector3};
//!
//! let origin = Point::new("o", 1.0, 2.0, 3.0);
//! assert_eq!(origin.gid(), "o");
//! assert_eq!(origin.position(), Vector3::new(1.0, 2.0, 3.0));
//!
//! let face: FaceName = "front".parse().unwrap();
//! assert_eq!(face, FaceName::Front);
//! ```
//!
//! All types derive `serde` traits in the flat `{ "x", "y", "z" }` record
//! shape used by transport layers, with `z` defaulting to `0.0`. Vector math
//! is done in `nalgebra`; [`Vector3`] converts to and from its
//! `Vector3<f64>` and `Point3<f64>`.

pub mod error;
pub mod traits;
pub mod types;

// Re-export all public types
pub use error::*;
pub use traits::*;
pub use types::*;
