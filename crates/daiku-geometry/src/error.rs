// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for arc construction and part faces

use daiku_model::ModelError;
use thiserror::Error;

/// Geometry result type
pub type Result<T> = std::result::Result<T, Error>;

/// Geometry construction errors
///
/// All of these are raised at the point of computation; no partially built
/// value is ever returned alongside them.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Three-point fit on collinear or coincident points
    #[error("Points are collinear (determinant {det:e})")]
    CollinearPoints { det: f64 },

    /// Input that admits no unique construction
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// No circle of this radius spans the chord
    #[error("Radius {radius} is smaller than half the chord length {half_chord}")]
    RadiusTooSmall { radius: f64, half_chord: f64 },

    /// Face lookup by an unrecognized name
    #[error("Unknown face: {0:?}")]
    UnknownFace(String),

    /// Radius that is not a positive finite number
    #[error("Invalid radius: {0}")]
    InvalidRadius(f64),

    /// Attached plane reusing the identifier of a derived face
    #[error("Plane {0:?} collides with a derived face")]
    PlaneConflict(String),

    /// Block dimension that is not a positive finite number
    #[error("Invalid {name}: {value}")]
    InvalidDimension { name: &'static str, value: f64 },
}

impl Error {
    /// Create a degenerate input error
    pub fn degenerate(msg: impl Into<String>) -> Self {
        Error::DegenerateInput(msg.into())
    }

    /// Create an invalid dimension error
    pub fn invalid_dimension(name: &'static str, value: f64) -> Self {
        Error::InvalidDimension { name, value }
    }
}

impl From<ModelError> for Error {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownFace(name) => Error::UnknownFace(name),
        }
    }
}
