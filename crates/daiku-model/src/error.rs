// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for model lookups

use thiserror::Error;

/// Result type alias for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised by the data model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// Face name is not one of front/back/left/right/top/bottom
    #[error("Unknown face: {0:?}")]
    UnknownFace(String),
}

impl ModelError {
    /// Create a new unknown face error
    pub fn unknown_face(name: impl Into<String>) -> Self {
        ModelError::UnknownFace(name.into())
    }
}
