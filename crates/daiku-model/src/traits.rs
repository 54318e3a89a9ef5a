// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Core traits shared by identified entities

/// An entity carrying a caller-supplied identifier
///
/// Identifiers are expected to be unique within whatever scope the caller
/// chooses (a part, a drawing, a store). Nothing in the model enforces that.
pub trait GeoEntity {
    /// Get the entity identifier
    fn gid(&self) -> &str;
}

