// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Local coordinate frames

use daiku_model::{GeoEntity, Vector3};
use serde::{Deserialize, Serialize};

/// A position in 3D space
///
/// An origin plus two orientation vectors: `d` is the local x-axis
/// (direction) and `a` the local z-axis. Neither is normalized here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub gid: String,
    /// Origin
    pub o: Vector3,
    /// Direction, the local x-axis
    pub d: Vector3,
    /// Axis, the local z-axis
    pub a: Vector3,
}

impl Position {
    /// Create a new position
    pub fn new(gid: impl Into<String>, o: Vector3, d: Vector3, a: Vector3) -> Self {
        Self {
            gid: gid.into(),
            o,
            d,
            a,
        }
    }

    /// Direction components `(dx, dy, dz)`
    pub fn direction(&self) -> (f64, f64, f64) {
        (self.d.x, self.d.y, self.d.z)
    }

    /// Axis components `(ax, ay, az)`
    pub fn axis(&self) -> (f64, f64, f64) {
        (self.a.x, self.a.y, self.a.z)
    }

    /// Local y-axis completing a right-handed frame (`a × d`)
    pub fn y_axis(&self) -> Vector3 {
        let a = nalgebra::Vector3::from(self.a);
        let d = nalgebra::Vector3::from(self.d);
        a.cross(&d).into()
    }
}

impl GeoEntity for Position {
    fn gid(&self) -> &str {
        &self.gid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_initializes_components() {
        let o = Vector3::new(1.0, 2.0, 3.0);
        let d = Vector3::new(4.0, 5.0, 6.0);
        let a = Vector3::new(7.0, 8.0, 9.0);

        let pos = Position::new("gid", o, d, a);

        assert_eq!(pos.o, o);
        assert_eq!(pos.direction(), (4.0, 5.0, 6.0));
        assert_eq!(pos.axis(), (7.0, 8.0, 9.0));
    }

    #[test]
    fn test_world_frame_y_axis() {
        let pos = Position::new(
            "w",
            Vector3::zero(),
            Vector3::new(1.0, 0.0, 0.0),
            Vector3::new(0.0, 0.0, 1.0),
        );
        assert_eq!(pos.y_axis(), Vector3::new(0.0, 1.0, 0.0));
    }
}
