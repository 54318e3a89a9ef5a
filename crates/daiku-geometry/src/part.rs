// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rectangular block parts and their six faces
//!
//! Parts are the building blocks for higher level assemblies such as doors,
//! windows or cabinet boxes. Each part is an axis-aligned block whose six
//! faces are derived once from its origin and dimensions:
//!
//! | face   | origin         | normal     |
//! |--------|----------------|------------|
//! | front  | (ox, oy, oz)   | (0, 0, 1)  |
//! | back   | (ox, oy, oz+d) | (0, 0, -1) |
//! | left   | (ox, oy, oz)   | (-1, 0, 0) |
//! | right  | (ox+w, oy, oz) | (1, 0, 0)  |
//! | bottom | (ox, oy, oz)   | (0, -1, 0) |
//! | top    | (ox, oy+h, oz) | (0, 1, 0)  |
//!
//! Front, left and bottom reuse the part origin (same gid and coordinates).
//!
//! Besides its faces a part may carry attached planes: extra working planes
//! (grooves, dados, sketch planes) keyed by gid. Faces never change after
//! construction apart from their shape lists.

use crate::plane::{Plane, Shape};
use crate::{Error, Result};
use daiku_model::{FaceName, GeoEntity, Point};
use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A rectangular block shaped part
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "PartRecord", try_from = "PartRecord")]
pub struct Part {
    gid: String,
    origin: Point,
    width: f64,
    height: f64,
    depth: f64,
    /// Indexed by [`FaceName::index`]
    sides: [Plane; 6],
    attached: Vec<Plane>,
}

impl Part {
    /// Create a part and derive its faces
    ///
    /// # Arguments
    /// * `origin` - The lower-left, front corner of the part
    /// * `width`, `height`, `depth` - Extents along X, Y and Z
    pub fn new(
        gid: impl Into<String>,
        origin: Point,
        width: f64,
        height: f64,
        depth: f64,
    ) -> Result<Self> {
        for (name, value) in [("width", width), ("height", height), ("depth", depth)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(Error::invalid_dimension(name, value));
            }
        }

        let gid = gid.into();
        let sides =
            FaceName::ALL.map(|face| derive_side(&gid, &origin, face, width, height, depth));
        log::debug!("part {gid}: {width} x {height} x {depth} at {}", origin.position());

        Ok(Self {
            gid,
            origin,
            width,
            height,
            depth,
            sides,
            attached: Vec::new(),
        })
    }

    pub fn origin(&self) -> &Point {
        &self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn depth(&self) -> f64 {
        self.depth
    }

    /// Get a face by name
    pub fn side(&self, face: FaceName) -> &Plane {
        &self.sides[face.index()]
    }

    /// Get a face by name for shape edits
    pub fn side_mut(&mut self, face: FaceName) -> &mut Plane {
        &mut self.sides[face.index()]
    }

    /// Look up a face by its lowercase name
    pub fn get_side(&self, name: &str) -> Result<&Plane> {
        let face: FaceName = name.parse()?;
        Ok(self.side(face))
    }

    /// Look up a face by its lowercase name for shape edits
    pub fn get_side_mut(&mut self, name: &str) -> Result<&mut Plane> {
        let face: FaceName = name.parse()?;
        Ok(self.side_mut(face))
    }

    /// Iterate over all faces in derivation order
    pub fn sides(&self) -> impl Iterator<Item = (FaceName, &Plane)> {
        FaceName::ALL.into_iter().zip(self.sides.iter())
    }

    /// Append a shape to the named face
    pub fn add_shape(&mut self, name: &str, shape: Shape) -> Result<()> {
        self.get_side_mut(name)?.add_shape(shape);
        Ok(())
    }

    /// Attach an extra plane to the part
    ///
    /// A plane with the gid of an already attached plane replaces it. The
    /// gid of a derived face is rejected with [`Error::PlaneConflict`].
    pub fn attach_plane(&mut self, plane: Plane) -> Result<()> {
        if self.sides.iter().any(|side| side.gid() == plane.gid()) {
            return Err(Error::PlaneConflict(plane.gid().to_string()));
        }
        log::trace!("part {}: attach plane {}", self.gid, plane.gid());
        match self.attached.iter_mut().find(|p| p.gid() == plane.gid()) {
            Some(existing) => *existing = plane,
            None => self.attached.push(plane),
        }
        Ok(())
    }

    /// Get attached planes in attachment order
    pub fn attached_planes(&self) -> &[Plane] {
        &self.attached
    }

    /// Find a face or attached plane by gid
    pub fn find_plane(&self, gid: &str) -> Option<&Plane> {
        self.sides
            .iter()
            .chain(self.attached.iter())
            .find(|plane| plane.gid() == gid)
    }
}

impl GeoEntity for Part {
    fn gid(&self) -> &str {
        &self.gid
    }
}

fn derive_side(
    gid: &str,
    origin: &Point,
    face: FaceName,
    width: f64,
    height: f64,
    depth: f64,
) -> Plane {
    let o = Point3::from(origin.position());
    let offset = match face {
        FaceName::Front | FaceName::Left | FaceName::Bottom => None,
        FaceName::Back => Some(Vector3::new(0.0, 0.0, depth)),
        FaceName::Right => Some(Vector3::new(width, 0.0, 0.0)),
        FaceName::Top => Some(Vector3::new(0.0, height, 0.0)),
    };
    let face_origin = match offset {
        None => origin.clone(),
        Some(offset) => Point::from_vector(format!("{gid}_{face}_o"), (o + offset).into()),
    };
    log::trace!("part {gid}: {face} at {}", face_origin.position());

    Plane::new(format!("{gid}_{face}"), face_origin, face.normal())
}

/// Flat transport shape of a part
///
/// `planes` lists the six faces followed by the attached planes. Faces are
/// re-derived on input: a listed plane with a face gid only contributes its
/// shapes, every other plane is attached as is.
#[derive(Serialize, Deserialize)]
struct PartRecord {
    gid: String,
    origin: Point,
    width: f64,
    height: f64,
    depth: f64,
    #[serde(default)]
    planes: Vec<Plane>,
}

impl From<Part> for PartRecord {
    fn from(part: Part) -> Self {
        Self {
            gid: part.gid,
            origin: part.origin,
            width: part.width,
            height: part.height,
            depth: part.depth,
            planes: part.sides.into_iter().chain(part.attached).collect(),
        }
    }
}

impl TryFrom<PartRecord> for Part {
    type Error = Error;

    fn try_from(record: PartRecord) -> Result<Self> {
        let mut part = Part::new(
            record.gid,
            record.origin,
            record.width,
            record.height,
            record.depth,
        )?;

        for plane in record.planes {
            match part.sides.iter_mut().find(|side| side.gid() == plane.gid()) {
                Some(side) => {
                    for shape in plane.shapes() {
                        side.add_shape(shape.clone());
                    }
                }
                None => part.attach_plane(plane)?,
            }
        }

        Ok(part)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use daiku_model::{Vector2, Vector3};
    use std::collections::HashSet;

    fn block() -> Part {
        Part::new("p1", Point::new("o", 0.0, 0.0, 0.0), 10.0, 20.0, 30.0).unwrap()
    }

    #[test]
    fn test_block_has_six_sides() {
        let part = block();
        let names: HashSet<_> = part.sides().map(|(face, _)| face.as_str()).collect();
        assert_eq!(
            names,
            HashSet::from(["front", "back", "left", "right", "top", "bottom"])
        );

        let gids: HashSet<_> = part.sides().map(|(_, plane)| plane.gid()).collect();
        assert_eq!(gids.len(), 6);

        for (face, plane) in part.sides() {
            assert!(std::ptr::eq(part.get_side(face.as_str()).unwrap(), plane));
        }
    }

    #[test]
    fn test_face_origins_and_normals() {
        let part = Part::new("p", Point::new("o", 1.0, 2.0, 3.0), 4.0, 5.0, 6.0).unwrap();
        let expect = [
            ("front", (1.0, 2.0, 3.0), (0.0, 0.0, 1.0)),
            ("back", (1.0, 2.0, 9.0), (0.0, 0.0, -1.0)),
            ("left", (1.0, 2.0, 3.0), (-1.0, 0.0, 0.0)),
            ("right", (5.0, 2.0, 3.0), (1.0, 0.0, 0.0)),
            ("bottom", (1.0, 2.0, 3.0), (0.0, -1.0, 0.0)),
            ("top", (1.0, 7.0, 3.0), (0.0, 1.0, 0.0)),
        ];
        for (name, origin, normal) in expect {
            let plane = part.get_side(name).unwrap();
            assert_eq!(plane.origin().position(), Vector3::from(origin), "{name}");
            assert_eq!(plane.normal(), Vector3::from(normal), "{name}");
        }
    }

    #[test]
    fn test_shared_origin_faces_reuse_part_origin() {
        let part = block();
        for face in [FaceName::Front, FaceName::Left, FaceName::Bottom] {
            assert_eq!(part.side(face).origin(), part.origin());
        }
        assert_eq!(part.side(FaceName::Back).origin().gid(), "p1_back_o");
        assert_eq!(part.side(FaceName::Right).origin().gid(), "p1_right_o");
        assert_eq!(part.side(FaceName::Top).origin().gid(), "p1_top_o");
        assert_eq!(part.side(FaceName::Top).gid(), "p1_top");
    }

    #[test]
    fn test_unknown_face() {
        let part = block();
        let err = part.get_side("inside").unwrap_err();
        assert_eq!(err, Error::UnknownFace("inside".to_string()));
        assert!(part.get_side("").is_err());
    }

    #[test]
    fn test_add_shape_visible_through_lookup() {
        let mut part = block();
        part.add_shape("top", vec![Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0)])
            .unwrap();
        part.add_shape("top", vec![Vector2::new(2.0, 2.0)]).unwrap();

        let top = part.get_side("top").unwrap();
        assert_eq!(top.shape_count(), 2);
        assert_eq!(top.shapes()[0][1], Vector2::new(1.0, 0.0));
        assert_eq!(top.shapes()[1][0], Vector2::new(2.0, 2.0));
        assert_eq!(part.get_side("bottom").unwrap().shape_count(), 0);

        assert!(part.add_shape("middle", Vec::new()).is_err());
    }

    #[test]
    fn test_invalid_dimensions() {
        let origin = Point::new("o", 0.0, 0.0, 0.0);
        assert_eq!(
            Part::new("p", origin.clone(), 0.0, 1.0, 1.0).unwrap_err(),
            Error::invalid_dimension("width", 0.0)
        );
        assert!(Part::new("p", origin.clone(), 1.0, -1.0, 1.0).is_err());
        assert!(Part::new("p", origin, 1.0, 1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_record_round_trip_keeps_shapes() {
        let mut part = block();
        part.side_mut(FaceName::Front)
            .add_shape(vec![Vector2::new(1.0, 2.0)]);

        let json = serde_json::to_value(&part).unwrap();
        assert_eq!(json["gid"], "p1");
        assert_eq!(json["width"], 10.0);
        assert_eq!(json["planes"].as_array().unwrap().len(), 6);

        let back: Part = serde_json::from_value(json).unwrap();
        assert_eq!(back, part);
    }

    fn groove() -> Plane {
        let mut plane = Plane::new(
            "p1_groove",
            Point::new("g", 0.0, 5.0, 0.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        plane.add_shape(vec![Vector2::new(0.0, 0.0), Vector2::new(10.0, 0.0)]);
        plane
    }

    #[test]
    fn test_attach_plane() {
        let mut part = block();
        part.attach_plane(groove()).unwrap();
        assert_eq!(part.attached_planes().len(), 1);
        assert_eq!(part.find_plane("p1_groove").unwrap().shape_count(), 1);
        assert_eq!(part.find_plane("p1_top").unwrap().gid(), "p1_top");
        assert!(part.find_plane("p1_dado").is_none());

        // Same gid replaces
        let bare = Plane::new("p1_groove", Point::default(), Vector3::new(0.0, 0.0, 1.0));
        part.attach_plane(bare).unwrap();
        assert_eq!(part.attached_planes().len(), 1);
        assert_eq!(part.find_plane("p1_groove").unwrap().shape_count(), 0);
    }

    #[test]
    fn test_attach_plane_cannot_replace_face() {
        let mut part = block();
        let fake = Plane::new("p1_top", Point::default(), Vector3::new(5.0, 0.0, 0.0));
        assert_eq!(
            part.attach_plane(fake).unwrap_err(),
            Error::PlaneConflict("p1_top".to_string())
        );
        assert_eq!(part.side(FaceName::Top).normal(), Vector3::new(0.0, 1.0, 0.0));
        assert!(part.attached_planes().is_empty());
    }

    #[test]
    fn test_record_keeps_attached_planes() {
        let json = serde_json::json!({
            "gid": "p1",
            "origin": {"gid": "o", "x": 0, "y": 0, "z": 0},
            "width": 10.0, "height": 20.0, "depth": 30.0,
            "planes": [serde_json::to_value(groove()).unwrap()]
        });
        let part: Part = serde_json::from_value(json).unwrap();
        assert_eq!(part.attached_planes(), &[groove()]);

        let out = serde_json::to_value(&part).unwrap();
        let planes = out["planes"].as_array().unwrap();
        assert_eq!(planes.len(), 7);
        assert_eq!(planes[6]["gid"], "p1_groove");
        assert_eq!(planes[6]["shapes"][0][1]["x"], 10.0);

        let back: Part = serde_json::from_value(out).unwrap();
        assert_eq!(back, part);
    }

    #[test]
    fn test_record_face_entry_only_adds_shapes() {
        // A face listed with a different normal keeps its derived orientation
        let json = serde_json::json!({
            "gid": "p1",
            "origin": {"gid": "o", "x": 0, "y": 0, "z": 0},
            "width": 10.0, "height": 20.0, "depth": 30.0,
            "planes": [{
                "gid": "p1_top",
                "origin": {"gid": "x", "x": 9, "y": 9, "z": 9},
                "normal": {"x": 5, "y": 0, "z": 0},
                "shapes": [[{"x": 1, "y": 1}]]
            }]
        });
        let part: Part = serde_json::from_value(json).unwrap();
        let top = part.side(FaceName::Top);
        assert_eq!(top.normal(), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(top.origin().gid(), "p1_top_o");
        assert_eq!(top.shape_count(), 1);
        assert!(part.attached_planes().is_empty());
    }

    #[test]
    fn test_record_rejects_bad_dimensions() {
        let result: std::result::Result<Part, _> = serde_json::from_str(
            r#"{"gid": "part1",
                "origin": {"gid": "po", "x": 0, "y": 0, "z": 0},
                "width": 10.0, "height": 0.0, "depth": 30.0}"#,
        );
        assert!(result.is_err());
    }
}
