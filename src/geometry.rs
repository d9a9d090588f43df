//! Geometry records produced by interpretation, ready for GPU upload.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use serde::{Deserialize, Serialize};

/// A single tapered branch segment.
///
/// Immutable once created; one record is emitted per draw-forward command,
/// in command order.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Branch {
    /// Start position in world space.
    pub start: Vec3,

    /// End position in world space.
    pub end: Vec3,

    /// Radius at the start of the segment.
    pub radius_start: f32,

    /// Radius at the end of the segment (tapered).
    pub radius_end: f32,

    /// Branch color (RGB in `[0, 1]`).
    pub color: Vec3,
}

/// Discriminates leaf and flower decals.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DecorationKind {
    Leaf,
    Flower,
}

/// An oriented, scaled decal marking a leaf or flower.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct Decoration {
    /// World-space position.
    pub position: Vec3,

    /// Orientation frame, columns `[right, heading, up', w]`.
    pub orientation: Mat4,

    /// Decal color (RGB in `[0, 1]`).
    pub color: Vec3,

    /// Scale factor applied to the unit decal quad.
    pub size: f32,

    /// Leaf or flower.
    pub kind: DecorationKind,
}

/// Builds a decal orientation frame from the turtle's heading and up vectors.
///
/// `right = normalize(heading × up)`, `up' = right × heading`. The resulting
/// matrix has no translation; consumers add the instance position themselves.
pub fn decal_orientation(heading: Vec3, up: Vec3) -> Mat4 {
    let forward = heading.normalize();
    let right = forward.cross(up).normalize();
    let up = right.cross(forward);

    Mat4::from_cols(
        right.extend(0.0),
        forward.extend(0.0),
        up.extend(0.0),
        Vec4::W,
    )
}

/// One vertex of a line-mode branch: position + color.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct LineVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// Per-instance data for tapered-cylinder branch rendering.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct BranchInstance {
    pub start: [f32; 3],
    pub end: [f32; 3],
    pub radius_start: f32,
    pub radius_end: f32,
    pub color: [f32; 3],
}

/// Per-instance data for decal rendering.
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
#[repr(C)]
pub struct DecorationInstance {
    pub position: [f32; 3],
    /// Column-major orientation matrix.
    pub orientation: [f32; 16],
    pub color: [f32; 3],
    pub size: f32,
}

/// The complete geometry of one interpreted plant.
///
/// This is the "Phenotype" generated from an L-System string: a flat list of
/// branch segments and a flat list of decorations, both in command order.
/// Ownership transfers to the rendering layer by reference or clone; the
/// interpreter retains it until the next run rebuilds it from scratch.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlantGeometry {
    /// All branch segments, insertion order = command order.
    pub branches: Vec<Branch>,

    /// All decorations, insertion order = command order.
    pub decorations: Vec<Decoration>,
}

impl PlantGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_branch(&mut self, branch: Branch) {
        self.branches.push(branch);
    }

    pub fn add_decoration(&mut self, decoration: Decoration) {
        self.decorations.push(decoration);
    }

    pub fn clear(&mut self) {
        self.branches.clear();
        self.decorations.clear();
    }

    pub fn branch_count(&self) -> usize {
        self.branches.len()
    }

    pub fn decoration_count(&self) -> usize {
        self.decorations.len()
    }

    /// Decorations of kind [`DecorationKind::Leaf`], in creation order.
    pub fn leaves(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations
            .iter()
            .filter(|d| d.kind == DecorationKind::Leaf)
    }

    /// Decorations of kind [`DecorationKind::Flower`], in creation order.
    pub fn flowers(&self) -> impl Iterator<Item = &Decoration> {
        self.decorations
            .iter()
            .filter(|d| d.kind == DecorationKind::Flower)
    }

    /// Packs branches for line-mode rendering: two vertices per branch.
    pub fn line_vertices(&self) -> Vec<LineVertex> {
        let mut data = Vec::with_capacity(self.branches.len() * 2);
        for branch in &self.branches {
            data.push(LineVertex {
                position: branch.start.to_array(),
                color: branch.color.to_array(),
            });
            data.push(LineVertex {
                position: branch.end.to_array(),
                color: branch.color.to_array(),
            });
        }
        data
    }

    /// Packs branches for instanced tapered-cylinder rendering.
    pub fn branch_instances(&self) -> Vec<BranchInstance> {
        self.branches
            .iter()
            .map(|branch| BranchInstance {
                start: branch.start.to_array(),
                end: branch.end.to_array(),
                radius_start: branch.radius_start,
                radius_end: branch.radius_end,
                color: branch.color.to_array(),
            })
            .collect()
    }

    /// Packs decorations for instanced decal rendering.
    ///
    /// Leaves come first, then flowers, so the renderer can issue one draw
    /// call per kind with a buffer offset. Creation order is preserved within
    /// each kind.
    pub fn decoration_instances(&self) -> Vec<DecorationInstance> {
        let pack = |d: &Decoration| DecorationInstance {
            position: d.position.to_array(),
            orientation: d.orientation.to_cols_array(),
            color: d.color.to_array(),
            size: d.size,
        };

        self.leaves().map(pack).chain(self.flowers().map(pack)).collect()
    }
}
