//! Projection of the cube into normalized device coordinates.
//!
//! The GPU performs the perspective divide after the vertex shader, so it never
//! shows up in any matrix. To *show* NDC space, the cube is pushed through the
//! full pipeline on the CPU and divided by `w` here, then drawn as ordinary
//! geometry.

use glam::{Mat4, Vec3};

use crate::geometry::{CUBE_POSITIONS, CUBE_VERTEX_COUNT};

/// Transforms `point` to clip space with `mvp` and applies the perspective divide.
///
/// A point with `w == 0` (on the camera plane) yields non-finite coordinates.
pub fn project_to_ndc(mvp: Mat4, point: Vec3) -> Vec3 {
    let clip = mvp * point.extend(1.0);
    clip.truncate() / clip.w
}

/// Whether every coordinate of an NDC point lies in `[-1, 1]` (with tolerance).
pub fn inside_ndc_box(point: Vec3, tolerance: f32) -> bool {
    point.abs().max_element() <= 1.0 + tolerance
}

/// The cube's 24 vertices after projection and perspective divide.
///
/// Vertex order (and therefore face colors) matches [`CUBE_POSITIONS`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NdcCube {
    positions: [Vec3; CUBE_VERTEX_COUNT],
}

impl NdcCube {
    /// Projects the object-space cube with `projection · view · model`.
    pub fn project(mvp: Mat4) -> Self {
        Self {
            positions: CUBE_POSITIONS.map(|p| project_to_ndc(mvp, p)),
        }
    }

    pub fn positions(&self) -> &[Vec3; CUBE_VERTEX_COUNT] {
        &self.positions
    }
}
