//! Static geometry shared by every space: the colored cube and the ground grid.
//!
//! Both are built once and never change; only the matrix applied to them does.

use glam::Vec3;

use crate::color::Color;

/// A vertex with a position and a color.
///
/// # Memory Layout
///
/// 28 bytes per vertex: `position` (3 × f32) at offset 0, `color` (4 × f32)
/// at offset 12.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 4],
}

impl ColorVertex {
    /// The wgpu vertex buffer layout for this vertex type.
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ColorVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &[
            // position
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            // color
            wgpu::VertexAttribute {
                offset: 12,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x4,
            },
        ],
    };

    pub fn new(position: Vec3, color: Color) -> Self {
        Self {
            position: position.to_array(),
            color: color.to_array(),
        }
    }
}

/// Builds vertices from parallel position and color slices.
pub fn colored_vertices(positions: &[Vec3], colors: &[Color]) -> Vec<ColorVertex> {
    debug_assert_eq!(positions.len(), colors.len());
    positions
        .iter()
        .zip(colors)
        .map(|(&p, &c)| ColorVertex::new(p, c))
        .collect()
}

/// Number of cube vertices: 6 faces × 4 corners.
pub const CUBE_VERTEX_COUNT: usize = 24;

/// Colors of the cube faces, in face order: front, back, top, bottom, right, left.
pub const CUBE_FACE_COLORS: [Color; 6] = [
    Color::RED,
    Color::GREEN,
    Color::BLUE,
    Color::YELLOW,
    Color::CYAN,
    Color::MAGENTA,
];

/// Object-space positions of the unit cube centered at the origin.
///
/// Each face has its own four vertices so it can carry its own color.
#[rustfmt::skip]
pub const CUBE_POSITIONS: [Vec3; CUBE_VERTEX_COUNT] = [
    // Front face (Z+)
    Vec3::new(-0.5, -0.5,  0.5),
    Vec3::new( 0.5, -0.5,  0.5),
    Vec3::new( 0.5,  0.5,  0.5),
    Vec3::new(-0.5,  0.5,  0.5),
    // Back face (Z-)
    Vec3::new( 0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5,  0.5, -0.5),
    Vec3::new( 0.5,  0.5, -0.5),
    // Top face (Y+)
    Vec3::new(-0.5,  0.5,  0.5),
    Vec3::new( 0.5,  0.5,  0.5),
    Vec3::new( 0.5,  0.5, -0.5),
    Vec3::new(-0.5,  0.5, -0.5),
    // Bottom face (Y-)
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new( 0.5, -0.5, -0.5),
    Vec3::new( 0.5, -0.5,  0.5),
    Vec3::new(-0.5, -0.5,  0.5),
    // Right face (X+)
    Vec3::new( 0.5, -0.5,  0.5),
    Vec3::new( 0.5, -0.5, -0.5),
    Vec3::new( 0.5,  0.5, -0.5),
    Vec3::new( 0.5,  0.5,  0.5),
    // Left face (X-)
    Vec3::new(-0.5, -0.5, -0.5),
    Vec3::new(-0.5, -0.5,  0.5),
    Vec3::new(-0.5,  0.5,  0.5),
    Vec3::new(-0.5,  0.5, -0.5),
];

/// Triangle-list indices for the cube, counter-clockwise front faces.
#[rustfmt::skip]
pub const CUBE_INDICES: [u32; 36] = [
    0,  1,  2,  2,  3,  0,  // front
    4,  5,  6,  6,  7,  4,  // back
    8,  9,  10, 10, 11, 8,  // top
    12, 13, 14, 14, 15, 12, // bottom
    16, 17, 18, 18, 19, 16, // right
    20, 21, 22, 22, 23, 20, // left
];

/// Per-vertex cube colors, one color per face.
pub fn cube_colors() -> [Color; CUBE_VERTEX_COUNT] {
    std::array::from_fn(|i| CUBE_FACE_COLORS[i / 4])
}

/// The cube as colored vertices, in [`CUBE_POSITIONS`] order.
pub fn cube_vertices() -> Vec<ColorVertex> {
    colored_vertices(&CUBE_POSITIONS, &cube_colors())
}

/// Half the side length of the ground grid.
pub const GRID_HALF_EXTENT: i32 = 10;
/// Distance between neighboring grid lines.
pub const GRID_SPACING: f32 = 1.0;

/// Line-list vertices for a grid on the XZ plane.
///
/// Lines run from `-GRID_HALF_EXTENT` to `GRID_HALF_EXTENT` in both directions.
/// The line along the X axis is red and the line along the Z axis is blue.
pub fn grid_vertices() -> Vec<ColorVertex> {
    let extent = GRID_HALF_EXTENT as f32 * GRID_SPACING;
    let lines = (2 * GRID_HALF_EXTENT + 1) as usize;
    let mut vertices = Vec::with_capacity(lines * 4);

    for i in -GRID_HALF_EXTENT..=GRID_HALF_EXTENT {
        let offset = i as f32 * GRID_SPACING;

        // Parallel to X, at z = offset
        let color = if i == 0 { Color::RED } else { Color::GRAY };
        vertices.push(ColorVertex::new(Vec3::new(-extent, 0.0, offset), color));
        vertices.push(ColorVertex::new(Vec3::new(extent, 0.0, offset), color));

        // Parallel to Z, at x = offset
        let color = if i == 0 { Color::BLUE } else { Color::GRAY };
        vertices.push(ColorVertex::new(Vec3::new(offset, 0.0, -extent), color));
        vertices.push(ColorVertex::new(Vec3::new(offset, 0.0, extent), color));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_layout_matches_struct() {
        assert_eq!(std::mem::size_of::<ColorVertex>(), 28);
        assert_eq!(ColorVertex::LAYOUT.array_stride, 28);
    }

    #[test]
    fn cube_faces_are_planar_and_colored() {
        let colors = cube_colors();
        for face in 0..6 {
            let quad = &CUBE_POSITIONS[face * 4..face * 4 + 4];
            let normal = (quad[1] - quad[0]).cross(quad[2] - quad[0]).normalize();
            // CCW winding: the face normal points away from the center.
            assert!(normal.dot(quad[0]) > 0.0, "face {face} winds inwards");
            for p in quad {
                assert!((normal.dot(*p - quad[0])).abs() < 1e-6);
            }
            assert!(colors[face * 4..face * 4 + 4]
                .iter()
                .all(|&c| c == CUBE_FACE_COLORS[face]));
        }
    }

    #[test]
    fn cube_indices_cover_all_vertices() {
        for v in 0..CUBE_VERTEX_COUNT as u32 {
            assert!(CUBE_INDICES.contains(&v));
        }
        assert!(CUBE_INDICES.iter().all(|&i| i < CUBE_VERTEX_COUNT as u32));
    }

    #[test]
    fn grid_lies_on_xz_plane() {
        let grid = grid_vertices();
        assert_eq!(grid.len(), 21 * 4);
        assert!(grid.iter().all(|v| v.position[1] == 0.0));
        let extent = GRID_HALF_EXTENT as f32;
        assert!(grid
            .iter()
            .all(|v| v.position[0].abs() <= extent && v.position[2].abs() <= extent));
    }

    #[test]
    fn grid_axes_are_highlighted() {
        let grid = grid_vertices();
        let red = grid.iter().filter(|v| v.color == Color::RED.to_array()).count();
        let blue = grid.iter().filter(|v| v.color == Color::BLUE.to_array()).count();
        assert_eq!((red, blue), (2, 2));
    }
}
