//! Wireframe geometry for the user camera's view frustum.
//!
//! The frustum is built in camera space (apex at the origin, looking down -Z)
//! and placed in the world by the inverse view matrix at draw time.
//!
//! Vertex layout:
//!
//! | Index  | Point                                   | Color |
//! |--------|-----------------------------------------|-------|
//! | 0      | apex                                    | gray  |
//! | 1..=4  | near corners                            | black |
//! | 5..=8  | far corners                             | gray  |
//! | 9..=12 | near corners again, for spokes and sides| gray  |
//!
//! Corners run bottom-left, bottom-right, top-right, top-left.

use glam::Vec3;

use crate::color::Color;

/// Number of frustum vertices.
pub const FRUSTUM_VERTEX_COUNT: usize = 13;

/// Line-list indices: 16 segments.
#[rustfmt::skip]
pub const FRUSTUM_INDICES: [u32; 32] = [
    // near plane
    1, 2,   2, 3,   3, 4,   4, 1,
    // far plane
    5, 6,   6, 7,   7, 8,   8, 5,
    // sides
    9, 5,   10, 6,  11, 7,  12, 8,
    // apex spokes
    0, 9,   0, 10,  0, 11,  0, 12,
];

/// Per-vertex colors, fixed for the lifetime of the frustum.
pub const FRUSTUM_COLORS: [Color; FRUSTUM_VERTEX_COUNT] = [
    Color::GRAY,
    Color::BLACK,
    Color::BLACK,
    Color::BLACK,
    Color::BLACK,
    Color::GRAY,
    Color::GRAY,
    Color::GRAY,
    Color::GRAY,
    Color::GRAY,
    Color::GRAY,
    Color::GRAY,
    Color::GRAY,
];

/// Positions of the frustum wireframe for one set of projection parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrustumGeometry {
    positions: [Vec3; FRUSTUM_VERTEX_COUNT],
}

impl FrustumGeometry {
    /// Computes the frustum for a perspective projection.
    ///
    /// An inverted frustum (`near > far`) is fine and simply drawn inside out.
    ///
    /// # Panics
    ///
    /// Panics if `near` or `far` is not a positive number. Use
    /// [`try_new`](Self::try_new) for user-supplied clip distances.
    pub fn new(near: f32, far: f32, fov_degrees: f32, aspect: f32) -> Self {
        Self::try_new(near, far, fov_degrees, aspect).unwrap_or_else(|| {
            panic!("frustum needs positive clip distances, got near={near} far={far}")
        })
    }

    /// Like [`new`](Self::new), returning `None` unless both clip distances
    /// are positive.
    pub fn try_new(near: f32, far: f32, fov_degrees: f32, aspect: f32) -> Option<Self> {
        if !(near > 0.0 && far > 0.0) {
            return None;
        }

        let near_height = 2.0 * near * (fov_degrees.to_radians() * 0.5).tan();
        let near_width = near_height * aspect;

        // Similar triangles
        let ratio = far / near;
        let far_height = near_height * ratio;
        let far_width = near_width * ratio;

        let near_corners = corners(near_width * 0.5, near_height * 0.5, -near);
        let far_corners = corners(far_width * 0.5, far_height * 0.5, -far);

        let mut positions = [Vec3::ZERO; FRUSTUM_VERTEX_COUNT];
        positions[1..5].copy_from_slice(&near_corners);
        positions[5..9].copy_from_slice(&far_corners);
        positions[9..13].copy_from_slice(&near_corners);

        Some(Self { positions })
    }

    /// Every vertex at the apex, so nothing is drawn.
    pub fn collapsed() -> Self {
        Self {
            positions: [Vec3::ZERO; FRUSTUM_VERTEX_COUNT],
        }
    }

    /// All 13 positions in vertex-buffer order.
    pub fn positions(&self) -> &[Vec3; FRUSTUM_VERTEX_COUNT] {
        &self.positions
    }

    pub fn apex(&self) -> Vec3 {
        self.positions[0]
    }

    pub fn near_corners(&self) -> &[Vec3] {
        &self.positions[1..5]
    }

    pub fn far_corners(&self) -> &[Vec3] {
        &self.positions[5..9]
    }

    pub fn near_width(&self) -> f32 {
        self.positions[2].x - self.positions[1].x
    }

    pub fn near_height(&self) -> f32 {
        self.positions[3].y - self.positions[2].y
    }

    pub fn far_width(&self) -> f32 {
        self.positions[6].x - self.positions[5].x
    }

    pub fn far_height(&self) -> f32 {
        self.positions[7].y - self.positions[6].y
    }
}

fn corners(half_width: f32, half_height: f32, z: f32) -> [Vec3; 4] {
    [
        Vec3::new(-half_width, -half_height, z),
        Vec3::new(half_width, -half_height, z),
        Vec3::new(half_width, half_height, z),
        Vec3::new(-half_width, half_height, z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn classroom_example() {
        let f = FrustumGeometry::new(0.1, 30.0, 90.0, 1.0);
        assert!((f.near_height() * 0.5 - 0.1).abs() < 1e-6);
        assert!((f.near_width() * 0.5 - 0.1).abs() < 1e-6);
        assert!((f.far_height() * 0.5 - 30.0).abs() < EPS);
        assert!((f.far_width() * 0.5 - 30.0).abs() < EPS);
        assert_eq!(f.apex(), Vec3::ZERO);
    }

    #[test]
    fn corner_counts_and_depths() {
        let f = FrustumGeometry::new(0.5, 12.0, 60.0, 16.0 / 9.0);
        assert_eq!(f.near_corners().len(), 4);
        assert_eq!(f.far_corners().len(), 4);
        assert!(f.near_corners().iter().all(|c| c.z == -0.5));
        assert!(f.far_corners().iter().all(|c| c.z == -12.0));
        assert_eq!(&f.positions()[9..13], f.near_corners());
    }

    #[test]
    fn similar_triangles() {
        let cases = [
            (0.1, 200.0, 90.0, 1.0),
            (1.0, 2.0, 45.0, 0.5),
            (3.0, 40.0, 120.0, 2.4),
            (0.01, 1.0, 10.0, 1.0),
        ];
        for (near, far, fov, aspect) in cases {
            let f = FrustumGeometry::new(near, far, fov, aspect);
            let expected = far / near;
            let width_ratio = f.far_width() / f.near_width();
            let height_ratio = f.far_height() / f.near_height();
            assert!((width_ratio - expected).abs() / expected < EPS);
            assert!((height_ratio - expected).abs() / expected < EPS);
            assert!((f.near_width() / f.near_height() - aspect).abs() < EPS);
        }
    }

    #[test]
    fn inverted_planes_are_drawn() {
        let f = FrustumGeometry::new(10.0, 1.0, 90.0, 1.0);
        assert!(f.far_width() < f.near_width());
    }

    #[test]
    fn indices_stay_in_range() {
        assert!(FRUSTUM_INDICES
            .iter()
            .all(|&i| (i as usize) < FRUSTUM_VERTEX_COUNT));
        assert_eq!(FRUSTUM_INDICES.len() / 2, 16);
    }

    #[test]
    fn near_plane_corners_are_black() {
        assert!(FRUSTUM_COLORS[1..5].iter().all(|&c| c == Color::BLACK));
        assert!(FRUSTUM_COLORS[5..].iter().all(|&c| c == Color::GRAY));
        assert_eq!(FRUSTUM_COLORS[0], Color::GRAY);
    }

    #[test]
    #[should_panic(expected = "positive clip distances")]
    fn zero_near_is_fatal() {
        FrustumGeometry::new(0.0, 10.0, 90.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "positive clip distances")]
    fn negative_far_is_fatal() {
        FrustumGeometry::new(1.0, -10.0, 90.0, 1.0);
    }

    #[test]
    fn try_new_rejects_non_positive_clip_distances() {
        assert!(FrustumGeometry::try_new(0.0, 10.0, 60.0, 1.0).is_none());
        assert!(FrustumGeometry::try_new(0.1, -1.0, 60.0, 1.0).is_none());
        assert!(FrustumGeometry::try_new(f32::NAN, 10.0, 60.0, 1.0).is_none());
        assert_eq!(
            FrustumGeometry::try_new(0.1, 30.0, 90.0, 1.0),
            Some(FrustumGeometry::new(0.1, 30.0, 90.0, 1.0))
        );
    }

    #[test]
    fn collapsed_frustum_sits_at_the_apex() {
        let f = FrustumGeometry::collapsed();
        assert!(f.positions().iter().all(|&p| p == Vec3::ZERO));
        assert_eq!(f.near_width(), 0.0);
    }
}
