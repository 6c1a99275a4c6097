//! Perspective projection parameters.

use glam::Mat4;

/// Far plane used when the fixed observer camera looks at the scene, so that
/// nothing it is meant to show gets clipped.
pub const OBSERVER_FAR: f32 = 400.0;
/// Near plane of the observer projection.
pub const OBSERVER_NEAR: f32 = 0.1;
/// Vertical field of view of the observer projection, in degrees.
pub const OBSERVER_FOV_DEGREES: f32 = 90.0;

/// Near/far/field-of-view/aspect of a perspective projection.
///
/// None of the values are validated. `near <= 0` or `near >= far` simply
/// produce a degenerate or inverted matrix, which is something worth looking at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub near: f32,
    pub far: f32,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    /// Width divided by height of the render surface.
    pub aspect: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 200.0,
            fov_degrees: 90.0,
            aspect: 1.0,
        }
    }
}

impl Projection {
    pub fn new() -> Self {
        Self::default()
    }

    /// The wide projection paired with [`Camera::observer`](crate::Camera::observer).
    pub fn observer(aspect: f32) -> Self {
        Self {
            near: OBSERVER_NEAR,
            far: OBSERVER_FAR,
            fov_degrees: OBSERVER_FOV_DEGREES,
            aspect,
        }
    }

    pub fn clip_planes(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    pub fn fov(mut self, fov_degrees: f32) -> Self {
        self.fov_degrees = fov_degrees;
        self
    }

    pub fn aspect(mut self, aspect: f32) -> Self {
        self.aspect = aspect;
        self
    }

    /// OpenGL-style perspective matrix; NDC depth runs from -1 (near) to 1 (far).
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh_gl(
            self.fov_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }
}
