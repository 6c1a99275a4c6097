//! The model transform: scale, Euler rotation and translation of the cube.
//!
//! [`ModelTransform::matrix`] composes the pieces as `T · Rz · Ry · Rx · S`.
//! Read right to left against a column vector, a vertex is scaled first, then
//! rotated about X, then Y, then Z, and finally translated.

use glam::{Mat4, Vec3};

/// Scale, rotation (degrees, per axis) and translation of the model.
///
/// # Example
///
/// ```
/// use spacescope::{ModelTransform, Vec3};
///
/// let model = ModelTransform::new()
///     .translate(Vec3::new(5.0, 0.0, 0.0))
///     .scale(Vec3::splat(2.0));
///
/// let p = model.matrix().transform_point3(Vec3::new(1.0, 0.0, 0.0));
/// assert_eq!(p, Vec3::new(7.0, 0.0, 0.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelTransform {
    /// Scale factors for each axis.
    pub scale: Vec3,
    /// Rotation about X, Y and Z in degrees.
    pub rotate_degrees: Vec3,
    /// Translation in world units.
    pub translate: Vec3,
}

impl Default for ModelTransform {
    fn default() -> Self {
        Self {
            scale: Vec3::ONE,
            rotate_degrees: Vec3::ZERO,
            translate: Vec3::ZERO,
        }
    }
}

impl ModelTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }

    pub fn rotate_degrees(mut self, degrees: Vec3) -> Self {
        self.rotate_degrees = degrees;
        self
    }

    pub fn translate(mut self, translate: Vec3) -> Self {
        self.translate = translate;
        self
    }

    /// Builds the model matrix `T · Rz · Ry · Rx · S`.
    pub fn matrix(&self) -> Mat4 {
        let rotation = self.rotate_degrees;
        Mat4::from_translation(self.translate)
            * Mat4::from_rotation_z(rotation.z.to_radians())
            * Mat4::from_rotation_y(rotation.y.to_radians())
            * Mat4::from_rotation_x(rotation.x.to_radians())
            * Mat4::from_scale(self.scale)
    }
}
