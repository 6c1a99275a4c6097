//! The user-adjustable look-at camera and the fixed observer camera.

use glam::{Mat4, Vec3};

/// Distance moved by a single navigation key press.
pub const NAVIGATION_STEP: f32 = 1.0;

/// A look-at camera described by position, target and up vector.
///
/// The view matrix is `lookAt(position, target, up)` in a right-handed
/// coordinate system: the camera looks down its local -Z axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(10.0, 10.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

/// A discrete camera movement along the camera's local basis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Navigation {
    /// Move position and target along the viewing direction.
    Forward,
    /// Move position and target against the viewing direction.
    Back,
    /// Move position and target along -right.
    StrafeLeft,
    /// Move position and target along +right.
    StrafeRight,
    /// Move position and target along the camera's up axis.
    Up,
    /// Move position and target against the camera's up axis.
    Down,
    /// Move only the target along -right.
    PanTargetLeft,
    /// Move only the target along +right.
    PanTargetRight,
    /// Move only the target along the camera's up axis.
    PanTargetUp,
    /// Move only the target against the camera's up axis.
    PanTargetDown,
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// The fixed camera used to look at model, world and NDC space from outside.
    ///
    /// It never follows the user camera, so the user camera (and its frustum)
    /// can be watched moving around in world space.
    pub fn observer() -> Self {
        Self {
            position: Vec3::new(15.0, 10.0, 15.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
        }
    }

    pub fn at(mut self, position: impl Into<Vec3>) -> Self {
        self.position = position.into();
        self
    }

    pub fn looking_at(mut self, target: impl Into<Vec3>) -> Self {
        self.target = target.into();
        self
    }

    pub fn with_up(mut self, up: impl Into<Vec3>) -> Self {
        self.up = up.into();
        self
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Unit vector from position towards target, or zero if they coincide.
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Compute the right vector from forward and up.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    /// Recompute up to be orthogonal to forward and right.
    pub fn orthogonal_up(&self) -> Vec3 {
        self.right().cross(self.forward()).normalize_or_zero()
    }

    /// Applies one navigation step of [`NAVIGATION_STEP`] units.
    pub fn navigate(&mut self, navigation: Navigation) {
        let forward = self.forward() * NAVIGATION_STEP;
        let right = self.right() * NAVIGATION_STEP;
        let up = self.orthogonal_up() * NAVIGATION_STEP;

        let (both, target_only) = match navigation {
            Navigation::Forward => (forward, Vec3::ZERO),
            Navigation::Back => (-forward, Vec3::ZERO),
            Navigation::StrafeLeft => (-right, Vec3::ZERO),
            Navigation::StrafeRight => (right, Vec3::ZERO),
            Navigation::Up => (up, Vec3::ZERO),
            Navigation::Down => (-up, Vec3::ZERO),
            Navigation::PanTargetLeft => (Vec3::ZERO, -right),
            Navigation::PanTargetRight => (Vec3::ZERO, right),
            Navigation::PanTargetUp => (Vec3::ZERO, up),
            Navigation::PanTargetDown => (Vec3::ZERO, -up),
        };

        self.position += both;
        self.target += both + target_only;
    }
}
