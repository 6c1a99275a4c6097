//! Named scalar inputs of the scene and how a slider presents them.
//!
//! Widgets never own a value: they send `(Parameter, f32)` to the scene and
//! render whatever the scene reports back.

use std::fmt;

use glam::Vec3;

/// A coordinate axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    pub fn label(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Reads this axis' component of `v`.
    pub fn get(self, v: Vec3) -> f32 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Writes this axis' component of `v`.
    pub fn set(self, v: &mut Vec3, value: f32) {
        match self {
            Axis::X => v.x = value,
            Axis::Y => v.y = value,
            Axis::Z => v.z = value,
        }
    }
}

/// Which derived matrix a parameter feeds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterGroup {
    Model,
    View,
    Projection,
}

/// One scalar input of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Parameter {
    ModelScale(Axis),
    /// Degrees.
    ModelRotate(Axis),
    ModelTranslate(Axis),
    CameraPosition(Axis),
    CameraTarget(Axis),
    CameraUp(Axis),
    ProjectionNear,
    ProjectionFar,
    /// Vertical field of view in degrees.
    ProjectionFov,
}

impl Parameter {
    /// Every parameter: nine model, nine camera, three projection.
    pub const ALL: [Parameter; 21] = [
        Parameter::ModelScale(Axis::X),
        Parameter::ModelScale(Axis::Y),
        Parameter::ModelScale(Axis::Z),
        Parameter::ModelRotate(Axis::X),
        Parameter::ModelRotate(Axis::Y),
        Parameter::ModelRotate(Axis::Z),
        Parameter::ModelTranslate(Axis::X),
        Parameter::ModelTranslate(Axis::Y),
        Parameter::ModelTranslate(Axis::Z),
        Parameter::CameraPosition(Axis::X),
        Parameter::CameraPosition(Axis::Y),
        Parameter::CameraPosition(Axis::Z),
        Parameter::CameraTarget(Axis::X),
        Parameter::CameraTarget(Axis::Y),
        Parameter::CameraTarget(Axis::Z),
        Parameter::CameraUp(Axis::X),
        Parameter::CameraUp(Axis::Y),
        Parameter::CameraUp(Axis::Z),
        Parameter::ProjectionNear,
        Parameter::ProjectionFar,
        Parameter::ProjectionFov,
    ];

    pub fn group(self) -> ParameterGroup {
        match self {
            Parameter::ModelScale(_) | Parameter::ModelRotate(_) | Parameter::ModelTranslate(_) => {
                ParameterGroup::Model
            }
            Parameter::CameraPosition(_) | Parameter::CameraTarget(_) | Parameter::CameraUp(_) => {
                ParameterGroup::View
            }
            Parameter::ProjectionNear | Parameter::ProjectionFar | Parameter::ProjectionFov => {
                ParameterGroup::Projection
            }
        }
    }

    /// Position in [`Parameter::ALL`].
    pub fn index(self) -> usize {
        Parameter::ALL
            .iter()
            .position(|&p| p == self)
            .unwrap_or_default()
    }

    /// The following parameter in [`Parameter::ALL`], wrapping around.
    pub fn next(self) -> Parameter {
        Parameter::ALL[(self.index() + 1) % Parameter::ALL.len()]
    }

    /// The preceding parameter in [`Parameter::ALL`], wrapping around.
    pub fn previous(self) -> Parameter {
        let len = Parameter::ALL.len();
        Parameter::ALL[(self.index() + len - 1) % len]
    }

    /// How a slider for this parameter maps steps to values.
    pub fn slider_format(self) -> SliderFormat {
        match self {
            Parameter::ModelRotate(_) | Parameter::ProjectionFov => SliderFormat::DEGREES,
            _ => SliderFormat::DEFAULT,
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Parameter::ModelScale(axis) => write!(f, "model scale {}", axis.label()),
            Parameter::ModelRotate(axis) => write!(f, "model rotate {}", axis.label()),
            Parameter::ModelTranslate(axis) => write!(f, "model translate {}", axis.label()),
            Parameter::CameraPosition(axis) => write!(f, "camera position {}", axis.label()),
            Parameter::CameraTarget(axis) => write!(f, "camera target {}", axis.label()),
            Parameter::CameraUp(axis) => write!(f, "camera up {}", axis.label()),
            Parameter::ProjectionNear => f.write_str("projection near"),
            Parameter::ProjectionFar => f.write_str("projection far"),
            Parameter::ProjectionFov => f.write_str("projection fov"),
        }
    }
}

/// Maps integer slider steps to scaled values and formats them for display.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SliderFormat {
    /// Value of one slider step.
    pub scale: f32,
    /// Digits after the decimal point.
    pub precision: usize,
    pub suffix: &'static str,
}

impl Default for SliderFormat {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl SliderFormat {
    /// Tenths, one decimal, no unit.
    pub const DEFAULT: SliderFormat = SliderFormat {
        scale: 0.1,
        precision: 1,
        suffix: "",
    };

    /// Whole degrees.
    pub const DEGREES: SliderFormat = SliderFormat {
        scale: 1.0,
        precision: 0,
        suffix: "°",
    };

    pub fn scaled_value(&self, step: i32) -> f32 {
        step as f32 * self.scale
    }

    /// The slider step closest to `value`.
    pub fn step_for(&self, value: f32) -> i32 {
        (value / self.scale).round() as i32
    }

    pub fn format(&self, value: f32) -> String {
        format!("{:.*}{}", self.precision, value, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_counts_per_group() {
        let count = |group| Parameter::ALL.iter().filter(|p| p.group() == group).count();
        assert_eq!(count(ParameterGroup::Model), 9);
        assert_eq!(count(ParameterGroup::View), 9);
        assert_eq!(count(ParameterGroup::Projection), 3);
    }

    #[test]
    fn axis_get_set() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        Axis::Y.set(&mut v, 7.0);
        assert_eq!(v, Vec3::new(1.0, 7.0, 3.0));
        assert_eq!(Axis::Z.get(v), 3.0);
    }

    #[test]
    fn slider_steps() {
        let format = SliderFormat::DEFAULT;
        assert!((format.scaled_value(25) - 2.5).abs() < 1e-6);
        assert_eq!(format.step_for(2.5), 25);
        assert_eq!(format.step_for(-0.04), 0);
    }

    #[test]
    fn slider_text() {
        assert_eq!(SliderFormat::DEFAULT.format(2.46), "2.5");
        assert_eq!(SliderFormat::DEGREES.format(45.0), "45°");
        assert_eq!(Parameter::ProjectionFov.slider_format(), SliderFormat::DEGREES);
        assert_eq!(
            Parameter::CameraUp(Axis::Y).slider_format(),
            SliderFormat::DEFAULT
        );
    }

    #[test]
    fn cycling_wraps() {
        assert_eq!(Parameter::ProjectionFov.next(), Parameter::ModelScale(Axis::X));
        assert_eq!(Parameter::ModelScale(Axis::X).previous(), Parameter::ProjectionFov);
        assert_eq!(
            Parameter::ModelTranslate(Axis::Z).next(),
            Parameter::CameraPosition(Axis::X)
        );
        for (i, p) in Parameter::ALL.into_iter().enumerate() {
            assert_eq!(p.index(), i);
            assert_eq!(p.next().previous(), p);
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(
            Parameter::ModelTranslate(Axis::X).to_string(),
            "model translate x"
        );
        assert_eq!(Parameter::ProjectionNear.to_string(), "projection near");
    }
}
