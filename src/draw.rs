//! Per-space draw matrices.
//!
//! Every space shows the same static cube and grid; only the matrices applied
//! to them change. The earlier the selected space sits in the pipeline, the
//! more of the model/view transforms are still "pending" and left out:
//!
//! | Space           | cube                | grid        | frustum                |
//! |-----------------|---------------------|-------------|------------------------|
//! | Model           | `P·Vo`              | `P·Vo`      | `P·Vo·V⁻¹`             |
//! | World           | `P·Vo·M`            | `P·Vo`      | `P·Vo·V⁻¹`             |
//! | View            | `P·V·M`             | `P·V`       | `P·V·V⁻¹`              |
//! | NDC             | `Pw·Vo` (NDC cube)  | `Pw·Vo`     | `Pw·Vo·V⁻¹`            |
//! | Rendered image  | `P·V·M`             | `P·V`       | `P·V·V⁻¹`              |
//!
//! `Vo` is the fixed [`Camera::observer`] view and `Pw` the wide
//! [`Projection::observer`] projection. In NDC space the cube matrix is applied
//! to the already projected NDC cube rather than to the object-space cube.

use glam::Mat4;

use crate::camera::Camera;
use crate::projection::Projection;
use crate::space::Space;

/// Model, view and projection matrices derived from the current parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DerivedMatrices {
    pub model: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
}

impl DerivedMatrices {
    /// `projection · view · model`, the full object-to-clip transform.
    pub fn model_view_projection(&self) -> Mat4 {
        self.projection * self.view * self.model
    }
}

/// The matrices handed to the renderer for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawMatrices {
    /// Applied to the cube, or to the NDC cube in NDC space.
    pub cube: Mat4,
    pub grid: Mat4,
    pub frustum: Mat4,
}

impl DrawMatrices {
    /// Derives the draw matrices for `space`.
    ///
    /// `aspect` only feeds the observer projection; the live projection is
    /// taken from `derived`.
    pub fn derive(space: Space, derived: &DerivedMatrices, aspect: f32) -> Self {
        let DerivedMatrices {
            model,
            view,
            projection,
        } = *derived;
        let camera_to_world = view.inverse();

        match space {
            Space::Model => {
                let observed = projection * Camera::observer().view_matrix();
                Self {
                    cube: observed,
                    grid: observed,
                    frustum: observed * camera_to_world,
                }
            }
            Space::World => {
                let observed = projection * Camera::observer().view_matrix();
                Self {
                    cube: observed * model,
                    grid: observed,
                    frustum: observed * camera_to_world,
                }
            }
            Space::View | Space::RenderedImage => {
                let view_projection = projection * view;
                Self {
                    cube: view_projection * model,
                    grid: view_projection,
                    frustum: view_projection * camera_to_world,
                }
            }
            Space::Ndc => {
                let observed =
                    Projection::observer(aspect).matrix() * Camera::observer().view_matrix();
                Self {
                    cube: observed,
                    grid: observed,
                    frustum: observed * camera_to_world,
                }
            }
        }
    }
}

/// Which drawables are rendered in a given space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub grid: bool,
    pub cube: bool,
    pub ndc_cube: bool,
    pub frustum: bool,
}

impl Visibility {
    pub fn for_space(space: Space) -> Self {
        Self {
            grid: true,
            cube: space != Space::Ndc,
            ndc_cube: space == Space::Ndc,
            frustum: space == Space::World,
        }
    }
}
