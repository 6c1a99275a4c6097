//! # Spacescope
//!
//! **Watch a cube travel through the graphics pipeline.**
//!
//! A unit cube sits on a ground grid. Its model transform, the user camera
//! and the perspective projection are all adjustable, and the scene can be
//! shown in any of five coordinate spaces: model, world, view, NDC and the
//! final rendered image. In every space but the last, a fixed observer camera
//! looks at the scene from outside, so the user camera's frustum and the
//! cube's image in normalized device coordinates can be seen directly.
//!
//! ## Quick Start
//!
//! ```no_run
//! use spacescope::*;
//!
//! fn main() -> Result<(), FatalInitError> {
//!     run(AppConfig::new().title("Pipeline lab"))
//! }
//! ```
//!
//! The [`Scene`] needs no window or GPU, so the same state can be driven
//! and inspected headlessly:
//!
//! ```
//! use spacescope::*;
//!
//! let mut scene = Scene::new();
//! scene.set_projection_fov(60.0);
//! scene.select_space(Space::Ndc);
//!
//! assert!(scene.visibility().ndc_cube);
//! assert!(!scene.visibility().cube);
//! ```
//!
//! ## Controls
//!
//! - **W/S/A/D/E/Q**: move the user camera
//! - **Arrow keys**: pan the camera target
//! - **1-5**: pick a space
//! - **Tab / Shift+Tab**: cycle spaces
//! - **PageDown / PageUp**: pick a parameter (scale, rotation, near, ...)
//! - **= / -**: step the picked parameter
//!
//! Every change logs the model, view and projection matrices at `info`.

mod app;
mod camera;
mod color;
mod draw;
mod error;
mod frustum;
mod geometry;
mod gpu;
mod input;
mod ndc;
mod parameter;
mod projection;
mod render;
mod report;
pub mod scene;
mod space;
mod transform;

pub use app::{AppConfig, run, run_with_scene, space_title};
pub use camera::{Camera, NAVIGATION_STEP, Navigation};
pub use color::Color;
pub use draw::{DerivedMatrices, DrawMatrices, Visibility};
pub use error::FatalInitError;
pub use frustum::{FRUSTUM_COLORS, FRUSTUM_INDICES, FRUSTUM_VERTEX_COUNT, FrustumGeometry};
pub use geometry::{
    CUBE_FACE_COLORS, CUBE_INDICES, CUBE_POSITIONS, CUBE_VERTEX_COUNT, ColorVertex,
    GRID_HALF_EXTENT, GRID_SPACING, colored_vertices, cube_colors, cube_vertices, grid_vertices,
};
pub use gpu::GpuContext;
pub use input::{Input, KeyAction, key_action};
pub use ndc::{NdcCube, inside_ndc_box, project_to_ndc};
pub use parameter::{Axis, Parameter, ParameterGroup, SliderFormat};
pub use projection::{OBSERVER_FAR, OBSERVER_FOV_DEGREES, OBSERVER_NEAR, Projection};
pub use render::{OPENGL_TO_WGPU, ScenePass};
pub use report::MatrixText;
pub use scene::{
    ChangeKind, Drawable, RenderTarget, Scene, SceneChange, SceneConfig, SceneSurface,
};
pub use space::{Space, UnknownSpace};
pub use transform::ModelTransform;

// Re-export glam math types for convenience
pub use glam::{Mat4, Vec3, Vec4};

// Re-export commonly used winit types for convenience
pub use winit::keyboard::{KeyCode, ModifiersState};
