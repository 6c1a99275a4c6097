//! The scene controller: sole owner of the transform state.
//!
//! Every input goes through a [`Scene`] method. Each one updates the input,
//! recomputes exactly the matrix that depends on it (plus the frustum for
//! projection inputs), and then runs the shared "matrices changed" step:
//!
//! 1. re-derive the [`DrawMatrices`] for the active [`Space`],
//! 2. re-project the [`NdcCube`], whether or not NDC space is showing,
//! 3. notify listeners with a [`SceneChange`],
//! 4. request a redraw.
//!
//! Nothing is patched incrementally; each recompute replaces the old value.

use std::fmt;

use glam::{Mat4, Vec3};

use crate::camera::{Camera, Navigation};
use crate::draw::{DerivedMatrices, DrawMatrices, Visibility};
use crate::frustum::{FRUSTUM_VERTEX_COUNT, FrustumGeometry};
use crate::geometry::CUBE_VERTEX_COUNT;
use crate::input::KeyAction;
use crate::ndc::NdcCube;
use crate::parameter::{Axis, Parameter, ParameterGroup};
use crate::projection::Projection;
use crate::report::MatrixText;
use crate::space::Space;
use crate::transform::ModelTransform;

/// Initial values for a [`Scene`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SceneConfig {
    pub model: ModelTransform,
    pub camera: Camera,
    pub projection: Projection,
    pub space: Space,
}

/// What triggered a [`SceneChange`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    Model,
    View,
    Projection,
    Space,
}

/// Sent to listeners after every recompute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneChange {
    pub kind: ChangeKind,
    pub matrices: DerivedMatrices,
    pub space: Space,
}

impl fmt::Display for SceneChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} changed, showing {}", self.kind, self.space)?;
        writeln!(f, "model:\n{}", MatrixText::new(self.matrices.model, 2))?;
        writeln!(f, "view:\n{}", MatrixText::new(self.matrices.view, 2))?;
        write!(f, "projection:\n{}", MatrixText::new(self.matrices.projection, 2))
    }
}

/// Things the renderer can draw.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Drawable {
    Grid,
    Cube,
    NdcCube,
    Frustum,
}

/// The rendering side of the scene, opaque to it.
pub trait RenderTarget {
    /// Replace the dynamic frustum vertex positions.
    fn upload_frustum(&mut self, positions: &[Vec3; FRUSTUM_VERTEX_COUNT]);
    /// Replace the dynamic NDC cube vertex positions.
    fn upload_ndc_cube(&mut self, positions: &[Vec3; CUBE_VERTEX_COUNT]);
    /// Draw one drawable with the given object-to-clip matrix.
    fn draw(&mut self, drawable: Drawable, mvp: Mat4);
}

/// What a window hosting a scene calls into.
pub trait SceneSurface {
    fn on_resize(&mut self, width: u32, height: u32);
    fn on_key(&mut self, action: KeyAction);
    fn render(&mut self, target: &mut dyn RenderTarget);
}

type Listener = Box<dyn FnMut(&SceneChange)>;

/// Owns the model/camera/projection inputs and everything derived from them.
///
/// # Example
///
/// ```
/// use spacescope::{Scene, Space, Vec3};
///
/// let mut scene = Scene::new();
/// scene.set_model_translate_x(5.0);
/// scene.select_space(Space::World);
///
/// let cube_origin = scene.draw_matrices().cube.project_point3(Vec3::ZERO);
/// let grid_origin = scene.draw_matrices().grid.project_point3(Vec3::ZERO);
/// assert_ne!(cube_origin, grid_origin);
/// ```
pub struct Scene {
    model: ModelTransform,
    camera: Camera,
    projection: Projection,
    space: Space,
    matrices: DerivedMatrices,
    draw: DrawMatrices,
    frustum: FrustumGeometry,
    ndc_cube: NdcCube,
    listeners: Vec<Listener>,
    redraw_requested: bool,
    selected: Parameter,
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_config(SceneConfig::default())
    }
}

impl Scene {
    /// A scene with the default inputs, showing model space.
    pub fn new() -> Self {
        Self::default()
    }

    /// A scene with the given inputs. Needs no GPU resources.
    pub fn with_config(config: SceneConfig) -> Self {
        let SceneConfig {
            model,
            camera,
            projection,
            space,
        } = config;

        let matrices = DerivedMatrices {
            model: model.matrix(),
            view: camera.view_matrix(),
            projection: projection.matrix(),
        };

        Self {
            model,
            camera,
            projection,
            space,
            matrices,
            draw: DrawMatrices::derive(space, &matrices, projection.aspect),
            frustum: frustum_for(&projection).unwrap_or_else(|| {
                log::warn!(
                    "near={} far={} gives no frustum, starting with an empty one",
                    projection.near,
                    projection.far
                );
                FrustumGeometry::collapsed()
            }),
            ndc_cube: NdcCube::project(matrices.model_view_projection()),
            listeners: Vec::new(),
            redraw_requested: true,
            selected: Parameter::ALL[0],
        }
    }

    // ========================================================================
    // State
    // ========================================================================

    pub fn model(&self) -> &ModelTransform {
        &self.model
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    pub fn space(&self) -> Space {
        self.space
    }

    pub fn matrices(&self) -> &DerivedMatrices {
        &self.matrices
    }

    pub fn draw_matrices(&self) -> &DrawMatrices {
        &self.draw
    }

    pub fn visibility(&self) -> Visibility {
        Visibility::for_space(self.space)
    }

    pub fn frustum(&self) -> &FrustumGeometry {
        &self.frustum
    }

    pub fn ndc_cube(&self) -> &NdcCube {
        &self.ndc_cube
    }

    /// Current value of an input.
    pub fn parameter(&self, parameter: Parameter) -> f32 {
        match parameter {
            Parameter::ModelScale(axis) => axis.get(self.model.scale),
            Parameter::ModelRotate(axis) => axis.get(self.model.rotate_degrees),
            Parameter::ModelTranslate(axis) => axis.get(self.model.translate),
            Parameter::CameraPosition(axis) => axis.get(self.camera.position),
            Parameter::CameraTarget(axis) => axis.get(self.camera.target),
            Parameter::CameraUp(axis) => axis.get(self.camera.up),
            Parameter::ProjectionNear => self.projection.near,
            Parameter::ProjectionFar => self.projection.far,
            Parameter::ProjectionFov => self.projection.fov_degrees,
        }
    }

    /// Register a callback run after every recompute.
    pub fn on_change(&mut self, listener: impl FnMut(&SceneChange) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Returns whether a redraw was requested since the last call, and clears it.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    // ========================================================================
    // Inputs
    // ========================================================================

    /// Set one input. Values are not validated.
    pub fn set_parameter(&mut self, parameter: Parameter, value: f32) {
        match parameter {
            Parameter::ModelScale(axis) => axis.set(&mut self.model.scale, value),
            Parameter::ModelRotate(axis) => axis.set(&mut self.model.rotate_degrees, value),
            Parameter::ModelTranslate(axis) => axis.set(&mut self.model.translate, value),
            Parameter::CameraPosition(axis) => axis.set(&mut self.camera.position, value),
            Parameter::CameraTarget(axis) => axis.set(&mut self.camera.target, value),
            Parameter::CameraUp(axis) => axis.set(&mut self.camera.up, value),
            Parameter::ProjectionNear => self.projection.near = value,
            Parameter::ProjectionFar => self.projection.far = value,
            Parameter::ProjectionFov => self.projection.fov_degrees = value,
        }
        log::debug!("{parameter} = {value}");

        match parameter.group() {
            ParameterGroup::Model => self.recompute_model(),
            ParameterGroup::View => self.recompute_view(),
            ParameterGroup::Projection => self.recompute_projection(),
        }
    }

    pub fn set_model_scale_x(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelScale(Axis::X), value);
    }

    pub fn set_model_scale_y(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelScale(Axis::Y), value);
    }

    pub fn set_model_scale_z(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelScale(Axis::Z), value);
    }

    /// Degrees.
    pub fn set_model_rotate_x(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelRotate(Axis::X), value);
    }

    /// Degrees.
    pub fn set_model_rotate_y(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelRotate(Axis::Y), value);
    }

    /// Degrees.
    pub fn set_model_rotate_z(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelRotate(Axis::Z), value);
    }

    pub fn set_model_translate_x(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelTranslate(Axis::X), value);
    }

    pub fn set_model_translate_y(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelTranslate(Axis::Y), value);
    }

    pub fn set_model_translate_z(&mut self, value: f32) {
        self.set_parameter(Parameter::ModelTranslate(Axis::Z), value);
    }

    pub fn set_camera_position_x(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraPosition(Axis::X), value);
    }

    pub fn set_camera_position_y(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraPosition(Axis::Y), value);
    }

    pub fn set_camera_position_z(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraPosition(Axis::Z), value);
    }

    pub fn set_camera_target_x(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraTarget(Axis::X), value);
    }

    pub fn set_camera_target_y(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraTarget(Axis::Y), value);
    }

    pub fn set_camera_target_z(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraTarget(Axis::Z), value);
    }

    pub fn set_camera_up_x(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraUp(Axis::X), value);
    }

    pub fn set_camera_up_y(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraUp(Axis::Y), value);
    }

    pub fn set_camera_up_z(&mut self, value: f32) {
        self.set_parameter(Parameter::CameraUp(Axis::Z), value);
    }

    pub fn set_projection_near(&mut self, value: f32) {
        self.set_parameter(Parameter::ProjectionNear, value);
    }

    pub fn set_projection_far(&mut self, value: f32) {
        self.set_parameter(Parameter::ProjectionFar, value);
    }

    /// Degrees.
    pub fn set_projection_fov(&mut self, value: f32) {
        self.set_parameter(Parameter::ProjectionFov, value);
    }

    /// The parameter that [`step_parameter`](Self::step_parameter) adjusts.
    pub fn selected_parameter(&self) -> Parameter {
        self.selected
    }

    /// Choose the parameter adjusted from the keyboard. Changes no matrix.
    pub fn select_parameter(&mut self, parameter: Parameter) {
        self.selected = parameter;
        let format = parameter.slider_format();
        log::info!(
            "adjusting {parameter}, now {}",
            format.format(self.parameter(parameter))
        );
    }

    /// Move the selected parameter by whole slider steps.
    ///
    /// The current value is first snapped to the nearest step, as a slider
    /// would show it.
    pub fn step_parameter(&mut self, steps: i32) {
        let parameter = self.selected;
        let format = parameter.slider_format();
        let step = format.step_for(self.parameter(parameter)) + steps;
        let value = format.scaled_value(step);
        log::info!("{parameter} = {}", format.format(value));
        self.set_parameter(parameter, value);
    }

    /// Move the user camera one step.
    pub fn navigate(&mut self, navigation: Navigation) {
        self.camera.navigate(navigation);
        log::debug!(
            "{navigation:?}: position {} target {}",
            self.camera.position,
            self.camera.target
        );
        self.recompute_view();
    }

    /// Track a new render surface size.
    ///
    /// The aspect ratio is updated before the projection and frustum are
    /// recomputed. Zero-sized surfaces (minimized windows) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring resize to {width}x{height}");
            return;
        }
        self.projection.aspect = width as f32 / height as f32;
        log::debug!("resize to {width}x{height}, aspect {}", self.projection.aspect);
        self.recompute_projection();
    }

    /// Make `space` the one being shown.
    pub fn select_space(&mut self, space: Space) {
        log::debug!("space {} -> {}", self.space, space);
        self.space = space;
        self.matrices_changed(ChangeKind::Space);
    }

    /// Select a space by its raw index.
    ///
    /// # Panics
    ///
    /// Panics if `index` names no space; callers only ever produce valid indices.
    pub fn select_space_index(&mut self, index: u8) {
        let space = Space::try_from(index).unwrap_or_else(|e| panic!("cannot select space: {e}"));
        self.select_space(space);
    }

    // ========================================================================
    // Recompute
    // ========================================================================

    fn recompute_model(&mut self) {
        self.matrices.model = self.model.matrix();
        self.matrices_changed(ChangeKind::Model);
    }

    fn recompute_view(&mut self) {
        self.matrices.view = self.camera.view_matrix();
        self.matrices_changed(ChangeKind::View);
    }

    fn recompute_projection(&mut self) {
        self.matrices.projection = self.projection.matrix();
        match frustum_for(&self.projection) {
            Some(frustum) => self.frustum = frustum,
            None => log::warn!(
                "near={} far={} gives no frustum, keeping the previous one",
                self.projection.near,
                self.projection.far
            ),
        }
        self.matrices_changed(ChangeKind::Projection);
    }

    fn matrices_changed(&mut self, kind: ChangeKind) {
        self.draw = DrawMatrices::derive(self.space, &self.matrices, self.projection.aspect);
        self.ndc_cube = NdcCube::project(self.matrices.model_view_projection());
        self.redraw_requested = true;

        let change = SceneChange {
            kind,
            matrices: self.matrices,
            space: self.space,
        };
        for listener in &mut self.listeners {
            listener(&change);
        }
    }
}

/// `None` when the clip distances leave nothing to draw.
fn frustum_for(projection: &Projection) -> Option<FrustumGeometry> {
    FrustumGeometry::try_new(
        projection.near,
        projection.far,
        projection.fov_degrees,
        projection.aspect,
    )
}

impl SceneSurface for Scene {
    fn on_resize(&mut self, width: u32, height: u32) {
        self.resize(width, height);
    }

    fn on_key(&mut self, action: KeyAction) {
        match action {
            KeyAction::Navigate(navigation) => self.navigate(navigation),
            KeyAction::SelectSpace(space) => self.select_space(space),
            KeyAction::NextSpace => self.select_space(self.space.next()),
            KeyAction::PreviousSpace => self.select_space(self.space.previous()),
            KeyAction::NextParameter => self.select_parameter(self.selected.next()),
            KeyAction::PreviousParameter => self.select_parameter(self.selected.previous()),
            KeyAction::StepParameter(steps) => self.step_parameter(steps),
        }
    }

    fn render(&mut self, target: &mut dyn RenderTarget) {
        target.upload_frustum(self.frustum.positions());
        target.upload_ndc_cube(self.ndc_cube.positions());

        let visible = self.visibility();
        let draw = self.draw;
        if visible.grid {
            target.draw(Drawable::Grid, draw.grid);
        }
        if visible.cube {
            target.draw(Drawable::Cube, draw.cube);
        }
        if visible.ndc_cube {
            target.draw(Drawable::NdcCube, draw.cube);
        }
        if visible.frustum {
            target.draw(Drawable::Frustum, draw.frustum);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ndc::inside_ndc_box;
    use std::cell::RefCell;
    use std::rc::Rc;

    const EPS: f32 = 1e-5;

    fn recorded(scene: &mut Scene) -> Rc<RefCell<Vec<SceneChange>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        scene.on_change(move |change| sink.borrow_mut().push(*change));
        log
    }

    #[derive(Default)]
    struct RecordingTarget {
        frustum_uploads: usize,
        ndc_uploads: usize,
        draws: Vec<Drawable>,
    }

    impl RenderTarget for RecordingTarget {
        fn upload_frustum(&mut self, _: &[Vec3; FRUSTUM_VERTEX_COUNT]) {
            self.frustum_uploads += 1;
        }

        fn upload_ndc_cube(&mut self, _: &[Vec3; CUBE_VERTEX_COUNT]) {
            self.ndc_uploads += 1;
        }

        fn draw(&mut self, drawable: Drawable, _: Mat4) {
            self.draws.push(drawable);
        }
    }

    #[test]
    fn defaults() {
        let scene = Scene::new();
        assert_eq!(scene.space(), Space::Model);
        assert_eq!(scene.model().scale, Vec3::ONE);
        assert_eq!(scene.camera().position, Vec3::splat(10.0));
        assert_eq!(scene.camera().target, Vec3::ZERO);
        assert_eq!(scene.camera().up, Vec3::Y);
        assert_eq!(scene.projection().near, 0.1);
        assert_eq!(scene.projection().far, 200.0);
        assert_eq!(scene.projection().fov_degrees, 90.0);
        assert_eq!(scene.matrices().model, Mat4::IDENTITY);
        assert!(scene.matrices().view.is_finite());
        assert!(scene.matrices().projection.is_finite());
    }

    #[test]
    fn model_setter_only_touches_model_matrix() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        let before = *scene.matrices();

        scene.set_model_rotate_y(30.0);

        let after = *scene.matrices();
        assert_ne!(after.model, before.model);
        assert_eq!(after.view, before.view);
        assert_eq!(after.projection, before.projection);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].kind, ChangeKind::Model);
        assert_eq!(log.borrow()[0].matrices, after);
    }

    #[test]
    fn camera_setter_only_touches_view_matrix() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        let before = *scene.matrices();

        scene.set_camera_position_y(3.0);

        assert_eq!(scene.camera().position, Vec3::new(10.0, 3.0, 10.0));
        assert_eq!(scene.matrices().model, before.model);
        assert_ne!(scene.matrices().view, before.view);
        assert_eq!(scene.matrices().projection, before.projection);
        assert_eq!(log.borrow()[0].kind, ChangeKind::View);
    }

    #[test]
    fn projection_setter_recomputes_frustum() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        let frustum = *scene.frustum();

        scene.set_projection_fov(60.0);

        assert_ne!(*scene.frustum(), frustum);
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(log.borrow()[0].kind, ChangeKind::Projection);
    }

    #[test]
    fn every_parameter_round_trips() {
        let mut scene = Scene::new();
        for (i, parameter) in Parameter::ALL.into_iter().enumerate() {
            // Keep near below far so the frustum stays valid.
            let value = match parameter {
                Parameter::ProjectionNear => 0.5,
                Parameter::ProjectionFar => 50.0,
                _ => i as f32 + 1.0,
            };
            scene.set_parameter(parameter, value);
            assert_eq!(scene.parameter(parameter), value, "{parameter}");
        }
    }

    #[test]
    fn invalid_projection_is_accepted() {
        let mut scene = Scene::new();
        scene.set_projection_near(50.0);
        scene.set_projection_far(10.0);
        assert_eq!(scene.projection().near, 50.0);
        assert!(scene.frustum().far_width() < scene.frustum().near_width());
    }

    #[test]
    fn non_positive_clip_distances_keep_last_frustum() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        let frustum = *scene.frustum();

        let before = scene.matrices().projection;
        scene.set_projection_near(0.0);
        assert_ne!(scene.matrices().projection, before);
        assert_eq!(scene.projection().near, 0.0);

        let before = scene.matrices().projection;
        scene.set_projection_near(-2.0);
        assert_ne!(scene.matrices().projection, before);

        scene.set_projection_far(-1.0);
        assert_eq!(scene.projection().far, -1.0);

        assert_eq!(*scene.frustum(), frustum);
        assert_eq!(log.borrow().len(), 3);
        assert!(log.borrow().iter().all(|c| c.kind == ChangeKind::Projection));

        scene.set_projection_near(1.0);
        scene.set_projection_far(20.0);
        assert_eq!(*scene.frustum(), FrustumGeometry::new(1.0, 20.0, 90.0, 1.0));
    }

    #[test]
    fn starting_without_a_frustum() {
        let scene = Scene::with_config(SceneConfig {
            projection: Projection::default().clip_planes(0.0, 100.0),
            ..SceneConfig::default()
        });
        assert_eq!(*scene.frustum(), FrustumGeometry::collapsed());
        assert!(scene.matrices().model.is_finite());
    }

    #[test]
    fn parameter_keys_step_the_selected_parameter() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        assert_eq!(scene.selected_parameter(), Parameter::ModelScale(Axis::X));

        scene.on_key(KeyAction::StepParameter(1));
        assert!((scene.model().scale.x - 1.1).abs() < EPS);
        assert_eq!(log.borrow()[0].kind, ChangeKind::Model);

        scene.on_key(KeyAction::PreviousParameter);
        assert_eq!(scene.selected_parameter(), Parameter::ProjectionFov);
        assert_eq!(log.borrow().len(), 1);

        scene.on_key(KeyAction::StepParameter(-30));
        assert_eq!(scene.projection().fov_degrees, 60.0);

        scene.on_key(KeyAction::NextParameter);
        scene.on_key(KeyAction::NextParameter);
        assert_eq!(scene.selected_parameter(), Parameter::ModelScale(Axis::Y));
    }

    #[test]
    fn stepping_near_to_zero_does_not_panic() {
        let mut scene = Scene::new();
        scene.select_parameter(Parameter::ProjectionNear);
        scene.step_parameter(-1);
        scene.step_parameter(-1);
        assert!((scene.projection().near + 0.1).abs() < EPS);
        assert!(scene.matrices().projection != Projection::default().matrix());
    }

    #[test]
    fn forward_key_moves_camera_once() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        let step = (Vec3::ZERO - Vec3::splat(10.0)).normalize();

        scene.on_key(KeyAction::Navigate(Navigation::Forward));

        assert!(scene.camera().position.abs_diff_eq(Vec3::splat(10.0) + step, EPS));
        assert!(scene.camera().target.abs_diff_eq(step, EPS));
        let log = log.borrow();
        assert_eq!(log.len(), 1);
        assert_eq!(log[0].kind, ChangeKind::View);
    }

    #[test]
    fn resize_updates_projection_only() {
        let mut scene = Scene::new();
        let before = *scene.matrices();
        let frustum = *scene.frustum();

        scene.on_resize(1600, 800);

        assert_eq!(scene.projection().aspect, 2.0);
        assert_eq!(scene.matrices().model, before.model);
        assert_eq!(scene.matrices().view, before.view);
        assert_ne!(scene.matrices().projection, before.projection);
        assert_ne!(*scene.frustum(), frustum);
        assert!((scene.frustum().near_width() / scene.frustum().near_height() - 2.0).abs() < EPS);
    }

    #[test]
    fn zero_sized_resize_is_ignored() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        scene.resize(0, 600);
        assert_eq!(scene.projection().aspect, 1.0);
        assert!(log.borrow().is_empty());
    }

    #[test]
    fn space_selection_is_idempotent() {
        let mut scene = Scene::new();
        scene.set_model_translate_x(2.0);
        scene.on_resize(800, 600);
        for space in Space::ALL {
            scene.select_space(space);
            let draw = *scene.draw_matrices();
            scene.select_space(space.next());
            scene.select_space(space);
            assert_eq!(*scene.draw_matrices(), draw, "{space}");
        }
    }

    #[test]
    fn world_space_reveals_model_transform() {
        let mut scene = Scene::new();
        scene.set_model_translate_x(5.0);
        scene.select_space(Space::Model);
        let model_space = *scene.draw_matrices();

        scene.select_space(Space::World);
        let world_space = *scene.draw_matrices();

        assert_ne!(world_space.cube, model_space.cube);
        assert_eq!(world_space.grid, model_space.grid);
    }

    #[test]
    fn ndc_cube_tracks_changes_in_every_space() {
        let mut scene = Scene::new();
        assert_eq!(scene.space(), Space::Model);
        let before = *scene.ndc_cube();

        scene.set_model_translate_y(0.5);

        assert_ne!(*scene.ndc_cube(), before);
        assert!(scene.ndc_cube().positions().iter().all(|&p| inside_ndc_box(p, EPS)));
        let expected = NdcCube::project(scene.matrices().model_view_projection());
        assert_eq!(*scene.ndc_cube(), expected);
    }

    #[test]
    fn far_plane_pushes_ndc_cube_out() {
        let mut scene = Scene::new();
        scene.set_projection_far(5.0);
        assert!(scene.ndc_cube().positions().iter().all(|&p| !inside_ndc_box(p, EPS)));
    }

    #[test]
    fn space_keys_cycle() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        scene.on_key(KeyAction::NextSpace);
        assert_eq!(scene.space(), Space::World);
        scene.on_key(KeyAction::PreviousSpace);
        scene.on_key(KeyAction::PreviousSpace);
        assert_eq!(scene.space(), Space::RenderedImage);
        scene.on_key(KeyAction::SelectSpace(Space::Ndc));
        assert_eq!(scene.space(), Space::Ndc);
        assert!(log.borrow().iter().all(|c| c.kind == ChangeKind::Space));
        assert_eq!(log.borrow().last().map(|c| c.space), Some(Space::Ndc));
    }

    #[test]
    fn select_space_by_index() {
        let mut scene = Scene::new();
        scene.select_space_index(4);
        assert_eq!(scene.space(), Space::RenderedImage);
    }

    #[test]
    #[should_panic(expected = "unknown space index 7")]
    fn unknown_space_index_is_fatal() {
        Scene::new().select_space_index(7);
    }

    #[test]
    fn render_follows_visibility() {
        let mut scene = Scene::new();

        scene.select_space(Space::World);
        let mut target = RecordingTarget::default();
        scene.render(&mut target);
        assert_eq!(
            target.draws,
            [Drawable::Grid, Drawable::Cube, Drawable::Frustum]
        );
        assert_eq!((target.frustum_uploads, target.ndc_uploads), (1, 1));

        scene.select_space(Space::Ndc);
        let mut target = RecordingTarget::default();
        scene.render(&mut target);
        assert_eq!(target.draws, [Drawable::Grid, Drawable::NdcCube]);

        scene.select_space(Space::RenderedImage);
        let mut target = RecordingTarget::default();
        scene.render(&mut target);
        assert_eq!(target.draws, [Drawable::Grid, Drawable::Cube]);
    }

    #[test]
    fn redraw_request_is_consumed() {
        let mut scene = Scene::new();
        assert!(scene.take_redraw_request());
        assert!(!scene.take_redraw_request());
        scene.set_camera_target_z(1.0);
        assert!(scene.take_redraw_request());
    }

    #[test]
    fn change_report_mentions_space() {
        let mut scene = Scene::new();
        let log = recorded(&mut scene);
        scene.select_space(Space::View);
        let text = log.borrow()[0].to_string();
        assert!(text.starts_with("Space changed, showing View space"));
        assert!(text.contains("projection:"));
    }
}
