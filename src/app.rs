use std::sync::Arc;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowAttributes, WindowId};

use crate::error::FatalInitError;
use crate::gpu::GpuContext;
use crate::input::Input;
use crate::render::ScenePass;
use crate::scene::{Scene, SceneConfig, SceneSurface};
use crate::space::Space;

/// Configuration for the app window.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Spacescope".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Window title for the space being shown.
pub fn space_title(space: Space) -> String {
    format!("Current space: {}", space.label())
}

/// Open a window showing the default scene and run until it is closed.
///
/// # Example
/// ```no_run
/// spacescope::run(spacescope::AppConfig::new().size(1024, 768))?;
/// # Ok::<(), spacescope::FatalInitError>(())
/// ```
pub fn run(config: AppConfig) -> Result<(), FatalInitError> {
    run_with_scene(config, SceneConfig::default())
}

/// Like [`run`], starting from the given model, camera and projection.
pub fn run_with_scene(config: AppConfig, scene: SceneConfig) -> Result<(), FatalInitError> {
    let event_loop = EventLoop::new()?;
    // Nothing animates; frames are drawn only after the scene changes.
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = SpacescopeApp::Pending { config, scene };
    event_loop.run_app(&mut app)?;

    match app {
        SpacescopeApp::Failed(err) => Err(err),
        _ => Ok(()),
    }
}

enum SpacescopeApp {
    Pending {
        config: AppConfig,
        scene: SceneConfig,
    },
    Running {
        window: Arc<Window>,
        gpu: GpuContext,
        pass: ScenePass,
        scene: Scene,
        input: Input,
        shown_space: Space,
    },
    Failed(FatalInitError),
}

impl SpacescopeApp {
    fn start(
        event_loop: &ActiveEventLoop,
        config: &AppConfig,
        scene: SceneConfig,
    ) -> Result<Self, FatalInitError> {
        let window_attrs = WindowAttributes::default()
            .with_title(space_title(scene.space))
            .with_inner_size(winit::dpi::LogicalSize::new(config.width, config.height));

        let window = Arc::new(event_loop.create_window(window_attrs)?);
        let gpu = GpuContext::new(window.clone())?;
        let pass = ScenePass::new(&gpu);

        let mut scene = Scene::with_config(scene);
        scene.on_change(|change| log::info!("{change}"));
        scene.resize(gpu.width(), gpu.height());

        log::info!(
            "{} started at {}x{}",
            config.title,
            gpu.width(),
            gpu.height()
        );

        Ok(SpacescopeApp::Running {
            window,
            gpu,
            pass,
            shown_space: scene.space(),
            scene,
            input: Input::new(),
        })
    }
}

impl ApplicationHandler for SpacescopeApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let SpacescopeApp::Pending { config, scene } = self else {
            return;
        };

        match Self::start(event_loop, config, *scene) {
            Ok(running) => {
                if let SpacescopeApp::Running { window, .. } = &running {
                    window.request_redraw();
                }
                *self = running;
            }
            Err(err) => {
                *self = SpacescopeApp::Failed(err);
                event_loop.exit();
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        let SpacescopeApp::Running {
            window,
            gpu,
            pass,
            scene,
            input,
            shown_space,
        } = self
        else {
            return;
        };

        if let Some(action) = input.handle_event(&event) {
            scene.on_key(action);
        }

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                log::info!("window resized to {}x{}", size.width, size.height);
                gpu.resize(size.width, size.height);
                scene.on_resize(size.width, size.height);
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => match pass.render(gpu, scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    log::warn!("surface lost or outdated, reconfiguring");
                    gpu.reconfigure();
                    window.request_redraw();
                }
                Err(err) => log::warn!("skipping frame: {err}"),
            },
            _ => {}
        }

        if scene.space() != *shown_space {
            *shown_space = scene.space();
            window.set_title(&space_title(*shown_space));
        }
        if scene.take_redraw_request() {
            window.request_redraw();
        }
    }
}
