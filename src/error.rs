//! Startup failures. The visualizer cannot do anything useful without a window
//! and a GPU device, so all of these end the program.

/// A failure while bringing up the window or the GPU.
#[derive(Debug, thiserror::Error)]
pub enum FatalInitError {
    #[error("could not create the event loop: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    #[error("could not create the window: {0}")]
    Window(#[from] winit::error::OsError),
    #[error("could not create a render surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),
    #[error("could not create the GPU device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("the render surface supports no texture formats")]
    NoSurfaceFormat,
}
