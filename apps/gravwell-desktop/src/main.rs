//! Desktop frame loop: input → physics → camera → render → present → pace.
//!
//! The loop has two states, running and stopped. Stopping (window close or
//! Escape) is terminal; GPU handles are dropped with the app on exit. Every
//! step is synchronous and single-threaded; the only blocking operation is
//! the end-of-frame pacing sleep.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use gravwell_common::constants::TARGET_FPS;
use gravwell_input::CameraCommand;
use gravwell_render::{GpuContext, LayerPipeline, SceneCamera};
use gravwell_sim::SimulationState;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Map a key-press edge to a camera command. Unrecognized keys are ignored,
/// not an error.
fn map_key(key: KeyCode) -> Option<CameraCommand> {
    match key {
        KeyCode::KeyW => Some(CameraCommand::MoveForward),
        KeyCode::KeyS => Some(CameraCommand::MoveBackward),
        KeyCode::KeyA => Some(CameraCommand::StrafeLeft),
        KeyCode::KeyD => Some(CameraCommand::StrafeRight),
        _ => None,
    }
}

/// Simulation-side state threaded through the loop, separate from the GPU
/// handles so it stays testable without a window.
struct AppState {
    sim: SimulationState,
    camera: SceneCamera,
    frame_budget: Duration,
}

impl AppState {
    fn new() -> Self {
        Self {
            sim: SimulationState::new(),
            camera: SceneCamera::default(),
            frame_budget: Duration::from_secs_f64(1.0 / TARGET_FPS as f64),
        }
    }
}

struct App {
    state: AppState,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<LayerPipeline>,
    init_failure: Option<anyhow::Error>,
}

impl App {
    fn new() -> Self {
        Self {
            state: AppState::new(),
            window: None,
            gpu: None,
            renderer: None,
            init_failure: None,
        }
    }

    /// Outcome of the run. Any recorded initialization failure surfaces as
    /// an error so the process exits non-zero; a clean quit exits zero.
    fn into_result(self) -> Result<()> {
        match self.init_failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// One frame while running: step physics once with the fixed dt, render
    /// the five layers from the current camera pose, present, then sleep off
    /// the rest of the frame budget.
    fn frame(&mut self, event_loop: &ActiveEventLoop) {
        let frame_start = Instant::now();

        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return;
        };

        self.state.sim.step();
        if self.state.sim.tick() % 600 == 0 {
            tracing::debug!(
                tick = self.state.sim.tick(),
                r = self.state.sim.star.radial_distance(),
                "star status"
            );
        }

        let output = match gpu.surface.get_current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                gpu.reconfigure();
                return;
            }
            Err(e) => {
                // Steady-state render failures are fatal by design.
                tracing::error!("surface error: {e}");
                event_loop.exit();
                return;
            }
        };

        let target = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        renderer.render(
            &gpu.device,
            &gpu.queue,
            &target,
            &self.state.camera,
            self.state.sim.star.position.as_vec3(),
        );

        output.present();

        // Soft 60 FPS cap: sleep off whatever the frame left unused.
        let elapsed = frame_start.elapsed();
        if elapsed < self.state.frame_budget {
            std::thread::sleep(self.state.frame_budget - elapsed);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("Gravwell")
            .with_inner_size(PhysicalSize::new(WINDOW_WIDTH, WINDOW_HEIGHT))
            .with_resizable(false);
        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                self.init_failure = Some(e.into());
                event_loop.exit();
                return;
            }
        };

        match GpuContext::new(window.clone()) {
            Ok(gpu) => {
                let renderer = LayerPipeline::new(&gpu.device, gpu.config.format);
                self.window = Some(window);
                self.gpu = Some(gpu);
                self.renderer = Some(renderer);
            }
            Err(e) => {
                tracing::error!("GPU initialization failed: {e}");
                self.init_failure = Some(e.into());
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("quit requested");
                event_loop.exit();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                if key == KeyCode::Escape {
                    tracing::info!("quit requested");
                    event_loop.exit();
                } else if let Some(command) = map_key(key) {
                    // One discrete command per delivered press edge.
                    self.state.camera.apply(command);
                }
            }
            WindowEvent::RedrawRequested => {
                self.frame(event_loop);
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("gravwell starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new();
    event_loop.run_app(&mut app)?;
    app.into_result()?;

    tracing::info!("gravwell stopped cleanly");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wasd_maps_to_camera_commands() {
        assert_eq!(map_key(KeyCode::KeyW), Some(CameraCommand::MoveForward));
        assert_eq!(map_key(KeyCode::KeyS), Some(CameraCommand::MoveBackward));
        assert_eq!(map_key(KeyCode::KeyA), Some(CameraCommand::StrafeLeft));
        assert_eq!(map_key(KeyCode::KeyD), Some(CameraCommand::StrafeRight));
    }

    #[test]
    fn other_keys_are_silently_ignored() {
        assert_eq!(map_key(KeyCode::KeyQ), None);
        assert_eq!(map_key(KeyCode::Space), None);
        assert_eq!(map_key(KeyCode::ArrowUp), None);
        assert_eq!(map_key(KeyCode::Escape), None);
    }

    #[test]
    fn frame_budget_targets_sixty_fps() {
        let state = AppState::new();
        let budget = state.frame_budget.as_secs_f64();
        assert!((budget - 1.0 / 60.0).abs() < 1e-9);
    }

    #[test]
    fn recorded_init_failure_exits_nonzero() {
        // Any failed bring-up step, window creation included, must surface
        // through the run outcome rather than a silent clean exit.
        let mut app = App::new();
        app.init_failure = Some(anyhow::anyhow!("no display"));
        assert!(app.into_result().is_err());
    }

    #[test]
    fn clean_quit_exits_zero() {
        assert!(App::new().into_result().is_ok());
    }

    #[test]
    fn commands_reach_the_camera() {
        let mut state = AppState::new();
        let start = state.camera.position;
        for key in [KeyCode::KeyW, KeyCode::KeyA] {
            if let Some(cmd) = map_key(key) {
                state.camera.apply(cmd);
            }
        }
        assert_ne!(state.camera.position, start);
    }
}
