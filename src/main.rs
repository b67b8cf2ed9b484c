use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info, warn};
use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::*,
    event_loop::{ActiveEventLoop, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window as WinitWindow, WindowId},
};

use attitude_viewer::camera::CameraPose;
use attitude_viewer::cli::Cli;
use attitude_viewer::core::{CameraMode, Clock, WinitController};
use attitude_viewer::hud::HudText;
use attitude_viewer::loaders::load_samples;
use attitude_viewer::renderer::Renderer;
use attitude_viewer::scene::scene_lines;
use attitude_viewer::session::{Session, ViewerAction};
use attitude_viewer::ui::{draw_panels, PanelView};
use attitude_viewer::window::Window;

// === Constants ===

const FPS_UPDATE_INTERVAL: f32 = 1.0;
const INITIAL_WINDOW_WIDTH: u32 = 1280;
const INITIAL_WINDOW_HEIGHT: u32 = 720;

struct App {
    cli: Cli,
    window: Option<Window>,
    renderer: Option<Renderer>,
    session: Session,
    hud: HudText,
    input: WinitController,
    clock: Clock,
    source: Option<String>,
    frame_count: u32,
    fps: f32,
    fps_update_timer: f32,
}

impl App {
    fn new(cli: Cli) -> Self {
        let mut session = Session::new(CameraPose::default(), cli.move_speed);
        let mut hud = HudText::new();
        session.apply(ViewerAction::SetSpeed(cli.speed), &mut hud);

        let mut app = Self {
            cli,
            window: None,
            renderer: None,
            session,
            hud,
            input: WinitController::new(),
            clock: Clock::new(),
            source: None,
            frame_count: 0,
            fps: 0.0,
            fps_update_timer: 0.0,
        };
        app.load_startup_data();
        app
    }

    /// A missing or broken file leaves the viewer running with no data
    fn load_startup_data(&mut self) {
        let samples = match &self.cli.data {
            Some(path) => match load_samples(path) {
                Ok(set) => {
                    self.source = Some(path.display().to_string());
                    set.into_series(self.cli.series)
                }
                Err(e) => {
                    warn!("{:#}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        self.session.load(samples, &mut self.hud);
        if self.cli.autoplay {
            self.session
                .apply(ViewerAction::SetPlaying(true), &mut self.hud);
        }
    }

    fn update_fps(&mut self, delta: f32) {
        self.frame_count += 1;
        self.fps_update_timer += delta;

        if self.fps_update_timer >= FPS_UPDATE_INTERVAL {
            self.fps = self.frame_count as f32 / self.fps_update_timer;
            info!("FPS: {:.1}", self.fps);
            self.frame_count = 0;
            self.fps_update_timer = 0.0;
        }
    }

    fn apply(&mut self, action: ViewerAction) {
        self.session.apply(action, &mut self.hud);
        self.execute_host_requests();
    }

    /// Run pointer requests against the window until the session stops asking
    fn execute_host_requests(&mut self) {
        let Some(window) = &self.window else {
            return;
        };
        loop {
            let requests = self.session.take_host_requests();
            if requests.is_empty() {
                break;
            }
            for request in requests {
                if let Some(granted) = window.apply_host_request(request) {
                    self.session.capture_resolved(granted);
                }
            }
        }
    }

    /// The host has already taken the pointer back; make sure the cursor follows
    fn pointer_revoked(&mut self, action: ViewerAction) {
        let was_free = self.session.mode() == CameraMode::FreeFly;
        self.apply(action);
        if was_free && self.session.mode() == CameraMode::Orbit {
            if let Some(window) = &self.window {
                window.release_pointer();
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let delta = self.clock.tick();
        self.update_fps(delta);

        let drag = self.input.take_drag();
        self.session.apply_drag(drag);
        self.session.frame(delta, &mut self.hud);

        if self.cli.no_ui && self.hud.take_changed() {
            info!("{}", self.hud.summary());
        }

        let (Some(window), Some(renderer)) = (&self.window, &mut self.renderer) else {
            return;
        };

        let mut actions = Vec::new();
        let view = PanelView {
            session: &self.session,
            hud: &self.hud,
            series: self.cli.series,
            source: self.source.as_deref(),
            fps: self.fps,
        };
        let show_ui = !self.cli.no_ui;
        let result = renderer.render(
            window.inner(),
            self.session.camera(),
            self.session.proxy_transform(),
            |ctx| {
                if show_ui {
                    draw_panels(ctx, &view, &mut actions);
                }
            },
        );

        match result {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => renderer.reconfigure(),
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Err(e) => warn!("render error: {:?}", e),
        }

        for action in actions {
            self.apply(action);
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let window = match event_loop.create_window(
            WinitWindow::default_attributes()
                .with_title("Attitude Viewer")
                .with_inner_size(winit::dpi::LogicalSize::new(
                    INITIAL_WINDOW_WIDTH,
                    INITIAL_WINDOW_HEIGHT,
                )),
        ) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let proxy = self.cli.model.vertices();
        let renderer = match pollster::block_on(Renderer::new(window.clone(), &proxy, &scene_lines())) {
            Ok(r) => r,
            Err(e) => {
                error!("Failed to initialize renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        };

        self.window = Some(Window::new(window));
        self.renderer = Some(renderer);
        self.clock.reset();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        // Let egui handle the event first
        if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
            if renderer.handle_event(window.inner(), &event) {
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        state: ElementState::Pressed,
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        repeat: false,
                        ..
                    },
                ..
            } => {
                if self.session.mode() == CameraMode::FreeFly {
                    self.pointer_revoked(ViewerAction::CaptureLost);
                } else {
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(size);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            event => {
                if let Some(action) = self.input.process_event(&event) {
                    match action {
                        ViewerAction::FocusLost => self.pointer_revoked(action),
                        action => self.apply(action),
                    }
                }
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let DeviceEvent::MouseMotion { delta: (dx, dy) } = event {
            self.session.mouse_motion(dx as f32, dy as f32);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(cli);

    info!("Controls: F free camera, WASD/Space/Shift move, R reset view, P play, arrows scrub, Escape release/quit");
    event_loop.run_app(&mut app).context("Event loop terminated with an error")?;

    Ok(())
}
