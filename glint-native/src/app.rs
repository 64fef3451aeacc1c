use std::sync::Arc;

use winit::{
  application::ApplicationHandler,
  event::WindowEvent,
  event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
  keyboard::{Key, NamedKey},
  window::{Window, WindowId},
};

use glam::Vec3;

use crate::camera::Camera;
use crate::clock::FrameClock;
use crate::config::Config;
use crate::input::camera_control::apply_input_to_camera;
use crate::input::InputState;
use crate::renderer::gui::stage_panel;
use crate::renderer::{GuiRenderer, Renderer};
use crate::scene::lighting::{self, Stage};

pub fn run() -> anyhow::Result<()>
{
  let event_loop = EventLoop::new()?;
  let mut app = GlintApp::new();

  event_loop.run_app(&mut app)?;
  Ok(())
}

struct GlintApp
{
  window: Option<Arc<Window>>,
  renderer: Option<Renderer>,
  gui: Option<GuiRenderer>,

  // The camera is owned here and handed down by reference — input
  // handling and rendering never reach for globals.
  camera: Camera,
  input: InputState,
  clock: FrameClock,

  stage: Stage,
  elapsed: f32,

  config: Config,
}

impl GlintApp
{
  fn new() -> Self
  {
    let config = Config::load();

    let aspect = config.window.width as f32 / config.window.height as f32;
    let mut camera = Camera::new(Vec3::from_array(config.camera.position), aspect);
    camera.speed = config.camera.speed;
    camera.sensitivity = config.camera.sensitivity;

    Self {
      window: None,
      renderer: None,
      gui: None,
      camera,
      input: InputState::new(),
      clock: FrameClock::new(),
      stage: Stage::MultiLight,
      elapsed: 0.0,
      config,
    }
  }

  fn init_window_and_renderer(&mut self, event_loop: &ActiveEventLoop)
  {
    if self.window.is_some()
    {
      return;
    }

    let attrs = Window::default_attributes().with_title("Glint — Lighting Lab").with_inner_size(
      winit::dpi::LogicalSize::new(self.config.window.width as f64, self.config.window.height as f64),
    );
    let window = Arc::new(event_loop.create_window(attrs).unwrap());

    {
      let size = window.inner_size();
      self.camera.set_aspect(size.width as f32 / size.height as f32);
    }

    let renderer = pollster::block_on(Renderer::new(window.clone(), &self.config));
    let gui = GuiRenderer::new(renderer.device(), renderer.surface_format(), &window);

    self.window = Some(window);
    self.renderer = Some(renderer);
    self.gui = Some(gui);
  }

  fn handle_window_event(&mut self, elwt: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    let window = match &self.window
    {
      Some(w) if w.id() == window_id => w.clone(),
      _ => return,
    };

    // The panel gets first refusal on every event
    let consumed = match &mut self.gui
    {
      Some(gui) => gui.state.on_window_event(&window, &event).consumed,
      None => false,
    };

    match &event
    {
      WindowEvent::CloseRequested =>
      {
        elwt.exit();
        return;
      }

      WindowEvent::KeyboardInput { event: key_event, .. }
        if key_event.logical_key == Key::Named(NamedKey::Escape) =>
      {
        elwt.exit();
        return;
      }

      WindowEvent::Resized(size) =>
      {
        if size.width == 0 || size.height == 0
        {
          return;
        }

        if let Some(renderer) = &mut self.renderer
        {
          renderer.resize(size.width, size.height);
        }

        self.camera.set_aspect(size.width as f32 / size.height as f32);
        window.request_redraw();
      }

      _ =>
      {}
    }

    if !consumed
    {
      self.input.handle_event(&event);
    }
  }

  fn frame(&mut self)
  {
    let Self { window, renderer, gui, camera, input, clock, stage, elapsed, .. } = self;

    let (Some(window), Some(renderer), Some(gui)) =
      (window.as_ref(), renderer.as_mut(), gui.as_mut())
    else
    {
      return;
    };

    let dt = clock.tick();
    *elapsed += dt;

    if !gui.wants_pointer()
    {
      apply_input_to_camera(input, camera, dt);
    }

    let raw_input = gui.state.take_egui_input(window);
    let mut gui_output = gui.context.run(raw_input, |ctx| stage_panel(ctx, stage, camera));
    gui.state.handle_platform_output(window, std::mem::take(&mut gui_output.platform_output));

    let rig = lighting::rig(*stage, *elapsed);
    renderer.render(window, gui, gui_output, camera, *stage, &rig, *elapsed);

    window.request_redraw();
    input.end_frame();
  }
}

impl ApplicationHandler for GlintApp
{
  fn resumed(&mut self, event_loop: &ActiveEventLoop)
  {
    event_loop.set_control_flow(ControlFlow::Wait);
    self.init_window_and_renderer(event_loop);
  }

  fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent)
  {
    self.handle_window_event(event_loop, window_id, event);
  }

  fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop)
  {
    self.frame();
  }
}
