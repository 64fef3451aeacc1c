use egui_wgpu::{Renderer, RendererOptions, ScreenDescriptor};
use egui_winit::State;
use winit::window::Window;

use crate::camera::Camera;
use crate::scene::lighting::Stage;

//
// ──────────────────────────────────────────────────────────────
//   Gui plumbing: egui context + winit state + wgpu renderer,
//   drawn in its own pass after the 3D passes.
// ──────────────────────────────────────────────────────────────
//

pub struct GuiRenderer
{
  pub context: egui::Context,
  pub state: State,
  pub renderer: Renderer,
}

impl GuiRenderer
{
  pub fn new(device: &wgpu::Device, output_format: wgpu::TextureFormat, window: &Window) -> Self
  {
    let context = egui::Context::default();
    let state = State::new(
      context.clone(),
      egui::viewport::ViewportId::ROOT,
      window,
      Some(window.scale_factor() as f32),
      None,
      None,
    );

    let renderer = Renderer::new(
      device,
      output_format,
      RendererOptions {
        depth_stencil_format: None,
        msaa_samples: 1,
        predictable_texture_filtering: false,
        dithering: true,
      },
    );

    Self { context, state, renderer }
  }

  /// True while the pointer is over (or dragging) a panel — camera
  /// input is suppressed for those frames.
  pub fn wants_pointer(&self) -> bool
  {
    self.context.wants_pointer_input() || self.context.is_pointer_over_area()
  }

  pub fn render(
    &mut self,
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    encoder: &mut wgpu::CommandEncoder,
    window: &Window,
    view: &wgpu::TextureView,
    full_output: egui::FullOutput,
  )
  {
    let size = window.inner_size();
    let ppp = window.scale_factor() as f32;
    let screen_descriptor =
      ScreenDescriptor { size_in_pixels: [size.width, size.height], pixels_per_point: ppp };

    for (id, delta) in full_output.textures_delta.set
    {
      self.renderer.update_texture(device, queue, id, &delta);
    }

    let primitives = self.context.tessellate(full_output.shapes, ppp);
    self.renderer.update_buffers(device, queue, encoder, &primitives, &screen_descriptor);

    {
      let pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some("Egui Pass"),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
          view,
          resolve_target: None,
          ops: wgpu::Operations { load: wgpu::LoadOp::Load, store: wgpu::StoreOp::Store },
          depth_slice: None,
        })],
        ..Default::default()
      });

      // The pass drops at the end of this block, before `encoder` is
      // touched again — only the lifetime annotation is being erased.
      let mut pass = pass.forget_lifetime();

      self.renderer.render(&mut pass, &primitives, &screen_descriptor);
    }

    for id in full_output.textures_delta.free
    {
      self.renderer.free_texture(&id);
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Panel contents
// ──────────────────────────────────────────────────────────────
//

pub fn stage_panel(ctx: &egui::Context, stage: &mut Stage, camera: &mut Camera)
{
  egui::SidePanel::left("stage_panel").default_width(200.0).show(ctx, |ui| {
    ui.heading("Lighting stage");
    ui.separator();

    for candidate in Stage::ALL
    {
      ui.radio_value(stage, candidate, candidate.label());
    }

    ui.separator();
    ui.heading("Camera");

    ui.add(egui::Slider::new(&mut camera.speed, 0.5..=20.0).text("speed"));
    ui.add(egui::Slider::new(&mut camera.sensitivity, 0.01..=1.0).text("sensitivity"));

    ui.label(format!("fov {:.1}°  (scroll to zoom)", camera.fov_deg()));

    let p = camera.position;
    ui.label(format!("at ({:.2}, {:.2}, {:.2})", p.x, p.y, p.z));
    ui.label(format!("yaw {:.1}°  pitch {:.1}°", camera.yaw(), camera.pitch()));

    ui.separator();
    ui.label("WASD to move, right-drag to look");
  });
}
