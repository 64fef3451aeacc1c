use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

pub mod camera_control;

//
// ──────────────────────────────────────────────────────────────
//   Per-frame input accumulator
//
//   Collects winit window events between frames; the deltas are
//   consumed once per frame by camera_control and then cleared
//   with end_frame(). Key state is level-triggered (held flags),
//   mouse and scroll are edge-triggered (per-frame deltas).
// ──────────────────────────────────────────────────────────────
//

pub struct InputState
{
  pub forward_held: bool,
  pub backward_held: bool,
  pub left_held: bool,
  pub right_held: bool,

  pub mouse_dx: f32,
  pub mouse_dy: f32,
  // None until the first cursor report — avoids a huge fake delta
  // on the first movement after window creation
  last_cursor: Option<(f32, f32)>,

  pub look_held: bool,

  pub scroll: f32,
}

impl InputState
{
  pub fn new() -> Self
  {
    Self {
      forward_held: false,
      backward_held: false,
      left_held: false,
      right_held: false,

      mouse_dx: 0.0,
      mouse_dy: 0.0,
      last_cursor: None,

      look_held: false,

      scroll: 0.0,
    }
  }

  pub fn handle_event(&mut self, event: &WindowEvent)
  {
    match event
    {
      WindowEvent::CursorMoved { position, .. } =>
      {
        let x = position.x as f32;
        let y = position.y as f32;

        if let Some((last_x, last_y)) = self.last_cursor
        {
          self.mouse_dx += x - last_x;
          self.mouse_dy += y - last_y;
        }

        self.last_cursor = Some((x, y));
      }

      WindowEvent::MouseInput { state, button, .. } =>
      {
        if *button == MouseButton::Right
        {
          self.look_held = *state == ElementState::Pressed;
        }
      }

      WindowEvent::MouseWheel { delta, .. } => match delta
      {
        MouseScrollDelta::LineDelta(_, y) => self.scroll += *y,
        MouseScrollDelta::PixelDelta(p) => self.scroll += p.y as f32,
      },

      WindowEvent::KeyboardInput { event, .. } =>
      {
        let pressed = event.state == ElementState::Pressed;

        match event.physical_key
        {
          PhysicalKey::Code(KeyCode::KeyW) => self.forward_held = pressed,
          PhysicalKey::Code(KeyCode::KeyS) => self.backward_held = pressed,
          PhysicalKey::Code(KeyCode::KeyA) => self.left_held = pressed,
          PhysicalKey::Code(KeyCode::KeyD) => self.right_held = pressed,

          _ =>
          {}
        }
      }

      _ =>
      {}
    }
  }

  pub fn end_frame(&mut self)
  {
    self.mouse_dx = 0.0;
    self.mouse_dy = 0.0;
    self.scroll = 0.0;
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn end_frame_clears_deltas_but_not_held_keys()
  {
    let mut input = InputState::new();
    input.forward_held = true;
    input.mouse_dx = 4.0;
    input.mouse_dy = -2.0;
    input.scroll = 1.0;

    input.end_frame();

    assert!(input.forward_held);
    assert_eq!(input.mouse_dx, 0.0);
    assert_eq!(input.mouse_dy, 0.0);
    assert_eq!(input.scroll, 0.0);
  }
}
