use crate::camera::{Camera, MoveDirection};
use crate::input::InputState;

//
// ──────────────────────────────────────────────────────────────
//   Scroll tuning
// ──────────────────────────────────────────────────────────────
//

const ZOOM_DEGREES_PER_LINE: f32 = 1.0; // fov change per scroll line

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

/// Apply one frame of accumulated input to the camera. Called once per
/// frame, before the view matrix is read.
pub fn apply_input_to_camera(input: &InputState, camera: &mut Camera, dt: f32)
{
  apply_movement(input, camera, dt);
  apply_look(input, camera);
  apply_zoom(input, camera);
}

//
// ──────────────────────────────────────────────────────────────
//   Input handlers
// ──────────────────────────────────────────────────────────────
//

fn apply_movement(input: &InputState, camera: &mut Camera, dt: f32)
{
  // Each held key moves full speed along its own axis; opposite keys
  // cancel and diagonals stack (no normalisation, matching per-key
  // polling behaviour).
  if input.forward_held
  {
    camera.advance(MoveDirection::Forward, dt);
  }
  if input.backward_held
  {
    camera.advance(MoveDirection::Backward, dt);
  }
  if input.left_held
  {
    camera.advance(MoveDirection::Left, dt);
  }
  if input.right_held
  {
    camera.advance(MoveDirection::Right, dt);
  }
}

fn apply_look(input: &InputState, camera: &mut Camera)
{
  if !input.look_held
  {
    return;
  }

  if input.mouse_dx == 0.0 && input.mouse_dy == 0.0
  {
    return;
  }

  // Screen y grows downward; the camera wants positive = tilt up
  camera.look(input.mouse_dx, -input.mouse_dy, true);
}

fn apply_zoom(input: &InputState, camera: &mut Camera)
{
  if input.scroll == 0.0
  {
    return;
  }

  // Scroll up (positive) narrows the fov — zooms in
  camera.zoom_by(input.scroll * ZOOM_DEGREES_PER_LINE);
}

//
// ──────────────────────────────────────────────────────────────
//   Tests
// ──────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests
{
  use super::*;
  use glam::Vec3;

  fn camera() -> Camera
  {
    Camera::new(Vec3::ZERO, 1.0)
  }

  #[test]
  fn held_keys_move_their_own_axes()
  {
    let mut cam = camera();
    cam.speed = 1.0;

    let mut input = InputState::new();
    input.forward_held = true;
    input.right_held = true;

    apply_input_to_camera(&input, &mut cam, 1.0);

    // forward at yaw −90° is −Z, right is +X — both at full speed
    assert!((cam.position.z - -1.0).abs() < 1e-5);
    assert!((cam.position.x - 1.0).abs() < 1e-5);
  }

  #[test]
  fn opposite_keys_cancel()
  {
    let mut cam = camera();

    let mut input = InputState::new();
    input.forward_held = true;
    input.backward_held = true;

    apply_input_to_camera(&input, &mut cam, 0.5);
    assert!(cam.position.length() < 1e-5);
  }

  #[test]
  fn look_requires_the_button()
  {
    let mut cam = camera();
    let yaw_before = cam.yaw();

    let mut input = InputState::new();
    input.mouse_dx = 50.0;

    apply_input_to_camera(&input, &mut cam, 0.016);
    assert_eq!(cam.yaw(), yaw_before);

    input.look_held = true;
    apply_input_to_camera(&input, &mut cam, 0.016);
    assert!(cam.yaw() > yaw_before);
  }

  #[test]
  fn dragging_up_tilts_up()
  {
    let mut cam = camera();

    let mut input = InputState::new();
    input.look_held = true;
    input.mouse_dy = -40.0; // cursor moved towards the top of the screen

    apply_input_to_camera(&input, &mut cam, 0.016);
    assert!(cam.pitch() > 0.0);
  }

  #[test]
  fn scroll_zooms_in()
  {
    let mut cam = camera();
    let fov_before = cam.fov_deg();

    let mut input = InputState::new();
    input.scroll = 3.0;

    apply_input_to_camera(&input, &mut cam, 0.016);
    assert!(cam.fov_deg() < fov_before);
  }
}
