use glam::{Mat4, Vec3};

//
// ──────────────────────────────────────────────────────────────
//   Camera (free-fly, Y-up right-hand rule)
//
//   Coordinate system:
//     X → right
//     Y → up
//     Z → towards the viewer
//
//   Orientation is stored as Euler angles in degrees:
//     yaw   = heading about the world up axis (−90° faces −Z)
//     pitch = tilt about the local right axis
//
//   The front/right/up basis is derived from the angles and is
//   recomputed at the end of every mutating call, so it can never
//   be observed stale or set independently of the angles.
// ──────────────────────────────────────────────────────────────
//

pub const DEFAULT_YAW: f32 = -90.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_SPEED: f32 = 2.5; // world units per second
pub const DEFAULT_SENSITIVITY: f32 = 0.1; // degrees per pixel
pub const DEFAULT_FOV: f32 = 45.0;

const PITCH_LIMIT: f32 = 89.0 - 0.01; // just inside the gimbal poles
const FOV_MIN: f32 = 1.0;
const FOV_MAX: f32 = 45.0;

//
// ──────────────────────────────────────────────────────────────
//   Types
// ──────────────────────────────────────────────────────────────
//

/// One axis of keyboard movement. Holding two keys composes
/// additively — each key contributes full speed along its own axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection
{
  Forward,
  Backward,
  Left,
  Right,
}

pub struct Camera
{
  pub position: Vec3,
  world_up: Vec3,

  yaw: f32,
  pitch: f32,

  // Derived basis — owned by update_basis(), read-only elsewhere
  front: Vec3,
  right: Vec3,
  up: Vec3,

  pub speed: f32,
  pub sensitivity: f32,

  fov_deg: f32,

  pub aspect: f32,
  pub znear: f32,
  pub zfar: f32,
}

//
// ──────────────────────────────────────────────────────────────
//   Public API
// ──────────────────────────────────────────────────────────────
//

impl Camera
{
  pub fn new(position: Vec3, aspect: f32) -> Self
  {
    Self::with_orientation(position, Vec3::Y, DEFAULT_YAW, DEFAULT_PITCH, aspect)
  }

  pub fn with_orientation(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32, aspect: f32)
    -> Self
  {
    let mut cam = Self {
      position,
      world_up,
      yaw,
      pitch,
      front: -Vec3::Z,
      right: Vec3::X,
      up: Vec3::Y,
      speed: DEFAULT_SPEED,
      sensitivity: DEFAULT_SENSITIVITY,
      fov_deg: DEFAULT_FOV,
      aspect,
      znear: 0.1,
      zfar: 100.0,
    };
    cam.update_basis();
    cam
  }

  pub fn yaw(&self) -> f32
  {
    self.yaw
  }

  pub fn pitch(&self) -> f32
  {
    self.pitch
  }

  pub fn fov_deg(&self) -> f32
  {
    self.fov_deg
  }

  pub fn front(&self) -> Vec3
  {
    self.front
  }

  pub fn right(&self) -> Vec3
  {
    self.right
  }

  pub fn up(&self) -> Vec3
  {
    self.up
  }

  pub fn set_aspect(&mut self, aspect: f32)
  {
    self.aspect = aspect;
  }

  /// World → camera-space transform: look from `position` towards
  /// `position + front`. Pure — identical output until the next mutation.
  pub fn view_matrix(&self) -> Mat4
  {
    Mat4::look_at_rh(self.position, self.position + self.front, self.up)
  }

  pub fn projection_matrix(&self) -> Mat4
  {
    Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.znear, self.zfar)
  }

  pub fn build_view_proj(&self) -> Mat4
  {
    self.projection_matrix() * self.view_matrix()
  }

  /// Move along one axis for `dt` seconds. `dt` must be non-negative;
  /// zero is a no-op. Multiple calls in a frame stack, so holding
  /// forward + right moves faster than either alone.
  pub fn advance(&mut self, direction: MoveDirection, dt: f32)
  {
    let velocity = self.speed * dt;

    match direction
    {
      MoveDirection::Forward => self.position += self.front * velocity,
      MoveDirection::Backward => self.position -= self.front * velocity,
      MoveDirection::Left => self.position -= self.right * velocity,
      MoveDirection::Right => self.position += self.right * velocity,
    }
  }

  /// Turn by raw pointer deltas in pixels. Sensitivity is applied here,
  /// so callers pass device deltas unscaled. Positive `dy` tilts the
  /// view upward.
  pub fn look(&mut self, dx: f32, dy: f32, constrain_pitch: bool)
  {
    self.yaw += dx * self.sensitivity;
    self.pitch += dy * self.sensitivity;

    if constrain_pitch
    {
      self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    self.update_basis();
  }

  /// Narrow or widen the field of view. Scrolling up (positive delta)
  /// zooms in.
  pub fn zoom_by(&mut self, delta: f32)
  {
    self.fov_deg = (self.fov_deg - delta).clamp(FOV_MIN, FOV_MAX);
  }

  fn update_basis(&mut self)
  {
    self.front = front_from_angles(self.yaw, self.pitch);
    self.right = self.front.cross(self.world_up).normalize();
    self.up = self.right.cross(self.front).normalize();
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Angle → direction helper
// ──────────────────────────────────────────────────────────────
//

fn front_from_angles(yaw_deg: f32, pitch_deg: f32) -> Vec3
{
  let yaw = yaw_deg.to_radians();
  let pitch = pitch_deg.to_radians();

  Vec3::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
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

  const EPS: f32 = 1e-4;

  fn assert_vec_near(a: Vec3, b: Vec3)
  {
    assert!((a - b).length() < EPS, "expected {b:?}, got {a:?}");
  }

  fn basis_is_orthonormal(cam: &Camera) -> bool
  {
    let unit = (cam.front().length() - 1.0).abs() < EPS
      && (cam.right().length() - 1.0).abs() < EPS
      && (cam.up().length() - 1.0).abs() < EPS;

    let ortho = cam.front().dot(cam.right()).abs() < EPS
      && cam.front().dot(cam.up()).abs() < EPS
      && cam.right().dot(cam.up()).abs() < EPS;

    // right-handed: right × up must point opposite the view direction
    let handed = (cam.right().cross(cam.up()) + cam.front()).length() < EPS;

    unit && ortho && handed
  }

  #[test]
  fn default_orientation_faces_negative_z()
  {
    let cam = Camera::new(Vec3::ZERO, 1.0);

    assert_vec_near(cam.front(), -Vec3::Z);
    assert_vec_near(cam.right(), Vec3::X);
    assert_vec_near(cam.up(), Vec3::Y);
  }

  #[test]
  fn basis_stays_orthonormal_across_the_angle_range()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);

    for step in 0..200
    {
      cam.look((step % 17) as f32 * 37.0 - 300.0, (step % 11) as f32 * 23.0 - 115.0, true);
      assert!(basis_is_orthonormal(&cam), "degenerate basis after step {step}");
    }
  }

  #[test]
  fn pitch_never_reaches_the_poles()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);

    for _ in 0..50
    {
      cam.look(0.0, 10_000.0, true);
      assert!(cam.pitch() < 89.0);
    }

    for _ in 0..100
    {
      cam.look(0.0, -10_000.0, true);
      assert!(cam.pitch() > -89.0);
    }
  }

  #[test]
  fn pitch_clamps_instead_of_overshooting()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);
    cam.sensitivity = 1.0;

    cam.look(0.0, 88.0, true);
    assert!((cam.pitch() - 88.0).abs() < EPS);

    // 88 + 5 would be 93 — must land just under 89 instead
    cam.look(0.0, 5.0, true);
    assert!(cam.pitch() < 89.0);
    assert!(cam.pitch() > 88.5);
  }

  #[test]
  fn unconstrained_look_skips_the_clamp()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);
    cam.sensitivity = 1.0;

    cam.look(0.0, 120.0, false);
    assert!((cam.pitch() - 120.0).abs() < EPS);
  }

  #[test]
  fn yaw_rotation_swings_the_front_vector()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);
    cam.sensitivity = 1.0;

    // −90° + 90° = 0° heading → front along +X
    cam.look(90.0, 0.0, true);
    assert!((cam.yaw() - 0.0).abs() < EPS);
    assert_vec_near(cam.front(), Vec3::X);
  }

  #[test]
  fn forward_move_covers_speed_times_time()
  {
    let mut cam = Camera::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
    cam.speed = 2.5;

    cam.advance(MoveDirection::Forward, 1.0);
    assert_vec_near(cam.position, Vec3::new(0.0, 0.0, 0.5));
  }

  #[test]
  fn zero_dt_is_a_no_op()
  {
    let mut cam = Camera::new(Vec3::new(1.0, 2.0, 3.0), 1.0);

    cam.advance(MoveDirection::Backward, 0.0);
    assert_vec_near(cam.position, Vec3::new(1.0, 2.0, 3.0));
  }

  #[test]
  fn diagonal_movement_is_not_normalised()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);
    cam.speed = 2.0;

    // Both axes get full speed — diagonal covers √2 × the single-axis
    // distance. Deliberate: matches independent per-key polling.
    cam.advance(MoveDirection::Forward, 1.0);
    cam.advance(MoveDirection::Right, 1.0);

    assert!((cam.position.length() - 2.0 * 2.0_f32.sqrt()).abs() < EPS);
  }

  #[test]
  fn fov_clamps_at_both_ends()
  {
    let mut cam = Camera::new(Vec3::ZERO, 1.0);
    assert!((cam.fov_deg() - 45.0).abs() < EPS);

    cam.zoom_by(10.0);
    assert!((cam.fov_deg() - 35.0).abs() < EPS);

    // a single huge delta must not escape the bounds either
    cam.zoom_by(100.0);
    assert!((cam.fov_deg() - 1.0).abs() < EPS);

    cam.zoom_by(-500.0);
    assert!((cam.fov_deg() - 45.0).abs() < EPS);
  }

  #[test]
  fn view_matrix_is_pure()
  {
    let mut cam = Camera::new(Vec3::new(0.0, 1.0, 5.0), 1.5);
    cam.look(33.0, -12.0, true);

    let a = cam.view_matrix();
    let b = cam.view_matrix();
    assert_eq!(a.to_cols_array(), b.to_cols_array());
  }

  #[test]
  fn view_matrix_maps_world_into_camera_space()
  {
    let cam = Camera::new(Vec3::new(0.0, 0.0, 3.0), 1.0);
    let view = cam.view_matrix();

    // the eye itself lands at the camera-space origin
    let eye = view.transform_point3(cam.position);
    assert!(eye.length() < EPS);

    // a point one unit ahead lands on the camera-space −Z axis
    let ahead = view.transform_point3(cam.position + cam.front());
    assert_vec_near(ahead, -Vec3::Z);
  }
}
