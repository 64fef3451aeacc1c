use glam::Mat4;

use super::flycam::Camera;

//
// ──────────────────────────────────────────────────────────────
//   Camera Uniform (GPU side)
//
//   WGSL layout (crate.wgsl, lamp.wgsl):
//     view_proj : mat4x4<f32>   → 64 bytes
//     view_pos  : vec4<f32>     → 16 bytes (w unused)
//   Total: 80 bytes
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform
{
  pub view_proj: [[f32; 4]; 4], // 64 bytes
  pub view_pos: [f32; 4],       // 16 bytes
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<CameraUniform>() == 80);

impl CameraUniform
{
  pub fn from_camera(camera: &Camera) -> Self
  {
    let mat: Mat4 = camera.build_view_proj();
    let p = camera.position;

    Self { view_proj: mat.to_cols_array_2d(), view_pos: [p.x, p.y, p.z, 1.0] }
  }
}

#[cfg(test)]
mod tests
{
  use super::*;
  use glam::Vec3;

  #[test]
  fn uniform_carries_the_eye_position()
  {
    let cam = Camera::new(Vec3::new(1.0, 2.0, 3.0), 1.0);
    let uniform = CameraUniform::from_camera(&cam);

    assert_eq!(&uniform.view_pos[..3], &[1.0, 2.0, 3.0]);
  }
}
