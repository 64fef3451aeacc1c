use glam::{Mat4, Vec3};

use crate::scene;

//
// ──────────────────────────────────────────────────────────────
//   Instance streams
//
//   The crates and lamp markers change transform every frame, so
//   their model matrices ride in per-instance vertex buffers that
//   are rewritten each frame (fixed upper bound, like the debug
//   line buffer this replaces). The matrix occupies four vec4
//   attribute slots; lamps append a flat colour.
// ──────────────────────────────────────────────────────────────
//

pub const MAX_CRATES: u64 = 10;
pub const MAX_LAMPS: u64 = 4;

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CrateInstance
{
  pub model: [[f32; 4]; 4], // 64 bytes
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LampInstance
{
  pub model: [[f32; 4]; 4], // 64 bytes
  pub colour: [f32; 4],     // 16 bytes
}

const _: () = assert!(std::mem::size_of::<CrateInstance>() == 64);
const _: () = assert!(std::mem::size_of::<LampInstance>() == 80);

impl CrateInstance
{
  pub fn from_model(model: Mat4) -> Self
  {
    Self { model: model.to_cols_array_2d() }
  }
}

impl LampInstance
{
  pub fn new(position: Vec3, colour: Vec3) -> Self
  {
    Self {
      model: scene::lamp_model(position).to_cols_array_2d(),
      colour: [colour.x, colour.y, colour.z, 1.0],
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   GPU buffers
// ──────────────────────────────────────────────────────────────
//

pub struct InstanceBuffers
{
  pub crate_buffer: wgpu::Buffer,
  pub crate_count: u32,
  pub lamp_buffer: wgpu::Buffer,
  pub lamp_count: u32,
}

impl InstanceBuffers
{
  pub fn create(device: &wgpu::Device) -> Self
  {
    let crate_buffer = device.create_buffer(&wgpu::BufferDescriptor {
      label: Some("Crate Instance Buffer"),
      size: MAX_CRATES * std::mem::size_of::<CrateInstance>() as u64,
      usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
      mapped_at_creation: false,
    });

    let lamp_buffer = device.create_buffer(&wgpu::BufferDescriptor {
      label: Some("Lamp Instance Buffer"),
      size: MAX_LAMPS * std::mem::size_of::<LampInstance>() as u64,
      usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
      mapped_at_creation: false,
    });

    Self { crate_buffer, crate_count: 0, lamp_buffer, lamp_count: 0 }
  }

  pub fn write_crates(&mut self, queue: &wgpu::Queue, models: &[Mat4])
  {
    let instances: Vec<CrateInstance> =
      models.iter().map(|&model| CrateInstance::from_model(model)).collect();

    self.crate_count = instances.len() as u32;
    queue.write_buffer(&self.crate_buffer, 0, bytemuck::cast_slice(&instances));
  }

  pub fn write_lamps(&mut self, queue: &wgpu::Queue, lamps: &[(Vec3, Vec3)])
  {
    let instances: Vec<LampInstance> =
      lamps.iter().map(|&(position, colour)| LampInstance::new(position, colour)).collect();

    self.lamp_count = instances.len() as u32;
    queue.write_buffer(&self.lamp_buffer, 0, bytemuck::cast_slice(&instances));
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Vertex layouts
// ──────────────────────────────────────────────────────────────
//

pub fn crate_instance_layout() -> wgpu::VertexBufferLayout<'static>
{
  const ATTRIBUTES: [wgpu::VertexAttribute; 4] = wgpu::vertex_attr_array![
    3 => Float32x4,  // model column 0
    4 => Float32x4,  // model column 1
    5 => Float32x4,  // model column 2
    6 => Float32x4,  // model column 3
  ];
  wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<CrateInstance>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &ATTRIBUTES,
  }
}

pub fn lamp_instance_layout() -> wgpu::VertexBufferLayout<'static>
{
  const ATTRIBUTES: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
    3 => Float32x4,  // model column 0
    4 => Float32x4,  // model column 1
    5 => Float32x4,  // model column 2
    6 => Float32x4,  // model column 3
    7 => Float32x4,  // colour
  ];
  wgpu::VertexBufferLayout {
    array_stride: std::mem::size_of::<LampInstance>() as u64,
    step_mode: wgpu::VertexStepMode::Instance,
    attributes: &ATTRIBUTES,
  }
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

  #[test]
  fn instance_matrices_are_column_major()
  {
    let model = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let instance = CrateInstance::from_model(model);

    // translation lives in the fourth column
    assert_eq!(instance.model[3][0], 1.0);
    assert_eq!(instance.model[3][1], 2.0);
    assert_eq!(instance.model[3][2], 3.0);
  }

  #[test]
  fn scene_fits_the_fixed_buffers()
  {
    use crate::scene::lighting::{lamps, Stage};

    for stage in Stage::ALL
    {
      assert!(scene::crate_models(stage, 0.0).len() as u64 <= MAX_CRATES);
      assert!(lamps(stage, 0.0).len() as u64 <= MAX_LAMPS);
    }
  }
}
