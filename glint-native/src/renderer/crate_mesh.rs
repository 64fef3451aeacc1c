use wgpu::util::DeviceExt;

//
// ──────────────────────────────────────────────────────────────
//   Crate mesh
//
//   The unit crate every stage draws: 36 vertices, six faces of
//   two triangles, non-indexed. Each vertex carries position,
//   outward face normal and texture coordinates.
// ──────────────────────────────────────────────────────────────
//

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CrateVertex
{
  pub position: [f32; 3],
  pub normal: [f32; 3],
  pub uv: [f32; 2],
}

pub const VERTEX_COUNT: u32 = 36;

const fn v(position: [f32; 3], normal: [f32; 3], uv: [f32; 2]) -> CrateVertex
{
  CrateVertex { position, normal, uv }
}

#[rustfmt::skip]
pub const CRATE_VERTICES: [CrateVertex; 36] = [
  // back face (−Z)
  v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
  v([ 0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 0.0]),
  v([ 0.5,  0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
  v([ 0.5,  0.5, -0.5], [0.0, 0.0, -1.0], [1.0, 1.0]),
  v([-0.5,  0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 1.0]),
  v([-0.5, -0.5, -0.5], [0.0, 0.0, -1.0], [0.0, 0.0]),
  // front face (+Z)
  v([-0.5, -0.5,  0.5], [0.0, 0.0,  1.0], [0.0, 0.0]),
  v([ 0.5, -0.5,  0.5], [0.0, 0.0,  1.0], [1.0, 0.0]),
  v([ 0.5,  0.5,  0.5], [0.0, 0.0,  1.0], [1.0, 1.0]),
  v([ 0.5,  0.5,  0.5], [0.0, 0.0,  1.0], [1.0, 1.0]),
  v([-0.5,  0.5,  0.5], [0.0, 0.0,  1.0], [0.0, 1.0]),
  v([-0.5, -0.5,  0.5], [0.0, 0.0,  1.0], [0.0, 0.0]),
  // left face (−X)
  v([-0.5,  0.5,  0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
  v([-0.5,  0.5, -0.5], [-1.0, 0.0, 0.0], [1.0, 1.0]),
  v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
  v([-0.5, -0.5, -0.5], [-1.0, 0.0, 0.0], [0.0, 1.0]),
  v([-0.5, -0.5,  0.5], [-1.0, 0.0, 0.0], [0.0, 0.0]),
  v([-0.5,  0.5,  0.5], [-1.0, 0.0, 0.0], [1.0, 0.0]),
  // right face (+X)
  v([ 0.5,  0.5,  0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
  v([ 0.5,  0.5, -0.5], [1.0, 0.0, 0.0], [1.0, 1.0]),
  v([ 0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
  v([ 0.5, -0.5, -0.5], [1.0, 0.0, 0.0], [0.0, 1.0]),
  v([ 0.5, -0.5,  0.5], [1.0, 0.0, 0.0], [0.0, 0.0]),
  v([ 0.5,  0.5,  0.5], [1.0, 0.0, 0.0], [1.0, 0.0]),
  // bottom face (−Y)
  v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
  v([ 0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [1.0, 1.0]),
  v([ 0.5, -0.5,  0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
  v([ 0.5, -0.5,  0.5], [0.0, -1.0, 0.0], [1.0, 0.0]),
  v([-0.5, -0.5,  0.5], [0.0, -1.0, 0.0], [0.0, 0.0]),
  v([-0.5, -0.5, -0.5], [0.0, -1.0, 0.0], [0.0, 1.0]),
  // top face (+Y)
  v([-0.5,  0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
  v([ 0.5,  0.5, -0.5], [0.0, 1.0, 0.0], [1.0, 1.0]),
  v([ 0.5,  0.5,  0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
  v([ 0.5,  0.5,  0.5], [0.0, 1.0, 0.0], [1.0, 0.0]),
  v([-0.5,  0.5,  0.5], [0.0, 1.0, 0.0], [0.0, 0.0]),
  v([-0.5,  0.5, -0.5], [0.0, 1.0, 0.0], [0.0, 1.0]),
];

pub struct CrateMesh
{
  pub vertex_buffer: wgpu::Buffer,
  pub vertex_count: u32,
}

impl CrateMesh
{
  pub fn create(device: &wgpu::Device) -> Self
  {
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
      label: Some("Crate Vertex Buffer"),
      contents: bytemuck::cast_slice(&CRATE_VERTICES),
      usage: wgpu::BufferUsages::VERTEX,
    });

    Self { vertex_buffer, vertex_count: VERTEX_COUNT }
  }

  pub fn vertex_layout() -> wgpu::VertexBufferLayout<'static>
  {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
      0 => Float32x3,  // position
      1 => Float32x3,  // normal
      2 => Float32x2,  // uv
    ];
    wgpu::VertexBufferLayout {
      array_stride: std::mem::size_of::<CrateVertex>() as u64,
      step_mode: wgpu::VertexStepMode::Vertex,
      attributes: &ATTRIBUTES,
    }
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
  use glam::Vec3;

  #[test]
  fn mesh_has_two_triangles_per_face()
  {
    assert_eq!(CRATE_VERTICES.len() as u32, VERTEX_COUNT);
    assert_eq!(VERTEX_COUNT % 3, 0);
  }

  #[test]
  fn normals_are_unit_axis_vectors()
  {
    for vertex in CRATE_VERTICES
    {
      let n = Vec3::from_array(vertex.normal);
      assert!((n.length() - 1.0).abs() < 1e-6);
      // every crate face is axis-aligned
      assert_eq!(n.abs().max_element(), 1.0);
    }
  }

  #[test]
  fn normals_point_away_from_the_centre()
  {
    for vertex in CRATE_VERTICES
    {
      let p = Vec3::from_array(vertex.position);
      let n = Vec3::from_array(vertex.normal);
      assert!(p.dot(n) > 0.0, "inward-facing normal at {p:?}");
    }
  }

  #[test]
  fn uvs_stay_in_the_unit_square()
  {
    for vertex in CRATE_VERTICES
    {
      assert!((0.0..=1.0).contains(&vertex.uv[0]));
      assert!((0.0..=1.0).contains(&vertex.uv[1]));
    }
  }
}
