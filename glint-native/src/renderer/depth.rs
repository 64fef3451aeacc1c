use wgpu::*;

// Shared by the pipelines and the depth attachment; keeping it in one
// place is what guarantees they agree.
pub const DEPTH_FORMAT: TextureFormat = TextureFormat::Depth32Float;

/// Depth attachment sized to the surface. Recreated on every resize,
/// so only the view is kept.
pub fn create_depth_view(device: &Device, config: &SurfaceConfiguration) -> TextureView
{
  let texture = device.create_texture(&TextureDescriptor {
    label: Some("Scene Depth"),
    size: Extent3d { width: config.width, height: config.height, depth_or_array_layers: 1 },
    mip_level_count: 1,
    sample_count: 1,
    dimension: TextureDimension::D2,
    format: DEPTH_FORMAT,
    usage: TextureUsages::RENDER_ATTACHMENT,
    view_formats: &[],
  });

  texture.create_view(&TextureViewDescriptor::default())
}
