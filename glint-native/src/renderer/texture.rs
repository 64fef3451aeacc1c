use anyhow::Context;
use image::RgbaImage;

use crate::config::TextureConfig;

//
// ──────────────────────────────────────────────────────────────
//   Crate maps
//
//   Two textures ride one bind group: the diffuse map and the
//   specular map. Files are decoded with `image` and flipped
//   vertically (texture coordinates grow upward in the scene
//   data). A missing or broken file falls back to a generated
//   placeholder so every stage still renders from a clean
//   checkout.
// ──────────────────────────────────────────────────────────────
//

const FALLBACK_SIZE: u32 = 64;

pub struct TexturePack
{
  pub bind_group: wgpu::BindGroup,
  pub bind_group_layout: wgpu::BindGroupLayout,
}

impl TexturePack
{
  pub fn load(device: &wgpu::Device, queue: &wgpu::Queue, config: &TextureConfig) -> Self
  {
    let diffuse = load_rgba(&config.diffuse).unwrap_or_else(|err| {
      log::warn!("diffuse map unavailable ({err:#}), using checkerboard");
      checkerboard()
    });

    let specular = load_rgba(&config.specular).unwrap_or_else(|err| {
      log::warn!("specular map unavailable ({err:#}), using flat grey");
      flat_grey()
    });

    let diffuse_view = upload(device, queue, &diffuse, "Crate Diffuse Map");
    let specular_view = upload(device, queue, &specular, "Crate Specular Map");

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
      label: Some("Crate Sampler"),
      address_mode_u: wgpu::AddressMode::Repeat,
      address_mode_v: wgpu::AddressMode::Repeat,
      address_mode_w: wgpu::AddressMode::Repeat,
      mag_filter: wgpu::FilterMode::Linear,
      min_filter: wgpu::FilterMode::Linear,
      mipmap_filter: wgpu::FilterMode::Nearest,
      ..Default::default()
    });

    let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
      label: Some("Crate Maps BGL"),
      entries: &[
        texture_entry(0),
        texture_entry(1),
        wgpu::BindGroupLayoutEntry {
          binding: 2,
          visibility: wgpu::ShaderStages::FRAGMENT,
          ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
          count: None,
        },
      ],
    });

    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
      label: Some("Crate Maps BG"),
      layout: &bind_group_layout,
      entries: &[
        wgpu::BindGroupEntry { binding: 0, resource: wgpu::BindingResource::TextureView(&diffuse_view) },
        wgpu::BindGroupEntry { binding: 1, resource: wgpu::BindingResource::TextureView(&specular_view) },
        wgpu::BindGroupEntry { binding: 2, resource: wgpu::BindingResource::Sampler(&sampler) },
      ],
    });

    Self { bind_group, bind_group_layout }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Decode and upload
// ──────────────────────────────────────────────────────────────
//

fn load_rgba(path: &str) -> anyhow::Result<RgbaImage>
{
  let img = image::open(path).with_context(|| format!("decoding {path}"))?;
  Ok(img.flipv().to_rgba8())
}

fn upload(
  device: &wgpu::Device,
  queue: &wgpu::Queue,
  img: &RgbaImage,
  label: &str,
) -> wgpu::TextureView
{
  let size = wgpu::Extent3d {
    width: img.width(),
    height: img.height(),
    depth_or_array_layers: 1,
  };

  let texture = device.create_texture(&wgpu::TextureDescriptor {
    label: Some(label),
    size,
    mip_level_count: 1,
    sample_count: 1,
    dimension: wgpu::TextureDimension::D2,
    format: wgpu::TextureFormat::Rgba8UnormSrgb,
    usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
    view_formats: &[],
  });

  queue.write_texture(
    wgpu::TexelCopyTextureInfo {
      texture: &texture,
      mip_level: 0,
      origin: wgpu::Origin3d::ZERO,
      aspect: wgpu::TextureAspect::All,
    },
    img.as_raw(),
    wgpu::TexelCopyBufferLayout {
      offset: 0,
      bytes_per_row: Some(4 * img.width()),
      rows_per_image: Some(img.height()),
    },
    size,
  );

  texture.create_view(&wgpu::TextureViewDescriptor::default())
}

fn texture_entry(binding: u32) -> wgpu::BindGroupLayoutEntry
{
  wgpu::BindGroupLayoutEntry {
    binding,
    visibility: wgpu::ShaderStages::FRAGMENT,
    ty: wgpu::BindingType::Texture {
      sample_type: wgpu::TextureSampleType::Float { filterable: true },
      view_dimension: wgpu::TextureViewDimension::D2,
      multisampled: false,
    },
    count: None,
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Placeholders
// ──────────────────────────────────────────────────────────────
//

fn checkerboard() -> RgbaImage
{
  RgbaImage::from_fn(FALLBACK_SIZE, FALLBACK_SIZE, |x, y| {
    // wood-ish two-tone so lit stages still show shape
    if (x / 8 + y / 8) % 2 == 0
    {
      image::Rgba([168, 116, 68, 255])
    }
    else
    {
      image::Rgba([114, 74, 40, 255])
    }
  })
}

fn flat_grey() -> RgbaImage
{
  RgbaImage::from_pixel(FALLBACK_SIZE, FALLBACK_SIZE, image::Rgba([128, 128, 128, 255]))
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn placeholders_have_the_declared_size()
  {
    assert_eq!(checkerboard().dimensions(), (FALLBACK_SIZE, FALLBACK_SIZE));
    assert_eq!(flat_grey().dimensions(), (FALLBACK_SIZE, FALLBACK_SIZE));
  }

  #[test]
  fn checkerboard_alternates()
  {
    let img = checkerboard();
    assert_ne!(img.get_pixel(0, 0), img.get_pixel(8, 0));
    assert_eq!(img.get_pixel(0, 0), img.get_pixel(16, 0));
  }

  #[test]
  fn missing_file_is_an_error_not_a_panic()
  {
    assert!(load_rgba("definitely/not/here.png").is_err());
  }
}
