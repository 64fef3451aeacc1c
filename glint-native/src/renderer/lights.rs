use glam::Vec3;

use crate::camera::Camera;
use crate::scene::lighting::{LightingRig, Material};

//
// ──────────────────────────────────────────────────────────────
//   Lights Uniform (GPU side)
//
//   WGSL layout (crate.wgsl), every block padded to vec4 stride:
//     dir               : 4 × vec4            →  64 bytes
//     points            : 4 × (5 × vec4)      → 320 bytes
//     spot              : 7 × vec4            → 112 bytes
//     flags             : vec4<u32>           →  16 bytes
//     params            : vec4<f32>           →  16 bytes
//     material_ambient  : vec4<f32>           →  16 bytes
//     material_diffuse  : vec4<f32>           →  16 bytes
//     material_specular : vec4<f32>           →  16 bytes
//   Total: 576 bytes
// ──────────────────────────────────────────────────────────────
//

// flags.x — where the fragment colour terms come from
pub const SOURCE_TEXTURED_MIX: u32 = 0;
pub const SOURCE_SOLID: u32 = 1;
pub const SOURCE_MAPS: u32 = 2;

#[repr(C)]
#[derive(Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DirLightRaw
{
  pub direction: [f32; 4],
  pub ambient: [f32; 4],
  pub diffuse: [f32; 4],
  pub specular: [f32; 4],
}

#[repr(C)]
#[derive(Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PointLightRaw
{
  pub position: [f32; 4],
  pub ambient: [f32; 4],
  pub diffuse: [f32; 4],
  pub specular: [f32; 4],
  pub attenuation: [f32; 4], // constant, linear, quadratic, unused
}

#[repr(C)]
#[derive(Clone, Copy, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct SpotLightRaw
{
  pub position: [f32; 4],
  pub direction: [f32; 4],
  pub ambient: [f32; 4],
  pub diffuse: [f32; 4],
  pub specular: [f32; 4],
  pub attenuation: [f32; 4], // constant, linear, quadratic, unused
  pub cutoffs: [f32; 4],     // cos(inner), cos(outer), unused ×2
}

#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightsUniform
{
  pub dir: DirLightRaw,
  pub points: [PointLightRaw; 4],
  pub spot: SpotLightRaw,
  pub flags: [u32; 4],  // material source, point count, dir on, spot on
  pub params: [f32; 4], // shininess, texture mix, unused ×2
  pub material_ambient: [f32; 4],
  pub material_diffuse: [f32; 4],
  pub material_specular: [f32; 4],
}

// Catch CPU/GPU layout mismatches at compile time
const _: () = assert!(std::mem::size_of::<DirLightRaw>() == 64);
const _: () = assert!(std::mem::size_of::<PointLightRaw>() == 80);
const _: () = assert!(std::mem::size_of::<SpotLightRaw>() == 112);
const _: () = assert!(std::mem::size_of::<LightsUniform>() == 576);

//
// ──────────────────────────────────────────────────────────────
//   Rig → uniform
// ──────────────────────────────────────────────────────────────
//

impl LightsUniform
{
  /// Flatten a lighting rig for upload. The spotlight rides the
  /// camera, so its position/direction are taken from the camera at
  /// build time — the rig itself stays camera-agnostic.
  pub fn build(rig: &LightingRig, camera: &Camera) -> Self
  {
    let mut points = [PointLightRaw::default(); 4];
    for (raw, light) in points.iter_mut().zip(&rig.points)
    {
      *raw = PointLightRaw {
        position: pad(light.position),
        ambient: pad(light.ambient),
        diffuse: pad(light.diffuse),
        specular: pad(light.specular),
        attenuation: [light.constant, light.linear, light.quadratic, 0.0],
      };
    }

    let dir = rig.dir.map_or_else(DirLightRaw::default, |d| DirLightRaw {
      direction: pad(d.direction),
      ambient: pad(d.ambient),
      diffuse: pad(d.diffuse),
      specular: pad(d.specular),
    });

    let spot = rig.spot.map_or_else(SpotLightRaw::default, |s| SpotLightRaw {
      position: pad(camera.position),
      direction: pad(camera.front()),
      ambient: pad(s.ambient),
      diffuse: pad(s.diffuse),
      specular: pad(s.specular),
      attenuation: [s.constant, s.linear, s.quadratic, 0.0],
      cutoffs: [
        s.cutoff_deg.to_radians().cos(),
        s.outer_cutoff_deg.to_radians().cos(),
        0.0,
        0.0,
      ],
    });

    let (source, mix, ambient, diffuse, specular) = match rig.material
    {
      Material::TexturedMix { mix } =>
      {
        (SOURCE_TEXTURED_MIX, mix, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO)
      }
      Material::Solid { ambient, diffuse, specular } =>
      {
        (SOURCE_SOLID, 0.0, ambient, diffuse, specular)
      }
      Material::Maps => (SOURCE_MAPS, 0.0, Vec3::ZERO, Vec3::ZERO, Vec3::ZERO),
    };

    Self {
      dir,
      points,
      spot,
      flags: [
        source,
        rig.points.len().min(4) as u32,
        rig.dir.is_some() as u32,
        rig.spot.is_some() as u32,
      ],
      params: [rig.shininess, mix, 0.0, 0.0],
      material_ambient: pad(ambient),
      material_diffuse: pad(diffuse),
      material_specular: pad(specular),
    }
  }
}

fn pad(v: Vec3) -> [f32; 4]
{
  [v.x, v.y, v.z, 0.0]
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
  use crate::scene::lighting::{rig, Stage};

  fn camera() -> Camera
  {
    Camera::new(Vec3::new(0.0, 0.0, 4.0), 1.0)
  }

  #[test]
  fn multi_light_stage_fills_every_slot()
  {
    let uniform = LightsUniform::build(&rig(Stage::MultiLight, 0.0), &camera());

    assert_eq!(uniform.flags, [SOURCE_MAPS, 4, 1, 1]);
    assert_eq!(uniform.params[0], 32.0);

    // spotlight is attached to the camera
    assert_eq!(&uniform.spot.position[..3], &[0.0, 0.0, 4.0]);
    let d = uniform.spot.direction;
    assert!(d[0].abs() < 1e-6 && d[1].abs() < 1e-6 && (d[2] + 1.0).abs() < 1e-6);

    // inner cone cosine is the larger one
    assert!(uniform.spot.cutoffs[0] > uniform.spot.cutoffs[1]);
  }

  #[test]
  fn textured_stage_disables_all_lights()
  {
    let uniform = LightsUniform::build(&rig(Stage::Textured, 0.0), &camera());

    assert_eq!(uniform.flags, [SOURCE_TEXTURED_MIX, 0, 0, 0]);
    assert_eq!(uniform.params[1], 0.2);
  }

  #[test]
  fn solid_material_carries_the_object_colour()
  {
    let uniform = LightsUniform::build(&rig(Stage::Phong, 0.0), &camera());

    assert_eq!(uniform.flags[0], SOURCE_SOLID);
    assert_eq!(&uniform.material_diffuse[..3], &[1.0, 0.5, 0.31]);
    // unattenuated tutorial light: constant term only
    assert_eq!(uniform.points[0].attenuation, [1.0, 0.0, 0.0, 0.0]);
  }
}
