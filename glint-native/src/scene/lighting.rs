use glam::Vec3;

use super::SINGLE_LIGHT_POS;
use super::POINT_LIGHT_POSITIONS;

//
// ──────────────────────────────────────────────────────────────
//   Lighting stages
//
//   Each stage is one step of the lighting curriculum, from unlit
//   textured cubes up to the combined directional + point + spot
//   rig. A stage is pure configuration: rig(stage, t) produces the
//   full light setup for a frame, with t driving the stages whose
//   light colours cycle over time.
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage
{
  Textured,
  Phong,
  Materials,
  LightingMaps,
  Spotlight,
  MultiLight,
}

impl Stage
{
  pub const ALL: [Stage; 6] = [
    Stage::Textured,
    Stage::Phong,
    Stage::Materials,
    Stage::LightingMaps,
    Stage::Spotlight,
    Stage::MultiLight,
  ];

  pub fn label(self) -> &'static str
  {
    match self
    {
      Stage::Textured => "Textured cubes",
      Stage::Phong => "Phong lighting",
      Stage::Materials => "Materials",
      Stage::LightingMaps => "Lighting maps",
      Stage::Spotlight => "Spotlight",
      Stage::MultiLight => "Multiple lights",
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Light parameter blocks
// ──────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy)]
pub struct DirLight
{
  pub direction: Vec3,
  pub ambient: Vec3,
  pub diffuse: Vec3,
  pub specular: Vec3,
}

#[derive(Debug, Clone, Copy)]
pub struct PointLight
{
  pub position: Vec3,
  pub ambient: Vec3,
  pub diffuse: Vec3,
  pub specular: Vec3,
  // attenuation: 1 / (constant + linear·d + quadratic·d²)
  pub constant: f32,
  pub linear: f32,
  pub quadratic: f32,
}

/// Spot parameters only — the cone rides the camera, so position and
/// direction are filled in from the camera when the uniform is built.
#[derive(Debug, Clone, Copy)]
pub struct SpotLight
{
  pub ambient: Vec3,
  pub diffuse: Vec3,
  pub specular: Vec3,
  pub constant: f32,
  pub linear: f32,
  pub quadratic: f32,
  pub cutoff_deg: f32,
  pub outer_cutoff_deg: f32,
}

#[derive(Debug, Clone, Copy)]
pub enum Material
{
  /// Unlit: both bound textures blended by `mix`
  TexturedMix
  {
    mix: f32
  },
  /// Solid colour terms, no maps
  Solid
  {
    ambient: Vec3, diffuse: Vec3, specular: Vec3
  },
  /// Diffuse/specular sampled from the crate maps
  Maps,
}

#[derive(Debug, Clone)]
pub struct LightingRig
{
  pub dir: Option<DirLight>,
  pub points: Vec<PointLight>,
  pub spot: Option<SpotLight>,
  pub material: Material,
  pub shininess: f32,
}

//
// ──────────────────────────────────────────────────────────────
//   Stage presets
// ──────────────────────────────────────────────────────────────
//

const OBJECT_COLOR: Vec3 = Vec3::new(1.0, 0.5, 0.31);

pub fn rig(stage: Stage, t: f32) -> LightingRig
{
  match stage
  {
    Stage::Textured => LightingRig {
      dir: None,
      points: Vec::new(),
      spot: None,
      material: Material::TexturedMix { mix: 0.2 },
      shininess: 32.0,
    },

    Stage::Phong => LightingRig {
      dir: None,
      points: vec![white_point_light(SINGLE_LIGHT_POS)],
      spot: None,
      material: Material::Solid {
        ambient: OBJECT_COLOR,
        diffuse: OBJECT_COLOR,
        specular: OBJECT_COLOR * 0.5,
      },
      shininess: 32.0,
    },

    Stage::Materials =>
    {
      let colour = cycling_colour(t, 2.0, 0.7, 1.3);

      LightingRig {
        dir: None,
        points: vec![cycling_point_light(SINGLE_LIGHT_POS, colour)],
        spot: None,
        material: Material::Solid {
          ambient: Vec3::ONE,
          diffuse: Vec3::ONE,
          specular: Vec3::splat(0.5),
        },
        shininess: 128.0,
      }
    }

    Stage::LightingMaps =>
    {
      let colour = cycling_colour(t, 2.0, 1.25, 0.84);

      LightingRig {
        dir: None,
        points: vec![cycling_point_light(SINGLE_LIGHT_POS, colour)],
        spot: None,
        material: Material::Maps,
        shininess: 32.0,
      }
    }

    Stage::Spotlight => LightingRig {
      dir: None,
      points: Vec::new(),
      spot: Some(SpotLight {
        ambient: Vec3::splat(0.1),
        diffuse: Vec3::splat(0.8),
        specular: Vec3::ONE,
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
        cutoff_deg: 12.5,
        outer_cutoff_deg: 15.5,
      }),
      material: Material::Maps,
      shininess: 32.0,
    },

    Stage::MultiLight => LightingRig {
      dir: Some(DirLight {
        direction: Vec3::new(-0.2, -1.0, -0.3),
        ambient: Vec3::splat(0.05),
        diffuse: Vec3::splat(0.4),
        specular: Vec3::splat(0.5),
      }),
      points: POINT_LIGHT_POSITIONS
        .iter()
        .map(|&position| PointLight {
          position,
          ambient: Vec3::splat(0.05),
          diffuse: Vec3::splat(0.8),
          specular: Vec3::ONE,
          constant: 1.0,
          linear: 0.09,
          quadratic: 0.032,
        })
        .collect(),
      spot: Some(SpotLight {
        ambient: Vec3::ZERO,
        diffuse: Vec3::ONE,
        specular: Vec3::ONE,
        constant: 1.0,
        linear: 0.09,
        quadratic: 0.032,
        cutoff_deg: 12.5,
        outer_cutoff_deg: 15.0,
      }),
      material: Material::Maps,
      shininess: 32.0,
    },
  }
}

/// Marker cubes drawn at the light positions, with the colour the lamp
/// shader should emit. The spotlight rides the camera, so it gets none.
pub fn lamps(stage: Stage, t: f32) -> Vec<(Vec3, Vec3)>
{
  match stage
  {
    Stage::Textured | Stage::Spotlight => Vec::new(),

    Stage::Phong => vec![(SINGLE_LIGHT_POS, Vec3::ONE)],

    Stage::Materials => vec![(SINGLE_LIGHT_POS, cycling_colour(t, 2.0, 0.7, 1.3))],

    Stage::LightingMaps => vec![(SINGLE_LIGHT_POS, cycling_colour(t, 2.0, 1.25, 0.84))],

    Stage::MultiLight =>
    {
      POINT_LIGHT_POSITIONS.iter().map(|&position| (position, Vec3::ONE)).collect()
    }
  }
}

//
// ──────────────────────────────────────────────────────────────
//   Preset helpers
// ──────────────────────────────────────────────────────────────
//

fn white_point_light(position: Vec3) -> PointLight
{
  PointLight {
    position,
    ambient: Vec3::splat(0.1),
    diffuse: Vec3::ONE,
    specular: Vec3::ONE,
    constant: 1.0,
    linear: 0.0,
    quadratic: 0.0,
  }
}

/// Point light whose colour cycles over time: diffuse at half the raw
/// colour, ambient at a fifth of the diffuse.
fn cycling_point_light(position: Vec3, colour: Vec3) -> PointLight
{
  let diffuse = colour * 0.5;

  PointLight {
    position,
    ambient: diffuse * 0.2,
    diffuse,
    specular: Vec3::ONE,
    constant: 1.0,
    linear: 0.0,
    quadratic: 0.0,
  }
}

fn cycling_colour(t: f32, fx: f32, fy: f32, fz: f32) -> Vec3
{
  Vec3::new((t * fx).sin(), (t * fy).sin(), (t * fz).sin())
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
  fn stage_light_topology_matches_the_curriculum()
  {
    let cases = [
      (Stage::Textured, false, 0, false),
      (Stage::Phong, false, 1, false),
      (Stage::Materials, false, 1, false),
      (Stage::LightingMaps, false, 1, false),
      (Stage::Spotlight, false, 0, true),
      (Stage::MultiLight, true, 4, true),
    ];

    for (stage, has_dir, point_count, has_spot) in cases
    {
      let rig = rig(stage, 0.0);
      assert_eq!(rig.dir.is_some(), has_dir, "{stage:?}");
      assert_eq!(rig.points.len(), point_count, "{stage:?}");
      assert_eq!(rig.spot.is_some(), has_spot, "{stage:?}");
    }
  }

  #[test]
  fn spot_cones_are_ordered_inner_before_outer()
  {
    for stage in [Stage::Spotlight, Stage::MultiLight]
    {
      let rig = rig(stage, 0.0);
      let spot = rig.spot.unwrap();
      assert!(spot.cutoff_deg < spot.outer_cutoff_deg);
      // wider angle → smaller cosine, which the shader relies on
      assert!(
        spot.cutoff_deg.to_radians().cos() > spot.outer_cutoff_deg.to_radians().cos()
      );
    }
  }

  #[test]
  fn materials_stage_cycles_its_light_colour()
  {
    let a = rig(Stage::Materials, 0.0);
    let b = rig(Stage::Materials, 1.0);

    assert_ne!(a.points[0].diffuse, b.points[0].diffuse);

    // ambient stays a fifth of diffuse while cycling
    let p = &b.points[0];
    assert!((p.ambient - p.diffuse * 0.2).length() < 1e-6);
  }

  #[test]
  fn fixed_stages_do_not_depend_on_time()
  {
    for stage in [Stage::Phong, Stage::Spotlight, Stage::MultiLight]
    {
      let a = rig(stage, 0.0);
      let b = rig(stage, 10.0);
      assert_eq!(a.points.len(), b.points.len());
      assert_eq!(a.shininess, b.shininess);
      if let (Some(sa), Some(sb)) = (a.spot, b.spot)
      {
        assert_eq!(sa.diffuse, sb.diffuse);
      }
    }
  }

  #[test]
  fn lamps_follow_the_point_lights()
  {
    assert!(lamps(Stage::Textured, 0.0).is_empty());
    assert!(lamps(Stage::Spotlight, 0.0).is_empty());
    assert_eq!(lamps(Stage::Phong, 0.0).len(), 1);
    assert_eq!(lamps(Stage::MultiLight, 0.0).len(), 4);

    let rig = rig(Stage::MultiLight, 0.0);
    for ((lamp_pos, _), light) in lamps(Stage::MultiLight, 0.0).iter().zip(&rig.points)
    {
      assert_eq!(*lamp_pos, light.position);
    }
  }
}
