use glam::{Mat4, Vec3};

pub mod lighting;

use self::lighting::Stage;

//
// ──────────────────────────────────────────────────────────────
//   The scene
//
//   Hard-coded world data shared by every stage: the crate field,
//   the light positions, per-stage cube transforms and background
//   colours. All pure functions of (stage, elapsed seconds).
// ──────────────────────────────────────────────────────────────
//

pub const CRATE_POSITIONS: [Vec3; 10] = [
  Vec3::new(1.2, 1.0, 0.0),
  Vec3::new(2.0, 5.0, -15.0),
  Vec3::new(-1.5, -2.2, -2.5),
  Vec3::new(-3.8, -2.0, -12.3),
  Vec3::new(2.4, -0.4, -3.5),
  Vec3::new(-1.7, 3.0, -7.5),
  Vec3::new(1.3, -2.0, -2.5),
  Vec3::new(1.5, 2.0, -2.5),
  Vec3::new(1.5, 0.2, -1.5),
  Vec3::new(-1.3, 1.0, -1.5),
];

pub const POINT_LIGHT_POSITIONS: [Vec3; 4] = [
  Vec3::new(0.7, 0.2, 2.0),
  Vec3::new(2.3, -3.3, -4.0),
  Vec3::new(-4.0, 2.0, -12.0),
  Vec3::new(0.0, 0.0, -3.0),
];

pub const SINGLE_LIGHT_POS: Vec3 = Vec3::new(1.2, 1.0, 2.0);

const SPIN_AXIS: Vec3 = Vec3::new(1.0, 0.3, 0.5);
const LAMP_SCALE: f32 = 0.2;

//
// ──────────────────────────────────────────────────────────────
//   Crate transforms
// ──────────────────────────────────────────────────────────────
//

/// Model matrices for the crates a stage draws. The single-light
/// stages show one tilted cube; the showcase stages spin the whole
/// field about a fixed skew axis.
pub fn crate_models(stage: Stage, t: f32) -> Vec<Mat4>
{
  match stage
  {
    Stage::Phong | Stage::Materials | Stage::LightingMaps =>
    {
      vec![Mat4::from_axis_angle(Vec3::X, (-55.0_f32).to_radians())]
    }

    Stage::Textured => spinning_field(t, 50.0),

    Stage::Spotlight | Stage::MultiLight => spinning_field(t, 100.0),
  }
}

pub fn lamp_model(position: Vec3) -> Mat4
{
  Mat4::from_translation(position) * Mat4::from_scale(Vec3::splat(LAMP_SCALE))
}

fn spinning_field(t: f32, degrees_per_second: f32) -> Vec<Mat4>
{
  let angle = (t * degrees_per_second).to_radians();
  let axis = SPIN_AXIS.normalize();

  CRATE_POSITIONS
    .iter()
    .map(|&position| Mat4::from_translation(position) * Mat4::from_axis_angle(axis, angle))
    .collect()
}

//
// ──────────────────────────────────────────────────────────────
//   Backgrounds
// ──────────────────────────────────────────────────────────────
//

/// Per-stage clear colour. Some stages pulse their background over
/// time; the channels are clamped because the surface is unorm.
pub fn clear_colour(stage: Stage, t: f32) -> [f32; 3]
{
  let raw = match stage
  {
    Stage::Textured => [t.cos(), t.sin(), t.sin()],

    Stage::Phong =>
    {
      let pulse = (t * 1.2).sin() * 0.25;
      [pulse, 0.1, pulse]
    }

    Stage::Materials =>
    {
      let wobble = t.sin();
      [(wobble * 0.1).sin() * 0.25, 0.125, (wobble * 0.1).cos() * 0.25]
    }

    Stage::LightingMaps => [0.0325, 0.0325, 0.0325],

    Stage::Spotlight => [0.1, 0.1, 0.1],

    Stage::MultiLight => [0.23 * t.sin(), 0.55 * t.cos(), 0.36 * t.sin()],
  };

  [raw[0].clamp(0.0, 1.0), raw[1].clamp(0.0, 1.0), raw[2].clamp(0.0, 1.0)]
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
  fn single_cube_stages_draw_one_crate()
  {
    for stage in [Stage::Phong, Stage::Materials, Stage::LightingMaps]
    {
      assert_eq!(crate_models(stage, 1.0).len(), 1, "{stage:?}");
    }
  }

  #[test]
  fn field_stages_draw_the_whole_field()
  {
    for stage in [Stage::Textured, Stage::Spotlight, Stage::MultiLight]
    {
      assert_eq!(crate_models(stage, 1.0).len(), CRATE_POSITIONS.len(), "{stage:?}");
    }
  }

  #[test]
  fn spinning_crates_keep_their_positions()
  {
    for (model, expected) in crate_models(Stage::MultiLight, 3.7).iter().zip(CRATE_POSITIONS)
    {
      let origin = model.transform_point3(Vec3::ZERO);
      assert!((origin - expected).length() < 1e-5);
    }
  }

  #[test]
  fn lamp_model_translates_and_shrinks()
  {
    let model = lamp_model(Vec3::new(1.0, 2.0, 3.0));

    let centre = model.transform_point3(Vec3::ZERO);
    assert!((centre - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);

    let corner = model.transform_point3(Vec3::splat(0.5));
    assert!((corner - centre).length() < 0.5);
  }

  #[test]
  fn clear_colour_stays_in_unorm_range()
  {
    for stage in Stage::ALL
    {
      for step in 0..100
      {
        let t = step as f32 * 0.37;
        for channel in clear_colour(stage, t)
        {
          assert!((0.0..=1.0).contains(&channel));
        }
      }
    }
  }
}
