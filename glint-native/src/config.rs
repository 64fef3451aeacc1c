use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────────
//   Viewer configuration
//
//   Optional glint.json next to the working directory overrides
//   the defaults below. A missing file is normal (first run);
//   a malformed one is reported and ignored.
// ──────────────────────────────────────────────────────────────
//

const CONFIG_PATH: &str = "glint.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config
{
  pub window: WindowConfig,
  pub camera: CameraConfig,
  pub textures: TextureConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig
{
  pub width: u32,
  pub height: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig
{
  pub position: [f32; 3],
  pub speed: f32,
  pub sensitivity: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextureConfig
{
  pub diffuse: String,
  pub specular: String,
}

impl Default for Config
{
  fn default() -> Self
  {
    Self {
      window: WindowConfig::default(),
      camera: CameraConfig::default(),
      textures: TextureConfig::default(),
    }
  }
}

impl Default for WindowConfig
{
  fn default() -> Self
  {
    Self { width: 1400, height: 1100 }
  }
}

impl Default for CameraConfig
{
  fn default() -> Self
  {
    Self { position: [0.0, 0.0, 4.0], speed: 2.5, sensitivity: 0.1 }
  }
}

impl Default for TextureConfig
{
  fn default() -> Self
  {
    Self {
      diffuse: "assets/crate_diffuse.png".to_string(),
      specular: "assets/crate_specular.png".to_string(),
    }
  }
}

impl Config
{
  pub fn load() -> Self
  {
    match std::fs::read_to_string(CONFIG_PATH)
    {
      Ok(text) => match serde_json::from_str(&text)
      {
        Ok(config) =>
        {
          log::info!("loaded {CONFIG_PATH}");
          config
        }
        Err(err) =>
        {
          log::warn!("ignoring malformed {CONFIG_PATH}: {err}");
          Self::default()
        }
      },
      Err(_) =>
      {
        log::info!("no {CONFIG_PATH} found, using defaults");
        Self::default()
      }
    }
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn partial_json_fills_the_rest_with_defaults()
  {
    let config: Config =
      serde_json::from_str(r#"{ "camera": { "speed": 5.0 } }"#).unwrap();

    assert_eq!(config.camera.speed, 5.0);
    assert_eq!(config.camera.sensitivity, 0.1);
    assert_eq!(config.window.width, 1400);
    assert_eq!(config.textures.diffuse, "assets/crate_diffuse.png");
  }

  #[test]
  fn config_round_trips_through_json()
  {
    let mut config = Config::default();
    config.camera.position = [1.0, 2.0, 3.0];
    config.window.height = 720;

    let text = serde_json::to_string(&config).unwrap();
    let back: Config = serde_json::from_str(&text).unwrap();

    assert_eq!(back.camera.position, [1.0, 2.0, 3.0]);
    assert_eq!(back.window.height, 720);
  }
}
