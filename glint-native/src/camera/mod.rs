mod flycam;
mod uniform;

pub use flycam::{Camera, MoveDirection};
pub use uniform::CameraUniform;
