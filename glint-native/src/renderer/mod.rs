mod core;
mod crate_mesh;
mod depth;
pub mod gui;
mod instances;
mod lights;
mod texture;

// `self::` keeps the path from colliding with the `core` crate
pub use self::core::Renderer;
pub use self::gui::GuiRenderer;
