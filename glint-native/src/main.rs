mod app;
mod camera;
mod clock;
mod config;
mod input;
mod renderer;
mod scene;

fn main() -> anyhow::Result<()>
{
  // Initialise the logger so wgpu validation errors and warnings appear in
  // the console. RUST_LOG overrides the default filter below.

  env_logger::init_from_env(
    env_logger::Env::default().default_filter_or("info,wgpu_core=warn,wgpu_hal=off,naga=warn"),
  );

  app::run()
}
