use std::time::Instant;

//
// ──────────────────────────────────────────────────────────────
//   Frame clock
//
//   Elapsed wall-time between successive ticks, in seconds. The
//   camera's movement contract requires a non-negative dt, which
//   Instant guarantees by construction.
// ──────────────────────────────────────────────────────────────
//

pub struct FrameClock
{
  last: Instant,
}

impl FrameClock
{
  pub fn new() -> Self
  {
    Self { last: Instant::now() }
  }

  /// Seconds since the previous tick (or since construction).
  pub fn tick(&mut self) -> f32
  {
    let now = Instant::now();
    let dt = now.duration_since(self.last).as_secs_f32();
    self.last = now;
    dt
  }
}

#[cfg(test)]
mod tests
{
  use super::*;

  #[test]
  fn dt_is_non_negative_and_advances()
  {
    let mut clock = FrameClock::new();

    let a = clock.tick();
    std::thread::sleep(std::time::Duration::from_millis(5));
    let b = clock.tick();

    assert!(a >= 0.0);
    assert!(b >= 0.005);
  }
}
