// Staggered entrance for the hero block: element i becomes visible
// i * STEP_MS after the reveal starts, and the typing line follows.

pub const STEP_MS: i32 = 200;
pub const TYPEWRITER_AFTER_MS: i32 = 800;

/// Delay before each of `count` elements is revealed.
pub fn stagger_delays(count: usize, step_ms: i32) -> Vec<i32> {
    (0..count)
        .map(|i| (i as i32).saturating_mul(step_ms))
        .collect()
}
