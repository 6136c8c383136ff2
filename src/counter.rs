// Counts a stat up from 0 to its target in roughly STEPS equal increments.

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Counter {
    target: i64,
    current: i64,
    increment: i64,
}

impl Counter {
    pub const STEPS: i64 = 40;
    pub const INTERVAL_MS: i32 = 40;

    pub fn new(target: i64) -> Counter {
        let increment = (target as f64 / Counter::STEPS as f64).ceil() as i64;
        Counter {
            target,
            current: 0,
            increment,
        }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    /// Advances one interval. Returns the value to display and whether the
    /// count has reached its target.
    pub fn tick(&mut self) -> (i64, bool) {
        self.current = self.current.saturating_add(self.increment);
        if self.current >= self.target {
            self.current = self.target;
            return (self.current, true);
        }
        (self.current, false)
    }
}

/// Reads the leading base-10 integer of `raw` the way `parseInt(raw, 10)`
/// does: surrounding whitespace and an optional sign are accepted, anything
/// after the digits is ignored. Out-of-range values saturate.
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let mut value: i64 = 0;
    let mut seen = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen = true;
        value = value.saturating_mul(10).saturating_add((b - b'0') as i64);
    }
    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}
