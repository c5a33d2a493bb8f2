//! Two-branch hash used by the table and instrumented by the driver.
//!
//! Keys with a leading decimal integer take an integer mixing branch;
//! everything else falls back to djb2. The split is deliberate: the driver
//! measures how each branch spreads real key sets over the slot array, so
//! the dispatch must stay observable and reproducible.

/// Maps `key` to a slot index in `[0, capacity)`. Deterministic, no side
/// effects.
///
/// A key with a valid leading non-negative integer (optional ASCII
/// whitespace, optional `+`, then at least one digit; trailing garbage is
/// tolerated, so `"123abc"` counts) is hashed from that integer. A prefix
/// too large for `u64` is treated as non-numeric.
pub fn index(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0);
    let h = match leading_integer(key) {
        Some(n) => (n ^ (n >> 16)).wrapping_mul(0x45d9f3b),
        None => {
            let mut h: u64 = 5381;
            for byte in key.bytes() {
                h = (h << 5).wrapping_add(h).wrapping_add(byte as u64);
            }
            h
        }
    };
    (h % capacity as u64) as usize
}

fn leading_integer(key: &str) -> Option<u64> {
    let digits = key.trim_start();
    let digits = digits.strip_prefix('+').unwrap_or(digits);
    let mut value: u64 = 0;
    let mut seen = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        value = value
            .checked_mul(10)?
            .checked_add((byte - b'0') as u64)?;
        seen = true;
    }
    seen.then_some(value)
}
