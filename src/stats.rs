//! Initial-probe bookkeeping for the hash-distribution report.
//!
//! The driver tallies, for every key it feeds into the table, the slot the
//! key hashed to first (duplicates included). A flat distribution over the
//! tallies means the hash spreads keys well; spikes mean synonyms.

use std::fmt::Write;

/// Number of distribution buckets. Slots probed this many times or more
/// collapse into the last bucket.
pub const PROBE_BUCKETS: usize = 10;

pub struct ProbeCounter {
    counts: Vec<u32>,
}

impl ProbeCounter {
    pub fn new(capacity: usize) -> Self {
        Self {
            counts: vec![0; capacity],
        }
    }

    /// Records one initial probe of `slot`.
    pub fn record(&mut self, slot: usize) {
        self.counts[slot] += 1;
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Buckets the slots by how many keys initially probed them:
    /// `distribution()[k]` is the number of slots probed exactly `k` times,
    /// with `PROBE_BUCKETS - 1` standing for "that many or more".
    pub fn distribution(&self) -> [u32; PROBE_BUCKETS] {
        let mut buckets = [0u32; PROBE_BUCKETS];
        for &count in &self.counts {
            buckets[(count as usize).min(PROBE_BUCKETS - 1)] += 1;
        }
        buckets
    }

    /// One line of stars per slot, star count = initial probes of that slot.
    pub fn render_histogram(&self) -> String {
        let mut out = String::new();
        out.push_str("Initial probes per slot:\n");
        for (slot, &count) in self.counts.iter().enumerate() {
            let _ = writeln!(out, "slot[{slot}]: {}", "*".repeat(count as usize));
        }
        out
    }

    /// Percentage summary of the distribution buckets.
    pub fn render_stats(&self) -> String {
        let buckets = self.distribution();
        let capacity = self.counts.len() as f32;
        let pct = |n: u32| n as f32 / capacity * 100.0;

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} slots were never probed -> {:.1}% of the table is collision-free headroom.",
            buckets[0],
            pct(buckets[0])
        );
        let _ = writeln!(
            out,
            "{} slots were probed exactly once -> {:.1}% of the table saw no synonyms.",
            buckets[1],
            pct(buckets[1])
        );
        for (times, &count) in buckets.iter().enumerate().skip(2) {
            if count == 0 {
                continue;
            }
            let suffix = if times == PROBE_BUCKETS - 1 { " or more" } else { "" };
            let _ = writeln!(
                out,
                "{} slots were probed {}{} times -> {:.1}% of the table drew {} colliding synonyms.",
                count,
                times,
                suffix,
                pct(count),
                times - 1
            );
        }
        out
    }
}
