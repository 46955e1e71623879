use std::collections::{BTreeMap, BTreeSet};

use log::trace;

/// Normalized value handed out when every cached brightness is identical.
const ZERO_SPAN_BRIGHTNESS: f64 = 0.5;

/// Per-character brightness cache with monotone normalization bounds.
///
/// Raw brightness is inserted at most once per character and never evicted;
/// the min/max bounds only widen over the cache's lifetime, even when
/// characters later leave the active set.
#[derive(Debug)]
pub struct BrightnessCache {
    raw: BTreeMap<char, f64>,
    normalized: BTreeMap<char, f64>,
    min_raw: f64,
    max_raw: f64,
}

impl Default for BrightnessCache {
    fn default() -> Self {
        Self {
            raw: BTreeMap::new(),
            normalized: BTreeMap::new(),
            min_raw: f64::INFINITY,
            max_raw: f64::NEG_INFINITY,
        }
    }
}

impl BrightnessCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `ch` already holds a raw entry.
    pub fn contains(&self, ch: char) -> bool {
        self.raw.contains_key(&ch)
    }

    /// Raw brightness cached for `ch`, if any.
    pub fn raw(&self, ch: char) -> Option<f64> {
        self.raw.get(&ch).copied()
    }

    /// Inserts a raw brightness and returns the updated `(min, max)` bounds.
    ///
    /// The insertion is skipped when the character is already cached or when
    /// another character already holds the exact same value; the bounds come
    /// back unchanged in that case.
    pub fn insert_raw(&mut self, ch: char, value: f64) -> (f64, f64) {
        if !self.raw.contains_key(&ch) && !self.raw.values().any(|&cached| cached == value) {
            trace!("caching raw brightness {value:.4} for {ch:?}");
            self.raw.insert(ch, value);
            self.min_raw = self.min_raw.min(value);
            self.max_raw = self.max_raw.max(value);
        }
        (self.min_raw, self.max_raw)
    }

    /// Current `(min, max)` raw bounds; infinite until the first insert.
    pub fn bounds(&self) -> (f64, f64) {
        (self.min_raw, self.max_raw)
    }

    /// Recomputes normalized brightness for the characters of `active` that
    /// hold raw entries, stretching against the monotone bounds. A zero span
    /// maps every candidate to the same mid-scale value so the nearest-match
    /// scan stays finite.
    pub fn normalize(&mut self, active: &BTreeSet<char>) {
        self.normalized.clear();
        let span = self.max_raw - self.min_raw;
        for (&ch, &raw) in self.raw.iter().filter(|&(ch, _)| active.contains(ch)) {
            let stretched = if span > 0.0 {
                (raw - self.min_raw) / span
            } else {
                ZERO_SPAN_BRIGHTNESS
            };
            self.normalized.insert(ch, stretched);
        }
    }

    /// Whether the last [`normalize`](Self::normalize) pass produced any
    /// candidates.
    pub fn has_candidates(&self) -> bool {
        !self.normalized.is_empty()
    }

    /// Candidate whose normalized brightness is closest to `target`.
    ///
    /// Candidates are scanned in ascending code point order and only a
    /// strictly smaller difference replaces the current best, so ties resolve
    /// to the lowest code point. `None` when nothing was normalized.
    pub fn nearest(&self, target: f64) -> Option<char> {
        let mut best: Option<(char, f64)> = None;
        for (&ch, &brightness) in &self.normalized {
            let difference = (target - brightness).abs();
            match best {
                Some((_, smallest)) if difference >= smallest => {}
                _ => best = Some((ch, difference)),
            }
        }
        best.map(|(ch, _)| ch)
    }
}
