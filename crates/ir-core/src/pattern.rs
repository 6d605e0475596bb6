//! Mark/space pulse pattern and its incremental builder.
//!
//! # What is a pulse pattern? (for beginners)
//!
//! An IR emitter is a single on/off line.  While the line is "on" the LED
//! blinks at the carrier frequency (a *mark*); while it is "off" the LED is
//! dark (a *space*).  A transmission is described as the list of interval
//! lengths in microseconds:
//!
//! ```text
//! [9000, 4500, 560, 560, 560, 1690, ...]
//!  mark  space mark space mark space
//! ```
//!
//! The polarity of each entry is implied by its position: even indices are
//! marks and odd indices are spaces.  This only works if the list strictly
//! alternates, which is the invariant [`PatternBuilder`] maintains.
//!
//! # Merging
//!
//! Two consecutive marks on the same line are physically indistinguishable
//! from one longer mark.  Manchester encoders (RC5, RC6) naturally produce
//! such runs, e.g. a `1` bit (mark, space) followed by a `0` bit (space,
//! mark).  The builder folds same-polarity contributions into the previous
//! entry instead of appending a new one.

use serde::{Deserialize, Serialize};

/// Which half of the on/off line a duration belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    Mark,
    Space,
}

/// Accumulates mark and space durations into a strictly alternating pattern.
///
/// Encoders are the only callers.  Passing a zero duration or starting with
/// a space is an encoder bug, so both are reported with a panic rather than a
/// `Result`.
///
/// # Examples
///
/// ```rust
/// use ir_core::PatternBuilder;
///
/// let mut builder = PatternBuilder::new();
/// builder.mark(100);
/// builder.mark(50);
/// builder.space(20);
/// assert_eq!(builder.build().as_slice(), &[150, 20]);
/// ```
#[derive(Debug, Default)]
pub struct PatternBuilder {
    durations: Vec<u32>,
    last: Option<Polarity>,
}

impl PatternBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            durations: Vec::with_capacity(capacity),
            last: None,
        }
    }

    /// Appends a carrier-on interval.
    ///
    /// # Panics
    ///
    /// Panics if `duration_us` is zero.
    pub fn mark(&mut self, duration_us: u32) -> &mut Self {
        self.append(Polarity::Mark, duration_us)
    }

    /// Appends a carrier-off interval.
    ///
    /// # Panics
    ///
    /// Panics if `duration_us` is zero or if this is the first contribution.
    pub fn space(&mut self, duration_us: u32) -> &mut Self {
        self.append(Polarity::Space, duration_us)
    }

    /// Appends a space of `duration_us` if the pattern currently ends on a
    /// mark.  Does nothing if it already ends on a space (or is empty).
    pub fn ensure_trailing_space(&mut self, duration_us: u32) -> &mut Self {
        if self.last == Some(Polarity::Mark) {
            self.space(duration_us);
        }
        self
    }

    /// Number of entries accumulated so far (after merging).
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Returns `true` if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Finalises the builder into an immutable [`PulsePattern`].
    pub fn build(self) -> PulsePattern {
        PulsePattern(self.durations)
    }

    fn append(&mut self, polarity: Polarity, duration_us: u32) -> &mut Self {
        assert!(duration_us > 0, "pulse duration must be positive");

        match self.last {
            None => {
                assert!(
                    polarity == Polarity::Mark,
                    "pulse pattern must start with a mark"
                );
                self.durations.push(duration_us);
            }
            Some(last) if last == polarity => {
                // Same line state: extend the previous interval.
                if let Some(tail) = self.durations.last_mut() {
                    *tail += duration_us;
                }
            }
            Some(_) => self.durations.push(duration_us),
        }

        self.last = Some(polarity);
        self
    }
}

/// A mark/space pattern in microseconds.  Index 0 is a mark.
///
/// Patterns from [`PatternBuilder::build`] strictly alternate
/// and hold only positive durations.  Patterns from [`PulsePattern::from_raw`]
/// or deserialization are taken as given and may be empty or contain zeros;
/// the transmitter re-validates every pattern before sending it.  Serialises
/// as a plain JSON/TOML array.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PulsePattern(Vec<u32>);

impl PulsePattern {
    /// Wraps durations as they are, without validation (for example a raw
    /// pattern captured from a real remote).
    pub fn from_raw(durations: Vec<u32>) -> Self {
        Self(durations)
    }

    /// Borrows the durations.
    pub fn as_slice(&self) -> &[u32] {
        &self.0
    }

    /// Consumes the pattern and returns the durations.
    pub fn into_vec(self) -> Vec<u32> {
        self.0
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the pattern holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if the pattern ends with a space (carrier off).
    pub fn ends_with_space(&self) -> bool {
        !self.0.is_empty() && self.0.len() % 2 == 0
    }

    /// Sum of all durations, i.e. how long the transmission keeps the line
    /// busy.
    pub fn total_duration_us(&self) -> u64 {
        self.0.iter().map(|&d| u64::from(d)).sum()
    }
}

impl AsRef<[u32]> for PulsePattern {
    fn as_ref(&self) -> &[u32] {
        &self.0
    }
}

impl From<PulsePattern> for Vec<u32> {
    fn from(pattern: PulsePattern) -> Self {
        pattern.0
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
