use derive_more::{Constructor, Display, From, Into};
use serde::{Deserialize, Serialize};

/// Value Object - epoch milliseconds
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into, Constructor, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn value(&self) -> i64 {
        self.0
    }

    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    pub fn from_millis(value: i64) -> Self {
        Self(value)
    }

    /// Round a fractional millisecond position to timestamp precision.
    pub fn from_f64_rounded(value: f64) -> Self {
        Self(value.round() as i64)
    }
}

/// Value Object - visible time window.
///
/// `Full` is the `{ start: null, end: null }` window: the whole series is in
/// view, whatever its extent. A `Range` always satisfies `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    Full,
    Range { start: Timestamp, end: Timestamp },
}

impl Window {
    /// Build a bounded window, swapping bounds if needed.
    pub fn range(start: Timestamp, end: Timestamp) -> Self {
        if start <= end {
            Self::Range { start, end }
        } else {
            Self::Range { start: end, end: start }
        }
    }

    pub fn start(&self) -> Option<Timestamp> {
        match self {
            Self::Full => None,
            Self::Range { start, .. } => Some(*start),
        }
    }

    pub fn end(&self) -> Option<Timestamp> {
        match self {
            Self::Full => None,
            Self::Range { end, .. } => Some(*end),
        }
    }

    pub fn is_full(&self) -> bool {
        matches!(self, Self::Full)
    }

    /// Inclusive on both ends; a full window contains everything.
    pub fn contains(&self, timestamp: Timestamp) -> bool {
        match self {
            Self::Full => true,
            Self::Range { start, end } => *start <= timestamp && timestamp <= *end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_swaps_reversed_bounds() {
        let window = Window::range(Timestamp::from(9), Timestamp::from(3));
        assert_eq!(window.start(), Some(Timestamp::from(3)));
        assert_eq!(window.end(), Some(Timestamp::from(9)));
    }

    #[test]
    fn full_window_has_no_bounds() {
        let window = Window::default();
        assert!(window.is_full());
        assert_eq!(window.start(), None);
        assert!(window.contains(Timestamp::from(i64::MIN)));
    }

    #[test]
    fn rounding_matches_integer_precision() {
        assert_eq!(Timestamp::from_f64_rounded(24.6), Timestamp::from(25));
        assert_eq!(Timestamp::from_f64_rounded(925.0), Timestamp::from(925));
    }
}
