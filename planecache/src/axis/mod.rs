//! Per-axis prefetch configuration.
//!
//! Each dimension of a dataset is described by an [`AxisConfig`]: how long the
//! axis is, in which direction neighboring positions are worth fetching
//! ([`AxisOrder`]), and how urgent that axis is relative to the others
//! ([`AxisPriority`]). The configuration is validated at construction and
//! immutable afterwards, so a strategy built from it can be shared freely
//! across threads.
//!
//! # Example
//!
//! ```
//! use planecache::axis::{AxisConfig, AxisOrder, AxisPriority};
//!
//! // A focal-depth axis of 30 planes, fetched outward from the current plane.
//! let z = AxisConfig::new(30, AxisOrder::Centered, AxisPriority::High).unwrap();
//! assert_eq!(z.length(), 30);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when axis configuration is invalid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// An axis was declared with length zero.
    #[error("axis length must be at least 1")]
    ZeroLength,

    /// A coordinate space needs at least one axis.
    #[error("at least one axis is required")]
    NoAxes,
}

/// Direction policy for realizing offsets along one axis.
///
/// The order decides which side of the current position an axis's candidates
/// land on, and in which sequence. No wraparound is ever performed: offsets
/// that would leave the axis are discarded at resolution time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisOrder {
    /// Strictly positive offsets, nearest first: +1, +2, +3, …
    Ascending,
    /// Strictly negative offsets, nearest first: -1, -2, -3, …
    Descending,
    /// Alternating signed offsets, nearest first: +1, -1, +2, -2, …
    ///
    /// The equal-distance tie between `+k` and `-k` goes to the axis's
    /// [preferred side](AxisConfig::preferred_side).
    Centered,
}

/// Relative importance of an axis when breaking equal-distance ties
/// between candidates on different axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AxisPriority {
    Low,
    Normal,
    High,
}

impl AxisPriority {
    /// Numeric weight of this priority; higher weights are fetched earlier
    /// within a distance tier.
    pub fn weight(self) -> i32 {
        match self {
            AxisPriority::Low => -5,
            AxisPriority::Normal => 0,
            AxisPriority::High => 5,
        }
    }
}

/// Which sign wins the equal-distance tie on a [`Centered`](AxisOrder::Centered) axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// `+k` is fetched before `-k`.
    #[default]
    Positive,
    /// `-k` is fetched before `+k`.
    Negative,
}

/// Immutable configuration for one axis of the coordinate space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisConfig {
    length: u32,
    order: AxisOrder,
    priority: AxisPriority,
    #[serde(default)]
    range: Option<u32>,
    #[serde(default)]
    preferred_side: Side,
}

impl AxisConfig {
    /// Create an axis configuration.
    ///
    /// The range cap defaults to `None` (the whole axis is eligible) and the
    /// preferred side to [`Side::Positive`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroLength`] if `length` is zero.
    pub fn new(length: u32, order: AxisOrder, priority: AxisPriority) -> Result<Self, ConfigError> {
        if length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        Ok(Self {
            length,
            order,
            priority,
            range: None,
            preferred_side: Side::default(),
        })
    }

    /// Centered axis with normal priority.
    pub fn centered(length: u32) -> Result<Self, ConfigError> {
        Self::new(length, AxisOrder::Centered, AxisPriority::Normal)
    }

    /// Ascending axis with normal priority.
    pub fn ascending(length: u32) -> Result<Self, ConfigError> {
        Self::new(length, AxisOrder::Ascending, AxisPriority::Normal)
    }

    /// Descending axis with normal priority.
    pub fn descending(length: u32) -> Result<Self, ConfigError> {
        Self::new(length, AxisOrder::Descending, AxisPriority::Normal)
    }

    /// Cap realized offsets on this axis to at most `range` steps from the
    /// current position.
    pub fn with_range(mut self, range: u32) -> Self {
        self.range = Some(range);
        self
    }

    /// Set which side wins the equal-distance tie on a centered axis.
    ///
    /// Has no effect on ascending or descending axes.
    pub fn with_preferred_side(mut self, side: Side) -> Self {
        self.preferred_side = side;
        self
    }

    /// Set the axis priority.
    pub fn with_priority(mut self, priority: AxisPriority) -> Self {
        self.priority = priority;
        self
    }

    /// Number of addressable coordinates on this axis.
    pub fn length(&self) -> u32 {
        self.length
    }

    /// Direction policy for this axis.
    pub fn order(&self) -> AxisOrder {
        self.order
    }

    /// Tie-break priority of this axis.
    pub fn priority(&self) -> AxisPriority {
        self.priority
    }

    /// Per-axis distance cap, if any.
    pub fn range(&self) -> Option<u32> {
        self.range
    }

    /// Preferred sign for equal-distance centered candidates.
    pub fn preferred_side(&self) -> Side {
        self.preferred_side
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero_length() {
        let result = AxisConfig::new(0, AxisOrder::Centered, AxisPriority::Normal);
        assert_eq!(result.unwrap_err(), ConfigError::ZeroLength);
    }

    #[test]
    fn test_new_defaults() {
        let axis = AxisConfig::new(7, AxisOrder::Centered, AxisPriority::Normal).unwrap();
        assert_eq!(axis.length(), 7);
        assert_eq!(axis.order(), AxisOrder::Centered);
        assert_eq!(axis.priority(), AxisPriority::Normal);
        assert_eq!(axis.range(), None, "range cap should default to unlimited");
        assert_eq!(axis.preferred_side(), Side::Positive);
    }

    #[test]
    fn test_convenience_constructors() {
        assert_eq!(AxisConfig::centered(3).unwrap().order(), AxisOrder::Centered);
        assert_eq!(
            AxisConfig::ascending(3).unwrap().order(),
            AxisOrder::Ascending
        );
        assert_eq!(
            AxisConfig::descending(3).unwrap().order(),
            AxisOrder::Descending
        );
    }

    #[test]
    fn test_builder_methods() {
        let axis = AxisConfig::centered(10)
            .unwrap()
            .with_range(2)
            .with_priority(AxisPriority::High)
            .with_preferred_side(Side::Negative);

        assert_eq!(axis.range(), Some(2));
        assert_eq!(axis.priority(), AxisPriority::High);
        assert_eq!(axis.preferred_side(), Side::Negative);
    }

    #[test]
    fn test_priority_weight_ordering() {
        assert!(AxisPriority::High.weight() > AxisPriority::Normal.weight());
        assert!(AxisPriority::Normal.weight() > AxisPriority::Low.weight());
        // Ord agrees with the numeric weights
        assert!(AxisPriority::High > AxisPriority::Normal);
        assert!(AxisPriority::Normal > AxisPriority::Low);
    }

    #[test]
    fn test_serde_round_trip() {
        let axis = AxisConfig::new(12, AxisOrder::Descending, AxisPriority::Low)
            .unwrap()
            .with_range(4);

        let json = serde_json::to_string(&axis).expect("serialize");
        let back: AxisConfig = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, axis);
    }

    #[test]
    fn test_serde_defaults_optional_fields() {
        // Older configurations without range/preferred_side still load.
        let json = r#"{"length":5,"order":"Centered","priority":"Normal"}"#;
        let axis: AxisConfig = serde_json::from_str(json).expect("deserialize");
        assert_eq!(axis.range(), None);
        assert_eq!(axis.preferred_side(), Side::Positive);
    }
}
