//! Coordinate and offset tuple types.

use std::fmt;

use thiserror::Error;

/// A full dimensional position: one coordinate per axis.
///
/// Positions are plain value types; whether a position is addressable is
/// decided by the [`PositionSpace`](super::PositionSpace) it is checked
/// against.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position(Vec<u32>);

impl Position {
    /// Create a position from per-axis coordinates.
    pub fn new(coords: impl Into<Vec<u32>>) -> Self {
        Self(coords.into())
    }

    /// Per-axis coordinates, in axis declaration order.
    #[inline]
    pub fn coords(&self) -> &[u32] {
        &self.0
    }

    /// Number of axes this position spans.
    #[inline]
    pub fn num_axes(&self) -> usize {
        self.0.len()
    }
}

impl From<Vec<u32>> for Position {
    fn from(coords: Vec<u32>) -> Self {
        Self(coords)
    }
}

impl From<&[u32]> for Position {
    fn from(coords: &[u32]) -> Self {
        Self(coords.to_vec())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", c)?;
        }
        write!(f, ")")
    }
}

/// A signed per-axis displacement from a reference position.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Offset(Vec<i64>);

impl Offset {
    /// Create an offset from per-axis components.
    pub fn new(components: impl Into<Vec<i64>>) -> Self {
        Self(components.into())
    }

    /// The zero displacement over `num_axes` axes.
    pub fn zero(num_axes: usize) -> Self {
        Self(vec![0; num_axes])
    }

    /// An offset diverging on a single axis.
    pub fn single_axis(num_axes: usize, axis: usize, component: i64) -> Self {
        let mut components = vec![0; num_axes];
        components[axis] = component;
        Self(components)
    }

    /// Per-axis components, in axis declaration order.
    #[inline]
    pub fn components(&self) -> &[i64] {
        &self.0
    }

    /// Number of axes this offset spans.
    #[inline]
    pub fn num_axes(&self) -> usize {
        self.0.len()
    }

    /// True iff every component is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }
}

impl From<Vec<i64>> for Offset {
    fn from(components: Vec<i64>) -> Self {
        Self(components)
    }
}

impl fmt::Display for Offset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{:+}", c)?;
        }
        write!(f, ")")
    }
}

/// Errors raised when positions or offsets do not fit a coordinate space.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoordError {
    /// Tuple arity does not match the space's axis count.
    #[error("expected {expected} axes, got {actual}")]
    AxisCountMismatch { expected: usize, actual: usize },

    /// A coordinate lies outside its axis.
    #[error("coordinate {value} on axis {axis} is outside 0..{length}")]
    CoordinateOutOfRange { axis: usize, value: u32, length: u32 },

    /// Applying an offset pushed a coordinate outside its axis.
    #[error("offset {offset:+} from coordinate {base} on axis {axis} leaves 0..{length}")]
    OffsetOutOfRange {
        axis: usize,
        base: u32,
        offset: i64,
        length: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_display() {
        let pos = Position::new([3, 4, 2]);
        assert_eq!(pos.to_string(), "(3, 4, 2)");
    }

    #[test]
    fn test_offset_display_signs() {
        let offset = Offset::new([1, -2, 0]);
        assert_eq!(offset.to_string(), "(+1, -2, +0)");
    }

    #[test]
    fn test_offset_zero() {
        let zero = Offset::zero(3);
        assert!(zero.is_zero());
        assert_eq!(zero.num_axes(), 3);
        assert!(!Offset::new([0, 1, 0]).is_zero());
    }

    #[test]
    fn test_offset_single_axis() {
        let offset = Offset::single_axis(3, 1, -2);
        assert_eq!(offset.components(), &[0, -2, 0]);
    }
}
