//! The N-dimensional coordinate space and bounds arithmetic.
//!
//! A [`PositionSpace`] is defined by per-axis lengths. It validates positions
//! supplied by callers and resolves candidate offsets into absolute positions,
//! reporting (never wrapping) results that fall outside an axis.
//!
//! Out-of-range resolution is an expected outcome near dataset boundaries:
//! callers discard those candidates and move on. Malformed input (wrong axis
//! count, a current position outside the space) is a usage error and is
//! surfaced as such.

mod types;

pub use types::{CoordError, Offset, Position};

use crate::axis::ConfigError;

/// The coordinate space spanned by per-axis lengths.
///
/// Immutable once constructed. Axis `i` admits coordinates in
/// `0..lengths[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionSpace {
    lengths: Vec<u32>,
}

impl PositionSpace {
    /// Create a space from per-axis lengths.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoAxes`] for an empty length list and
    /// [`ConfigError::ZeroLength`] if any axis has length zero.
    pub fn new(lengths: impl Into<Vec<u32>>) -> Result<Self, ConfigError> {
        let lengths = lengths.into();
        if lengths.is_empty() {
            return Err(ConfigError::NoAxes);
        }
        if lengths.iter().any(|&len| len == 0) {
            return Err(ConfigError::ZeroLength);
        }
        Ok(Self { lengths })
    }

    /// Number of axes in this space.
    #[inline]
    pub fn num_axes(&self) -> usize {
        self.lengths.len()
    }

    /// Per-axis lengths, in declaration order.
    #[inline]
    pub fn lengths(&self) -> &[u32] {
        &self.lengths
    }

    /// True iff `position` has the right axis count and every coordinate is
    /// within its axis.
    pub fn contains(&self, position: &Position) -> bool {
        self.validate(position).is_ok()
    }

    /// Strict form of [`contains`](Self::contains): identifies the offending
    /// axis on failure.
    pub fn validate(&self, position: &Position) -> Result<(), CoordError> {
        if position.num_axes() != self.num_axes() {
            return Err(CoordError::AxisCountMismatch {
                expected: self.num_axes(),
                actual: position.num_axes(),
            });
        }
        for (axis, (&value, &length)) in position.coords().iter().zip(&self.lengths).enumerate() {
            if value >= length {
                return Err(CoordError::CoordinateOutOfRange {
                    axis,
                    value,
                    length,
                });
            }
        }
        Ok(())
    }

    /// Apply `offset` to `position`, yielding the absolute position.
    ///
    /// Arithmetic is widened so it cannot overflow. A result outside any axis
    /// is reported as [`CoordError::OffsetOutOfRange`]; callers enumerating
    /// candidates treat that as "skip this one", not as a failure.
    pub fn resolve(&self, position: &Position, offset: &Offset) -> Result<Position, CoordError> {
        if offset.num_axes() != self.num_axes() {
            return Err(CoordError::AxisCountMismatch {
                expected: self.num_axes(),
                actual: offset.num_axes(),
            });
        }
        self.validate(position)?;

        let mut coords = Vec::with_capacity(self.num_axes());
        for (axis, ((&base, &component), &length)) in position
            .coords()
            .iter()
            .zip(offset.components())
            .zip(&self.lengths)
            .enumerate()
        {
            let resolved = i64::from(base) + component;
            if resolved < 0 || resolved >= i64::from(length) {
                return Err(CoordError::OffsetOutOfRange {
                    axis,
                    base,
                    offset: component,
                    length,
                });
            }
            coords.push(resolved as u32);
        }
        Ok(Position::new(coords))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_axes() {
        let result = PositionSpace::new(Vec::new());
        assert_eq!(result.unwrap_err(), ConfigError::NoAxes);
    }

    #[test]
    fn test_new_rejects_zero_length_axis() {
        let result = PositionSpace::new([7, 0, 3]);
        assert_eq!(result.unwrap_err(), ConfigError::ZeroLength);
    }

    #[test]
    fn test_contains() {
        let space = PositionSpace::new([7, 8]).unwrap();

        assert!(space.contains(&Position::new([0, 0])));
        assert!(space.contains(&Position::new([6, 7])));
        assert!(!space.contains(&Position::new([7, 0])), "row out of range");
        assert!(!space.contains(&Position::new([0, 8])), "column out of range");
        assert!(!space.contains(&Position::new([0, 0, 0])), "wrong arity");
    }

    #[test]
    fn test_validate_names_offending_axis() {
        let space = PositionSpace::new([7, 8]).unwrap();

        let err = space.validate(&Position::new([3, 9])).unwrap_err();
        assert_eq!(
            err,
            CoordError::CoordinateOutOfRange {
                axis: 1,
                value: 9,
                length: 8
            }
        );
    }

    #[test]
    fn test_resolve_in_bounds() {
        let space = PositionSpace::new([7, 8]).unwrap();
        let pos = Position::new([3, 3]);

        let resolved = space.resolve(&pos, &Offset::new([-1, 2])).unwrap();
        assert_eq!(resolved, Position::new([2, 5]));
    }

    #[test]
    fn test_resolve_reports_boundary_overrun() {
        let space = PositionSpace::new([7, 8]).unwrap();
        let pos = Position::new([0, 7]);

        let below = space.resolve(&pos, &Offset::new([-1, 0])).unwrap_err();
        assert_eq!(
            below,
            CoordError::OffsetOutOfRange {
                axis: 0,
                base: 0,
                offset: -1,
                length: 7
            }
        );

        let above = space.resolve(&pos, &Offset::new([0, 1])).unwrap_err();
        assert_eq!(
            above,
            CoordError::OffsetOutOfRange {
                axis: 1,
                base: 7,
                offset: 1,
                length: 8
            }
        );
    }

    #[test]
    fn test_resolve_rejects_arity_mismatch() {
        let space = PositionSpace::new([7, 8]).unwrap();
        let err = space
            .resolve(&Position::new([3, 3]), &Offset::new([1]))
            .unwrap_err();
        assert_eq!(
            err,
            CoordError::AxisCountMismatch {
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_resolve_zero_offset_is_identity() {
        let space = PositionSpace::new([7, 8]).unwrap();
        let pos = Position::new([3, 3]);
        let resolved = space.resolve(&pos, &Offset::zero(2)).unwrap();
        assert_eq!(resolved, pos);
    }

    // Property-based tests using proptest
    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn test_resolve_stays_in_bounds(
                lengths in proptest::collection::vec(1u32..50, 1..5),
                seed in any::<u64>(),
            ) {
                let space = PositionSpace::new(lengths.clone()).unwrap();

                // Derive a valid position and an arbitrary small offset from the seed.
                let coords: Vec<u32> = lengths
                    .iter()
                    .enumerate()
                    .map(|(i, &len)| ((seed >> (i * 8)) as u32) % len)
                    .collect();
                let offset: Vec<i64> = lengths
                    .iter()
                    .enumerate()
                    .map(|(i, _)| ((seed >> (i * 8 + 4)) as i64 % 7) - 3)
                    .collect();

                let pos = Position::new(coords);
                prop_assert!(space.contains(&pos));

                // Whatever resolve returns, it is either in bounds or a
                // boundary overrun on a named axis; never a wrapped position.
                match space.resolve(&pos, &Offset::new(offset)) {
                    Ok(resolved) => prop_assert!(space.contains(&resolved)),
                    Err(CoordError::OffsetOutOfRange { axis, .. }) => {
                        prop_assert!(axis < space.num_axes())
                    }
                    Err(other) => prop_assert!(false, "unexpected error: {other}"),
                }
            }
        }
    }
}
