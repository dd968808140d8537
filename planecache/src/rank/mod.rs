//! Proximity ranking: from magnitude vectors to the total prefetch order.
//!
//! Turns the unsigned candidates of a
//! [`CandidateGenerator`](crate::candidate::CandidateGenerator) into a single
//! fully ordered list of signed offsets, ready to be added to the current
//! position.
//!
//! # Algorithm
//!
//! 1. Realize each non-zero component as a signed offset according to the
//!    axis's order policy. Ascending axes step positive (+1, +2, …),
//!    descending axes negative (-1, -2, …), centered axes alternate around
//!    the current position nearest-first (+1, -1, +2, -2, … with the
//!    configured preferred side taking the first slot of each pair).
//! 2. Drop any candidate whose realized distance on some axis exceeds that
//!    axis's range cap.
//! 3. Sort what remains by squared Euclidean distance (primary), axis
//!    priority descending, sign slot (preferred side first), then axis
//!    declaration index. The sort is stable, so the order is deterministic
//!    for any generator output.
//!
//! Rank 0 is always the zero offset: it is the only candidate at distance 0.
//!
//! For a candidate diverging on several axes (the block generator), the
//! priority key is the highest priority among its diverging axes, the sign
//! slot the least-preferred among them, and the axis index that of the first
//! diverging axis.

use std::cmp::Reverse;

use crate::axis::{AxisConfig, AxisOrder, Side};
use crate::candidate::MagnitudeVector;
use crate::coord::Offset;

/// A signed candidate offset with its place in the prefetch order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedCandidate {
    /// Position in the prefetch order; 0 is the current position itself.
    pub rank: usize,
    /// Signed displacement from the current position.
    pub offset: Offset,
    /// Squared Euclidean distance of the realized offset.
    pub distance_sq: u64,
}

/// One realized axis step: signed offset component, distance, and sign slot.
fn realize(axis: &AxisConfig, step: u32) -> (i64, u32, u8) {
    match axis.order() {
        AxisOrder::Ascending => (i64::from(step), step, 0),
        AxisOrder::Descending => (-i64::from(step), step, 0),
        AxisOrder::Centered => {
            // Steps alternate sides nearest-first: step 1, 2, 3, 4 realize as
            // distances 1, 1, 2, 2 with odd steps on the preferred side.
            let distance = (step + 1) / 2;
            let slot = if step % 2 == 1 { 0 } else { 1 };
            let positive = match axis.preferred_side() {
                Side::Positive => slot == 0,
                Side::Negative => slot == 1,
            };
            let component = if positive {
                i64::from(distance)
            } else {
                -i64::from(distance)
            };
            (component, distance, slot)
        }
    }
}

/// Produce the total prefetch order for `candidates` under `axes`.
///
/// Pure: depends only on the arguments, and identical inputs produce an
/// identical order. Every candidate must span exactly `axes.len()` axes;
/// the caller validates generator output before ranking.
pub fn rank_candidates(
    axes: &[AxisConfig],
    candidates: &[MagnitudeVector],
) -> Vec<RankedCandidate> {
    struct Entry {
        key: (u64, Reverse<i32>, u8, usize),
        offset: Vec<i64>,
        distance_sq: u64,
    }

    let mut entries: Vec<Entry> = Vec::with_capacity(candidates.len());

    'candidates: for magnitudes in candidates {
        debug_assert_eq!(magnitudes.len(), axes.len());

        let mut offset = vec![0i64; axes.len()];
        let mut distance_sq: u64 = 0;
        let mut priority = i32::MIN;
        let mut slot: u8 = 0;
        let mut first_axis = 0usize;
        let mut diverged = false;

        for (axis_index, (&step, axis)) in magnitudes.iter().zip(axes).enumerate() {
            if step == 0 {
                continue;
            }
            let (component, distance, axis_slot) = realize(axis, step);
            if let Some(cap) = axis.range() {
                if distance > cap {
                    continue 'candidates;
                }
            }
            offset[axis_index] = component;
            distance_sq += u64::from(distance) * u64::from(distance);
            priority = priority.max(axis.priority().weight());
            slot = slot.max(axis_slot);
            if !diverged {
                first_axis = axis_index;
                diverged = true;
            }
        }

        entries.push(Entry {
            key: (distance_sq, Reverse(priority), slot, first_axis),
            offset,
            distance_sq,
        });
    }

    entries.sort_by(|a, b| a.key.cmp(&b.key));

    entries
        .into_iter()
        .enumerate()
        .map(|(rank, entry)| RankedCandidate {
            rank,
            offset: Offset::new(entry.offset),
            distance_sq: entry.distance_sq,
        })
        .collect()
}
