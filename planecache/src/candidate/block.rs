//! Block candidate enumeration.

use super::{CandidateGenerator, MagnitudeVector};

/// Enumerates every combination of per-axis steps.
///
/// Where [`CrosshairGenerator`](super::CrosshairGenerator) restricts
/// candidates to a single diverging axis, the block generator admits the full
/// neighborhood: every vector `(j_0, …, j_{n-1})` with `j_i < L_i`, for a
/// total of `Π L_i` candidates. That is the whole addressable space, so this
/// variant is meant for small spaces or for axes carrying a
/// [range cap](crate::axis::AxisConfig::with_range) that bounds the realized
/// volume.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockGenerator;

impl CandidateGenerator for BlockGenerator {
    fn candidates(&self, lengths: &[u32]) -> Vec<MagnitudeVector> {
        if lengths.contains(&0) {
            return Vec::new();
        }

        let mut candidates = Vec::new();
        let mut current = vec![0u32; lengths.len()];
        loop {
            candidates.push(current.clone());

            // Odometer increment, last axis fastest.
            let mut axis = lengths.len();
            loop {
                if axis == 0 {
                    return candidates;
                }
                axis -= 1;
                current[axis] += 1;
                if current[axis] < lengths[axis] {
                    break;
                }
                current[axis] = 0;
            }
        }
    }

    fn name(&self) -> &'static str {
        "block"
    }

    fn description(&self) -> &'static str {
        "candidates cover every combination of axis steps"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_is_product_of_lengths() {
        let candidates = BlockGenerator.candidates(&[3, 4, 2]);
        assert_eq!(candidates.len(), 24);
    }

    #[test]
    fn test_zero_vector_is_first_and_unique() {
        let candidates = BlockGenerator.candidates(&[2, 3]);
        assert_eq!(candidates[0], vec![0, 0]);
        let zero_count = candidates.iter().filter(|c| c.iter().all(|&m| m == 0)).count();
        assert_eq!(zero_count, 1);
    }

    #[test]
    fn test_candidates_are_distinct() {
        let candidates = BlockGenerator.candidates(&[2, 2, 2]);
        let mut seen = std::collections::HashSet::new();
        for candidate in &candidates {
            assert!(seen.insert(candidate.clone()), "duplicate {candidate:?}");
        }
    }

    #[test]
    fn test_single_axis_matches_crosshair_shape() {
        let candidates = BlockGenerator.candidates(&[5]);
        let steps: Vec<u32> = candidates.iter().map(|c| c[0]).collect();
        assert_eq!(steps, vec![0, 1, 2, 3, 4]);
    }
}
