//! Crosshair candidate enumeration.

use super::{CandidateGenerator, MagnitudeVector};

/// Enumerates candidates that diverge from the current position along at most
/// one axis.
///
/// For a position Z5-C2-T18 this admits the neighboring focal planes
/// (Z4, Z6, …), the neighboring channels (C1, C3, …) and the neighboring time
/// points (T17, T19, …), but never a combination such as Z6-C3-T19. For axis
/// lengths `L_i` the candidate count is exactly `1 + Σ(L_i - 1)`: one zero
/// vector, plus one vector per axis per step. An axis of length 1 contributes
/// nothing: there is nowhere to diverge to.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrosshairGenerator;

impl CandidateGenerator for CrosshairGenerator {
    fn candidates(&self, lengths: &[u32]) -> Vec<MagnitudeVector> {
        let total: usize = 1 + lengths
            .iter()
            .map(|&len| (len as usize).saturating_sub(1))
            .sum::<usize>();

        let mut candidates = Vec::with_capacity(total);
        candidates.push(vec![0; lengths.len()]);
        for (axis, &len) in lengths.iter().enumerate() {
            for step in 1..len {
                let mut magnitudes = vec![0; lengths.len()];
                magnitudes[axis] = step;
                candidates.push(magnitudes);
            }
        }
        candidates
    }

    fn name(&self) -> &'static str {
        "crosshair"
    }

    fn description(&self) -> &'static str {
        "candidates diverge from the current position along at most one axis"
    }
}
