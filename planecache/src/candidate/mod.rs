//! Candidate enumeration capability.
//!
//! A [`CandidateGenerator`] decides *which* neighborhoods of the current
//! position are eligible for caching; the [`rank`](crate::rank) module decides
//! in what order. Generators emit unsigned *magnitude vectors*: per-axis step
//! counts with direction deliberately left open, so a single enumeration
//! serves every combination of per-axis order policies.
//!
//! Generation depends only on the axis lengths, never on the current
//! position, which lets a strategy enumerate and rank once at construction
//! and reuse the result for every call.
//!
//! Implementations must be pure: same lengths in, same candidate set out.

mod block;
mod crosshair;

pub use block::BlockGenerator;
pub use crosshair::CrosshairGenerator;

/// Unsigned per-axis step counts, one entry per axis.
///
/// A value of `j` on axis `i` means "the j-th nearest eligible neighbor along
/// axis `i`"; the axis's order policy later turns it into a signed offset.
pub type MagnitudeVector = Vec<u32>;

/// Capability for enumerating candidate magnitude vectors.
pub trait CandidateGenerator: Send + Sync {
    /// Enumerate all candidate magnitude vectors for the given axis lengths.
    ///
    /// The zero vector (the current position itself) must be included exactly
    /// once. Every vector must have one entry per axis.
    fn candidates(&self, lengths: &[u32]) -> Vec<MagnitudeVector>;

    /// Short identifier for this generator, used in logs.
    fn name(&self) -> &'static str;

    /// One-line description of the generator's candidate shape.
    fn description(&self) -> &'static str;
}
