//! Cache strategy pipeline: candidate generation, ranking, resolution.
//!
//! A [`CacheStrategy`] ties the pieces together. At construction it builds
//! the [`PositionSpace`](crate::coord::PositionSpace) from the axis
//! configuration, asks the injected
//! [`CandidateGenerator`](crate::candidate::CandidateGenerator) for its
//! candidate set, and ranks it once: the order is a pure function of the
//! immutable configuration, so there is nothing to recompute per call.
//!
//! [`load_order`](CacheStrategy::load_order) then maps the precomputed
//! offsets onto a current position. The external cache manager walks the
//! returned positions in order, loading until its budget runs out; it may
//! stop early at any point.
//!
//! # Example
//!
//! ```
//! use planecache::axis::AxisConfig;
//! use planecache::coord::Position;
//! use planecache::strategy::CacheStrategy;
//!
//! // A 7-plane focal axis and an 8-point time axis, fetched outward from
//! // the current position.
//! let strategy = CacheStrategy::crosshair(vec![
//!     AxisConfig::centered(8).unwrap(),
//!     AxisConfig::centered(7).unwrap(),
//! ])
//! .unwrap();
//!
//! let order = strategy.load_order(&Position::new([3, 3])).unwrap();
//! assert_eq!(order[0], Position::new([3, 3]));
//! assert_eq!(order[1], Position::new([4, 3]));
//! ```

use thiserror::Error;
use tracing::{debug, trace};

use crate::axis::{AxisConfig, ConfigError};
use crate::candidate::{CandidateGenerator, CrosshairGenerator};
use crate::coord::{CoordError, Position, PositionSpace};
use crate::rank::{rank_candidates, RankedCandidate};

/// Errors raised when building a strategy or requesting a load order.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StrategyError {
    /// The axis configuration is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The supplied current position does not fit the space.
    #[error("invalid current position: {0}")]
    InvalidPosition(#[from] CoordError),

    /// A generator emitted a candidate with the wrong axis count.
    #[error("generator '{generator}' produced candidate {index} with {actual} axes, expected {expected}")]
    MalformedCandidate {
        generator: &'static str,
        index: usize,
        expected: usize,
        actual: usize,
    },
}

/// Decides which positions are worth caching next, and in what order.
///
/// Construction fixes the axis configuration and the candidate generator;
/// after that the strategy is immutable, cheap to query, and safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct CacheStrategy {
    axes: Vec<AxisConfig>,
    space: PositionSpace,
    ranked: Vec<RankedCandidate>,
    generator_name: &'static str,
}

impl CacheStrategy {
    /// Build a strategy from axis configuration and a candidate generator.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty axis set (axis lengths are
    /// validated by [`AxisConfig`] itself), and
    /// [`StrategyError::MalformedCandidate`] if the generator violates its
    /// one-entry-per-axis contract.
    pub fn new(
        axes: Vec<AxisConfig>,
        generator: &dyn CandidateGenerator,
    ) -> Result<Self, StrategyError> {
        let lengths: Vec<u32> = axes.iter().map(|axis| axis.length()).collect();
        let space = PositionSpace::new(lengths.clone())?;

        let candidates = generator.candidates(&lengths);
        for (index, candidate) in candidates.iter().enumerate() {
            if candidate.len() != axes.len() {
                return Err(StrategyError::MalformedCandidate {
                    generator: generator.name(),
                    index,
                    expected: axes.len(),
                    actual: candidate.len(),
                });
            }
        }

        let ranked = rank_candidates(&axes, &candidates);
        debug!(
            generator = generator.name(),
            axes = axes.len(),
            candidates = candidates.len(),
            ranked = ranked.len(),
            "cache strategy ready"
        );

        Ok(Self {
            axes,
            space,
            ranked,
            generator_name: generator.name(),
        })
    }

    /// Build a strategy with the default crosshair generator.
    pub fn crosshair(axes: Vec<AxisConfig>) -> Result<Self, StrategyError> {
        Self::new(axes, &CrosshairGenerator)
    }

    /// Absolute positions worth caching, best first.
    ///
    /// The first element is always `current` itself. Candidates that resolve
    /// outside the space are skipped, so near a dataset boundary the sequence
    /// is shorter than the full candidate count; that is expected, not an
    /// error.
    ///
    /// Deterministic: two calls with the same position return the same
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidPosition`] if `current` has the wrong
    /// axis count or lies outside the space.
    pub fn load_order(&self, current: &Position) -> Result<Vec<Position>, StrategyError> {
        self.space.validate(current)?;

        let mut order = Vec::with_capacity(self.ranked.len());
        for candidate in &self.ranked {
            // The only failure left here is a boundary overrun; skip it.
            if let Ok(position) = self.space.resolve(current, &candidate.offset) {
                order.push(position);
            }
        }

        trace!(
            position = %current,
            candidates = self.ranked.len(),
            returned = order.len(),
            "computed load order"
        );
        Ok(order)
    }

    /// The ranked candidate offsets this strategy applies, best first.
    pub fn ranked(&self) -> &[RankedCandidate] {
        &self.ranked
    }

    /// The coordinate space the strategy operates in.
    pub fn space(&self) -> &PositionSpace {
        &self.space
    }

    /// The axis configuration the strategy was built from.
    pub fn axes(&self) -> &[AxisConfig] {
        &self.axes
    }

    /// Name of the injected candidate generator, for operator-facing logs.
    pub fn generator_name(&self) -> &'static str {
        self.generator_name
    }
}
