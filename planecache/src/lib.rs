//! PlaneCache - deterministic prefetch ordering for multidimensional plane caches.
//!
//! Datasets addressed by an N-tuple of integer coordinates (focal depth,
//! channel, time point, …) are usually viewed one plane at a time, while the
//! neighboring planes are the ones most likely to be requested next. This
//! library answers exactly one question: given the current position and the
//! per-axis configuration, which positions are worth caching, in what order?
//!
//! The library performs no I/O and holds no cache state. An external cache
//! manager calls [`CacheStrategy::load_order`], walks the returned positions
//! best-first, and stops whenever its budget is exhausted. Eviction, in-flight
//! tracking, and recomputation triggers all belong to that manager.
//!
//! # Example
//!
//! ```
//! use planecache::{AxisConfig, CacheStrategy, Position};
//!
//! // Time axis of 8 points and focal axis of 7 planes, both fetched
//! // outward from the current position.
//! let strategy = CacheStrategy::crosshair(vec![
//!     AxisConfig::centered(8).unwrap(),
//!     AxisConfig::centered(7).unwrap(),
//! ])?;
//!
//! let order = strategy.load_order(&Position::new([3, 3]))?;
//!
//! // The current position always comes first, nearest neighbors next.
//! assert_eq!(order[0], Position::new([3, 3]));
//! assert_eq!(order[1], Position::new([4, 3]));
//! assert_eq!(order[2], Position::new([3, 4]));
//! # Ok::<(), planecache::StrategyError>(())
//! ```

pub mod axis;
pub mod candidate;
pub mod coord;
pub mod event;
pub mod rank;
pub mod strategy;

pub use axis::{AxisConfig, AxisOrder, AxisPriority, ConfigError, Side};
pub use candidate::{BlockGenerator, CandidateGenerator, CrosshairGenerator, MagnitudeVector};
pub use coord::{CoordError, Offset, Position, PositionSpace};
pub use event::RelaunchEvent;
pub use rank::{rank_candidates, RankedCandidate};
pub use strategy::{CacheStrategy, StrategyError};

/// Version of the PlaneCache library.
///
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
