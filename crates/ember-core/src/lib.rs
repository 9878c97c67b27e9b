//! **ember-core** — shared geometry primitives for the ember crates.
//!
//! Provides the integer [`Point`] and half-open rectangle [`Range`] used by
//! the pathfinding and game crates.

pub mod geom;

pub use geom::{Point, Range, RangeIter};
