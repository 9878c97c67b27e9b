//! Pathfinding for grid-based games.
//!
//! This crate provides a step-bounded **A\*** shortest-path search over 2D
//! grids ([`PathRange::astar_path`]), together with the distance helpers it
//! is built on.
//!
//! Movement is 8-directional with true-distance weighting: a cardinal step
//! costs [`CARDINAL_COST`] (1.0 scaled by 100) and a diagonal step costs
//! [`DIAGONAL_COST`] (1.41 scaled by 100). The search aborts when the best
//! route would take at least `max_steps` steps, so callers can discard
//! absurdly long detours and fall back to cheaper heuristics.
//!
//! The search operates through [`PathRange`], which owns and reuses internal
//! caches so that repeated queries incur zero allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Provides |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`WeightedPather`] : [`Pather`] | positive edge costs |
//! | [`AstarPather`] : [`WeightedPather`] | admissible heuristic |

mod astar;
mod distance;
mod pathrange;
mod traits;

pub use distance::{CARDINAL_COST, DIAGONAL_COST, chebyshev, manhattan, octile};
pub use pathrange::PathRange;
pub use traits::{AstarPather, Pather, WeightedPather};
