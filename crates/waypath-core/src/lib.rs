//! **waypath-core**: grid geometry and passability maps.
//!
//! This crate provides the foundational types used by the *waypath* search:
//! geometry primitives, a dense row-major grid container, and the
//! [`Passability`] boundary through which map generators hand their output
//! to the pathfinder.

pub mod geom;
pub mod grid;
pub mod passmap;

pub use geom::{Direction, Point, Range};
pub use grid::Grid;
pub use passmap::{Layout, LayoutError, PassMap, Passability};
