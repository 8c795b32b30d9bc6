//! Error types for search construction and route queries.

use thiserror::Error;
use waypath_core::{Point, Range};

use crate::engine::SearchState;

/// Errors reported by [`SearchSource`](crate::SearchSource) and
/// [`SearchEngine`](crate::SearchEngine).
///
/// Running out of budget or failing to reach the goal is not an error; those
/// outcomes are [`SearchState`] values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The traversal budget must be positive.
    #[error("search budget must be positive, got {0}")]
    InvalidBudget(i32),

    /// The map rectangle must start at the origin.
    #[error("passability map bounds {0} do not start at (0, 0)")]
    MalformedBounds(Range),

    /// The map has no cells.
    #[error("passability map is empty")]
    EmptyMap,

    /// Coordinates must fit the 16-bit point key packing.
    #[error("map of {width}x{height} exceeds the 16-bit coordinate limit")]
    MapTooLarge {
        /// Map width in cells.
        width: i32,
        /// Map height in cells.
        height: i32,
    },

    /// The source's start and end were never set.
    #[error("search endpoints were not set")]
    EndpointsUnset,

    /// The source's endpoints can only be set once.
    #[error("search endpoints were already set")]
    EndpointsAlreadySet,

    /// The start lies outside the map.
    #[error("start {0} lies outside the map")]
    StartOutOfBounds(Point),

    /// The engine was initialised twice.
    #[error("search engine already initialised")]
    AlreadyInitialized,

    /// A route was requested before the search completed.
    #[error("no route available: search state is {0:?}")]
    RouteUnavailable(SearchState),
}
