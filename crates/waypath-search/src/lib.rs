//! Budget-bounded grid pathfinding.
//!
//! This crate finds minimal-cost cardinal routes across a passability map
//! with an A\* search whose reach is capped by a traversal budget:
//!
//! - [`SearchSource`] wraps any [`Passability`](waypath_core::Passability)
//!   map together with the start, goal and budget;
//! - [`SearchEngine`] owns the per-cell [`SearchNode`]s and the frontier and
//!   advances the search one [`step`](SearchEngine::step) at a time;
//! - [`SearchEngine::route`] rebuilds the start-to-goal route once the search
//!   is [`Completed`](SearchState::Completed).
//!
//! Every move costs 1 and the heuristic is [`manhattan`] distance.
//!
//! ```
//! use waypath_core::{PassMap, Point};
//! use waypath_search::{SearchEngine, SearchSource, SearchState};
//!
//! let map = PassMap::open(5, 5);
//! let source = SearchSource::new(&map, 10)?.with_endpoints(Point::new(0, 0), Point::new(3, 3))?;
//! let mut engine = SearchEngine::new(source)?;
//! engine.init()?;
//! assert_eq!(engine.run_to_completion(), SearchState::Completed);
//! assert_eq!(engine.route()?.len(), 7);
//! # Ok::<(), waypath_search::SearchError>(())
//! ```

mod config;
mod distance;
mod engine;
mod error;
mod node;
mod open;
mod source;

pub use config::SearchConfig;
pub use distance::manhattan;
pub use engine::{SearchEngine, SearchState};
pub use error::SearchError;
pub use node::{NodeStatus, SearchNode};
pub use source::{MAX_DIMENSION, SearchSource};
