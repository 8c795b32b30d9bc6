//! The budget-bounded A* state machine.
//!
//! A [`SearchEngine`] runs one search over one [`SearchSource`]. Work is done
//! in bounded [`step`](SearchEngine::step)s so a host can spread a search over
//! several frames, or drive it to the end with
//! [`run_to_completion`](SearchEngine::run_to_completion).
//!
//! Two budget-derived limits apply:
//!
//! - nodes are only allocated inside the restriction box, `±max_cost` around
//!   the start on each axis;
//! - a node whose cost exceeds `2 × max_cost` is closed without expansion.

use log::{debug, trace, warn};
use waypath_core::{Grid, Passability, Point, Range};

use crate::distance::manhattan;
use crate::error::SearchError;
use crate::node::{NodeStatus, SearchNode};
use crate::open::OpenSet;
use crate::source::SearchSource;

/// Outcome of a search step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchState {
    /// More steps are needed.
    Searching,
    /// The frontier drained without reaching the goal.
    Incomplete,
    /// The goal was reached; a route is available.
    Completed,
    /// The engine was driven before [`SearchEngine::init`].
    Error,
}

impl SearchState {
    /// Whether further steps can change the outcome.
    #[inline]
    pub fn is_terminal(self) -> bool {
        self != SearchState::Searching
    }
}

/// One in-flight search.
///
/// The engine owns its node grid and frontier; independent searches need
/// independent engines.
pub struct SearchEngine<'a, M: Passability + ?Sized> {
    source: SearchSource<'a, M>,
    start: Point,
    end: Point,
    restriction: Range,
    prune_threshold: i32,
    nodes: Grid<Option<SearchNode>>,
    open: OpenSet,
    // scratch buffer for neighbour queries
    nbuf: Vec<Point>,
    state: SearchState,
    initialized: bool,
    steps: usize,
    last_expanded: Option<Point>,
}

impl<'a, M: Passability + ?Sized> SearchEngine<'a, M> {
    /// Build the node grid for `source`.
    ///
    /// Cells outside the restriction box get no node. Inside it, impassable
    /// cells are [`NodeStatus::Excluded`] and the rest
    /// [`NodeStatus::Unvisited`].
    pub fn new(source: SearchSource<'a, M>) -> Result<Self, SearchError> {
        let (Some(start), Some(end)) = (source.start(), source.end()) else {
            return Err(SearchError::EndpointsUnset);
        };
        let bounds = source.map().bounds();
        let restriction = Range::around(start, source.max_cost());

        let nodes = Grid::from_fn(bounds.width(), bounds.height(), |p| {
            if !restriction.contains(p) {
                return None;
            }
            let status = if source.can_move(p) {
                NodeStatus::Unvisited
            } else {
                NodeStatus::Excluded
            };
            Some(SearchNode::new(p, status))
        });

        debug!(
            "search {start} -> {end}: budget {}, box {restriction}, {} nodes on a {}x{} map",
            source.max_cost(),
            nodes.iter().filter(|(_, n)| n.is_some()).count(),
            bounds.width(),
            bounds.height(),
        );

        Ok(Self {
            prune_threshold: source.config().prune_threshold(),
            source,
            start,
            end,
            restriction,
            nodes,
            open: OpenSet::new(),
            nbuf: Vec::with_capacity(4),
            state: SearchState::Searching,
            initialized: false,
            steps: 0,
            last_expanded: None,
        })
    }

    /// Open the start node. Call once before stepping.
    ///
    /// The start is opened even when its cell is impassable.
    pub fn init(&mut self) -> Result<(), SearchError> {
        if self.initialized {
            return Err(SearchError::AlreadyInitialized);
        }
        let Some(idx) = self.nodes.index_of(self.start) else {
            return Err(SearchError::StartOutOfBounds(self.start));
        };
        let root = SearchNode {
            position: self.start,
            status: NodeStatus::Open,
            cost: 0,
            heuristic: manhattan(self.start, self.end),
            parent: None,
        };
        let score = root.score();
        *self.nodes.by_index_mut(idx) = Some(root);
        self.open.push(idx, score);
        self.initialized = true;
        Ok(())
    }

    /// Expand the best open node.
    ///
    /// Once a terminal state is reached it is returned again by every later
    /// call without touching the search state.
    pub fn step(&mut self) -> SearchState {
        if !self.initialized {
            warn!("search step requested before init");
            return SearchState::Error;
        }
        if self.state.is_terminal() {
            return self.state;
        }
        self.steps += 1;
        self.state = self.expand();
        if self.state.is_terminal() {
            debug!(
                "search {} -> {} finished {:?} after {} steps",
                self.start, self.end, self.state, self.steps
            );
        }
        self.state
    }

    fn expand(&mut self) -> SearchState {
        let Some(ci) = self.open.pop() else {
            return SearchState::Incomplete;
        };
        // The open set only ever holds allocated nodes.
        let Some(current) = self.nodes.by_index_mut(ci).as_mut() else {
            return SearchState::Error;
        };
        current.status = NodeStatus::Closed;
        let pos = current.position;
        let cost = current.cost;
        self.last_expanded = Some(pos);
        trace!("expand {pos}: cost {cost}, score {}", current.score());

        if cost > self.prune_threshold {
            return SearchState::Searching;
        }
        if pos == self.end {
            return SearchState::Completed;
        }

        let mut nbuf = std::mem::take(&mut self.nbuf);
        nbuf.clear();
        self.source.around_4(pos, &mut nbuf);

        let mut state = SearchState::Searching;
        for &np in nbuf.iter() {
            let Some(ni) = self.nodes.index_of(np) else {
                continue;
            };
            let Some(n) = self.nodes.by_index_mut(ni).as_mut() else {
                continue;
            };
            if n.status != NodeStatus::Unvisited {
                continue;
            }
            n.cost = cost + 1;
            n.heuristic = manhattan(np, self.end);
            n.status = NodeStatus::Open;
            n.parent = Some(ci);
            let score = n.score();
            self.open.push(ni, score);

            if np == self.end {
                state = SearchState::Completed;
                break;
            }
        }

        self.nbuf = nbuf;
        state
    }

    /// Step until a terminal state is reached.
    pub fn run_to_completion(&mut self) -> SearchState {
        loop {
            let state = self.step();
            if state.is_terminal() {
                return state;
            }
        }
    }

    /// Step at most `max_steps` times. Returns [`SearchState::Searching`] if
    /// the search is still running afterwards.
    pub fn run_for(&mut self, max_steps: usize) -> SearchState {
        for _ in 0..max_steps {
            let state = self.step();
            if state.is_terminal() {
                return state;
            }
        }
        self.state
    }

    /// The route from start to goal, both included.
    ///
    /// Only available after the search returned [`SearchState::Completed`]
    /// and while the parent chain from the goal stays inside the node grid.
    pub fn route(&self) -> Result<Vec<Point>, SearchError> {
        if self.state != SearchState::Completed {
            return Err(SearchError::RouteUnavailable(self.state));
        }
        let Some(goal) = self.nodes.index_of(self.end) else {
            return Err(SearchError::RouteUnavailable(self.state));
        };

        let mut path = Vec::new();
        let mut cur = Some(goal);
        while let Some(i) = cur {
            let slot = (i < self.nodes.len()).then(|| self.nodes.by_index(i));
            let Some(Some(n)) = slot else {
                return Err(SearchError::RouteUnavailable(self.state));
            };
            path.push(n.position);
            cur = n.parent;
        }
        path.reverse();
        Ok(path)
    }

    /// Cost of the route to the goal, once completed.
    pub fn route_cost(&self) -> Option<i32> {
        if self.state != SearchState::Completed {
            return None;
        }
        self.node(self.end).map(|n| n.cost)
    }

    // -----------------------------------------------------------------------
    // Diagnostics
    // -----------------------------------------------------------------------

    /// The source this engine reads from.
    pub fn source(&self) -> &SearchSource<'a, M> {
        &self.source
    }

    /// Search start.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Search goal.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Traversal budget.
    pub fn max_cost(&self) -> i32 {
        self.source.max_cost()
    }

    /// The `±max_cost` box around the start where nodes exist.
    pub fn restriction_box(&self) -> Range {
        self.restriction
    }

    /// The node at `p`, if `p` is on the map and inside the restriction box.
    pub fn node(&self, p: Point) -> Option<&SearchNode> {
        self.nodes.at(p).and_then(Option::as_ref)
    }

    /// The parent of `node`, if it has one.
    pub fn parent_of(&self, node: &SearchNode) -> Option<&SearchNode> {
        node.parent.and_then(|i| self.nodes.by_index(i).as_ref())
    }

    /// Every allocated node, in row-major order.
    pub fn nodes(&self) -> impl Iterator<Item = &SearchNode> + '_ {
        self.nodes.iter().filter_map(|(_, n)| n.as_ref())
    }

    /// Number of nodes waiting in the frontier.
    pub fn open_len(&self) -> usize {
        self.open.len()
    }

    /// Number of steps that did work.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// The most recent step result (`Searching` before the first step).
    pub fn state(&self) -> SearchState {
        self.state
    }

    /// Position of the node most recently taken from the frontier.
    pub fn last_expanded(&self) -> Option<Point> {
        self.last_expanded
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_state_round_trip() {
        for state in [
            SearchState::Searching,
            SearchState::Incomplete,
            SearchState::Completed,
            SearchState::Error,
        ] {
            let json = serde_json::to_string(&state).unwrap();
            let back: SearchState = serde_json::from_str(&json).unwrap();
            assert_eq!(state, back);
        }
        assert_eq!(
            serde_json::to_string(&SearchState::Completed).unwrap(),
            "\"Completed\""
        );
    }
}
