use waypath_core::Point;

/// Lifecycle of a search node.
///
/// Transitions only move forward: `Unvisited → Open → Closed`. `Excluded`
/// is assigned at construction to impassable cells and never changes, except
/// that the start cell is always opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeStatus {
    #[default]
    Unvisited,
    Open,
    Closed,
    Excluded,
}

/// Per-cell search state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchNode {
    pub position: Point,
    pub status: NodeStatus,
    /// Steps taken from the start.
    pub cost: i32,
    /// Manhattan distance to the goal.
    pub heuristic: i32,
    /// Linear index of the parent in the engine's node grid. `None` for the
    /// root and for nodes not yet discovered.
    pub parent: Option<usize>,
}

impl SearchNode {
    pub(crate) fn new(position: Point, status: NodeStatus) -> Self {
        Self {
            position,
            status,
            cost: 0,
            heuristic: 0,
            parent: None,
        }
    }

    /// `cost + heuristic`, saturating; the open set expands the lowest
    /// score first.
    #[inline]
    pub fn score(&self) -> i32 {
        self.cost.saturating_add(self.heuristic)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn search_node_round_trip() {
        let node = SearchNode {
            position: Point::new(4, 2),
            status: NodeStatus::Closed,
            cost: 3,
            heuristic: 5,
            parent: Some(17),
        };
        let json = serde_json::to_string(&node).unwrap();
        let back: SearchNode = serde_json::from_str(&json).unwrap();
        assert_eq!(node, back);

        let root = SearchNode::new(Point::ZERO, NodeStatus::Excluded);
        let json = serde_json::to_string(&root).unwrap();
        let back: SearchNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back.parent, None);
        assert_eq!(back.status, NodeStatus::Excluded);
    }
}
