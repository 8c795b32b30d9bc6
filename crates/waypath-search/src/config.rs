use crate::error::SearchError;

/// Tunable search parameters.
///
/// Hosts that keep their settings in files can deserialize this directly
/// with the `serde` feature enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Traversal budget. Bounds the restriction box (`±max_cost` around the
    /// start) and the pruning threshold (`2 × max_cost`).
    pub max_cost: i32,
}

impl SearchConfig {
    /// Create a config with the given budget.
    pub const fn new(max_cost: i32) -> Self {
        Self { max_cost }
    }

    /// Check that the budget is usable.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_cost <= 0 {
            return Err(SearchError::InvalidBudget(self.max_cost));
        }
        Ok(())
    }

    /// Nodes whose cost exceeds this are closed without expansion.
    #[inline]
    pub fn prune_threshold(&self) -> i32 {
        self.max_cost.saturating_mul(2)
    }
}
