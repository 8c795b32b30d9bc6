use std::collections::BinaryHeap;

/// Reference into the node grid, ordered for use in `BinaryHeap`.
///
/// Lowest score first; among equal scores the earliest insertion wins. A
/// node's score never changes after it is opened, so entries never go stale.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct OpenEntry {
    score: i32,
    seq: u64,
    idx: usize,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (score, seq) first.
        other
            .score
            .cmp(&self.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// The search frontier.
#[derive(Debug, Default)]
pub(crate) struct OpenSet {
    heap: BinaryHeap<OpenEntry>,
    next_seq: u64,
}

impl OpenSet {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, score: i32) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(OpenEntry { score, seq, idx });
    }

    /// Remove and return the lowest-score, earliest-inserted node index.
    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.idx)
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pops_lowest_score_first() {
        let mut open = OpenSet::new();
        open.push(10, 5);
        open.push(11, 3);
        open.push(12, 4);
        assert_eq!(open.pop(), Some(11));
        assert_eq!(open.pop(), Some(12));
        assert_eq!(open.pop(), Some(10));
        assert_eq!(open.pop(), None);
    }

    #[test]
    fn equal_scores_pop_in_insertion_order() {
        let mut open = OpenSet::new();
        for idx in [7, 3, 9, 1, 5] {
            open.push(idx, 2);
        }
        open.push(0, 8);
        let order: Vec<usize> = std::iter::from_fn(|| open.pop()).collect();
        assert_eq!(order, vec![7, 3, 9, 1, 5, 0]);
    }

    #[test]
    fn interleaved_pushes_keep_first_inserted_minimum() {
        let mut open = OpenSet::new();
        open.push(1, 4);
        open.push(2, 6);
        open.push(3, 4);
        assert_eq!(open.pop(), Some(1));
        open.push(4, 4);
        open.push(5, 3);
        assert_eq!(open.len(), 4);
        assert_eq!(open.pop(), Some(5));
        assert_eq!(open.pop(), Some(3));
        assert_eq!(open.pop(), Some(4));
        assert_eq!(open.pop(), Some(2));
        assert_eq!(open.len(), 0);
    }
}
