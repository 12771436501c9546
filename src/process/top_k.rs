//! Bounded top-k selection.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::error::{FuzzError, Result};

/// Keeps the `limit` highest-ranked items seen so far.
///
/// Items rank by score first and by their own ordering second, so two items
/// with the same score keep a deterministic relative order no matter in
/// which order they were pushed. NaN scores rank above every number
/// (`f64::total_cmp`).
#[derive(Debug, Clone)]
pub struct TopK<T: Ord> {
    limit: usize,
    /// Min-heap: the lowest-ranked entry is on top.
    entries: BinaryHeap<Reverse<Entry<T>>>,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    score: f64,
    item: T,
}

impl<T: Ord> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Ord> Eq for Entry<T> {}

impl<T: Ord> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .total_cmp(&other.score)
            .then_with(|| self.item.cmp(&other.item))
    }
}

impl<T: Ord> TopK<T> {
    /// Create an empty selection keeping at most `limit` items.
    ///
    /// Fails with [`FuzzError::InvalidArgument`] when `limit` is zero.
    pub fn new(limit: usize) -> Result<Self> {
        if limit < 1 {
            return Err(FuzzError::invalid_argument(format!(
                "limit must be at least 1, got {limit}"
            )));
        }
        Ok(TopK {
            limit,
            entries: BinaryHeap::with_capacity(limit + 1),
        })
    }

    /// Get the maximum number of items kept.
    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the lowest score still kept, if any.
    pub fn min_score(&self) -> Option<f64> {
        self.entries.peek().map(|Reverse(entry)| entry.score)
    }

    /// Offer an item; the lowest-ranked entry is dropped once the selection
    /// holds more than `limit` items.
    pub fn push(&mut self, score: f64, item: T) {
        self.entries.push(Reverse(Entry { score, item }));
        if self.entries.len() > self.limit {
            self.entries.pop();
        }
    }

    /// Offer every item kept by `other`.
    pub fn merge(&mut self, other: TopK<T>) {
        for Reverse(entry) in other.entries {
            self.push(entry.score, entry.item);
        }
    }

    /// Consume the selection, best first.
    pub fn into_sorted_vec(self) -> Vec<(f64, T)> {
        // Ascending under `Reverse` is descending by rank.
        self.entries
            .into_sorted_vec()
            .into_iter()
            .map(|Reverse(entry)| (entry.score, entry.item))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k() {
        let mut top = TopK::new(3).unwrap();
        assert_eq!(top.limit(), 3);
        assert!(top.is_empty());

        top.push(0.5, "a");
        top.push(0.8, "b");
        top.push(0.3, "c");
        assert_eq!(top.len(), 3);
        assert_eq!(top.min_score(), Some(0.3));

        // Better than the worst: replaces it
        top.push(0.9, "d");
        assert_eq!(top.len(), 3);
        // Worse than everything kept: ignored
        top.push(0.1, "e");

        assert_eq!(
            top.into_sorted_vec(),
            vec![(0.9, "d"), (0.8, "b"), (0.5, "a")]
        );
    }

    #[test]
    fn test_zero_limit() {
        assert!(matches!(
            TopK::<u32>::new(0),
            Err(FuzzError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_ties_order_by_item() {
        let mut top = TopK::new(2).unwrap();
        top.push(1.0, "a");
        top.push(1.0, "c");
        top.push(1.0, "b");

        // "a" ranks lowest among equal scores and is dropped.
        assert_eq!(top.into_sorted_vec(), vec![(1.0, "c"), (1.0, "b")]);
    }

    #[test]
    fn test_merge() {
        let mut left = TopK::new(2).unwrap();
        left.push(0.2, 1);
        left.push(0.7, 2);

        let mut right = TopK::new(2).unwrap();
        right.push(0.9, 3);
        right.push(0.1, 4);

        left.merge(right);
        assert_eq!(left.into_sorted_vec(), vec![(0.9, 3), (0.7, 2)]);
    }

    #[test]
    fn test_push_order_does_not_matter() {
        let scores = [0.4, 0.1, 0.4, 0.9, 0.0, 0.7, 0.4];

        let mut forward = TopK::new(4).unwrap();
        for (i, &s) in scores.iter().enumerate() {
            forward.push(s, i);
        }
        let mut backward = TopK::new(4).unwrap();
        for (i, &s) in scores.iter().enumerate().rev() {
            backward.push(s, i);
        }

        assert_eq!(forward.into_sorted_vec(), backward.into_sorted_vec());
    }
}
