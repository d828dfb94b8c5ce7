#[cfg(not(feature = "std"))]
use alloc::collections::BTreeSet;
#[cfg(feature = "std")]
use std::collections::HashSet;

#[cfg(feature = "std")]
type IndexSet = HashSet<usize>;
#[cfg(not(feature = "std"))]
type IndexSet = BTreeSet<usize>;

/// The set of card indices whose long description is visible.
///
/// Membership is independent of navigation: expanding a card and navigating away keeps it
/// expanded. No ordering is guaranteed by `iter`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExpandedSet {
    indices: IndexSet,
}

impl ExpandedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `index`. Returns the new membership.
    pub fn toggle(&mut self, index: usize) -> bool {
        if self.indices.remove(&index) {
            false
        } else {
            self.indices.insert(index);
            true
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }

    pub fn clear(&mut self) {
        self.indices.clear();
    }

    /// Drops every index `>= count`. Returns how many entries were removed.
    pub fn retain_below(&mut self, count: usize) -> usize {
        let before = self.indices.len();
        self.indices.retain(|&i| i < count);
        before - self.indices.len()
    }
}
