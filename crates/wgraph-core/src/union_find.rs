//! Disjoint-set forest with path halving
//!
//! `union` always hangs the first root under the second; there is no rank
//! or size balancing, so adversarial union orders can build tall trees.
//! Path halving during `find` shortens them again over time.

/// Disjoint sets over the indices `[0, n)`
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    /// `n` singleton sets
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Root of the set containing `index`.
    ///
    /// Every visited node is re-pointed at its grandparent on the way up.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn find(&mut self, mut index: usize) -> usize {
        while self.parent[index] != index {
            self.parent[index] = self.parent[self.parent[index]];
            index = self.parent[index];
        }
        index
    }

    /// Whether `a` and `b` are in the same set
    pub fn connected(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Merge the sets of `a` and `b` by attaching root(a) under root(b)
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        self.parent[root_a] = root_b;
    }
}
