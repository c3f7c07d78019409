//! Union-find over cell indices, used only while carving a maze.

pub struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    /// Creates `size` singleton sets, each element its own root.
    pub fn new(size: usize) -> Self {
        DisjointSet {
            parent: (0..size).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`'s set.
    /// Every node on the walked chain is re-pointed directly at the root.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }

        root
    }

    /// Attaches the root of `a`'s set under the root of `b`'s set.
    /// No rank or size heuristic; path compression in `find` keeps chains short.
    pub fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            self.parent[root_a] = root_b;
        }
    }

    #[cfg(test)]
    fn parent(&self, x: usize) -> usize {
        self.parent[x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_singletons_are_own_roots() {
        let mut set = DisjointSet::new(4);
        assert_eq!(set.len(), 4);
        (0..4).for_each(|i| assert_eq!(set.find(i), i));
    }

    #[test]
    fn test_union_attaches_first_root_under_second() {
        let mut set = DisjointSet::new(2);
        set.union(0, 1);
        assert_eq!(set.parent(0), 1);
        assert_eq!(set.parent(1), 1);
        assert_eq!(set.find(0), set.find(1));
    }

    #[test]
    fn test_find_compresses_path() {
        let mut set = DisjointSet::new(4);
        // Build the chain 0 -> 1 -> 2 -> 3
        set.union(2, 3);
        set.union(1, 2);
        set.union(0, 1);
        assert_eq!(set.find(0), 3);
        (0..4).for_each(|i| assert_eq!(set.parent(i), 3));
    }

    #[test]
    fn test_find_is_idempotent() {
        let mut set = DisjointSet::new(10);
        set.union(0, 5);
        set.union(5, 9);
        set.union(3, 4);
        set.union(4, 0);
        for i in 0..10 {
            let root = set.find(i);
            assert_eq!(set.find(root), root);
        }
        assert_eq!(set.find(3), set.find(9));
        assert_ne!(set.find(1), set.find(9));
    }

    #[test]
    fn test_union_same_set_is_noop() {
        let mut set = DisjointSet::new(3);
        set.union(0, 1);
        let root = set.find(0);
        set.union(1, 0);
        assert_eq!(set.find(0), root);
        assert_eq!(set.find(1), root);
    }
}
