/// Union-find over nodes, merged along permutations.
#[derive(Debug, Clone)]
pub(crate) struct Orbits {
    parent: Vec<usize>,
}

impl Orbits {
    pub(crate) fn new(nodes: usize) -> Self {
        Self {
            parent: (0..nodes).collect(),
        }
    }

    /// Merges every node with its image under `perm`.
    pub(crate) fn absorb(&mut self, perm: &[usize]) {
        for (node, &image) in perm.iter().enumerate() {
            self.union(node, image);
        }
    }

    pub(crate) fn same(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Sorted orbit sizes.
    pub(crate) fn sizes(&mut self) -> Vec<u32> {
        let mut counts = vec![0u32; self.parent.len()];
        for node in 0..self.parent.len() {
            let root = self.find(node);
            counts[root] += 1;
        }
        let mut sizes: Vec<u32> = counts.into_iter().filter(|&count| count > 0).collect();
        sizes.sort_unstable();
        sizes
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}
