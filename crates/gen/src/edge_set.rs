use fxhash::FxHashSet;

/// Tracks the node pairs that are already connected by an edge.
///
/// Pairs are unordered, i.e. once `(u, v)` is inserted, both `(u, v)` and
/// `(v, u)` are considered present.
#[derive(Clone, Debug, Default)]
pub struct EdgeSet {
    pairs: FxHashSet<(usize, usize)>,
}

impl EdgeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, u: usize, v: usize) -> bool {
        self.pairs.contains(&normalize(u, v))
    }

    /// Adds the pair `{u, v}`. Returns `false` if it was already present.
    pub fn insert(&mut self, u: usize, v: usize) -> bool {
        self.pairs.insert(normalize(u, v))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Returns the number of pairs whose endpoints both lie in `[1, node_count]`.
    pub fn count_within(&self, node_count: usize) -> usize {
        self.pairs
            .iter()
            .filter(|(lo, hi)| *lo >= 1 && *hi <= node_count)
            .count()
    }

    /// Returns all pairs as `(min, max)` tuples in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.pairs.iter().copied()
    }
}

fn normalize(u: usize, v: usize) -> (usize, usize) {
    if u <= v {
        (u, v)
    } else {
        (v, u)
    }
}
