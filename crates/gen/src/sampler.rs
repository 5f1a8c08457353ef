use std::ops::RangeInclusive;

use log::debug;
use rand::Rng;

use crate::{EdgeSet, Error, Result, WeightedEdge};

/// Returns the number of distinct unordered pairs of distinct nodes in
/// `[1, node_count]`.
pub fn max_pair_count(node_count: usize) -> usize {
    node_count * node_count.saturating_sub(1) / 2
}

/// Returns the number of node pairs in `[1, node_count]` that are not yet
/// part of `edges`.
pub fn capacity(node_count: usize, edges: &EdgeSet) -> usize {
    max_pair_count(node_count).saturating_sub(edges.count_within(node_count))
}

/// Draws new undirected edges between nodes in `[1, node_count]`.
///
/// Every sampled edge connects two distinct nodes that are not yet connected
/// according to the given [`EdgeSet`] and is recorded in that set.
///
/// Node pairs are drawn uniformly at random and rejected if unusable. After
/// `max_attempts` rejections the sampler picks uniformly among all remaining
/// unused pairs instead, which only fails if no such pair is left.
pub struct EdgeSampler<'a, R> {
    rng: &'a mut R,
    edges: &'a mut EdgeSet,
    node_count: usize,
    weights: RangeInclusive<u32>,
    max_attempts: usize,
}

impl<'a, R: Rng> EdgeSampler<'a, R> {
    pub fn new(
        rng: &'a mut R,
        edges: &'a mut EdgeSet,
        node_count: usize,
        weights: RangeInclusive<u32>,
        max_attempts: usize,
    ) -> Self {
        Self {
            rng,
            edges,
            node_count,
            weights,
            max_attempts,
        }
    }

    pub fn sample(&mut self) -> Result<WeightedEdge> {
        let (source, target) = match self.draw() {
            Some(pair) => pair,
            None => self.pick_unused()?,
        };

        self.edges.insert(source, target);
        let weight = self.rng.gen_range(self.weights.clone());

        Ok(WeightedEdge::new(source, target, weight))
    }

    fn draw(&mut self) -> Option<(usize, usize)> {
        if self.node_count < 2 {
            return None;
        }

        for _ in 0..self.max_attempts {
            let u = self.rng.gen_range(1..=self.node_count);
            let v = self.rng.gen_range(1..=self.node_count);
            if u != v && !self.edges.contains(u, v) {
                return Some((u, v));
            }
        }

        None
    }

    fn pick_unused(&mut self) -> Result<(usize, usize)> {
        let node_count = self.node_count;
        let exhausted = |available| Error::CapacityExhausted {
            node_count,
            requested: 1,
            available,
        };

        let available = capacity(node_count, self.edges);
        debug!(
            "Gave up drawing after {} attempts, picking among {} unused pairs",
            self.max_attempts, available
        );

        if available == 0 {
            return Err(exhausted(0));
        }

        let mut skip = self.rng.gen_range(0..available);
        for u in 1..=node_count {
            for v in (u + 1)..=node_count {
                if self.edges.contains(u, v) {
                    continue;
                }
                if skip == 0 {
                    return Ok(if self.rng.gen_bool(0.5) { (u, v) } else { (v, u) });
                }
                skip -= 1;
            }
        }

        Err(exhausted(available))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn pair_counts() {
        assert_eq!(max_pair_count(0), 0);
        assert_eq!(max_pair_count(1), 0);
        assert_eq!(max_pair_count(3), 3);
        assert_eq!(max_pair_count(255), 32385);

        let mut edges = EdgeSet::new();
        edges.insert(1, 2);
        edges.insert(5, 6);
        assert_eq!(capacity(4, &edges), 5);
        assert_eq!(capacity(6, &edges), 13);
    }

    #[test]
    fn sample_respects_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut edges = EdgeSet::new();
        let mut sampler = EdgeSampler::new(&mut rng, &mut edges, 255, 1..=99, 1024);

        for _ in 0..510 {
            let WeightedEdge {
                source,
                target,
                weight,
            } = sampler.sample().unwrap();

            assert_ne!(source, target);
            assert!((1..=255).contains(&source));
            assert!((1..=255).contains(&target));
            assert!((1..=99).contains(&weight));
        }

        assert_eq!(edges.len(), 510);
    }

    #[test]
    fn sample_fills_complete_graph() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut edges = EdgeSet::new();
        let mut sampler = EdgeSampler::new(&mut rng, &mut edges, 6, 1..=1, 1);

        for _ in 0..max_pair_count(6) {
            sampler.sample().unwrap();
        }

        assert!(matches!(
            sampler.sample(),
            Err(Error::CapacityExhausted {
                node_count: 6,
                available: 0,
                ..
            })
        ));
        assert_eq!(edges.len(), 15);
    }

    #[test]
    fn sample_single_node() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut edges = EdgeSet::new();
        let mut sampler = EdgeSampler::new(&mut rng, &mut edges, 1, 1..=99, 16);

        assert!(matches!(
            sampler.sample(),
            Err(Error::CapacityExhausted { .. })
        ));
    }

    #[test]
    fn sample_skips_reserved_pairs() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut edges = EdgeSet::new();
        edges.insert(1, 2);
        edges.insert(2, 3);

        let edge = EdgeSampler::new(&mut rng, &mut edges, 3, 5..=5, 1)
            .sample()
            .unwrap();

        assert!(matches!((edge.source, edge.target), (1, 3) | (3, 1)));
        assert_eq!(edge.weight, 5);
    }
}
