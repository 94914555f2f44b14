use rand_distr::{Bernoulli, Distribution, Uniform};

use super::*;

/// Weighted `G(n,p)` graphs: every possible edge between distinct vertices exists with
/// probability `p` independently, and gets a weight drawn uniformly from `lo..=hi`.
///
/// In symmetric mode every unordered pair is drawn once and, if chosen, inserted in both
/// directions with the same weight.
#[derive(Debug, Copy, Clone)]
pub struct WeightedGnp {
    n: NumVertices,
    p: Option<f64>,
    weights: (Weight, Weight),
    symmetric: bool,
}

impl Default for WeightedGnp {
    fn default() -> Self {
        Self {
            n: 0,
            p: None,
            weights: (1, 1),
            symmetric: false,
        }
    }
}

impl WeightedGnp {
    /// Creates a new generator with unit weights; `p` has to be set before generating
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the edge probability
    pub fn set_prob(&mut self, p: f64) {
        self.p = Some(p);
    }

    /// Sets the edge probability
    pub fn prob(mut self, p: f64) -> Self {
        self.set_prob(p);
        self
    }

    /// Sets the inclusive range edge weights are drawn from
    pub fn set_weights(&mut self, lo: Weight, hi: Weight) {
        self.weights = (lo, hi);
    }

    /// Sets the inclusive range edge weights are drawn from
    pub fn weights(mut self, lo: Weight, hi: Weight) -> Self {
        self.set_weights(lo, hi);
        self
    }

    /// Sets whether edges are inserted in both directions with equal weight
    pub fn set_symmetric(&mut self, symmetric: bool) {
        self.symmetric = symmetric;
    }

    /// Sets whether edges are inserted in both directions with equal weight
    pub fn symmetric(mut self, symmetric: bool) -> Self {
        self.set_symmetric(symmetric);
        self
    }
}

impl NumNodesGen for WeightedGnp {
    fn nodes(mut self, n: NumVertices) -> Self {
        self.n = n;
        self
    }
}

impl WeightedGraphGenerator for WeightedGnp {
    fn number_of_vertices(&self) -> NumVertices {
        self.n
    }

    fn edges<R>(&self, rng: &mut R) -> Result<Vec<GeneratedEdge>>
    where
        R: Rng,
    {
        let p = self
            .p
            .ok_or_else(|| GraphError::InvalidConfig("edge probability was not set".into()))?;
        let coin = Bernoulli::new(p)
            .map_err(|e| GraphError::InvalidConfig(format!("probability {p}: {e}")))?;
        let (lo, hi) = self.weights;
        let weight = Uniform::new_inclusive(lo, hi)
            .map_err(|e| GraphError::InvalidConfig(format!("weights {lo}..={hi}: {e}")))?;

        let mut edges = Vec::new();
        for u in 0..self.n {
            let targets = if self.symmetric { u + 1 } else { 0 };
            for v in (targets..self.n).filter(|&v| v != u) {
                if !coin.sample(rng) {
                    continue;
                }

                let w = weight.sample(rng);
                edges.push((u, v, w));
                if self.symmetric {
                    edges.push((v, u, w));
                }
            }
        }

        Ok(edges)
    }
}
