use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::GeneratorConfig;
use super::error::Error;
use super::types::{GraphData, MatrixSource};

/// Produces a random weighted graph from the configured parameters.
///
/// With a fixed seed every run reproduces the same graph; otherwise the RNG
/// is seeded from the OS.
pub struct RandomGraphSource {
    config: GeneratorConfig,
}

impl RandomGraphSource {
    pub fn new(config: GeneratorConfig) -> Self {
        RandomGraphSource { config }
    }

    fn rng(&self) -> SmallRng {
        match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        }
    }
}

impl MatrixSource for RandomGraphSource {
    fn load(&self) -> Result<GraphData, Error> {
        let cfg = &self.config;
        let mut rng = self.rng();
        let data = random_graph(
            cfg.total_nodes,
            cfg.density,
            cfg.min_weight,
            cfg.max_weight,
            cfg.symmetric,
            &mut rng,
        );
        println!(
            "RandomGraphSource: generated {} edges over {} vertices.",
            data.edges.len(),
            data.n
        );
        Ok(data)
    }
}

/// Random graph where each vertex pair carries an edge with probability
/// `density` and a weight drawn from `[min_weight, max_weight]`. Symmetric
/// mode mirrors every edge with the same weight.
pub fn random_graph(
    n: usize,
    density: f64,
    min_weight: f64,
    max_weight: f64,
    symmetric: bool,
    rng: &mut SmallRng,
) -> GraphData {
    let density = density.clamp(0.0, 1.0);
    let mut edges = Vec::new();

    for u in 0..n {
        let lower = if symmetric { u + 1 } else { 0 };
        for v in lower..n {
            if u == v || !rng.random_bool(density) {
                continue;
            }
            let weight = rng.random_range(min_weight..=max_weight);
            edges.push((u, v, weight));
            if symmetric {
                edges.push((v, u, weight));
            }
        }
    }

    GraphData { n, edges }
}

/// Random connected undirected graph: every vertex v > 0 first attaches to a
/// random earlier vertex (a random spanning tree), then `extra_edges`
/// additional pairs are sprinkled on top.
pub fn random_connected_graph(
    n: usize,
    extra_edges: usize,
    min_weight: f64,
    max_weight: f64,
    rng: &mut SmallRng,
) -> GraphData {
    let mut edges = Vec::new();

    for v in 1..n {
        let u = rng.random_range(0..v);
        let weight = rng.random_range(min_weight..=max_weight);
        edges.push((u, v, weight));
        edges.push((v, u, weight));
    }

    if n >= 2 {
        for _ in 0..extra_edges {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u == v {
                continue;
            }
            let weight = rng.random_range(min_weight..=max_weight);
            edges.push((u, v, weight));
            edges.push((v, u, weight));
        }
    }

    GraphData { n, edges }
}
