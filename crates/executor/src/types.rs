use super::error::Error;
use common::types::Edge;

/// Where the pipeline gets its weight matrix from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// The worked example graphs, printed in full.
    Demo,
    /// A randomly generated weighted graph, parameters from config.
    Random,
    /// A `from,to,weight` edge list file.
    Csv(String),
}

/// A loaded graph: vertex count plus its weighted edge list.
///
/// Edges are the explicit "edge exists" representation; each algorithm
/// materializes them into a dense matrix under its own semiring, so no
/// missing-edge sentinel leaks between semirings.
#[derive(Debug, Clone)]
pub struct GraphData {
    pub n: usize,
    pub edges: Vec<Edge<f64>>,
}

/// A trait defining the contract for any source that produces a weighted
/// edge list for the comparison pipeline.
///
/// This trait is designed for **decoupling** the pipeline from the specific
/// data source (e.g., CSV file vs. generated data).
pub trait MatrixSource {
    fn load(&self) -> Result<GraphData, Error>;
}
