use csv::ReaderBuilder;
use serde::Deserialize;
use std::fs::File;

use super::error::Error;
use super::types::{GraphData, MatrixSource};
use common::types::Edge;

// Helper struct for CSV parsing
#[derive(Debug, Deserialize)]
pub struct CsvRecord {
    #[serde(rename = "from")]
    pub from_node: usize,

    #[serde(rename = "to")]
    pub to_node: usize,

    #[serde(rename = "weight")]
    pub weight_value: f64,
}

/// Reads a weighted edge list from a `from,to,weight` CSV file.
///
/// The vertex count is derived from the highest endpoint seen, so sparse
/// external formats stay self-describing.
pub struct CsvEdgeSource {
    path: String,
}

impl CsvEdgeSource {
    pub fn new(path: String) -> Self {
        CsvEdgeSource { path }
    }

    fn parse_csv_to_edges(&self) -> Result<Vec<Edge<f64>>, Error> {
        let file = File::open(&self.path).map_err(|e| {
            eprintln!("Failed to read file {}: {:?}", self.path, e);
            Error::IoError(e)
        })?;

        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

        let mut edges = Vec::new();

        for result in rdr.deserialize() {
            let record: CsvRecord = result?;
            edges.push((record.from_node, record.to_node, record.weight_value));
        }
        Ok(edges)
    }
}

impl MatrixSource for CsvEdgeSource {
    fn load(&self) -> Result<GraphData, Error> {
        let edges = self.parse_csv_to_edges()?;
        if edges.is_empty() {
            return Err(Error::EmptyInput);
        }

        let n = edges
            .iter()
            .flat_map(|&(u, v, _)| [u, v])
            .max()
            .map_or(0, |max_id| max_id + 1);

        println!("CsvEdgeSource: loaded {} edges over {} vertices.", edges.len(), n);
        Ok(GraphData { n, edges })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const MOCK_CSV_CONTENT: &str = "\
from,to,weight
0,1,3.0
1,2,1.0
2,3,7.0
3,0,2.0
";

    #[test]
    fn test_parse_csv_to_edges_success() {
        // Create a temporary file with the mock content.
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(MOCK_CSV_CONTENT.as_bytes())
            .expect("Failed to write mock content");

        let path = temp_file
            .path()
            .to_str()
            .expect("Failed to get path string");

        let source = CsvEdgeSource::new(path.to_string());
        let result = source.parse_csv_to_edges();

        assert!(
            result.is_ok(),
            "Parsing failed with error: {:?}",
            result.err()
        );

        let edges = result.unwrap();

        let expected_edges: Vec<Edge<f64>> =
            vec![(0, 1, 3.0), (1, 2, 1.0), (2, 3, 7.0), (3, 0, 2.0)];

        assert_eq!(edges.len(), 4, "Should have parsed 4 edges.");
        assert_eq!(
            edges, expected_edges,
            "Parsed edges do not match expected data."
        );
    }

    #[test]
    fn test_load_derives_vertex_count() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"from,to,weight\n2,7,1.5\n")
            .expect("Failed to write mock content");

        let source = CsvEdgeSource::new(temp_file.path().to_str().unwrap().to_string());
        let data = source.load().expect("load should succeed");

        assert_eq!(data.n, 8);
        assert_eq!(data.edges, vec![(2, 7, 1.5)]);
    }

    #[test]
    fn test_load_rejects_empty_edge_list() {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(b"from,to,weight\n")
            .expect("Failed to write mock content");

        let source = CsvEdgeSource::new(temp_file.path().to_str().unwrap().to_string());
        let result = source.load();

        assert!(matches!(result, Err(Error::EmptyInput)));
    }

    #[test]
    fn test_parse_csv_to_edges_file_not_found() {
        let source = CsvEdgeSource::new("non_existent_file.csv".to_string());
        let result = source.parse_csv_to_edges();

        assert!(
            result.is_err(),
            "Should have failed to open non-existent file."
        );

        if let Err(Error::IoError(e)) = result {
            assert_eq!(e.kind(), std::io::ErrorKind::NotFound);
        } else {
            panic!("Expected IoError, got: {:?}", result.err());
        }
    }
}
