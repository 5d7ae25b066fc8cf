pub mod comparison;
pub mod config;
pub mod csv_source;
pub mod demo;
pub mod error;
pub mod generator;
pub mod oracles;
pub mod report;
pub mod types;

use std::env;
use std::process;

use path_algebra_core::Semiring;
use path_algebra_core::closure::apsp_sssp;

use csv_source::CsvEdgeSource;
use error::Error;
use generator::RandomGraphSource;
use types::{DataSource, GraphData, MatrixSource};

fn main() {
    let source = parse_args();
    let config = config::load_config().expect("Failed to load config");

    if let Err(e) = run(source, &config) {
        eprintln!("Executor failed: {}", e);
        process::exit(1);
    }
}

/// Parse command-line arguments to determine data source
fn parse_args() -> DataSource {
    let args: Vec<String> = env::args().collect();
    let source = args
        .get(1)
        .map(|s| s.to_lowercase())
        .unwrap_or_else(|| "demo".to_string());

    match source.as_str() {
        "demo" => DataSource::Demo,
        "random" => DataSource::Random,
        "csv" => {
            let path = args.get(2).expect("CSV path required for CSV mode").clone();
            DataSource::Csv(path)
        }
        _ => {
            eprintln!(
                "Usage: {} <DEMO|RANDOM|CSV> [path_to_csv]\n  - DEMO: print the worked example graphs\n  - RANDOM: compare on a generated random graph\n  - CSV: compare on a from,to,weight edge list",
                args[0]
            );
            process::exit(1);
        }
    }
}

fn run(source: DataSource, config: &config::Config) -> Result<(), Error> {
    match source {
        DataSource::Demo => {
            demo::run_demos();
            Ok(())
        }
        DataSource::Random => {
            let data = RandomGraphSource::new(config.generator.clone()).load()?;
            run_comparisons(&data, config)
        }
        DataSource::Csv(path) => {
            let data = CsvEdgeSource::new(path).load()?;
            run_comparisons(&data, config)
        }
    }
}

/// Runs every generalized algorithm against its oracles on one graph and
/// prints the summary.
fn run_comparisons(data: &GraphData, config: &config::Config) -> Result<(), Error> {
    println!(
        "Comparing generalized algorithms against classical oracles on {} vertices, {} edges.",
        data.n,
        data.edges.len()
    );

    let sp = Semiring::shortest_path();
    let closure_matrix = sp.dense_with_identity(data.n, &data.edges)?;
    let mst_matrix = sp.dense_from_edges(data.n, &data.edges)?;
    let capacity_matrix = Semiring::widest_path().dense_with_identity(data.n, &data.edges)?;

    let tolerance = config.comparison.tolerance;
    let mut results = comparison::compare_apsp(&closure_matrix, tolerance)?;
    results.extend(comparison::compare_sssp(
        &closure_matrix,
        config.comparison.sssp_source,
        tolerance,
    )?);
    results.extend(comparison::compare_mst(&mst_matrix, tolerance));
    results.push(comparison::compare_widest(&capacity_matrix, tolerance)?);

    report::print_comparisons(&results);

    let distances = apsp_sssp(&closure_matrix, &sp, None)?;
    report::print_distance_matrix(
        "Generalized APSP distances",
        &distances,
        config.comparison.max_display_rows,
    );

    Ok(())
}
