//! Command execution

use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, info};

use dsperf::expr::{self, format_tokens};
use dsperf::heap::MinHeap;
use dsperf::search::binary_search;
use dsperf::tree::Tree;

use super::args::{Cli, Commands};
use super::error::{CliError, CliResult};

/// Runs the parsed command, returning what should be printed on stdout.
pub fn execute_command(cli: &Cli) -> CliResult<String> {
    match &cli.command {
        Commands::Eval { expression } => Ok(expr::evaluate_str(expression)?.to_string()),
        Commands::Postfix { expression } => {
            let tokens: Vec<_> = expression.split_whitespace().collect();
            let postfix = expr::to_postfix(&tokens).map_err(expr::ExprError::from)?;
            Ok(format_tokens(&postfix))
        }
        Commands::Shape { size, seed } => shape(*size, *seed),
        Commands::Heapsort { values } => {
            let sorted = MinHeap::from(values.clone()).into_sorted_vec();
            Ok(sorted
                .iter()
                .map(i64::to_string)
                .collect::<Vec<_>>()
                .join(" "))
        }
    }
}

/// Measurements for one way of building a tree.
struct ShapeReport {
    label: &'static str,
    height: usize,
    average_depth: f64,
    search_time: Duration,
}

impl ShapeReport {
    fn measure(label: &'static str, tree: &Tree<usize>, keys: &[usize]) -> Self {
        let start = Instant::now();
        for key in keys {
            std::hint::black_box(tree.search(key));
        }
        Self {
            label,
            height: tree.height(),
            average_depth: tree.average_depth(),
            search_time: start.elapsed(),
        }
    }
}

fn shape(size: usize, seed: Option<u64>) -> CliResult<String> {
    if size == 0 {
        return Err(CliError::InvalidArgs("size must be at least 1".to_string()));
    }

    let sorted: Vec<usize> = (0..size).collect();
    let mut shuffled = sorted.clone();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    shuffled.shuffle(&mut rng);
    debug!(size, ?seed, "built workloads");

    let sorted_tree: Tree<_> = sorted.iter().copied().collect();
    let shuffled_tree: Tree<_> = shuffled.iter().copied().collect();
    info!("trees built");

    let reports = [
        ShapeReport::measure("sorted", &sorted_tree, &sorted),
        ShapeReport::measure("shuffled", &shuffled_tree, &shuffled),
    ];

    let start = Instant::now();
    for key in &shuffled {
        std::hint::black_box(binary_search(&sorted, key));
    }
    let array_time = start.elapsed();

    let mut out = format!(
        "{:<10} {:>8} {:>10} {:>14}\n",
        "insertion", "height", "avg depth", "search total"
    );
    for report in &reports {
        out.push_str(&format!(
            "{:<10} {:>8} {:>10.2} {:>14}\n",
            report.label,
            report.height,
            report.average_depth,
            format!("{:?}", report.search_time)
        ));
    }
    out.push_str(&format!(
        "{:<10} {:>8} {:>10} {:>14}",
        "array",
        "-",
        "-",
        format!("{:?}", array_time)
    ));
    Ok(out)
}
