//! Reporting helpers for solver output.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::solution::Solution;
use crate::TabooSearchSolver;

/// Render a tour in closed form, e.g. `1 -> 4 -> 3 -> 2 -> 1`.
pub fn format_closed_tour(solution: &Solution) -> String {
    solution
        .closed()
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Write a plain-text report of the search outcome.
pub fn save_solution<P: AsRef<Path>>(solver: &TabooSearchSolver, path: P) -> std::io::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Taboo search result")?;
    writeln!(file, "Nodes: {}", solver.matrix.node_count())?;
    writeln!(file, "Seed: {}", solver.seed)?;
    writeln!(file, "Iterations: {}", solver.iterations)?;
    writeln!(file, "Best tour: {}", format_closed_tour(&solver.best_solution))?;
    writeln!(file, "Best cost: {:.2}", solver.best_cost)?;
    writeln!(file)?;

    for improvement in &solver.improvements {
        writeln!(
            file,
            "Iteration {}: cost {:.2}",
            improvement.iteration, improvement.cost
        )?;
    }

    Ok(())
}
