//! # taboo_tsp
//!
//! A taboo-search optimizer for symmetric closed-tour sequencing problems.
//!
//! The search keeps a single incumbent tour and, each iteration, enumerates
//! its full pairwise-swap neighborhood, scores every candidate on the closed
//! tour, and adopts the best one only when it strictly improves on the best
//! cost seen so far. A bounded FIFO memory of recently committed leading
//! nodes provides the short-term taboo component.
//!
//! The search is single-threaded and, for a given seed and cost matrix, fully
//! deterministic: randomness is consumed only while shuffling the initial
//! tour, and neighbor enumeration order fixes every tie-break.

pub mod config;
pub mod error;
pub mod evaluate;
pub mod matrix;
pub mod neighborhood;
pub mod solution;
pub mod taboo;
pub mod utils;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::config::Config;
use crate::error::{Result, SolverError};
use crate::evaluate::{closed_tour_cost, open_path_cost};
use crate::matrix::CostMatrix;
use crate::neighborhood::generate_neighbors;
use crate::solution::Solution;
use crate::taboo::TabooMemory;

/// One accepted improvement during the search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Improvement {
    /// Iteration index at which the candidate was adopted.
    pub iteration: usize,
    /// The adopted tour in closed form, leading node repeated at the end.
    pub tour: Vec<usize>,
    /// Its closed-tour cost, the new best.
    pub cost: f64,
}

/// The search engine. Owns the instance data and all mutable search state;
/// nothing outside the solver reads or writes that state mid-iteration.
pub struct TabooSearchSolver {
    pub matrix: CostMatrix,
    pub config: Config,
    /// Seed used for the initial shuffle, retained for reproducibility.
    /// When the initial solution was supplied directly this is just the
    /// configured seed, or zero.
    pub seed: u64,
    pub initial_solution: Solution,
    pub current_solution: Solution,
    pub best_solution: Solution,
    /// Open-path cost of the initial tour at construction, thereafter the
    /// closed-tour cost of the best accepted candidate.
    pub best_cost: f64,
    pub taboo: TabooMemory,
    /// Completed iterations.
    pub iterations: usize,
    /// One record per accepted iteration, in order.
    pub improvements: Vec<Improvement>,
}

impl TabooSearchSolver {
    /// Load an instance from a JSON file and build a solver for it.
    pub fn from_file<P: AsRef<Path>>(path: P, config: Config) -> Result<Self> {
        let matrix = CostMatrix::from_file(path)?;
        Self::new(matrix, config)
    }

    /// Build a solver with a seeded random initial tour.
    ///
    /// When the configuration carries no seed, one is drawn from `[0, 10000)`
    /// and retained so the run can be reproduced.
    pub fn new(matrix: CostMatrix, config: Config) -> Result<Self> {
        let seed = match config.seed {
            Some(seed) => seed,
            None => rand::thread_rng().gen_range(0..10_000),
        };

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let initial = Solution::random(matrix.node_count(), &mut rng);

        Self::build(matrix, config, seed, initial)
    }

    /// Build a solver around an explicitly supplied initial tour.
    pub fn from_solution(matrix: CostMatrix, config: Config, initial: Solution) -> Result<Self> {
        let seed = config.seed.unwrap_or(0);
        Self::build(matrix, config, seed, initial)
    }

    fn build(matrix: CostMatrix, config: Config, seed: u64, initial: Solution) -> Result<Self> {
        let n = matrix.node_count();
        if n < 2 {
            return Err(SolverError::TooFewNodes(n));
        }
        if config.taboo_capacity < 1 {
            return Err(SolverError::InvalidCapacity(config.taboo_capacity));
        }
        if !initial.is_permutation(n) {
            return Err(SolverError::InvalidSolution { expected: n });
        }

        let best_cost = open_path_cost(&matrix, &initial)?;
        log::info!(
            "initial solution {:?} (seed {}), open-path cost {}",
            initial.tour,
            seed,
            best_cost
        );

        let taboo = TabooMemory::new(config.taboo_capacity);

        Ok(TabooSearchSolver {
            matrix,
            seed,
            current_solution: initial.clone(),
            best_solution: initial.clone(),
            initial_solution: initial,
            best_cost,
            taboo,
            config,
            iterations: 0,
            improvements: Vec::new(),
        })
    }

    /// Run one iteration: generate, evaluate, select, accept on strict
    /// improvement, and push the committed leading node onto the taboo
    /// memory.
    pub fn step(&mut self) -> Result<()> {
        let candidates =
            generate_neighbors(&self.current_solution, &self.taboo, self.config.filter);

        let mut best_candidate: Option<(Solution, f64)> = None;

        for candidate in candidates {
            let cost = closed_tour_cost(&self.matrix, &candidate)?;

            // Strict comparison keeps the first-enumerated candidate on ties.
            let better = match &best_candidate {
                Some((_, best)) => cost < *best,
                None => true,
            };

            if better {
                best_candidate = Some((candidate, cost));
            }
        }

        let (candidate, cost) = best_candidate.ok_or(SolverError::EmptyNeighborhood)?;

        if cost < self.best_cost {
            self.current_solution = candidate.clone();
            self.best_solution = candidate;
            self.best_cost = cost;

            let record = Improvement {
                iteration: self.iterations,
                tour: self.best_solution.closed(),
                cost,
            };
            log::info!(
                "iteration {}: new best tour {:?}, cost {}",
                record.iteration,
                record.tour,
                record.cost
            );
            self.improvements.push(record);
        }

        self.taboo.push(self.current_solution.first());
        self.iterations += 1;

        Ok(())
    }

    /// Run exactly `iterations` iterations and return the best tour found.
    ///
    /// There is no early stopping or convergence check; the iteration budget
    /// is the only termination condition.
    pub fn solve(&mut self, iterations: usize) -> Result<&Solution> {
        for _ in 0..iterations {
            self.step()?;
        }

        Ok(&self.best_solution)
    }
}
