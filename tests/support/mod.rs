//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use mindmatch::domain::{AffinityMatrix, Assignment};
use mindmatch::error::Result;
use mindmatch::port::{IlpProblem, LpProblem, LpSolution, SolutionStatus, Solver};

/// Build a matrix from literal rows.
pub fn matrix(rows: &[&[f64]]) -> AffinityMatrix {
    AffinityMatrix::from_rows(rows.iter().map(|r| r.to_vec()).collect())
        .expect("test matrix should be valid")
}

/// The three-entity example used throughout the docs.
pub fn triangle() -> AffinityMatrix {
    matrix(&[&[0.0, 5.0, 1.0], &[5.0, 0.0, 1.0], &[1.0, 1.0, 0.0]])
}

/// Assert every entity has exactly `k` partners on both sides.
pub fn assert_regular(assignment: &Assignment, k: usize) {
    for i in 0..assignment.len() {
        assert_eq!(assignment.row_total(i), k, "row {i}");
        assert_eq!(assignment.column_total(i), k, "column {i}");
        assert!(!assignment.selected(i, i), "self-match at {i}");
    }
}

/// Solver double that records every LP it receives and reports infeasible.
#[derive(Default)]
pub struct RecordingSolver {
    pub problems: Mutex<Vec<LpProblem>>,
    pub integral_calls: Mutex<usize>,
}

impl RecordingSolver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn last(&self) -> Option<LpProblem> {
        self.problems.lock().ok()?.last().cloned()
    }

    pub fn integral_calls(&self) -> usize {
        self.integral_calls.lock().map(|c| *c).unwrap_or(0)
    }
}

impl Solver for RecordingSolver {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn solve_lp(&self, problem: &LpProblem) -> Result<LpSolution> {
        if let Ok(mut problems) = self.problems.lock() {
            problems.push(problem.clone());
        }
        Ok(LpSolution::failed(problem.num_vars(), SolutionStatus::Infeasible))
    }

    fn solve_ilp(&self, problem: &IlpProblem) -> Result<LpSolution> {
        if let Ok(mut calls) = self.integral_calls.lock() {
            *calls += 1;
        }
        self.solve_lp(&problem.lp)
    }
}
