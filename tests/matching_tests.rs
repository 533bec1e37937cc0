//! End-to-end matching scenarios against the HiGHS backend.

mod support;

use std::sync::Arc;

use mindmatch::adapter::outbound::similarity::IndelRatio;
use mindmatch::adapter::outbound::solver::HiGHSSolver;
use mindmatch::application::conflict::ConflictResolver;
use mindmatch::application::matching::{
    FailureReason, MatchOrchestrator, MatchParams, MatchStage, MatchStatus,
};
use mindmatch::domain::{Assignment, ConflictSet, EdgeIndex, Entity, LoadBounds, Roster};
use mindmatch::port::SolutionStatus;

use support::{assert_regular, matrix, triangle, RecordingSolver};

fn highs(n_match: usize, n_trim: usize) -> MatchOrchestrator {
    MatchOrchestrator::new(
        Arc::new(HiGHSSolver::new()),
        MatchParams::exact(n_match, n_trim),
    )
}

#[test]
fn triangle_forms_a_three_cycle() {
    let outcome = highs(1, 0).run(&triangle(), &ConflictSet::new()).unwrap();

    assert!(outcome.is_converged(), "{}", outcome.message());
    assert_eq!(outcome.assignment.total(), 3);
    assert_regular(&outcome.assignment, 1);
    assert_eq!(outcome.total_affinity, 7.0);
    assert_eq!(outcome.message(), "Successfully assigned all the match!");
}

#[test]
fn integral_mode_gives_the_same_optimum() {
    let params = MatchParams {
        integral: true,
        ..MatchParams::exact(1, 0)
    };
    let outcome = MatchOrchestrator::new(Arc::new(HiGHSSolver::new()), params)
        .run(&triangle(), &ConflictSet::new())
        .unwrap();

    assert!(outcome.is_converged());
    assert_regular(&outcome.assignment, 1);
    assert_eq!(outcome.total_affinity, 7.0);
}

#[test]
fn row_maxima_are_selected_when_consistent() {
    let m = matrix(&[
        &[0.0, 9.0, 1.0, 2.0],
        &[2.0, 0.0, 9.0, 1.0],
        &[1.0, 2.0, 0.0, 9.0],
        &[9.0, 1.0, 2.0, 0.0],
    ]);
    let outcome = highs(1, 0).run(&m, &ConflictSet::new()).unwrap();

    assert!(outcome.is_converged());
    let positions: Vec<_> = outcome.assignment.positions().collect();
    assert_eq!(positions, vec![(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert_eq!(outcome.total_affinity, 36.0);
}

#[test]
fn every_entity_gets_n_match_partners() {
    let m = matrix(&[
        &[0.0, 3.0, 1.0, 4.0, 2.0],
        &[3.0, 0.0, 5.0, 1.0, 2.0],
        &[1.0, 5.0, 0.0, 2.0, 4.0],
        &[4.0, 1.0, 2.0, 0.0, 3.0],
        &[2.0, 2.0, 4.0, 3.0, 0.0],
    ]);
    let outcome = highs(2, 0).run(&m, &ConflictSet::new()).unwrap();

    assert!(outcome.is_converged());
    assert_eq!(outcome.assignment.total(), 10);
    assert_regular(&outcome.assignment, 2);
}

#[test]
fn conflicts_are_never_paired() {
    let m = matrix(&[
        &[0.0, 9.0, 1.0, 1.0],
        &[9.0, 0.0, 1.0, 1.0],
        &[1.0, 1.0, 0.0, 9.0],
        &[1.0, 1.0, 9.0, 0.0],
    ]);
    let conflicts: ConflictSet = [(0, 1), (2, 3)].into_iter().collect();
    let outcome = highs(1, 0).run(&m, &conflicts).unwrap();

    assert!(outcome.is_converged());
    assert_regular(&outcome.assignment, 1);
    for pair in conflicts.iter() {
        assert!(!outcome.assignment.selected(pair.row, pair.col));
    }
    assert_eq!(outcome.total_affinity, 4.0);
}

#[test]
fn out_of_range_conflicts_are_ignored() {
    let conflicts: ConflictSet = [(0, 7), (9, 1)].into_iter().collect();
    let outcome = highs(1, 0).run(&triangle(), &conflicts).unwrap();

    assert!(outcome.is_converged());
    assert_eq!(outcome.total_affinity, 7.0);
}

#[test]
fn conflicts_from_names_flow_into_the_match() {
    let roster = Roster::new(vec![
        Entity::new("Ada Lovelace").with_conflicts("Charles Babage"),
        Entity::new("Charles Babbage"),
        Entity::new("Grace Hopper"),
        Entity::new("Alan Turing").with_conflicts("grace hopper"),
    ]);
    let conflicts = ConflictResolver::new(Arc::new(IndelRatio::new())).resolve(&roster);
    assert!(conflicts.contains(0, 1) && conflicts.contains(1, 0));

    let m = matrix(&[
        &[0.0, 9.0, 1.0, 1.0],
        &[9.0, 0.0, 1.0, 1.0],
        &[1.0, 1.0, 0.0, 9.0],
        &[1.0, 1.0, 9.0, 0.0],
    ]);
    let outcome = highs(1, 0).run(&m, &conflicts).unwrap();

    assert!(outcome.is_converged());
    assert!(!outcome.assignment.selected(0, 1));
    assert!(!outcome.assignment.selected(1, 0));
}

#[test]
fn fully_excluded_entity_does_not_converge() {
    let conflicts: ConflictSet = [(0, 1), (0, 2)].into_iter().collect();
    let outcome = highs(1, 0).run(&triangle(), &conflicts).unwrap();

    assert!(!outcome.is_converged());
    assert_eq!(outcome.stage, MatchStage::Failed);
    assert_eq!(outcome.assignment, Assignment::empty(3));
    assert!(outcome.pairings.is_empty());
    assert_eq!(outcome.total_affinity, 0.0);
    assert_eq!(outcome.failed_at, Some(MatchStage::Suppressed));
    assert!(matches!(
        outcome.status,
        MatchStatus::NotConverged(FailureReason::Overconstrained { .. })
    ));
    assert!(outcome.message().starts_with("Problem does not converge"));
    assert!(outcome.message().contains("after conflicts"));
}

#[test]
fn infeasible_lp_is_reported_not_raised() {
    // Rows 0-2 may only pick column 3, which can take one of them.
    let m = matrix(&[
        &[0.0, 1.0, 1.0, 1.0],
        &[1.0, 0.0, 1.0, 1.0],
        &[1.0, 1.0, 0.0, 1.0],
        &[1.0, 1.0, 1.0, 0.0],
    ]);
    let conflicts: ConflictSet = [(0, 1), (0, 2), (1, 2)].into_iter().collect();
    let outcome = highs(1, 0).run(&m, &conflicts).unwrap();

    assert!(
        matches!(
            outcome.status,
            MatchStatus::NotConverged(FailureReason::Solver(
                SolutionStatus::Infeasible | SolutionStatus::Unbounded | SolutionStatus::Error
            ))
        ),
        "{:?}",
        outcome.status
    );
    assert_eq!(outcome.failed_at, Some(MatchStage::Formulated));
    assert_eq!(outcome.assignment, Assignment::empty(4));
}

#[test]
fn untrimmed_selection_stays_within_candidates() {
    let m = matrix(&[
        &[0.0, 2.0, 0.0, 3.0],
        &[1.0, 0.0, 4.0, 0.0],
        &[0.0, 5.0, 0.0, 1.0],
        &[2.0, 0.0, 1.0, 0.0],
    ]);
    let outcome = highs(1, 0).run(&m, &ConflictSet::new()).unwrap();

    let candidates = EdgeIndex::from_matrix(&outcome.prepared);
    assert!(outcome.assignment.total() <= candidates.len());
    for (row, col) in outcome.assignment.positions() {
        assert!(outcome.prepared.is_candidate(row, col), "({row}, {col})");
    }
}

#[test]
fn prepared_matrix_zeroes_diagonal_and_conflicts_after_trim() {
    let m = matrix(&[
        &[0.0, 9.0, 8.0, 7.0],
        &[9.0, 0.0, 8.0, 7.0],
        &[8.0, 9.0, 0.0, 7.0],
        &[7.0, 9.0, 8.0, 0.0],
    ]);
    let conflicts: ConflictSet = [(0, 1)].into_iter().collect();
    // Sentinels sort lowest, so they are the first entries trimmed.
    let outcome = highs(1, 2).run(&m, &conflicts).unwrap();

    for i in 0..4 {
        assert_eq!(outcome.prepared.get(i, i), 0.0);
    }
    assert_eq!(outcome.prepared.get(0, 1), 0.0);
    assert_eq!(outcome.prepared.get(1, 0), 0.0);
    assert!(outcome.is_converged(), "{}", outcome.message());
}

#[test]
fn over_trimming_is_caught_before_solving() {
    let solver = RecordingSolver::new();
    let outcome = MatchOrchestrator::new(solver.clone(), MatchParams::exact(1, 3))
        .run(&triangle(), &ConflictSet::new())
        .unwrap();

    assert!(matches!(
        outcome.status,
        MatchStatus::NotConverged(FailureReason::DegenerateTrim { .. })
    ));
    assert_eq!(outcome.failed_at, Some(MatchStage::Trimmed));
    assert!(solver.last().is_none());
}

#[test]
fn trimming_shrinks_the_lp() {
    let m = matrix(&[
        &[0.0, 4.0, 3.0, 2.0],
        &[4.0, 0.0, 2.0, 3.0],
        &[3.0, 2.0, 0.0, 4.0],
        &[2.0, 3.0, 4.0, 0.0],
    ]);

    let full = RecordingSolver::new();
    MatchOrchestrator::new(full.clone(), MatchParams::exact(1, 0))
        .run(&m, &ConflictSet::new())
        .unwrap();
    let trimmed = RecordingSolver::new();
    MatchOrchestrator::new(trimmed.clone(), MatchParams::exact(1, 2))
        .run(&m, &ConflictSet::new())
        .unwrap();

    assert_eq!(full.last().unwrap().num_vars(), 12);
    assert_eq!(trimmed.last().unwrap().num_vars(), 8);
}

#[test]
fn integral_flag_selects_the_ilp_entry_point() {
    let solver = RecordingSolver::new();
    let params = MatchParams {
        integral: true,
        ..MatchParams::exact(1, 0)
    };
    MatchOrchestrator::new(solver.clone(), params)
        .run(&triangle(), &ConflictSet::new())
        .unwrap();

    assert_eq!(solver.integral_calls(), 1);
}

#[test]
fn invalid_bounds_are_an_error() {
    let params = MatchParams {
        bounds: LoadBounds {
            min_per_row: 3,
            max_per_row: 1,
            min_per_column: 1,
            max_per_column: 1,
        },
        n_trim: 0,
        integral: false,
    };
    let result = MatchOrchestrator::new(Arc::new(HiGHSSolver::new()), params)
        .run(&triangle(), &ConflictSet::new());

    assert!(result.is_err());
}

#[test]
fn orchestrator_is_reusable_across_runs() {
    let orchestrator = highs(1, 0);
    let first = orchestrator.run(&triangle(), &ConflictSet::new()).unwrap();
    let second = orchestrator.run(&triangle(), &ConflictSet::new()).unwrap();

    assert_eq!(first.total_affinity, second.total_affinity);
    assert_eq!(first.assignment.total(), second.assignment.total());
}
