use rayon::prelude::*;

use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
use crate::core::data::grid_spec::{GridSpec, LANE_WIDTH};
use crate::core::data::iteration_budget::IterationBudget;

/// Computes the escape-time field over every sample point of `spec`.
///
/// Rows are independent and split across rayon workers; within a row,
/// samples are iterated in lanes of [`LANE_WIDTH`] so the recurrence runs
/// on all lane members at once. A member's count is recorded once, at its
/// first crossing of the squared escape radius, and the lane stops early
/// when every member has escaped. Cells that never escape keep the
/// `max_iterations` sentinel.
pub fn compute_field(
    spec: GridSpec,
    budget: IterationBudget,
) -> Result<EscapeGrid, EscapeGridError> {
    let mut counts = vec![budget.max_iterations(); spec.width() * spec.height()];

    counts
        .par_chunks_mut(spec.width())
        .enumerate()
        .for_each(|(row, row_counts)| {
            for lane in 0..spec.lane_count() {
                iterate_lane(spec, budget, lane, row, row_counts);
            }
        });

    EscapeGrid::from_counts(spec.width(), spec.height(), counts)
}

/// Runs the recurrence for one lane of a row, writing escape counts into
/// the row's slice of the output buffer.
fn iterate_lane(
    spec: GridSpec,
    budget: IterationBudget,
    lane: usize,
    row: usize,
    row_counts: &mut [u32],
) {
    let mut z_re = [0.0f64; LANE_WIDTH];
    let mut z_im = [0.0f64; LANE_WIDTH];
    let mut finished = [false; LANE_WIDTH];

    let mut c_re = [0.0f64; LANE_WIDTH];
    for member in 0..LANE_WIDTH {
        c_re[member] = spec.c_re(spec.lane_column(lane, member));
    }
    let c_im = spec.c_im(row);

    for iteration in 0..budget.max_iterations() {
        for member in 0..LANE_WIDTH {
            let re = z_re[member] * z_re[member] - z_im[member] * z_im[member] + c_re[member];
            let im = 2.0 * z_re[member] * z_im[member] + c_im;

            z_re[member] = re;
            z_im[member] = im;

            if !finished[member] && re * re + im * im > budget.radius_squared() {
                finished[member] = true;

                let column = lane * LANE_WIDTH + member;
                // Clamped members of a trailing partial lane fall past the
                // right edge and are discarded here.
                if column < spec.width() {
                    row_counts[column] = iteration;
                }
            }
        }

        if finished.iter().all(|&member| member) {
            break;
        }
    }
}
