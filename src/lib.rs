mod controllers;
mod core;
mod storage;

pub use controllers::profile::profile_controller;
pub use crate::core::actions::compute_field::compute_field;
pub use crate::core::actions::extract_field::{extract_field, intensity, ExtractFieldError};
pub use crate::core::data::column_summary::{ColumnSummary, ColumnSummaryError, ProfilePoint};
pub use crate::core::data::escape_grid::{EscapeGrid, EscapeGridError};
pub use crate::core::data::grid_spec::{GridSpec, GridSpecError, LANE_WIDTH};
pub use crate::core::data::intensity_image::{IntensityImage, IntensityImageError};
pub use crate::core::data::iteration_budget::{IterationBudget, IterationBudgetError};
pub use crate::core::data::plane_bounds::{PlaneBounds, PlaneBoundsError};
pub use storage::write_pgm::write_pgm;
