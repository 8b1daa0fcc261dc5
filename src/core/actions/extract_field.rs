use rayon::prelude::*;
use std::error::Error;
use std::fmt;

use crate::core::data::column_summary::{ColumnSummary, ColumnSummaryError, ProfilePoint};
use crate::core::data::escape_grid::EscapeGrid;
use crate::core::data::intensity_image::{IntensityImage, IntensityImageError};
use crate::core::data::iteration_budget::IterationBudget;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractFieldError {
    Image(IntensityImageError),
    Summary(ColumnSummaryError),
}

impl fmt::Display for ExtractFieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Image(error) => write!(f, "building intensity image failed: {}", error),
            Self::Summary(error) => write!(f, "building column summary failed: {}", error),
        }
    }
}

impl Error for ExtractFieldError {}

impl From<IntensityImageError> for ExtractFieldError {
    fn from(error: IntensityImageError) -> Self {
        Self::Image(error)
    }
}

impl From<ColumnSummaryError> for ExtractFieldError {
    fn from(error: ColumnSummaryError) -> Self {
        Self::Summary(error)
    }
}

/// Maps a raw escape count into the 0..=255 intensity band.
///
/// Counts at or above the budget map to 255 exactly, sidestepping float
/// rounding at the top of the scale. A count of zero maps to zero; the log
/// of zero is never taken. Everything in between is compressed with
/// `ln(count) * 255 / ln(max_iterations)`.
#[must_use]
pub fn intensity(count: u32, max_iterations: u32) -> u8 {
    if count >= max_iterations {
        return 255;
    }

    if count == 0 {
        return 0;
    }

    let scaled = f64::from(count).ln() * 255.0 / f64::from(max_iterations).ln();
    scaled.floor().clamp(0.0, 255.0) as u8
}

/// Derives the intensity image and the per-column profile line from a
/// completed escape grid.
///
/// Image rows are mapped in parallel. The summary records, per column, the
/// topmost row reaching full intensity; columns that never reach it are
/// omitted. Columns are scanned in parallel, order preserved.
pub fn extract_field(
    grid: &EscapeGrid,
    budget: IterationBudget,
) -> Result<(IntensityImage, ColumnSummary), ExtractFieldError> {
    let data: Vec<u8> = grid
        .counts()
        .par_chunks(grid.width())
        .flat_map_iter(|row_counts| {
            row_counts
                .iter()
                .map(|&count| intensity(count, budget.max_iterations()))
        })
        .collect();

    let image = IntensityImage::from_data(grid.width(), grid.height(), data)?;

    let points: Vec<ProfilePoint> = (0..image.width())
        .into_par_iter()
        .filter_map(|column| {
            (0..image.height())
                .find(|&row| image.get(column, row) == Some(255))
                .map(|row| ProfilePoint { column, row })
        })
        .collect();

    let summary = ColumnSummary::from_points(points)?;

    Ok((image, summary))
}
