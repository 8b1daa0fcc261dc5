use std::error::Error;
use std::fmt;

/// First fully-divergent sample of one column, scanning from the top.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ProfilePoint {
    pub column: usize,
    pub row: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSummaryError {
    UnorderedColumns { previous: usize, current: usize },
}

impl fmt::Display for ColumnSummaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnorderedColumns { previous, current } => {
                write!(
                    f,
                    "summary columns must be strictly increasing: {} then {}",
                    previous, current
                )
            }
        }
    }
}

impl Error for ColumnSummaryError {}

/// Profile line of the field: at most one point per column, ordered by
/// ascending column. Columns that never reach full intensity are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnSummary {
    points: Vec<ProfilePoint>,
}

impl ColumnSummary {
    pub fn from_points(points: Vec<ProfilePoint>) -> Result<Self, ColumnSummaryError> {
        for pair in points.windows(2) {
            if pair[1].column <= pair[0].column {
                return Err(ColumnSummaryError::UnorderedColumns {
                    previous: pair[0].column,
                    current: pair[1].column,
                });
            }
        }

        Ok(Self { points })
    }

    #[must_use]
    pub fn points(&self) -> &[ProfilePoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
