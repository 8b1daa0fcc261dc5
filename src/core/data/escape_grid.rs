use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EscapeGridError {
    SizeMismatch {
        expected: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for EscapeGridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch {
                expected,
                buffer_size,
            } => {
                write!(
                    f,
                    "grid dimensions need {} counts, buffer holds {}",
                    expected, buffer_size
                )
            }
        }
    }
}

impl Error for EscapeGridError {}

/// Dense row-major grid of escape iteration counts, read-only once built.
///
/// Cells that never escaped hold the iteration-budget sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeGrid {
    width: usize,
    height: usize,
    counts: Vec<u32>,
}

impl EscapeGrid {
    pub fn from_counts(
        width: usize,
        height: usize,
        counts: Vec<u32>,
    ) -> Result<Self, EscapeGridError> {
        let expected = width * height;

        if expected != counts.len() {
            return Err(EscapeGridError::SizeMismatch {
                expected,
                buffer_size: counts.len(),
            });
        }

        Ok(Self {
            width,
            height,
            counts,
        })
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    #[must_use]
    pub fn get(&self, column: usize, row: usize) -> Option<u32> {
        if column >= self.width || row >= self.height {
            return None;
        }

        Some(self.counts[row * self.width + column])
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[u32]> {
        if row >= self.height {
            return None;
        }

        Some(&self.counts[row * self.width..(row + 1) * self.width])
    }
}
