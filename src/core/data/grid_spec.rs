use crate::core::data::plane_bounds::PlaneBounds;
use std::error::Error;
use std::fmt;

/// Number of sample points iterated together in one lane.
pub const LANE_WIDTH: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum GridSpecError {
    ZeroHeight,
    EmptyWidth { re_span: f64, delta: f64 },
}

impl fmt::Display for GridSpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroHeight => {
                write!(f, "grid height must be greater than zero")
            }
            Self::EmptyWidth { re_span, delta } => {
                write!(
                    f,
                    "re span {} is narrower than one sample step {}",
                    re_span, delta
                )
            }
        }
    }
}

impl Error for GridSpecError {}

/// Sampling geometry derived from plane bounds and a vertical resolution.
///
/// The sample step `delta` is fixed by the imaginary span and `height`, and
/// the width follows from the real span at the same step, so cells are
/// square in plane space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GridSpec {
    bounds: PlaneBounds,
    width: usize,
    height: usize,
    delta: f64,
}

impl GridSpec {
    pub fn new(bounds: PlaneBounds, height: usize) -> Result<Self, GridSpecError> {
        if height == 0 {
            return Err(GridSpecError::ZeroHeight);
        }

        let delta = bounds.im_span() / height as f64;
        let width = (bounds.re_span() / delta).floor() as usize;

        if width == 0 {
            return Err(GridSpecError::EmptyWidth {
                re_span: bounds.re_span(),
                delta,
            });
        }

        Ok(Self {
            bounds,
            width,
            height,
            delta,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> PlaneBounds {
        self.bounds
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
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Number of lanes covering a row, including a trailing partial lane.
    #[must_use]
    pub fn lane_count(&self) -> usize {
        self.width.div_ceil(LANE_WIDTH)
    }

    /// Column sampled by one member of a lane.
    ///
    /// Members of the trailing lane that fall past the right edge re-sample
    /// the last real column; their results are discarded on write-back, so
    /// no column is ever dropped.
    #[must_use]
    pub fn lane_column(&self, lane: usize, member: usize) -> usize {
        (lane * LANE_WIDTH + member).min(self.width - 1)
    }

    #[must_use]
    pub fn c_re(&self, column: usize) -> f64 {
        self.bounds.re_min() + column as f64 * self.delta
    }

    #[must_use]
    pub fn c_im(&self, row: usize) -> f64 {
        self.bounds.im_min() + row as f64 * self.delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Spans chosen so delta is exactly representable and width divides evenly.
    fn create_bounds() -> PlaneBounds {
        PlaneBounds::new(-2.5, 1.5, -1.0, 1.0).unwrap()
    }

    #[test]
    fn test_grid_spec_square_cells() {
        let spec = GridSpec::new(create_bounds(), 512).unwrap();

        assert_eq!(spec.delta(), 2.0 / 512.0);
        assert_eq!(spec.width(), 1024);
        assert_eq!(spec.height(), 512);
    }

    #[test]
    fn test_grid_spec_rejects_zero_height() {
        let spec = GridSpec::new(create_bounds(), 0);

        assert_eq!(spec, Err(GridSpecError::ZeroHeight));
    }

    #[test]
    fn test_grid_spec_rejects_sub_sample_re_span() {
        let bounds = PlaneBounds::new(0.0, 0.001, -1.0, 1.0).unwrap();
        let spec = GridSpec::new(bounds, 2);

        assert_eq!(
            spec,
            Err(GridSpecError::EmptyWidth {
                re_span: 0.001,
                delta: 1.0
            })
        );
    }

    #[test]
    fn test_lane_count_rounds_up_partial_lane() {
        // re span 1.25 at delta 0.125 gives 10 columns, 2.5 lanes.
        let bounds = PlaneBounds::new(-2.0, -0.75, -1.0, 1.0).unwrap();
        let spec = GridSpec::new(bounds, 16).unwrap();

        assert_eq!(spec.width(), 10);
        assert_eq!(spec.lane_count(), 3);
    }

    #[test]
    fn test_lane_column_clamps_past_right_edge() {
        let bounds = PlaneBounds::new(-2.0, -0.75, -1.0, 1.0).unwrap();
        let spec = GridSpec::new(bounds, 16).unwrap();

        assert_eq!(spec.lane_column(0, 0), 0);
        assert_eq!(spec.lane_column(1, 3), 7);
        assert_eq!(spec.lane_column(2, 1), 9);
        assert_eq!(spec.lane_column(2, 2), 9);
        assert_eq!(spec.lane_column(2, 3), 9);
    }

    #[test]
    fn test_sample_coordinates() {
        let bounds = PlaneBounds::new(-1.0, 1.0, -0.5, 0.5).unwrap();
        let spec = GridSpec::new(bounds, 8).unwrap();

        assert_eq!(spec.delta(), 0.125);
        assert_eq!(spec.c_re(0), -1.0);
        assert_eq!(spec.c_re(8), 0.0);
        assert_eq!(spec.c_im(0), -0.5);
        assert_eq!(spec.c_im(4), 0.0);
    }
}
