use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PlaneBoundsError {
    InvalidSpan { re_span: f64, im_span: f64 },
}

impl fmt::Display for PlaneBoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSpan { re_span, im_span } => {
                write!(
                    f,
                    "plane bounds spans must be positive: re {} im {}",
                    re_span, im_span
                )
            }
        }
    }
}

impl Error for PlaneBoundsError {}

/// Sampled rectangle of the complex plane.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneBounds {
    re_min: f64,
    re_max: f64,
    im_min: f64,
    im_max: f64,
}

impl PlaneBounds {
    pub fn new(re_min: f64, re_max: f64, im_min: f64, im_max: f64) -> Result<Self, PlaneBoundsError> {
        let re_span = re_max - re_min;
        let im_span = im_max - im_min;

        if re_span <= 0.0 || im_span <= 0.0 {
            return Err(PlaneBoundsError::InvalidSpan { re_span, im_span });
        }

        Ok(Self {
            re_min,
            re_max,
            im_min,
            im_max,
        })
    }

    #[must_use]
    pub fn re_min(&self) -> f64 {
        self.re_min
    }

    #[must_use]
    pub fn re_max(&self) -> f64 {
        self.re_max
    }

    #[must_use]
    pub fn im_min(&self) -> f64 {
        self.im_min
    }

    #[must_use]
    pub fn im_max(&self) -> f64 {
        self.im_max
    }

    #[must_use]
    pub fn re_span(&self) -> f64 {
        self.re_max - self.re_min
    }

    #[must_use]
    pub fn im_span(&self) -> f64 {
        self.im_max - self.im_min
    }
}
