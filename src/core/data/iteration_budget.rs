use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum IterationBudgetError {
    ZeroMaxIterations,
    NonPositiveRadius { radius_squared: f64 },
}

impl fmt::Display for IterationBudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroMaxIterations => {
                write!(f, "maximum iterations must be greater than zero")
            }
            Self::NonPositiveRadius { radius_squared } => {
                write!(
                    f,
                    "squared escape radius must be positive: {}",
                    radius_squared
                )
            }
        }
    }
}

impl Error for IterationBudgetError {}

/// Iteration cap and escape threshold for the recurrence.
///
/// `radius_squared` is compared against `re² + im²`, so it is a squared
/// distance, not a linear radius. The reference configuration uses 5.0,
/// tighter-running than the canonical 4.0 bound.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct IterationBudget {
    max_iterations: u32,
    radius_squared: f64,
}

impl IterationBudget {
    pub fn new(max_iterations: u32, radius_squared: f64) -> Result<Self, IterationBudgetError> {
        if max_iterations == 0 {
            return Err(IterationBudgetError::ZeroMaxIterations);
        }

        if radius_squared <= 0.0 {
            return Err(IterationBudgetError::NonPositiveRadius { radius_squared });
        }

        Ok(Self {
            max_iterations,
            radius_squared,
        })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn radius_squared(&self) -> f64 {
        self.radius_squared
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_budget_new_valid() {
        let budget = IterationBudget::new(50, 5.0).unwrap();

        assert_eq!(budget.max_iterations(), 50);
        assert_eq!(budget.radius_squared(), 5.0);
    }

    #[test]
    fn test_iteration_budget_rejects_zero_max_iterations() {
        let budget = IterationBudget::new(0, 5.0);

        assert_eq!(budget, Err(IterationBudgetError::ZeroMaxIterations));
    }

    #[test]
    fn test_non_positive_radius_message_names_squared_threshold() {
        let error = IterationBudget::new(50, -4.0).unwrap_err();

        assert_eq!(
            error.to_string(),
            "squared escape radius must be positive: -4"
        );
    }

    #[test]
    fn test_iteration_budget_rejects_non_positive_radius() {
        let zero_radius = IterationBudget::new(50, 0.0);
        let negative_radius = IterationBudget::new(50, -4.0);

        assert_eq!(
            zero_radius,
            Err(IterationBudgetError::NonPositiveRadius { radius_squared: 0.0 })
        );
        assert_eq!(
            negative_radius,
            Err(IterationBudgetError::NonPositiveRadius {
                radius_squared: -4.0
            })
        );
    }
}
