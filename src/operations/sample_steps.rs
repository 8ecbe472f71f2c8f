use std::ops::RangeInclusive;

use crate::error::{OperationError, Result};
use crate::geometry::PathSampler;
use crate::math::Point2;

/// One sample produced by [`SampleSteps`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSample {
    /// The step counter `c` this point was sampled for.
    pub counter: u32,
    /// The point at proportion `c * step`.
    pub point: Point2,
}

/// Samples a path at proportions `c * step` for every counter `c` in a range.
///
/// Meant for wrapping samplers, where any step (typically
/// [`GOLDEN_RATIO`](crate::math::GOLDEN_RATIO)) keeps every proportion valid.
/// On a non-wrapping sampler the first out-of-range counter fails the whole
/// run, so nothing is emitted for a range that cannot be completed.
#[derive(Debug)]
pub struct SampleSteps {
    range: RangeInclusive<u32>,
    step: f64,
}

impl SampleSteps {
    /// Creates a new step sampling operation over the inclusive `range`.
    #[must_use]
    pub fn new(range: RangeInclusive<u32>, step: f64) -> Self {
        Self { range, step }
    }

    /// Executes the operation, returning one sample per counter in order.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the range is empty or `step` is not finite
    /// - Any query error from [`PathSampler::point_at_proportion`]
    pub fn execute(&self, sampler: &PathSampler) -> Result<Vec<StepSample>> {
        if self.range.is_empty() {
            return Err(OperationError::InvalidInput(format!(
                "range {}..={} must end at or after its start",
                self.range.start(),
                self.range.end()
            ))
            .into());
        }
        if !self.step.is_finite() {
            return Err(
                OperationError::InvalidInput(format!("step {} must be finite", self.step)).into(),
            );
        }

        self.range
            .clone()
            .map(|counter| {
                let point = sampler.point_at_proportion(f64::from(counter) * self.step)?;
                Ok(StepSample { counter, point })
            })
            .collect()
    }
}
