use num_traits::Float;

use crate::{
    Result,
    helper::{exponential_step, resolve_factor},
};

/// Streaming single exponential moving average.
///
/// The first sample seeds the average; each later sample is blended in with
/// the smoothing factor.
#[derive(Debug, Clone)]
pub struct ExponentialAverage<T> {
    /// Smoothing factor in `[0, 1]`
    factor: T,
    /// Current smoothed value
    value: Option<T>,
}

impl<T: Float> ExponentialAverage<T> {
    /// Creates a new `ExponentialAverage`
    ///
    /// # Arguments
    ///
    /// * `factor` - Smoothing factor in `[0, 1]`, defaults to 0 without validation
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The average, or `InvalidParameter` for a factor outside `[0, 1]`
    pub fn new(factor: Option<T>) -> Result<Self> {
        Ok(Self {
            factor: resolve_factor("factor", factor)?,
            value: None,
        })
    }

    /// Returns the smoothing factor
    pub fn factor(&self) -> T {
        self.factor
    }

    /// Feeds the next sample of the series
    ///
    /// # Examples
    ///
    /// ```
    /// # use series_smoothing::ExponentialAverage;
    /// let mut ema = ExponentialAverage::new(Some(0.5)).unwrap();
    /// let inputs = [2.0, 4.0, 8.0];
    /// let mut results = vec![];
    ///
    /// inputs.iter().for_each(|i| {
    ///     ema.next(*i).value().map(|v| results.push(v));
    /// });
    ///
    /// assert_eq!(&results, &[2.0, 3.0, 5.5]);
    /// ```
    pub fn next(&mut self, value: T) -> &mut Self {
        self.value = Some(match self.value {
            None => value,
            Some(prev) => exponential_step(self.factor, value, prev),
        });
        self
    }

    /// Returns the current smoothed value, `None` before the first sample
    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// Resets the average so the next sample seeds it again
    pub fn reset(&mut self) -> &mut Self {
        self.value = None;
        self
    }
}
