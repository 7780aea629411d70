use num_traits::Float;

use crate::{
    Result,
    helper::{double_exponential_step, resolve_factor},
};

/// Streaming double exponential (Holt) moving average.
///
/// The first sample seeds the level. The second seeds the trend with the
/// difference of the first two samples and is then smoothed like every
/// later sample, so the level sequence matches
/// [`double_exponential`](crate::double_exponential) step for step.
#[derive(Debug, Clone)]
pub struct DoubleExponentialAverage<T> {
    /// Level smoothing factor
    smooth_factor: T,
    /// Trend smoothing factor
    trend_factor: T,
    /// Current level
    level: Option<T>,
    /// Current trend, known from the second sample onwards
    trend: Option<T>,
}

impl<T: Float> DoubleExponentialAverage<T> {
    /// Creates a new `DoubleExponentialAverage`
    ///
    /// # Arguments
    ///
    /// * `smooth_factor` - Level smoothing factor in `[0, 1]`, defaults to 0
    /// * `trend_factor` - Trend smoothing factor in `[0, 1]`, defaults to 0
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The average, or `InvalidParameter` naming the invalid factor
    pub fn new(smooth_factor: Option<T>, trend_factor: Option<T>) -> Result<Self> {
        Ok(Self {
            smooth_factor: resolve_factor("smooth_factor", smooth_factor)?,
            trend_factor: resolve_factor("trend_factor", trend_factor)?,
            level: None,
            trend: None,
        })
    }

    /// Returns the level smoothing factor
    pub fn smooth_factor(&self) -> T {
        self.smooth_factor
    }

    /// Returns the trend smoothing factor
    pub fn trend_factor(&self) -> T {
        self.trend_factor
    }

    /// Feeds the next sample of the series
    ///
    /// # Examples
    ///
    /// ```
    /// # use series_smoothing::DoubleExponentialAverage;
    /// let mut holt = DoubleExponentialAverage::new(Some(0.5), Some(0.5)).unwrap();
    /// let inputs = [3.0, 5.0, 9.0, 20.0];
    /// let mut results = vec![];
    ///
    /// inputs.iter().for_each(|i| {
    ///     holt.next(*i).value().map(|v| results.push(v));
    /// });
    ///
    /// assert_eq!(&results, &[3.0, 5.0, 8.0, 15.25]);
    /// assert_eq!(holt.trend(), Some(4.875));
    /// ```
    pub fn next(&mut self, value: T) -> &mut Self {
        let Some(level) = self.level else {
            self.level = Some(value);
            return self;
        };

        let trend = self.trend.unwrap_or(value - level);
        let (level, trend) =
            double_exponential_step(self.smooth_factor, self.trend_factor, value, level, trend);
        self.level = Some(level);
        self.trend = Some(trend);
        self
    }

    /// Returns the current level, `None` before the first sample
    pub fn value(&self) -> Option<T> {
        self.level
    }

    /// Returns the current trend, `None` before the second sample
    pub fn trend(&self) -> Option<T> {
        self.trend
    }

    /// Forecasts the series `horizon` steps past the latest sample
    ///
    /// # Returns
    ///
    /// * `Option<T>` - `level + horizon * trend`, or `None` before the second sample
    pub fn forecast(&self, horizon: usize) -> Option<T> {
        self.level
            .zip(self.trend)
            .zip(T::from(horizon))
            .map(|((level, trend), h)| level + h * trend)
    }

    /// Resets the average so the next two samples seed it again
    pub fn reset(&mut self) -> &mut Self {
        self.level = None;
        self.trend = None;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alloc::vec::Vec;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::{StatsError, double_exponential_with_trend};

    #[test]
    fn matches_batch_average() {
        let inputs = [10.0, 12.5, 11.0, 14.0, 15.5, 15.0, 18.25];
        let batch = double_exponential_with_trend(&inputs, Some(0.3), Some(0.6)).unwrap();

        let mut holt = DoubleExponentialAverage::new(Some(0.3), Some(0.6)).unwrap();
        let mut levels = Vec::new();
        let mut trends = Vec::new();
        for &x in &inputs {
            holt.next(x);
            levels.push(holt.value().unwrap());
            if let Some(t) = holt.trend() {
                trends.push(t);
            }
        }

        assert_eq!(levels, batch.smoothed);
        assert_eq!(&trends[..], &batch.trend[1..]);
    }

    #[test]
    fn trend_is_unknown_after_one_sample() {
        let mut holt = DoubleExponentialAverage::new(None, None).unwrap();
        holt.next(5.0);
        assert_eq!(holt.value(), Some(5.0));
        assert_eq!(holt.trend(), None);
        assert_eq!(holt.forecast(1), None);
    }

    #[test]
    fn zero_factors_extrapolate_first_difference() {
        let mut holt = DoubleExponentialAverage::new(None, None).unwrap();
        holt.next(1.0).next(2.0).next(10.0).next(-4.0);
        assert_eq!(holt.value(), Some(4.0));
        assert_eq!(holt.trend(), Some(1.0));
    }

    #[test]
    fn forecast_works() {
        let mut holt = DoubleExponentialAverage::new(Some(1.0), Some(1.0)).unwrap();
        holt.next(1.0).next(3.0).next(5.0);
        assert_approx_eq!(holt.forecast(0).unwrap(), 5.0, 1e-12);
        assert_approx_eq!(holt.forecast(3).unwrap(), 11.0, 1e-12);
    }

    #[test]
    fn reset_works() {
        let mut holt = DoubleExponentialAverage::new(Some(0.5), Some(0.5)).unwrap();
        holt.next(1.0).next(2.0);
        holt.reset();
        assert_eq!(holt.value(), None);
        assert_eq!(holt.trend(), None);
        assert_eq!(holt.next(8.0).value(), Some(8.0));
    }

    #[test]
    fn invalid_factors_are_named() {
        assert_eq!(
            DoubleExponentialAverage::new(Some(-1.0), None).unwrap_err(),
            StatsError::InvalidParameter {
                name: "smooth_factor",
                value: -1.0
            }
        );
        assert_eq!(
            DoubleExponentialAverage::new(None, Some(2.0)).unwrap_err(),
            StatsError::InvalidParameter {
                name: "trend_factor",
                value: 2.0
            }
        );
    }

    #[test]
    fn accessors() {
        let holt = DoubleExponentialAverage::new(Some(0.2), Some(0.4)).unwrap();
        assert_eq!(holt.smooth_factor(), 0.2);
        assert_eq!(holt.trend_factor(), 0.4);
    }
}
