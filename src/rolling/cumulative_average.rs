use num_traits::Float;

use crate::{
    Kbn, Result, StatsError,
    helper::count_as,
    utils::RingBuffer,
};

/// Streaming cumulative moving average over a trailing window.
///
/// Keeps the last `run` samples in a ring buffer alongside a running
/// Kahan-Babuska-Neumaier sum of the weighted window, so each update costs
/// O(1). Feeding a series sample by sample yields the values
/// [`cumulative`](crate::cumulative) produces at the corresponding indices,
/// up to floating rounding of the running sum.
#[derive(Debug, Clone)]
pub struct CumulativeAverage<T> {
    /// Trailing window of samples
    buf: RingBuffer<T>,
    /// Window length
    run: usize,
    /// Window length as `T`
    run_t: T,
    /// Multiplier applied to every sample
    weight: T,
    /// Running sum of the weighted window
    sum: Kbn<T>,
    /// Average of the latest complete window
    value: Option<T>,
}

impl<T: Float + Default> CumulativeAverage<T> {
    /// Creates a new `CumulativeAverage` over `run` samples
    ///
    /// # Arguments
    ///
    /// * `run` - The window length, at least 1
    /// * `weight` - Multiplier applied to every sample, defaults to 1
    ///
    /// # Returns
    ///
    /// * `Result<Self>` - The average, or `InvalidParameter` if `run` is 0
    pub fn new(run: usize, weight: Option<T>) -> Result<Self> {
        if run == 0 {
            return Err(StatsError::InvalidRun(0));
        }

        Ok(Self {
            buf: RingBuffer::new(run),
            run,
            run_t: count_as(run)?,
            weight: weight.unwrap_or_else(T::one),
            sum: Kbn::default(),
            value: None,
        })
    }

    /// Returns the window length
    pub const fn period(&self) -> usize {
        self.run
    }

    /// Returns the weight applied to every sample
    pub fn weight(&self) -> T {
        self.weight
    }

    /// Returns the number of samples currently held, at most the window length
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` once a complete window has been seen
    pub fn is_ready(&self) -> bool {
        self.buf.is_full()
    }

    /// Feeds the next sample of the series
    ///
    /// # Arguments
    ///
    /// * `value` - The new sample
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The average
    ///
    /// # Examples
    ///
    /// ```
    /// # use series_smoothing::CumulativeAverage;
    /// let mut avg = CumulativeAverage::new(3, None).unwrap();
    /// let inputs = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    /// let mut results = vec![];
    ///
    /// inputs.iter().for_each(|i| {
    ///     avg.next(*i).value().map(|v| results.push(v));
    /// });
    ///
    /// assert_eq!(&results, &[2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn next(&mut self, value: T) -> &mut Self {
        if let Some(evicted) = self.buf.push(value) {
            self.sum -= self.weight * evicted;
        }
        self.sum += self.weight * value;

        if self.buf.is_full() {
            self.value = Some(self.sum.total() / self.run_t);
        }
        self
    }

    /// Recomputes the average from the held window, could be called to avoid
    /// prolonged compounding of floating rounding errors in the running sum
    ///
    /// # Returns
    ///
    /// * `&mut Self` - The average
    pub fn recompute(&mut self) -> &mut Self {
        self.sum = Kbn::default();
        for &x in self.buf.iter_newest() {
            self.sum += self.weight * x;
        }
        if self.buf.is_full() {
            self.value = Some(self.sum.total() / self.run_t);
        }
        self
    }

    /// Returns the average of the latest window, `None` until the window is complete
    pub fn value(&self) -> Option<T> {
        self.value
    }

    /// Resets the average, discarding the window
    pub fn reset(&mut self) -> &mut Self {
        self.buf.reset();
        self.sum = Kbn::default();
        self.value = None;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use alloc::vec::Vec;

    use assert_approx_eq::assert_approx_eq;

    use super::*;
    use crate::cumulative;

    #[test]
    fn value_works() {
        let mut avg = CumulativeAverage::new(4, Some(2.0)).unwrap();
        let inputs = [1.0, 3.0, 5.0, 7.0, 9.0, 11.0];
        let mut results = vec![];

        inputs.iter().for_each(|i| {
            if let Some(v) = avg.next(*i).value() {
                results.push(v)
            }
        });

        let expected = [8.0, 12.0, 16.0];
        assert_eq!(&results, &expected);
    }

    #[test]
    fn not_ready_until_window_is_full() {
        let mut avg = CumulativeAverage::new(3, None).unwrap();
        assert!(!avg.next(1.0).is_ready());
        assert_eq!(avg.value(), None);
        assert_eq!(avg.next(2.0).len(), 2);
        assert!(avg.next(3.0).is_ready());
        assert_eq!(avg.value(), Some(2.0));
    }

    #[test]
    fn matches_batch_average() {
        let inputs = [
            100_000.1, 100_000.2, 100_000.3, 100_000.4, 100_000.5, 100_000.6, 100_000.7,
        ];
        let batch = cumulative(&inputs, 3, Some(0.7)).unwrap();

        let mut avg = CumulativeAverage::new(3, Some(0.7)).unwrap();
        let streamed: Vec<Option<f64>> = inputs.iter().map(|&x| avg.next(x).value()).collect();

        assert_eq!(streamed.len(), batch.len());
        for (s, b) in streamed.iter().zip(&batch) {
            assert_eq!(s.is_some(), b.is_some());
            if let (Some(s), Some(b)) = (s, b) {
                assert_approx_eq!(s, b, 1e-8);
            }
        }
    }

    #[test]
    fn evicted_samples_leave_the_sum() {
        let mut avg = CumulativeAverage::new(2, None).unwrap();
        avg.next(1e12).next(1e12);
        assert_eq!(avg.value(), Some(1e12));

        avg.next(1.0).next(3.0);
        assert_eq!(avg.value(), Some(2.0));
    }

    #[test]
    fn recompute_matches_batch_exactly() {
        let inputs = [0.1, 0.7, 1e9, 0.3, 0.9, 0.2, 0.4];
        let batch = cumulative(&inputs, 3, Some(1.5)).unwrap();

        let mut avg = CumulativeAverage::new(3, Some(1.5)).unwrap();
        inputs.iter().for_each(|&x| {
            avg.next(x);
        });

        assert_eq!(avg.recompute().value(), batch[inputs.len() - 1]);
    }

    #[test]
    fn recompute_before_window_is_full() {
        let mut avg = CumulativeAverage::new(3, None).unwrap();
        avg.next(1.0).recompute();
        assert_eq!(avg.value(), None);
        assert_eq!(avg.next(2.0).next(3.0).value(), Some(2.0));
    }

    #[test]
    fn reset_works() {
        let mut avg = CumulativeAverage::new(2, None).unwrap();
        avg.next(10.0).next(20.0);
        assert_approx_eq!(avg.value().unwrap(), 15.0, 1e-12);

        avg.reset();
        assert_eq!(avg.len(), 0);
        assert_eq!(avg.next(4.0).value(), None);
        assert_eq!(avg.next(6.0).value(), Some(5.0));
    }

    #[test]
    fn zero_run_is_rejected() {
        assert_eq!(
            CumulativeAverage::<f64>::new(0, None).unwrap_err(),
            StatsError::InvalidRun(0)
        );
    }

    #[test]
    fn accessors() {
        let avg = CumulativeAverage::new(5, Some(0.25)).unwrap();
        assert_eq!(avg.period(), 5);
        assert_eq!(avg.weight(), 0.25);
    }
}
