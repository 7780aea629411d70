use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    Result, StatsError,
    helper::{
        count_as, double_exponential_step, exponential_step, require_len, resolve_factor,
        weighted_window_mean,
    },
};

/// Level and trend series produced by double exponential smoothing.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoothed<T> {
    /// Smoothed level at every index of the input
    pub smoothed: Vec<T>,
    /// Trend estimate at every index of the input
    pub trend: Vec<T>,
}

/// Calculates the cumulative moving average of a series over a trailing window
///
/// Every output position `i >= run - 1` holds the mean of the `run` samples
/// ending at `i`, each multiplied by `weight`. Positions before the first
/// complete window hold `None`, so the output stays index-aligned with the
/// input. If `run` exceeds the length of the series the output is empty.
///
/// # Arguments
///
/// * `data` - The ordered samples
/// * `run` - The number of samples to average across, at least 1
/// * `weight` - Multiplier applied to every sample, defaults to 1
///
/// # Returns
///
/// * `Result<Vec<Option<T>>>` - The averaged series, or `InvalidParameter` if `run` is 0
///
/// # Examples
///
/// ```
/// # use series_smoothing::cumulative;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let avg = cumulative(&data, 3, None).unwrap();
///
/// assert_eq!(avg, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
/// ```
pub fn cumulative<T: Float + Default>(
    data: &[T],
    run: usize,
    weight: Option<T>,
) -> Result<Vec<Option<T>>> {
    if run == 0 {
        return Err(StatsError::InvalidRun(0));
    }
    if run > data.len() {
        return Ok(Vec::new());
    }

    let weight = weight.unwrap_or_else(T::one);
    let run_t = count_as::<T>(run)?;

    let mut avg = vec![None; run - 1];
    avg.extend(
        data.windows(run)
            .map(|window| Some(weighted_window_mean(window.iter().rev(), weight, run_t))),
    );

    Ok(avg)
}

/// Calculates the single exponential moving average of a series
///
/// The first output is seeded with the first sample, after which
/// `out[i] = factor * data[i] + (1 - factor) * out[i - 1]`.
///
/// # Arguments
///
/// * `data` - The ordered samples, at least one
/// * `factor` - Smoothing factor in `[0, 1]`, defaults to 0 without validation
///
/// # Returns
///
/// * `Result<Vec<T>>` - The smoothed series
///
/// # Errors
///
/// * `InvalidParameter` - An explicit `factor` outside `[0, 1]`
/// * `InvalidInput` - `data` is empty
///
/// # Examples
///
/// ```
/// # use series_smoothing::exponential;
/// let data = [2.0, 4.0, 8.0];
/// let ema = exponential(&data, Some(0.5)).unwrap();
///
/// assert_eq!(ema, vec![2.0, 3.0, 5.5]);
/// ```
pub fn exponential<T: Float>(data: &[T], factor: Option<T>) -> Result<Vec<T>> {
    let factor = resolve_factor("factor", factor)?;
    require_len("exponential", data.len(), 1)?;

    let mut smoothed = Vec::with_capacity(data.len());
    let mut prev = data[0];
    smoothed.push(prev);

    for &x in &data[1..] {
        prev = exponential_step(factor, x, prev);
        smoothed.push(prev);
    }

    Ok(smoothed)
}

/// Calculates the double exponential (Holt) moving average of a series
///
/// Only the smoothed level is returned; use [`double_exponential_with_trend`]
/// to also obtain the trend estimates.
///
/// # Arguments
///
/// * `data` - The ordered samples, at least two
/// * `smooth_factor` - Level smoothing factor in `[0, 1]`, defaults to 0
/// * `trend_factor` - Trend smoothing factor in `[0, 1]`, defaults to 0
///
/// # Returns
///
/// * `Result<Vec<T>>` - The smoothed level series
///
/// # Examples
///
/// ```
/// # use series_smoothing::double_exponential;
/// let data = [1.0, 2.0, 3.0, 4.0];
/// let smoothed = double_exponential(&data, None, None).unwrap();
///
/// assert_eq!(smoothed, vec![1.0, 2.0, 3.0, 4.0]);
/// ```
pub fn double_exponential<T: Float>(
    data: &[T],
    smooth_factor: Option<T>,
    trend_factor: Option<T>,
) -> Result<Vec<T>> {
    double_exponential_with_trend(data, smooth_factor, trend_factor).map(|s| s.smoothed)
}

/// Calculates the double exponential moving average along with its trend
///
/// Seeds are `smoothed[0] = data[0]` and `trend[0] = data[1] - data[0]`, then
/// for `i >= 1`:
///
/// ```text
/// smoothed[i] = sf * data[i] + (1 - sf) * (smoothed[i - 1] + trend[i - 1])
/// trend[i]    = tf * (smoothed[i] - smoothed[i - 1]) + (1 - tf) * trend[i - 1]
/// ```
///
/// # Errors
///
/// * `InvalidParameter` - An explicit factor outside `[0, 1]`, naming the factor
/// * `InvalidInput` - `data` holds fewer than two samples
///
/// # Examples
///
/// ```
/// # use series_smoothing::double_exponential_with_trend;
/// let data = [1.0, 3.0, 5.0];
/// let out = double_exponential_with_trend(&data, Some(1.0), Some(1.0)).unwrap();
///
/// assert_eq!(out.smoothed, vec![1.0, 3.0, 5.0]);
/// assert_eq!(out.trend, vec![2.0, 2.0, 2.0]);
/// ```
pub fn double_exponential_with_trend<T: Float>(
    data: &[T],
    smooth_factor: Option<T>,
    trend_factor: Option<T>,
) -> Result<Smoothed<T>> {
    let smooth_factor = resolve_factor("smooth_factor", smooth_factor)?;
    let trend_factor = resolve_factor("trend_factor", trend_factor)?;
    require_len("double_exponential", data.len(), 2)?;

    let mut smoothed = Vec::with_capacity(data.len());
    let mut trend = Vec::with_capacity(data.len());

    let (mut level, mut slope) = (data[0], data[1] - data[0]);
    smoothed.push(level);
    trend.push(slope);

    for &x in &data[1..] {
        (level, slope) = double_exponential_step(smooth_factor, trend_factor, x, level, slope);
        smoothed.push(level);
        trend.push(slope);
    }

    Ok(Smoothed { smoothed, trend })
}
