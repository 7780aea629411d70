use num_traits::Float;

use crate::{Kbn, Result, StatsError};

/// Resolves an optional smoothing factor, validating it when supplied
///
/// # Arguments
///
/// * `name` - The parameter name reported on failure
/// * `factor` - The explicitly supplied factor, `None` selects the default of 0
///
/// # Returns
///
/// * `Result<T>` - The factor, or `InvalidParameter` if it lies outside `[0, 1]`
#[inline]
pub fn resolve_factor<T: Float>(name: &'static str, factor: Option<T>) -> Result<T> {
    match factor {
        None => Ok(T::zero()),
        Some(f) if (T::zero()..=T::one()).contains(&f) => Ok(f),
        Some(f) => Err(StatsError::InvalidParameter {
            name,
            value: f.to_f64().unwrap_or(f64::NAN),
        }),
    }
}

/// Fails with `InvalidInput` when `len` is below `min`
#[inline]
pub fn require_len(operation: &'static str, len: usize, min: usize) -> Result<()> {
    if len < min {
        return Err(StatsError::InvalidInput {
            operation,
            got: len,
            min,
        });
    }
    Ok(())
}

/// Converts a sample count into the sample type
#[inline]
pub fn count_as<T: Float>(n: usize) -> Result<T> {
    T::from(n).ok_or(StatsError::UnrepresentableLength(n))
}

/// Weighted mean of a window, samples visited newest first
///
/// # Arguments
///
/// * `window` - The samples of the window, newest first
/// * `weight` - Multiplier applied to every sample
/// * `run` - The window length as `T`
#[inline]
pub fn weighted_window_mean<'a, T, I>(window: I, weight: T, run: T) -> T
where
    T: Float + Default + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut sum = Kbn::default();
    for &x in window {
        sum += weight * x;
    }
    sum.total() / run
}

/// One step of single exponential smoothing
#[inline]
pub fn exponential_step<T: Float>(factor: T, value: T, prev: T) -> T {
    factor * value + (T::one() - factor) * prev
}

/// One step of double exponential smoothing
///
/// # Returns
///
/// * `(T, T)` - The new level and the new trend
#[inline]
pub fn double_exponential_step<T: Float>(
    smooth_factor: T,
    trend_factor: T,
    value: T,
    prev_level: T,
    prev_trend: T,
) -> (T, T) {
    let _1 = T::one();
    let level = smooth_factor * value + (_1 - smooth_factor) * (prev_level + prev_trend);
    let trend = trend_factor * (level - prev_level) + (_1 - trend_factor) * prev_trend;
    (level, trend)
}
