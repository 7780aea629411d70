use alloc::vec::Vec;

use num_traits::Float;

use crate::{
    Kbn, Result,
    helper::{count_as, require_len},
};

/// Sums a sequence of samples
///
/// Uses Kahan-Babuska-Neumaier compensated summation. Entries that are not a
/// number (`NaN`) contribute zero instead of poisoning the total; callers that
/// need strict numeric input should validate it beforehand.
///
/// # Arguments
///
/// * `data` - The samples to sum
///
/// # Returns
///
/// * `T` - The sum, zero for an empty sequence
///
/// # Examples
///
/// ```
/// # use series_smoothing::array_sum;
/// assert_eq!(array_sum(&[1.0, 2.0, f64::NAN, 4.0]), 7.0);
/// assert_eq!(array_sum::<f64>(&[]), 0.0);
/// ```
pub fn array_sum<T: Float + Default>(data: &[T]) -> T {
    let mut sum = Kbn::default();
    for &x in data.iter().filter(|x| !x.is_nan()) {
        sum += x;
    }
    sum.total()
}

/// Sums a sparse sequence, absent entries contribute zero
///
/// Accepts the index-aligned output of [`cumulative`](crate::cumulative)
/// directly. `NaN` entries are skipped as in [`array_sum`].
///
/// # Examples
///
/// ```
/// # use series_smoothing::{cumulative, sparse_sum};
/// let avg = cumulative(&[1.0, 2.0, 3.0, 4.0], 2, None).unwrap();
/// assert_eq!(sparse_sum(&avg), 1.5 + 2.5 + 3.5);
/// ```
pub fn sparse_sum<T: Float + Default>(data: &[Option<T>]) -> T {
    let mut sum = Kbn::default();
    for x in data.iter().flatten().filter(|x| !x.is_nan()) {
        sum += *x;
    }
    sum.total()
}

/// Returns the arithmetic mean of a sequence
///
/// # Arguments
///
/// * `data` - The samples, at least one
///
/// # Returns
///
/// * `Result<T>` - The mean, or `InvalidInput` for an empty sequence
///
/// # Examples
///
/// ```
/// # use series_smoothing::mean;
/// assert_eq!(mean(&[2.0, 4.0, 6.0]), Ok(4.0));
/// assert!(mean::<f64>(&[]).is_err());
/// ```
pub fn mean<T: Float + Default>(data: &[T]) -> Result<T> {
    require_len("mean", data.len(), 1)?;
    Ok(array_sum(data) / count_as(data.len())?)
}

/// Returns the deviation of every sample from `mean`
///
/// The input is left untouched; a new sequence is returned.
pub fn deviations<T: Float>(data: &[T], mean: T) -> Vec<T> {
    data.iter().map(|&x| x - mean).collect()
}

/// Returns the square of every sample
pub fn squares<T: Float>(data: &[T]) -> Vec<T> {
    data.iter().map(|&x| x * x).collect()
}

/// Returns the sample variance of a sequence
///
/// Divides the sum of squared deviations by `n - 1` (Bessel's correction).
///
/// # Arguments
///
/// * `data` - The samples, at least two
///
/// # Returns
///
/// * `Result<T>` - The variance, or `InvalidInput` for fewer than two samples
///
/// # Examples
///
/// ```
/// # use series_smoothing::variance;
/// # use assert_approx_eq::assert_approx_eq;
/// let var: f64 = variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_approx_eq!(var, 32.0 / 7.0, 1e-12);
/// ```
pub fn variance<T: Float + Default>(data: &[T]) -> Result<T> {
    variance_of("variance", data)
}

/// Returns the sample standard deviation of a sequence
///
/// Computed in four stages: the mean, the deviation of each sample from it,
/// the squared deviations, and the square root of their sum over `n - 1`.
/// A `NaN` sample yields a `NaN` result.
///
/// # Arguments
///
/// * `data` - The samples, at least two
///
/// # Returns
///
/// * `Result<T>` - The standard deviation, or `InvalidInput` for fewer than two samples
///
/// # Examples
///
/// ```
/// # use series_smoothing::standard_deviation;
/// # use assert_approx_eq::assert_approx_eq;
/// let sd: f64 = standard_deviation(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
/// assert_approx_eq!(sd, 2.138, 0.001);
/// ```
pub fn standard_deviation<T: Float + Default>(data: &[T]) -> Result<T> {
    variance_of("standard_deviation", data).map(T::sqrt)
}

fn variance_of<T: Float + Default>(operation: &'static str, data: &[T]) -> Result<T> {
    require_len(operation, data.len(), 2)?;

    let mean = mean(data)?;
    let sq_deviations = squares(&deviations(data, mean));

    // NaN samples must poison the result here, unlike in `array_sum`
    let mut total = Kbn::default();
    for &sq in &sq_deviations {
        total += sq;
    }

    Ok(total.total() / count_as(sq_deviations.len() - 1)?)
}
