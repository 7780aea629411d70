//! Streaming smoothers fed one sample at a time.

mod cumulative_average;
pub use cumulative_average::CumulativeAverage;

mod exponential_average;
pub use exponential_average::ExponentialAverage;

mod double_exponential_average;
pub use double_exponential_average::DoubleExponentialAverage;
