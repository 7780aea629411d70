#![doc = include_str!("../README.md")]
#![no_std]
#![deny(
    unsafe_code,
    unused_imports,
    unused_variables,
    unused_must_use,
    missing_docs,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented
)]
#![allow(clippy::just_underscores_and_digits, clippy::len_without_is_empty)]

#[macro_use]
extern crate alloc;

pub(crate) type Kbn<T> = compensated_summation::KahanBabuskaNeumaier<T>;

mod utils;
pub(crate) use utils::helper;

mod error;
pub use error::{Result, StatsError};

mod moving_average;
pub use moving_average::{
    Smoothed, cumulative, double_exponential, double_exponential_with_trend, exponential,
};

mod rolling;
pub use rolling::{CumulativeAverage, DoubleExponentialAverage, ExponentialAverage};

mod dispersion;
pub use dispersion::{
    array_sum, deviations, mean, sparse_sum, squares, standard_deviation, variance,
};
