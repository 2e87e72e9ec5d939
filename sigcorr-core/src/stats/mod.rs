//! Pairwise statistics over two equal-length finite samples.
//!
//! Every function returns `None` slots where the statistic is undefined for
//! the input (constant samples, too few observations) instead of NaN.

mod correlation;
mod kendall;
/// Ranking, tie and median helpers.
pub mod rank;
mod regression;

pub use correlation::{pearson, spearman};
pub use kendall::kendall_tau;
pub use regression::{MAX_PAIRWISE_SLOPES, linregress, theil_sen};
