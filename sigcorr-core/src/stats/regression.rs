use statrs::distribution::{ContinuousCDF, Normal};

use super::correlation::{moments, t_two_sided};
use super::rank::{median, median_sorted, tie_groups};

const TINY: f64 = 1.0e-20;

/// Ordinary least-squares fit of `y` on `x`.
///
/// Returns `(slope, intercept, rvalue, pvalue, stderr)`. All slots are `None`
/// when every `x` is identical. With two observations the p-value is 1 for a
/// flat line and 0 otherwise, and the standard error is 0.
#[must_use]
pub fn linregress(
    x: &[f64],
    y: &[f64],
) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
    let n = x.len();
    if n != y.len() || n < 2 {
        return (None, None, None, None, None);
    }
    let m = moments(x, y);
    if m.sxx == 0.0 {
        return (None, None, None, None, None);
    }

    let r = if m.syy == 0.0 {
        0.0
    } else {
        (m.sxy / (m.sxx * m.syy).sqrt()).clamp(-1.0, 1.0)
    };
    let slope = m.sxy / m.sxx;
    let intercept = m.y_mean - slope * m.x_mean;

    if n == 2 {
        let p = if y[0] == y[1] { 1.0 } else { 0.0 };
        return (Some(slope), Some(intercept), Some(r), Some(p), Some(0.0));
    }

    #[allow(clippy::cast_precision_loss)]
    let dof = (n - 2) as f64;
    let t = r * (dof / ((1.0 - r + TINY) * (1.0 + r + TINY))).sqrt();
    let p = t_two_sided(t, dof);
    let stderr = ((1.0 - r * r) * m.syy / m.sxx / dof).sqrt();
    (
        Some(slope),
        Some(intercept),
        Some(r),
        p,
        stderr.is_finite().then_some(stderr),
    )
}

fn tie_penalty(values: &[f64]) -> f64 {
    tie_groups(values)
        .into_iter()
        .map(|k| {
            #[allow(clippy::cast_precision_loss)]
            let k = k as f64;
            k * (k - 1.0) * (2.0 * k + 5.0)
        })
        .sum()
}

/// Most pairwise slopes [`theil_sen`] will materialise (400 MB of `f64`).
pub const MAX_PAIRWISE_SLOPES: usize = 50_000_000;

/// `n * (n - 1) / 2`, or `None` on overflow or above [`MAX_PAIRWISE_SLOPES`].
fn pairwise_capacity(n: usize) -> Option<usize> {
    n.checked_mul(n.checked_sub(1)?)
        .map(|p| p / 2)
        .filter(|&p| p <= MAX_PAIRWISE_SLOPES)
}

/// Theil–Sen robust slope of `y` on `x` with a confidence interval on the slope.
///
/// Returns `(slope, intercept, low_slope, high_slope)`. The slope is the median
/// of pairwise slopes over pairs with distinct `x`; the intercept is
/// `median(y) - slope * median(x)`. `confidence` is the two-sided coverage of
/// the interval (values at or below one half are read as the tail mass).
///
/// Inputs whose pair count exceeds [`MAX_PAIRWISE_SLOPES`] yield all `None`.
#[must_use]
pub fn theil_sen(
    x: &[f64],
    y: &[f64],
    confidence: f64,
) -> (Option<f64>, Option<f64>, Option<f64>, Option<f64>) {
    let n = x.len();
    if n != y.len() || n < 2 {
        return (None, None, None, None);
    }

    let Some(pairs) = pairwise_capacity(n) else {
        #[cfg(feature = "tracing")]
        tracing::warn!(n, "too many points for pairwise slopes; returning null");
        return (None, None, None, None);
    };
    let mut slopes = Vec::new();
    if slopes.try_reserve_exact(pairs).is_err() {
        return (None, None, None, None);
    }
    for i in 0..n {
        for j in 0..n {
            let dx = x[i] - x[j];
            if dx > 0.0 {
                slopes.push((y[i] - y[j]) / dx);
            }
        }
    }
    if slopes.is_empty() {
        return (None, None, None, None);
    }
    slopes.sort_by(f64::total_cmp);

    let slope = median_sorted(&slopes);
    let intercept = match (median(y), median(x)) {
        (Some(my), Some(mx)) => Some(my - slope * mx),
        _ => None,
    };

    let alpha = if confidence > 0.5 { 1.0 - confidence } else { confidence };
    let (low, high) = slope_bounds(&slopes, x, y, alpha).unzip();
    (Some(slope), intercept, low, high)
}

fn slope_bounds(slopes: &[f64], x: &[f64], y: &[f64], alpha: f64) -> Option<(f64, f64)> {
    let z = Normal::new(0.0, 1.0).ok()?.inverse_cdf(alpha / 2.0);
    #[allow(clippy::cast_precision_loss)]
    let ny = y.len() as f64;
    let sigsq = (ny * (ny - 1.0) * (2.0 * ny + 5.0) - tie_penalty(x) - tie_penalty(y)) / 18.0;
    let sigma = sigsq.sqrt();
    if !(sigma.is_finite() && z.is_finite()) {
        return None;
    }

    #[allow(clippy::cast_precision_loss)]
    let nt = slopes.len() as f64;
    let last = slopes.len() - 1;
    #[allow(clippy::cast_possible_truncation)]
    let upper = ((nt - z * sigma) / 2.0).round_ties_even() as i64;
    #[allow(clippy::cast_possible_truncation)]
    let lower = ((nt + z * sigma) / 2.0).round_ties_even() as i64 - 1;
    let hi = usize::try_from(upper).ok()?.min(last);
    let lo = usize::try_from(lower.max(0)).ok()?;
    Some((*slopes.get(lo)?, *slopes.get(hi)?))
}
