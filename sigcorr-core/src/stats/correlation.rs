use statrs::distribution::{ContinuousCDF, StudentsT};

use super::rank::average_ranks;

/// Means, centered sums of squares and cross-products of two equal-length samples.
pub(crate) struct Moments {
    pub x_mean: f64,
    pub y_mean: f64,
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

pub(crate) fn moments(x: &[f64], y: &[f64]) -> Moments {
    #[allow(clippy::cast_precision_loss)]
    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for (xi, yi) in x.iter().zip(y.iter()) {
        let dx = xi - x_mean;
        let dy = yi - y_mean;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    Moments {
        x_mean,
        y_mean,
        sxx,
        syy,
        sxy,
    }
}

/// Two-sided Student-t tail probability, `None` if the distribution is undefined.
pub(crate) fn t_two_sided(t: f64, dof: f64) -> Option<f64> {
    if t.is_infinite() {
        return Some(0.0);
    }
    let dist = StudentsT::new(0.0, 1.0, dof).ok()?;
    Some((2.0 * dist.sf(t.abs())).clamp(0.0, 1.0))
}

fn pearson_r(x: &[f64], y: &[f64]) -> Option<f64> {
    let m = moments(x, y);
    if m.sxx == 0.0 || m.syy == 0.0 {
        return None;
    }
    Some((m.sxy / (m.sxx * m.syy).sqrt()).clamp(-1.0, 1.0))
}

/// Pearson correlation coefficient and two-sided p-value.
///
/// Constant input yields `(None, None)`. With exactly two observations the
/// coefficient is ±1 and the p-value is 1.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> (Option<f64>, Option<f64>) {
    if x.len() != y.len() || x.len() < 2 {
        return (None, None);
    }
    let Some(r) = pearson_r(x, y) else {
        return (None, None);
    };
    let n = x.len();
    if n == 2 {
        return (Some(r), Some(1.0));
    }
    if r.abs() == 1.0 {
        return (Some(r), Some(0.0));
    }
    #[allow(clippy::cast_precision_loss)]
    let dof = (n - 2) as f64;
    let t = r * (dof / (1.0 - r * r)).sqrt();
    (Some(r), t_two_sided(t, dof))
}

/// Spearman rank correlation and two-sided p-value (Student-t, n − 2 dof).
///
/// Constant input yields `(None, None)`; two observations give an undefined p-value.
#[must_use]
pub fn spearman(x: &[f64], y: &[f64]) -> (Option<f64>, Option<f64>) {
    if x.len() != y.len() || x.len() < 2 {
        return (None, None);
    }
    let rx = average_ranks(x);
    let ry = average_ranks(y);
    let Some(rs) = pearson_r(&rx, &ry) else {
        return (None, None);
    };
    let n = x.len();
    if n == 2 {
        return (Some(rs), None);
    }
    #[allow(clippy::cast_precision_loss)]
    let dof = (n - 2) as f64;
    let t = rs * (dof / ((rs + 1.0) * (1.0 - rs))).sqrt();
    (Some(rs), t_two_sided(t, dof))
}
