use statrs::distribution::{ContinuousCDF, Normal};
use statrs::function::factorial::factorial;

use super::rank::dense_ranks;

/// Tie summary for one variable: `(Σ t(t−1)/2, Σ t(t−1)(t−2), Σ t(t−1)(2t+5))`.
fn tie_sums(ranks: &[usize]) -> (u64, f64, f64) {
    let max = ranks.iter().copied().max().unwrap_or(0);
    let mut counts = vec![0u64; max + 1];
    for &r in ranks {
        counts[r] += 1;
    }
    let mut pairs = 0u64;
    let mut v0 = 0.0;
    let mut v1 = 0.0;
    for &c in counts.iter().filter(|&&c| c > 1) {
        pairs += c * (c - 1) / 2;
        #[allow(clippy::cast_precision_loss)]
        let cf = c as f64;
        v0 += cf * (cf - 1.0) * (cf - 2.0);
        v1 += cf * (cf - 1.0) * (2.0 * cf + 5.0);
    }
    (pairs, v0, v1)
}

/// Count discordant pairs with a Fenwick tree.
///
/// `x` must be sorted ascending (ties broken by ascending `y`); `y` holds dense ranks from 1.
fn discordant_pairs(x: &[usize], y: &[usize]) -> u64 {
    let size = x.len();
    let sup = y.iter().copied().max().unwrap_or(0) + 1;
    let mut tree = vec![0u64; sup];
    let mut dis = 0u64;
    let (mut i, mut k) = (0usize, 0usize);
    while i < size {
        while k < size && x[i] == x[k] {
            dis += i as u64;
            let mut idx = y[k];
            while idx != 0 {
                dis -= tree[idx];
                idx &= idx - 1;
            }
            k += 1;
        }
        while i < k {
            let mut idx = y[i];
            while idx < sup {
                tree[idx] += 1;
                idx += idx & idx.wrapping_neg();
            }
            i += 1;
        }
    }
    dis
}

/// Exact two-sided p-value for tie-free samples of size `n` with `c` = min(discordant, concordant).
fn exact_pvalue(n: u64, c: u64) -> Option<f64> {
    let prob = if n <= 2 {
        1.0
    } else if c == 0 {
        if n < 171 { 2.0 / factorial(n) } else { 0.0 }
    } else if c == 1 {
        if n < 172 { 2.0 / factorial(n - 1) } else { 0.0 }
    } else if 2 * c == n * (n - 1) / 2 {
        1.0
    } else if n < 171 {
        let c = usize::try_from(c).ok()?;
        let mut counts = vec![0.0f64; c + 1];
        counts[0] = 1.0;
        counts[1] = 1.0;
        for j in 3..=n {
            for i in 1..=c {
                counts[i] += counts[i - 1];
            }
            let j = usize::try_from(j).ok()?;
            if j <= c {
                let prev = counts.clone();
                for i in j..=c {
                    counts[i] -= prev[i - j];
                }
            }
        }
        2.0 * counts.iter().sum::<f64>() / factorial(n)
    } else {
        return None;
    };
    Some(prob.clamp(0.0, 1.0))
}

/// Kendall's tau-b and its two-sided p-value.
///
/// Uses the exact null distribution for tie-free samples when `n <= 33` (or the
/// statistic is extreme), otherwise the normal approximation with the
/// tie-corrected variance. Constant input yields `(None, None)`.
#[must_use]
pub fn kendall_tau(x: &[f64], y: &[f64]) -> (Option<f64>, Option<f64>) {
    let size = x.len();
    if size != y.len() || size < 2 {
        return (None, None);
    }

    // Sort by (x, y) using dense ranks so equality is exact.
    let xr = dense_ranks(x);
    let yr = dense_ranks(y);
    let mut order: Vec<usize> = (0..size).collect();
    order.sort_by_key(|&i| (xr[i], yr[i]));
    let xs: Vec<usize> = order.iter().map(|&i| xr[i]).collect();
    let ys: Vec<usize> = order.iter().map(|&i| yr[i]).collect();

    let dis = discordant_pairs(&xs, &ys);

    // Pairs tied in both x and y.
    let mut joint_ties = 0u64;
    let mut run = 1u64;
    for w in 1..=size {
        if w < size && xs[w] == xs[w - 1] && ys[w] == ys[w - 1] {
            run += 1;
        } else {
            joint_ties += run * (run - 1) / 2;
            run = 1;
        }
    }

    let (xtie, x0, x1) = tie_sums(&xr);
    let (ytie, y0, y1) = tie_sums(&yr);
    let n = size as u64;
    let tot = n * (n - 1) / 2;
    if xtie == tot || ytie == tot {
        return (None, None);
    }

    #[allow(clippy::cast_precision_loss, clippy::cast_possible_wrap)]
    let con_minus_dis =
        (tot as i64 - xtie as i64 - ytie as i64 + joint_ties as i64 - 2 * dis as i64) as f64;
    #[allow(clippy::cast_precision_loss)]
    let tau = (con_minus_dis / ((tot - xtie) as f64).sqrt() / ((tot - ytie) as f64).sqrt())
        .clamp(-1.0, 1.0);

    let pvalue = if xtie == 0 && ytie == 0 && (size <= 33 || dis.min(tot - dis) <= 1) {
        exact_pvalue(n, dis.min(tot - dis))
    } else {
        #[allow(clippy::cast_precision_loss)]
        let nf = size as f64;
        let m = nf * (nf - 1.0);
        #[allow(clippy::cast_precision_loss)]
        let (xt, yt) = (xtie as f64, ytie as f64);
        let var = (m * (2.0 * nf + 5.0) - x1 - y1) / 18.0
            + (2.0 * xt * yt) / m
            + x0 * y0 / (9.0 * m * (nf - 2.0));
        if var.is_finite() && var > 0.0 {
            let z = con_minus_dis / var.sqrt();
            Normal::new(0.0, 1.0)
                .ok()
                .map(|d| (2.0 * d.sf(z.abs())).clamp(0.0, 1.0))
        } else {
            None
        }
    };

    (Some(tau), pvalue)
}
