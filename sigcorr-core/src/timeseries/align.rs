use crate::series::{AlignedPair, Point, Series};

/// Align a comparison series against a target series.
///
/// - `offset == 0`: keep only timestamps present in both series (simultaneous
///   observations), in ascending order.
/// - `offset > 0`: for each target timestamp `t`, take the comparison point
///   `offset - 1` positions after the first comparison timestamp strictly
///   greater than `t`.
/// - `offset < 0`: for each target timestamp `t`, take the comparison point
///   `|offset|` positions before the first comparison timestamp not less than `t`.
///
/// Target timestamps whose resolved comparison index falls outside the
/// comparison series are skipped. Offsets count observations, not wall-clock
/// time, so irregular sampling is tolerated.
///
/// The two sides of the returned pair always have equal length.
///
/// ```
/// use sigcorr_core::{Series, align};
///
/// let target: Series = [(100, 1.0), (200, 2.0), (300, 3.0)].into_iter().collect();
/// let comparison: Series = [(100, 10.0), (200, 20.0), (300, 30.0)].into_iter().collect();
///
/// let lead = align(&target, &comparison, 1);
/// let ts: Vec<(i64, i64)> = lead.iter().map(|(a, b)| (a.ts, b.ts)).collect();
/// assert_eq!(ts, vec![(100, 200), (200, 300)]);
/// ```
#[must_use]
pub fn align(target: &Series, comparison: &Series, offset: i64) -> AlignedPair {
    if offset == 0 {
        align_exact(target, comparison)
    } else {
        align_shifted(target, comparison, offset)
    }
}

/// Intersection of timestamps via a merge walk over both sorted series.
fn align_exact(target: &Series, comparison: &Series) -> AlignedPair {
    let a = target.points();
    let b = comparison.points();
    let mut out: Vec<(Point, Point)> = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0usize, 0usize);
    while i < a.len() && j < b.len() {
        match a[i].ts.cmp(&b[j].ts) {
            core::cmp::Ordering::Less => i += 1,
            core::cmp::Ordering::Greater => j += 1,
            core::cmp::Ordering::Equal => {
                out.push((a[i], b[j]));
                i += 1;
                j += 1;
            }
        }
    }
    AlignedPair::from_pairs(out)
}

fn align_shifted(target: &Series, comparison: &Series, offset: i64) -> AlignedPair {
    let cmp = comparison.points();
    let len = i64::try_from(cmp.len()).unwrap_or(i64::MAX);
    let mut out: Vec<(Point, Point)> = Vec::with_capacity(target.len());
    for p in target.points() {
        let idx = if offset > 0 {
            let upper = i64::try_from(cmp.partition_point(|c| c.ts <= p.ts)).unwrap_or(i64::MAX);
            upper.saturating_add(offset - 1)
        } else {
            let lower = i64::try_from(cmp.partition_point(|c| c.ts < p.ts)).unwrap_or(i64::MAX);
            lower.saturating_add(offset)
        };
        if idx < 0 || idx >= len {
            continue;
        }
        // In range by the check above.
        let Ok(k) = usize::try_from(idx) else {
            continue;
        };
        out.push((*p, cmp[k]));
    }
    AlignedPair::from_pairs(out)
}
