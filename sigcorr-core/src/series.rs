//! Timestamp-indexed numeric sequences and aligned pairs.

/// One observation: nanosecond timestamp and finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Nanoseconds since the Unix epoch.
    pub ts: i64,
    /// Observation value; always finite inside a [`Series`].
    pub value: f64,
}

impl Point {
    /// Construct a point.
    #[must_use]
    pub const fn new(ts: i64, value: f64) -> Self {
        Self { ts, value }
    }
}

/// Timestamp-indexed sequence of finite values.
///
/// Invariants upheld by every constructor:
/// - points are sorted by strictly increasing timestamp (no duplicates);
/// - every value is finite.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// An empty series.
    #[must_use]
    pub const fn empty() -> Self {
        Self { points: Vec::new() }
    }

    /// Build a series from `(timestamp, value)` pairs in any order.
    ///
    /// - Non-finite values are dropped.
    /// - On duplicate timestamps the first occurrence in input order wins.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, f64)>,
    {
        let mut points: Vec<Point> = pairs
            .into_iter()
            .filter(|(_, v)| v.is_finite())
            .map(|(ts, value)| Point { ts, value })
            .collect();
        // Stable sort keeps input order among equal timestamps so dedup keeps the first.
        points.sort_by_key(|p| p.ts);
        points.dedup_by_key(|p| p.ts);
        Self { points }
    }

    /// Build a series from pairs whose value may be missing; missing entries are dropped.
    #[must_use]
    pub fn from_optional<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, Option<f64>)>,
    {
        Self::from_pairs(pairs.into_iter().filter_map(|(ts, v)| v.map(|v| (ts, v))))
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the series holds no observations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Observations in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Timestamps in ascending order.
    pub fn timestamps(&self) -> impl Iterator<Item = i64> + '_ {
        self.points.iter().map(|p| p.ts)
    }

    /// Values in timestamp order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.value)
    }

    /// Value observed at exactly `ts`, if any.
    #[must_use]
    pub fn get(&self, ts: i64) -> Option<f64> {
        self.points
            .binary_search_by_key(&ts, |p| p.ts)
            .ok()
            .map(|i| self.points[i].value)
    }

    /// Earliest and latest timestamp.
    #[must_use]
    pub fn bounds(&self) -> Option<(i64, i64)> {
        Some((self.points.first()?.ts, self.points.last()?.ts))
    }

    /// Observations with `start <= ts < end`.
    #[must_use]
    pub fn within(&self, start: i64, end: i64) -> Self {
        let lo = self.points.partition_point(|p| p.ts < start);
        let hi = self.points.partition_point(|p| p.ts < end).max(lo);
        Self {
            points: self.points[lo..hi].to_vec(),
        }
    }
}

impl FromIterator<(i64, f64)> for Series {
    fn from_iter<T: IntoIterator<Item = (i64, f64)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

/// Two equal-length observation sequences that correspond positionally.
///
/// The i-th target point belongs with the i-th comparison point. Unlike a
/// [`Series`], the comparison side may repeat a timestamp when several target
/// observations resolve to the same lead/lag neighbour.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AlignedPair {
    target: Vec<Point>,
    comparison: Vec<Point>,
}

impl AlignedPair {
    /// Build from already paired points.
    #[must_use]
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Point, Point)>,
    {
        let (target, comparison) = pairs.into_iter().unzip();
        Self { target, comparison }
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.target.len()
    }

    /// True when no pairs were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    /// Target side.
    #[must_use]
    pub fn target(&self) -> &[Point] {
        &self.target
    }

    /// Comparison side.
    #[must_use]
    pub fn comparison(&self) -> &[Point] {
        &self.comparison
    }

    /// Iterate `(target, comparison)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &Point)> {
        self.target.iter().zip(self.comparison.iter())
    }

    /// Value vectors restricted to pairs where both sides are finite.
    #[must_use]
    pub fn finite_values(&self) -> (Vec<f64>, Vec<f64>) {
        self.iter()
            .filter(|(a, b)| a.value.is_finite() && b.value.is_finite())
            .map(|(a, b)| (a.value, b.value))
            .unzip()
    }
}
