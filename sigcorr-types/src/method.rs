use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SigcorrError;

/// Statistical analysis methods available to an analysis request.
///
/// Request payloads name methods by their wire string; the set is resolved into
/// this closed enumeration once at the request boundary and dispatched by
/// `match` afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Pearson product-moment correlation with two-sided p-value.
    Pearson,
    /// Spearman rank correlation with two-sided p-value.
    Spearman,
    /// Kendall's tau-b with two-sided p-value.
    #[serde(rename = "kendalltau")]
    KendallTau,
    /// Ordinary least-squares regression of comparison on target.
    #[serde(rename = "linregress")]
    LinRegress,
    /// Theil–Sen robust slope estimate with confidence bounds.
    #[serde(rename = "theilslopes")]
    TheilSen,
}

impl Method {
    /// All methods in canonical response order.
    pub const ALL: [Self; 5] = [
        Self::Pearson,
        Self::Spearman,
        Self::KendallTau,
        Self::LinRegress,
        Self::TheilSen,
    ];

    /// Stable wire identifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pearson => "pearson",
            Self::Spearman => "spearman",
            Self::KendallTau => "kendalltau",
            Self::LinRegress => "linregress",
            Self::TheilSen => "theilslopes",
        }
    }

    /// Number of slots in this method's result tuple.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Pearson | Self::Spearman | Self::KendallTau => 2,
            Self::LinRegress => 5,
            Self::TheilSen => 4,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = SigcorrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == needle)
            .ok_or_else(|| SigcorrError::invalid_arg(format!("unknown analysis method: {s}")))
    }
}

/// Parse a list of method names into a de-duplicated, canonically ordered set.
///
/// # Errors
/// Returns `InvalidArg` on the first unknown method name.
pub fn parse_methods<I, S>(names: I) -> Result<Vec<Method>, SigcorrError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out: Vec<Method> = Vec::new();
    for n in names {
        let m: Method = n.as_ref().parse()?;
        if !out.contains(&m) {
            out.push(m);
        }
    }
    out.sort_unstable();
    Ok(out)
}
