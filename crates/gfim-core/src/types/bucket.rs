//! Maturity bucket classification for the yield curve.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Standard curve tenor buckets, keyed by days to maturity.
///
/// Bucket boundaries are inclusive day ranges; the variant order is the
/// curve's tenor order, so sorting by bucket sorts the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MaturityBucket {
    /// 0 to 91 days.
    #[serde(rename = "91D")]
    D91,
    /// 92 to 182 days.
    #[serde(rename = "182D")]
    D182,
    /// 183 to 365 days.
    #[serde(rename = "1Y")]
    Y1,
    /// 366 to 730 days.
    #[serde(rename = "2Y")]
    Y2,
    /// 731 to 1095 days.
    #[serde(rename = "3Y")]
    Y3,
    /// 1096 to 1825 days.
    #[serde(rename = "5Y")]
    Y5,
    /// 1826 to 3650 days.
    #[serde(rename = "10Y")]
    Y10,
    /// 3651 to 7300 days.
    #[serde(rename = "20Y")]
    Y20,
    /// Beyond 7300 days.
    #[serde(rename = "20Y+")]
    Y20Plus,
}

impl MaturityBucket {
    /// All buckets in tenor order.
    pub const ALL: [MaturityBucket; 9] = [
        MaturityBucket::D91,
        MaturityBucket::D182,
        MaturityBucket::Y1,
        MaturityBucket::Y2,
        MaturityBucket::Y3,
        MaturityBucket::Y5,
        MaturityBucket::Y10,
        MaturityBucket::Y20,
        MaturityBucket::Y20Plus,
    ];

    /// Classifies a days-to-maturity value into its bucket.
    ///
    /// Total over all day counts; anything beyond twenty years falls into
    /// the overflow bucket.
    #[must_use]
    pub fn for_days(days: u32) -> Self {
        match days {
            0..=91 => MaturityBucket::D91,
            92..=182 => MaturityBucket::D182,
            183..=365 => MaturityBucket::Y1,
            366..=730 => MaturityBucket::Y2,
            731..=1095 => MaturityBucket::Y3,
            1096..=1825 => MaturityBucket::Y5,
            1826..=3650 => MaturityBucket::Y10,
            3651..=7300 => MaturityBucket::Y20,
            _ => MaturityBucket::Y20Plus,
        }
    }

    /// Returns the bucket label used in persisted records.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            MaturityBucket::D91 => "91D",
            MaturityBucket::D182 => "182D",
            MaturityBucket::Y1 => "1Y",
            MaturityBucket::Y2 => "2Y",
            MaturityBucket::Y3 => "3Y",
            MaturityBucket::Y5 => "5Y",
            MaturityBucket::Y10 => "10Y",
            MaturityBucket::Y20 => "20Y",
            MaturityBucket::Y20Plus => "20Y+",
        }
    }
}

impl fmt::Display for MaturityBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
