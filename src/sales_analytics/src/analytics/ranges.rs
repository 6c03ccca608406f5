//! Price-range histogram over ten fixed bands.
//!
//! Bands are labelled `"0-100"`, `"101-200"`, ..., `"801-900"`, `"901-greater"`.
//! How a price is matched against a band depends on [`BandBoundaryPolicy`]:
//!
//! - [`BandBoundaryPolicy::Exclusive`] (default): `starts_at < price < ends_at`.
//!   A price sitting exactly on a boundary (100, 101, 200, 900, 901, ...) matches
//!   no band and is left out of every count.
//! - [`BandBoundaryPolicy::Contiguous`]: `starts_at <= price < next.starts_at`,
//!   last band unbounded. Every non-negative price matches exactly one band.
//!
//! A record without a price never matches.

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};

use crate::models::Sale;

/// One fixed price interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBand {
    /// Lower bound as written in the label.
    pub starts_at: f64,
    /// Upper bound as written in the label (`INFINITY` for the last band).
    pub ends_at: f64,
    /// Output key.
    pub label: &'static str,
}

const fn band(starts_at: f64, ends_at: f64, label: &'static str) -> PriceBand {
    PriceBand {
        starts_at,
        ends_at,
        label,
    }
}

/// Number of bands.
pub const BAND_COUNT: usize = 10;

/// The ten bands in ascending order.
pub const PRICE_BANDS: [PriceBand; BAND_COUNT] = [
    band(0.0, 100.0, "0-100"),
    band(101.0, 200.0, "101-200"),
    band(201.0, 300.0, "201-300"),
    band(301.0, 400.0, "301-400"),
    band(401.0, 500.0, "401-500"),
    band(501.0, 600.0, "501-600"),
    band(601.0, 700.0, "601-700"),
    band(701.0, 800.0, "701-800"),
    band(801.0, 900.0, "801-900"),
    band(901.0, f64::INFINITY, "901-greater"),
];

/// How prices on a band boundary are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandBoundaryPolicy {
    /// Both bounds exclusive; boundary prices fall into no band.
    #[default]
    Exclusive,
    /// Half-open bands that tile `[0, +inf)`.
    Contiguous,
}

impl std::str::FromStr for BandBoundaryPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "exclusive" => Ok(Self::Exclusive),
            "contiguous" => Ok(Self::Contiguous),
            other => anyhow::bail!("unknown band boundary policy: {other}"),
        }
    }
}

/// Index of the band `price` falls into, if any.
pub fn band_index(price: f64, policy: BandBoundaryPolicy) -> Option<usize> {
    match policy {
        BandBoundaryPolicy::Exclusive => PRICE_BANDS
            .iter()
            .position(|b| price > b.starts_at && price < b.ends_at),
        BandBoundaryPolicy::Contiguous => {
            if !(price >= 0.0) {
                return None; // negative or NaN
            }
            // last band whose start is <= price
            PRICE_BANDS.iter().rposition(|b| price >= b.starts_at)
        }
    }
}

/// Count of records per band, in fixed band order.
///
/// Serializes as a JSON object keyed by band label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriceRangeHistogram {
    counts: [u64; BAND_COUNT],
}

impl PriceRangeHistogram {
    /// Bucket records with the default [`BandBoundaryPolicy::Exclusive`] policy.
    pub fn from_sales(sales: &[Sale]) -> Self {
        Self::from_sales_with_policy(sales, BandBoundaryPolicy::default())
    }

    /// Bucket records with an explicit boundary policy.
    pub fn from_sales_with_policy(sales: &[Sale], policy: BandBoundaryPolicy) -> Self {
        let mut counts = [0u64; BAND_COUNT];
        for idx in sales
            .iter()
            .filter_map(|s| s.price)
            .filter_map(|p| band_index(p, policy))
        {
            counts[idx] += 1;
        }
        Self { counts }
    }

    /// Count for a band label; `None` for an unknown label.
    pub fn count(&self, label: &str) -> Option<u64> {
        PRICE_BANDS
            .iter()
            .position(|b| b.label == label)
            .map(|i| self.counts[i])
    }

    /// Sum over all bands.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// `(label, count)` pairs in band order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, u64)> + '_ {
        PRICE_BANDS
            .iter()
            .zip(self.counts.iter())
            .map(|(b, c)| (b.label, *c))
    }
}

impl Serialize for PriceRangeHistogram {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(BAND_COUNT))?;
        for (label, count) in self.iter() {
            map.serialize_entry(label, &count)?;
        }
        map.end()
    }
}
