//! Per-category record counts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::models::Sale;

/// Key used for records without a category.
pub const MISSING_CATEGORY: &str = "undefined";

/// Category label -> record count, in first-seen order.
///
/// Labels are kept verbatim (case and whitespace included). Records without a
/// category share the [`MISSING_CATEGORY`] key, so a literal `"undefined"` label
/// is merged with them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryBreakdown(IndexMap<String, u64>);

impl CategoryBreakdown {
    /// Group records by category.
    pub fn from_sales(sales: &[Sale]) -> Self {
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for sale in sales {
            let key = sale.category.as_deref().unwrap_or(MISSING_CATEGORY);
            *counts.entry(key.to_string()).or_insert(0) += 1;
        }
        Self(counts)
    }

    /// Count for a label (0 when absent).
    pub fn get(&self, label: &str) -> u64 {
        self.0.get(label).copied().unwrap_or(0)
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no records were grouped.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().sum()
    }

    /// `(label, count)` pairs in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
