use std::collections::BTreeMap;

use crate::models::vote_models::{VoteRecord, KNOWN_OPTIONS};

/// Per-option vote counts, recomputed in full from the whole collection on
/// every read. Records with an unrecognized product id are silently skipped.
#[derive(Debug, Clone, PartialEq)]
pub struct Tally {
    counts: BTreeMap<String, u64>,
}

impl Tally {
    pub fn compute<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a VoteRecord>,
    {
        let mut counts: BTreeMap<String, u64> = KNOWN_OPTIONS
            .iter()
            .map(|option| (option.to_string(), 0))
            .collect();

        for record in records {
            if let Some(id) = record.product_id.as_deref() {
                if let Some(count) = counts.get_mut(id) {
                    *count += 1;
                }
            }
        }

        Tally { counts }
    }

    pub fn count(&self, option: &str) -> u64 {
        self.counts.get(option).copied().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// `count / total * 100`, rounded to one decimal place. `0.0` when the
    /// collection is empty.
    pub fn percentage(&self, option: &str) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        let raw = self.count(option) as f64 * 100.0 / total as f64;
        (raw * 10.0).round() / 10.0
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(option, count)| (option.as_str(), *count))
    }
}
