use std::cmp::Ordering;

use itertools::Itertools;
use serde::Deserialize;

use crate::loadout::WeightedLoadout;

/// How weighted loadouts are ordered before adjacent duplicates are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DedupKey {
    /// Total ascending, then loadout descending. Every duplicate ends up adjacent.
    #[default]
    Full,
    /// Total only. Two equal loadouts separated by a third of the same total both survive.
    Total,
}

impl DedupKey {
    #[must_use]
    pub fn compare(&self, a: &WeightedLoadout, b: &WeightedLoadout) -> Ordering {
        match self {
            DedupKey::Full => a
                .total()
                .cmp(&b.total())
                .then_with(|| b.loadout().cmp(a.loadout())),
            DedupKey::Total => a.total().cmp(&b.total()),
        }
    }
}

/// Stable sort by `compare`, then drop every item equal to the one before it.
pub fn sort_and_dedup_by<T, F>(items: impl IntoIterator<Item = T>, compare: F) -> Vec<T>
where
    T: PartialEq,
    F: FnMut(&T, &T) -> Ordering,
{
    items.into_iter().sorted_by(compare).dedup().collect()
}

#[must_use]
pub fn sort_and_dedup(weights: Vec<WeightedLoadout>, key: DedupKey) -> Vec<WeightedLoadout> {
    sort_and_dedup_by(weights, |a, b| key.compare(a, b))
}
