use std::collections::HashMap;

use tracing::{debug, info};

use crate::{
    bar::Bar,
    bar_kind::BarKind,
    config::ValidConfig,
    dedup,
    loadout::{Loadout, WeightedLoadout},
    row::{self, Row},
};

/// Every weight the configured plates can make, per bar.
pub struct Gym {
    config: ValidConfig,
    weights: HashMap<BarKind, Vec<WeightedLoadout>>,
}

impl Gym {
    #[must_use]
    pub fn new(config: ValidConfig) -> Self {
        let loadouts = Self::loadouts(&config);
        info!(combinations = loadouts.len(), "enumerated plate combinations");

        let weights = BarKind::ALL
            .into_iter()
            .map(|kind| (kind, Self::feasible_weights(&config, &loadouts, kind)))
            .collect();

        Gym { config, weights }
    }

    /// Feasible weighted loadouts for `kind`, lightest first, without duplicates.
    #[must_use]
    pub fn weights(&self, kind: BarKind) -> &[WeightedLoadout] {
        self.weights.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn rows(&self, kind: BarKind) -> Vec<Row> {
        row::rows(
            self.weights(kind),
            self.bar(kind),
            self.config.size_threshold(),
        )
    }

    #[must_use]
    pub fn bar(&self, kind: BarKind) -> &Bar {
        self.config.bar(kind)
    }

    fn loadouts(config: &ValidConfig) -> Vec<Loadout> {
        config
            .plate_sets()
            .iter()
            .flat_map(|set| {
                debug!(
                    set = set.name(),
                    optional = set.optional().len(),
                    mandatory = set.mandatory().len(),
                    subsets = ?set.len(),
                    "enumerating plate set"
                );
                set.loadouts()
            })
            .collect()
    }

    fn feasible_weights(
        config: &ValidConfig,
        loadouts: &[Loadout],
        kind: BarKind,
    ) -> Vec<WeightedLoadout> {
        let base = config.bar(kind).weight();
        let weights = loadouts
            .iter()
            .map(|loadout| WeightedLoadout::new(loadout.clone(), base))
            .collect::<Vec<_>>();

        let unique = dedup::sort_and_dedup(weights, config.dedup_key());
        debug!(%kind, unique = unique.len(), "removed duplicate combinations");

        let feasible = unique
            .into_iter()
            .filter(|weighted| Self::accepts(config, kind, weighted))
            .collect::<Vec<_>>();
        info!(%kind, weights = feasible.len(), "filtered feasible weights");

        feasible
    }

    fn accepts(config: &ValidConfig, kind: BarKind, weighted: &WeightedLoadout) -> bool {
        match kind {
            BarKind::Barbell => config
                .barbell_rules()
                .accepts(weighted.total(), weighted.loadout()),
            BarKind::TrapBar => {
                let (big, small) = weighted.loadout().split_at(config.size_threshold());
                config
                    .trap_bar_rules()
                    .accepts(weighted.total(), &big, &small)
            }
        }
    }
}
