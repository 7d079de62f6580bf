use crate::{loadout::Loadout, plate::Plate, weight::Weight};

/// Which loads belong on a standard barbell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BarbellRules {
    pub reserved: Vec<Plate>,
    pub min_total: Weight,
    pub max_total: Weight,
}

impl BarbellRules {
    /// Rejects loadouts using any reserved (trap bar only) plate, and totals outside
    /// `min_total..=max_total`.
    #[must_use]
    pub fn accepts(&self, total: Weight, loadout: &Loadout) -> bool {
        if self.reserved.iter().any(|plate| loadout.contains(plate)) {
            return false;
        }

        (self.min_total..=self.max_total).contains(&total)
    }
}

/// Which loads fit on the trap bar's sleeves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrapBarRules {
    /// Every one of these must be loaded.
    pub oversized: Vec<Plate>,
    /// Totals must be strictly heavier than this.
    pub min_total: Weight,
    /// From this many big plates on, the sleeve is full.
    pub full_sleeve_big_plates: usize,
    /// Plates a full sleeve holds, big and small together.
    pub sleeve_capacity: usize,
    pub crowded_big_plates: usize,
    pub crowded_small_cap: usize,
    /// Two of these can swap for one heavier small plate on a crowded sleeve.
    pub substitution_plate: Plate,
    pub substitution_count: usize,
    pub substituted_small_cap: usize,
}

impl TrapBarRules {
    #[must_use]
    pub fn accepts(&self, total: Weight, big_plates: &[Plate], small_plates: &[Plate]) -> bool {
        if total <= self.min_total
            || !self
                .oversized
                .iter()
                .all(|plate| big_plates.contains(plate))
        {
            return false;
        }

        let big = big_plates.len();
        let small = small_plates.len();

        if big >= self.full_sleeve_big_plates {
            return big + small <= self.sleeve_capacity;
        }

        if big == self.crowded_big_plates {
            let substitutes = small_plates
                .iter()
                .filter(|plate| **plate == self.substitution_plate)
                .count();
            if substitutes == self.substitution_count {
                return small <= self.substituted_small_cap;
            }
            return small <= self.crowded_small_cap;
        }

        true
    }
}
