use std::fmt::Display;

use itertools::Itertools;

use crate::{plate::Plate, weight::Weight};

/// The plates on one side of the bar, heaviest first. The other side mirrors it.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Loadout {
    plates: Vec<Plate>,
}

impl Loadout {
    #[must_use]
    pub fn new(plates: Vec<Plate>) -> Self {
        Loadout {
            plates: plates.into_iter().sorted_by(|a, b| b.cmp(a)).collect(),
        }
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn contains(&self, plate: &Plate) -> bool {
        self.plates.contains(plate)
    }

    #[must_use]
    pub fn total(&self, base: Weight) -> Weight {
        total_weight(&self.plates, base)
    }

    /// Splits into (big, small) plates around `threshold`, both still heaviest first.
    #[must_use]
    pub fn split_at(&self, threshold: Weight) -> (Vec<Plate>, Vec<Plate>) {
        self.plates
            .iter()
            .copied()
            .partition(|plate| plate.is_big(threshold))
    }
}

/// Bar weight plus both sides of plates, rounded to a tenth of a kilogram (halves round up).
#[must_use]
pub fn total_weight(plates: &[Plate], base: Weight) -> Weight {
    (base + plates.iter().sum::<Weight>() * 2).round_to_tenth()
}

impl Display for Loadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.plates.iter().join(", "))
    }
}

/// A loadout together with the total it puts on a particular bar.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct WeightedLoadout {
    total: Weight,
    loadout: Loadout,
}

impl WeightedLoadout {
    #[must_use]
    pub fn new(loadout: Loadout, base: Weight) -> Self {
        WeightedLoadout {
            total: loadout.total(base),
            loadout,
        }
    }

    #[must_use]
    pub fn total(&self) -> Weight {
        self.total
    }

    #[must_use]
    pub fn loadout(&self) -> &Loadout {
        &self.loadout
    }
}

impl Display for WeightedLoadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kg {}", self.total, self.loadout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plates(weights: &[f64]) -> Vec<Plate> {
        Plate::from_weights("plates", weights).unwrap()
    }

    fn kg(kg: f64) -> Weight {
        Weight::from_kg("kg", kg).unwrap()
    }

    #[test]
    fn totals_both_sides_plus_the_bar() {
        assert_eq!(total_weight(&plates(&[10.0, 5.0]), kg(20.0)), kg(50.0));
        assert_eq!(total_weight(&[], kg(20.0)), kg(20.0));
        assert_eq!(total_weight(&plates(&[22.65, 20.0]), kg(30.0)), kg(115.3));
    }

    #[test]
    fn sorts_heaviest_first() {
        let loadout = Loadout::new(plates(&[1.25, 20.0, 5.0, 1.25, 22.65]));
        assert_eq!(loadout.plates(), plates(&[22.65, 20.0, 5.0, 1.25, 1.25]));
    }

    #[test]
    fn splits_big_from_small() {
        let loadout = Loadout::new(plates(&[2.5, 10.0, 15.9, 4.5]));
        let (big, small) = loadout.split_at(kg(10.0));
        assert_eq!(big, plates(&[15.9, 10.0]));
        assert_eq!(small, plates(&[4.5, 2.5]));
    }

    #[test]
    fn displays_total_and_plates() {
        let weighted = WeightedLoadout::new(Loadout::new(plates(&[5.0, 10.0])), kg(20.0));
        assert_eq!(weighted.to_string(), "50.0kg [10.0, 5.0]");
    }
}
