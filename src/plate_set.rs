use crate::{loadout::Loadout, plate::Plate, subsets::Subsets};

/// A plate inventory to enumerate: plates that may go on the bar and plates that always do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlateSet {
    name: String,
    optional: Vec<Plate>,
    mandatory: Vec<Plate>,
}

impl PlateSet {
    #[must_use]
    pub fn new(name: impl Into<String>, optional: Vec<Plate>, mandatory: Vec<Plate>) -> Self {
        PlateSet {
            name: name.into(),
            optional,
            mandatory,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn optional(&self) -> &[Plate] {
        &self.optional
    }

    #[must_use]
    pub fn mandatory(&self) -> &[Plate] {
        &self.mandatory
    }

    /// One loadout per subset of the optional plates, each with every mandatory plate added.
    ///
    /// Repeated optional weights give repeated loadouts; they are kept here and removed by
    /// [`crate::dedup`].
    pub fn loadouts(&self) -> impl Iterator<Item = Loadout> + '_ {
        Subsets::new(&self.optional).iter().map(|subset| {
            Loadout::new(
                self.mandatory
                    .iter()
                    .copied()
                    .chain(subset)
                    .collect(),
            )
        })
    }

    /// Number of loadouts [`PlateSet::loadouts`] yields, if it fits in a `usize`.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        Subsets::new(&self.optional).len()
    }
}
