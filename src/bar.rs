use std::fmt::Display;

use crate::{bar_kind::BarKind, plate::Plate, weight::Weight};

/// An unloaded bar and the big plates its report lays out in columns.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    weight: Weight,
    kind: BarKind,
    columns: Vec<Plate>,
}

impl Bar {
    #[must_use]
    pub fn new(weight: Weight, kind: BarKind, columns: Vec<Plate>) -> Self {
        Bar {
            weight,
            kind,
            columns,
        }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn kind(&self) -> BarKind {
        self.kind
    }

    #[must_use]
    pub fn columns(&self) -> &[Plate] {
        &self.columns
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}kg)", self.kind, self.weight)
    }
}
