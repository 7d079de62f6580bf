use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum BarKind {
    Barbell,
    TrapBar,
}

impl BarKind {
    pub const ALL: [BarKind; 2] = [BarKind::Barbell, BarKind::TrapBar];

    /// Bars to report on, in the order first asked for. No selection means all of them.
    #[must_use]
    pub fn selected(kinds: &[BarKind]) -> Vec<BarKind> {
        if kinds.is_empty() {
            BarKind::ALL.to_vec()
        } else {
            kinds.iter().copied().unique().collect()
        }
    }

    /// File name (without extension) the report for this bar is written to.
    #[must_use]
    pub fn report_stem(&self) -> &'static str {
        match self {
            BarKind::Barbell => "BarbellWeights",
            BarKind::TrapBar => "TrapBarWeights",
        }
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarKind::Barbell => write!(f, "Barbell"),
            BarKind::TrapBar => write!(f, "Trap bar"),
        }
    }
}

impl FromStr for BarKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "b" | "barbell" => Ok(BarKind::Barbell),
            "t" | "trap" | "trap-bar" | "trapbar" => Ok(BarKind::TrapBar),
            _ => Err("Invalid bar kind.".to_string()),
        }
    }
}
