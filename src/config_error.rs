use thiserror::Error;

use crate::{bar_kind::BarKind, weight::Weight};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{field}: {value} is not a finite weight.")]
    NonFinite { field: String, value: f64 },

    #[error("{field}: {value} cannot be negative.")]
    Negative { field: String, value: f64 },

    #[error("{field}: plate weight {value} must be greater than zero.")]
    NonPositivePlate { field: String, value: f64 },

    #[error("{field}: {value}kg is heavier than any bar can hold.")]
    TooHeavy { field: String, value: f64 },

    #[error("{field}: {value}kg is more precise than one gram.")]
    TooPrecise { field: String, value: f64 },

    #[error("{kind} total range is inverted: {min}kg is above {max}kg.")]
    InvertedRange {
        kind: BarKind,
        min: Weight,
        max: Weight,
    },

    #[error("{0} has no big plate columns.")]
    NoColumns(BarKind),

    #[error("{kind} lists the {value}kg column twice.")]
    DuplicateColumn { kind: BarKind, value: Weight },

    #[error("{kind} column {value}kg is below the {threshold}kg big plate threshold.")]
    SmallColumn {
        kind: BarKind,
        value: Weight,
        threshold: Weight,
    },

    #[error(
        "Trap bar sleeve rule for {crowded} big plates must apply below the full sleeve at {full}."
    )]
    SleeveRule { crowded: usize, full: usize },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
