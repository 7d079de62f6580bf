use std::{
    fmt::Display,
    iter::Sum,
    ops::{Add, Mul},
};

use crate::config_error::ConfigError;

/// Heaviest value accepted from configuration. Keeps every sum of plates well inside `u64` grams.
pub const MAX_KG: f64 = 1_000_000.0;

const GRAMS_PER_KG: u64 = 1000;
const GRAMS_PER_TENTH: u64 = 100;

/// A weight stored in whole grams.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);

    #[must_use]
    pub const fn from_grams(grams: u64) -> Self {
        Weight(grams)
    }

    #[must_use]
    pub fn grams(self) -> u64 {
        self.0
    }

    ///
    /// # Errors
    /// If `kg` is not finite, is negative, exceeds [`MAX_KG`] or is finer than one gram.
    ///
    pub fn from_kg(field: &str, kg: f64) -> Result<Self, ConfigError> {
        if !kg.is_finite() {
            return Err(ConfigError::NonFinite {
                field: field.to_string(),
                value: kg,
            });
        }
        if kg < 0.0 {
            return Err(ConfigError::Negative {
                field: field.to_string(),
                value: kg,
            });
        }
        if kg > MAX_KG {
            return Err(ConfigError::TooHeavy {
                field: field.to_string(),
                value: kg,
            });
        }

        let grams = (kg * GRAMS_PER_KG as f64).round();
        if (kg * GRAMS_PER_KG as f64 - grams).abs() > 1e-6 {
            return Err(ConfigError::TooPrecise {
                field: field.to_string(),
                value: kg,
            });
        }

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let grams = grams as u64;
        Ok(Weight(grams))
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn kg(self) -> f64 {
        self.0 as f64 / GRAMS_PER_KG as f64
    }

    /// Rounds to one decimal place of a kilogram, halves rounding up.
    #[must_use]
    pub fn round_to_tenth(self) -> Self {
        Weight((self.0 + GRAMS_PER_TENTH / 2) / GRAMS_PER_TENTH * GRAMS_PER_TENTH)
    }
}

impl Add for Weight {
    type Output = Weight;

    fn add(self, rhs: Self) -> Self::Output {
        Weight(self.0 + rhs.0)
    }
}

impl Mul<u64> for Weight {
    type Output = Weight;

    fn mul(self, rhs: u64) -> Self::Output {
        Weight(self.0 * rhs)
    }
}

impl Sum for Weight {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, Add::add)
    }
}

// Kilograms with at least one fractional digit and no trailing zeros beyond it: 80.0, 22.65, 1.1
impl Display for Weight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.0 / GRAMS_PER_KG;
        let fraction = format!("{:03}", self.0 % GRAMS_PER_KG);
        let fraction = match fraction.trim_end_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        f.pad(&format!("{whole}.{fraction}"))
    }
}
