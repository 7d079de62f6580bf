use std::{fmt::Display, iter::Sum};

use crate::{config_error::ConfigError, weight::Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlateSize {
    Big,
    Small,
}

/// One pair of plates, one for each end of the bar.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Plate {
    weight: Weight,
}

impl Plate {
    ///
    /// # Errors
    /// If the weight is zero.
    ///
    pub fn new(field: &str, weight: Weight) -> Result<Self, ConfigError> {
        if weight == Weight::ZERO {
            return Err(ConfigError::NonPositivePlate {
                field: field.to_string(),
                value: weight.kg(),
            });
        }
        Ok(Plate { weight })
    }

    ///
    /// # Errors
    /// If `kg` is not a positive, finite weight expressible in grams.
    ///
    pub fn from_kg(field: &str, kg: f64) -> Result<Self, ConfigError> {
        if kg.is_finite() && kg <= 0.0 {
            return Err(ConfigError::NonPositivePlate {
                field: field.to_string(),
                value: kg,
            });
        }
        Self::new(field, Weight::from_kg(field, kg)?)
    }

    ///
    /// # Errors
    /// On the first weight [`Plate::from_kg`] rejects.
    ///
    pub fn from_weights(field: &str, weights: &[f64]) -> Result<Vec<Plate>, ConfigError> {
        weights
            .iter()
            .map(|kg| Plate::from_kg(field, *kg))
            .collect()
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// Plates strictly lighter than `threshold` are small.
    #[must_use]
    pub fn size(&self, threshold: Weight) -> PlateSize {
        if self.weight < threshold {
            PlateSize::Small
        } else {
            PlateSize::Big
        }
    }

    #[must_use]
    pub fn is_big(&self, threshold: Weight) -> bool {
        self.size(threshold) == PlateSize::Big
    }
}

impl<'a> Sum<&'a Plate> for Weight {
    fn sum<I: Iterator<Item = &'a Plate>>(iter: I) -> Self {
        iter.map(Plate::weight).sum()
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(&self.weight, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(kg: f64) -> Plate {
        Plate::from_kg("plate", kg).unwrap()
    }

    #[test]
    fn rejects_non_positive_plates() {
        assert!(matches!(
            Plate::from_kg("plate", 0.0),
            Err(ConfigError::NonPositivePlate { .. })
        ));
        assert!(matches!(
            Plate::from_kg("plate", -1.25),
            Err(ConfigError::NonPositivePlate { .. })
        ));
        assert!(matches!(
            Plate::from_kg("plate", f64::NAN),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn classifies_by_threshold() {
        let threshold = Weight::from_kg("threshold", 10.0).unwrap();
        assert_eq!(plate(10.0).size(threshold), PlateSize::Big);
        assert_eq!(plate(22.65).size(threshold), PlateSize::Big);
        assert_eq!(plate(5.0).size(threshold), PlateSize::Small);
        assert!(!plate(9.999).is_big(threshold));
    }

    #[test]
    fn sums_plate_weights() {
        let plates = [plate(10.0), plate(5.0), plate(1.25)];
        assert_eq!(plates.iter().sum::<Weight>().grams(), 16_250);
    }

    #[test]
    fn from_weights_stops_at_first_bad_weight() {
        assert_eq!(Plate::from_weights("plates", &[1.1, 2.5]).unwrap().len(), 2);
        assert!(Plate::from_weights("plates", &[1.1, f64::INFINITY, -1.0]).is_err());
    }
}
