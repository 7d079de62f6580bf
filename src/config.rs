//! Plate inventories, bars and feasibility limits.
//!
//! [`Config`] mirrors the TOML file and holds raw kilogram values. [`Config::validate`] checks
//! every value and produces a [`ValidConfig`], the only form the rest of the crate accepts.
//! `Config::default()` is the home gym the reports were first written for.
//!
//! ```toml
//! size_threshold = 10.0
//! dedup_key = "full"
//!
//! [[plate_sets]]
//! name = "plates22"
//! optional = [1.1, 1.25, 1.25, 2.2, 4.5, 5.0, 10.0, 11.3, 15.0, 15.9, 20.0]
//! mandatory = [22.65]
//!
//! [barbell]
//! max_total = 145.0
//! ```

use serde::Deserialize;

use crate::{
    bar::Bar,
    bar_kind::BarKind,
    config_error::ConfigError,
    dedup::DedupKey,
    plate::Plate,
    plate_set::PlateSet,
    rules::{BarbellRules, TrapBarRules},
    weight::Weight,
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub size_threshold: f64,
    pub dedup_key: DedupKey,
    pub plate_sets: Vec<PlateSetConfig>,
    pub barbell: BarbellConfig,
    pub trap_bar: TrapBarConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlateSetConfig {
    pub name: String,
    pub optional: Vec<f64>,
    #[serde(default)]
    pub mandatory: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BarbellConfig {
    pub base_weight: f64,
    pub columns: Vec<f64>,
    pub reserved: Vec<f64>,
    pub min_total: f64,
    pub max_total: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrapBarConfig {
    pub base_weight: f64,
    pub columns: Vec<f64>,
    pub oversized: Vec<f64>,
    pub min_total: f64,
    pub full_sleeve_big_plates: usize,
    pub sleeve_capacity: usize,
    pub crowded_big_plates: usize,
    pub crowded_small_cap: usize,
    pub substitution_plate: f64,
    pub substitution_count: usize,
    pub substituted_small_cap: usize,
}

impl PlateSetConfig {
    fn new(name: &str, optional: &[f64], mandatory: &[f64]) -> Self {
        PlateSetConfig {
            name: name.to_string(),
            optional: optional.to_vec(),
            mandatory: mandatory.to_vec(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            size_threshold: 10.0,
            dedup_key: DedupKey::Full,
            plate_sets: vec![
                PlateSetConfig::new(
                    "plates",
                    &[1.1, 1.25, 1.25, 2.2, 2.5, 4.5, 5.0, 10.0, 11.3, 15.0, 15.9, 20.0],
                    &[],
                ),
                // 10 and (two 5s)
                PlateSetConfig::new(
                    "plates10",
                    &[1.1, 1.25, 1.25, 2.2, 2.5, 4.5, 10.0, 11.3, 15.0, 15.9, 20.0],
                    &[10.0],
                ),
                // (10 + two 2.5s) and (three 5s)
                PlateSetConfig::new(
                    "plates15",
                    &[1.1, 1.25, 1.25, 2.2, 4.5, 11.3, 10.0, 15.0, 15.9, 20.0],
                    &[5.0, 10.0],
                ),
                // 22.65 and (20.0 + 2.5)
                PlateSetConfig::new(
                    "plates22",
                    &[1.1, 1.25, 1.25, 2.2, 4.5, 5.0, 10.0, 11.3, 15.0, 15.9, 20.0],
                    &[22.65],
                ),
                // (22.65 + two 5s) and (20.0 + 2.5 + 10)
                PlateSetConfig::new(
                    "plates32",
                    &[1.1, 1.25, 1.25, 2.2, 4.5, 10.0, 11.3, 15.0, 15.9, 20.0],
                    &[10.0, 22.65],
                ),
            ],
            barbell: BarbellConfig::default(),
            trap_bar: TrapBarConfig::default(),
        }
    }
}

impl Default for BarbellConfig {
    fn default() -> Self {
        BarbellConfig {
            base_weight: 20.0,
            columns: vec![15.9, 15.0, 11.3, 10.0],
            reserved: vec![22.65, 20.0],
            min_total: 40.0,
            max_total: 110.0,
        }
    }
}

impl Default for TrapBarConfig {
    fn default() -> Self {
        TrapBarConfig {
            base_weight: 30.0,
            columns: vec![22.65, 20.0, 15.9, 15.0, 11.3, 10.0],
            oversized: vec![20.0, 22.65],
            min_total: 120.0,
            full_sleeve_big_plates: 5,
            sleeve_capacity: 6,
            crowded_big_plates: 4,
            crowded_small_cap: 3,
            substitution_plate: 1.25,
            substitution_count: 2,
            substituted_small_cap: 4,
        }
    }
}

impl Config {
    ///
    /// # Errors
    /// If `text` is not valid TOML or does not match the config layout.
    ///
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    ///
    /// # Errors
    /// On the first plate, weight or limit that cannot describe real equipment.
    ///
    pub fn validate(&self) -> Result<ValidConfig, ConfigError> {
        let size_threshold = Weight::from_kg("size_threshold", self.size_threshold)?;

        let plate_sets = self
            .plate_sets
            .iter()
            .map(|set| -> Result<PlateSet, ConfigError> {
                let optional =
                    Plate::from_weights(&format!("plate_sets.{}.optional", set.name), &set.optional)?;
                let mandatory = Plate::from_weights(
                    &format!("plate_sets.{}.mandatory", set.name),
                    &set.mandatory,
                )?;
                Ok(PlateSet::new(set.name.clone(), optional, mandatory))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let (barbell, barbell_rules) = self.barbell.validate(size_threshold)?;
        let (trap_bar, trap_bar_rules) = self.trap_bar.validate(size_threshold)?;

        Ok(ValidConfig {
            size_threshold,
            dedup_key: self.dedup_key,
            plate_sets,
            barbell,
            barbell_rules,
            trap_bar,
            trap_bar_rules,
        })
    }
}

/// Big plate columns: at least one, each distinct and heavy enough to count as big.
fn columns(
    kind: BarKind,
    field: &str,
    weights: &[f64],
    size_threshold: Weight,
) -> Result<Vec<Plate>, ConfigError> {
    if weights.is_empty() {
        return Err(ConfigError::NoColumns(kind));
    }

    let columns = Plate::from_weights(field, weights)?;
    for (i, column) in columns.iter().enumerate() {
        if !column.is_big(size_threshold) {
            return Err(ConfigError::SmallColumn {
                kind,
                value: column.weight(),
                threshold: size_threshold,
            });
        }
        if columns[..i].contains(column) {
            return Err(ConfigError::DuplicateColumn {
                kind,
                value: column.weight(),
            });
        }
    }

    Ok(columns)
}

impl BarbellConfig {
    fn validate(&self, size_threshold: Weight) -> Result<(Bar, BarbellRules), ConfigError> {
        let kind = BarKind::Barbell;
        let bar = Bar::new(
            Weight::from_kg("barbell.base_weight", self.base_weight)?,
            kind,
            columns(kind, "barbell.columns", &self.columns, size_threshold)?,
        );

        let min_total = Weight::from_kg("barbell.min_total", self.min_total)?;
        let max_total = Weight::from_kg("barbell.max_total", self.max_total)?;
        if min_total > max_total {
            return Err(ConfigError::InvertedRange {
                kind,
                min: min_total,
                max: max_total,
            });
        }

        let rules = BarbellRules {
            reserved: Plate::from_weights("barbell.reserved", &self.reserved)?,
            min_total,
            max_total,
        };

        Ok((bar, rules))
    }
}

impl TrapBarConfig {
    fn validate(&self, size_threshold: Weight) -> Result<(Bar, TrapBarRules), ConfigError> {
        let kind = BarKind::TrapBar;
        let bar = Bar::new(
            Weight::from_kg("trap_bar.base_weight", self.base_weight)?,
            kind,
            columns(kind, "trap_bar.columns", &self.columns, size_threshold)?,
        );

        if self.crowded_big_plates >= self.full_sleeve_big_plates {
            return Err(ConfigError::SleeveRule {
                crowded: self.crowded_big_plates,
                full: self.full_sleeve_big_plates,
            });
        }

        let rules = TrapBarRules {
            oversized: Plate::from_weights("trap_bar.oversized", &self.oversized)?,
            min_total: Weight::from_kg("trap_bar.min_total", self.min_total)?,
            full_sleeve_big_plates: self.full_sleeve_big_plates,
            sleeve_capacity: self.sleeve_capacity,
            crowded_big_plates: self.crowded_big_plates,
            crowded_small_cap: self.crowded_small_cap,
            substitution_plate: Plate::from_kg(
                "trap_bar.substitution_plate",
                self.substitution_plate,
            )?,
            substitution_count: self.substitution_count,
            substituted_small_cap: self.substituted_small_cap,
        };

        Ok((bar, rules))
    }
}

/// A checked [`Config`].
#[derive(Clone, Debug)]
pub struct ValidConfig {
    size_threshold: Weight,
    dedup_key: DedupKey,
    plate_sets: Vec<PlateSet>,
    barbell: Bar,
    barbell_rules: BarbellRules,
    trap_bar: Bar,
    trap_bar_rules: TrapBarRules,
}

impl ValidConfig {
    #[must_use]
    pub fn size_threshold(&self) -> Weight {
        self.size_threshold
    }

    #[must_use]
    pub fn dedup_key(&self) -> DedupKey {
        self.dedup_key
    }

    #[must_use]
    pub fn plate_sets(&self) -> &[PlateSet] {
        &self.plate_sets
    }

    #[must_use]
    pub fn bar(&self, kind: BarKind) -> &Bar {
        match kind {
            BarKind::Barbell => &self.barbell,
            BarKind::TrapBar => &self.trap_bar,
        }
    }

    #[must_use]
    pub fn barbell_rules(&self) -> &BarbellRules {
        &self.barbell_rules
    }

    #[must_use]
    pub fn trap_bar_rules(&self) -> &TrapBarRules {
        &self.trap_bar_rules
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default().validate().unwrap();
        assert_eq!(config.plate_sets().len(), 5);
        assert_eq!(config.bar(BarKind::Barbell).weight().grams(), 20_000);
        assert_eq!(config.bar(BarKind::TrapBar).weight().grams(), 30_000);
        assert_eq!(config.bar(BarKind::TrapBar).columns().len(), 6);
        assert_eq!(config.dedup_key(), DedupKey::Full);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            dedup_key = "total"

            [barbell]
            max_total = 145.0
            "#,
        )
        .unwrap();
        assert_eq!(config.dedup_key, DedupKey::Total);
        assert_eq!(config.barbell.max_total, 145.0);
        assert_eq!(config.barbell.min_total, 40.0);
        assert_eq!(config.trap_bar, TrapBarConfig::default());
        assert_eq!(config.plate_sets.len(), 5);
    }

    #[test]
    fn plate_sets_replace_the_defaults() {
        let config = Config::from_toml(
            r#"
            [[plate_sets]]
            name = "small"
            optional = [1.25, 2.5]
            "#,
        )
        .unwrap();
        assert_eq!(config.plate_sets, vec![PlateSetConfig::new("small", &[1.25, 2.5], &[])]);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(matches!(
            Config::from_toml("plates = [1.0]"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn rejects_non_positive_plates() {
        let mut config = Config::default();
        config.plate_sets[0].optional.push(0.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositivePlate { .. })
        ));
    }

    #[test]
    fn rejects_non_finite_plates() {
        let mut config = Config::default();
        config.plate_sets[3].mandatory = vec![f64::NAN];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonFinite { .. })
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        let mut config = Config::default();
        config.barbell.min_total = 150.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvertedRange {
                kind: BarKind::Barbell,
                ..
            })
        ));
    }

    #[test]
    fn rejects_empty_columns() {
        let mut config = Config::default();
        config.trap_bar.columns.clear();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NoColumns(BarKind::TrapBar))
        ));
    }

    #[test]
    fn rejects_repeated_columns() {
        let mut config = Config::default();
        config.barbell.columns = vec![15.0, 15.0];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateColumn {
                kind: BarKind::Barbell,
                value,
            }) if value.grams() == 15_000
        ));
    }

    #[test]
    fn rejects_columns_for_small_plates() {
        let mut config = Config::default();
        config.trap_bar.columns.push(5.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SmallColumn {
                kind: BarKind::TrapBar,
                value,
                ..
            }) if value.grams() == 5_000
        ));
    }

    #[test]
    fn columns_follow_the_size_threshold() {
        let mut config = Config::default();
        config.size_threshold = 15.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SmallColumn { .. })
        ));

        config.barbell.columns = vec![15.9, 15.0];
        config.trap_bar.columns = vec![22.65, 20.0, 15.9, 15.0];
        let config = config.validate().unwrap();
        assert_eq!(config.bar(BarKind::Barbell).columns().len(), 2);
        assert_eq!(config.bar(BarKind::Barbell).kind(), BarKind::Barbell);
    }

    #[test]
    fn rejects_overlapping_sleeve_rules() {
        let mut config = Config::default();
        config.trap_bar.crowded_big_plates = 5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::SleeveRule { crowded: 5, full: 5 })
        ));
    }
}
