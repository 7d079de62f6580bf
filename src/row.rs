use crate::{bar::Bar, loadout::WeightedLoadout, plate::Plate, weight::Weight};

/// One column of a row: a recognised big plate and how many times it is loaded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stack {
    pub plate: Plate,
    pub count: usize,
}

/// A weighted loadout laid out against a bar's big plate columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub total: Weight,
    /// One entry per bar column, in column order.
    pub columns: Vec<Option<Stack>>,
    /// Big plates the bar has no column for.
    pub unlisted: Vec<Plate>,
    pub small: Vec<Plate>,
}

impl Row {
    #[must_use]
    pub fn new(weighted: &WeightedLoadout, bar: &Bar, size_threshold: Weight) -> Self {
        let (big, small) = weighted.loadout().split_at(size_threshold);

        let columns = bar
            .columns()
            .iter()
            .map(|column| {
                let count = big.iter().filter(|plate| *plate == column).count();
                (count > 0).then_some(Stack {
                    plate: *column,
                    count,
                })
            })
            .collect();

        let unlisted = big
            .into_iter()
            .filter(|plate| !bar.columns().contains(plate))
            .collect();

        Row {
            total: weighted.total(),
            columns,
            unlisted,
            small,
        }
    }
}

#[must_use]
pub fn rows(weights: &[WeightedLoadout], bar: &Bar, size_threshold: Weight) -> Vec<Row> {
    weights
        .iter()
        .map(|weighted| Row::new(weighted, bar, size_threshold))
        .collect()
}
