use itertools::Itertools;

/// Every subset of a multiset, produced lazily.
///
/// Subsets come out smallest first (the empty subset, then singles, pairs and so on). Within one
/// size they follow combination order over the original indices, and each subset keeps the
/// relative order of the items it picked. Equal items at different indices yield distinct
/// subsets.
///
/// There are `2^N` subsets of `N` items, so enumeration is exponential in the input length.
/// Nothing is materialised up front; each call to [`Subsets::iter`] starts a fresh pass.
#[derive(Debug)]
pub struct Subsets<'a, T> {
    items: &'a [T],
}

impl<'a, T: Clone> Subsets<'a, T> {
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Subsets { items }
    }

    pub fn iter(&self) -> impl Iterator<Item = Vec<T>> + Clone + use<'a, T> {
        self.items.iter().cloned().powerset()
    }

    /// `2^N`, or `None` when that does not fit in a `usize`.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        u32::try_from(self.items.len())
            .ok()
            .and_then(|n| 1usize.checked_shl(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yields_two_to_the_n_subsets() {
        for n in 0..=10 {
            let items = (0..n).collect::<Vec<u32>>();
            let subsets = Subsets::new(&items);
            assert_eq!(subsets.iter().count(), 1 << n);
            assert_eq!(subsets.len(), Some(1 << n));
        }
    }

    #[test]
    fn starts_empty_and_ends_full() {
        let items = [3, 1, 2];
        let subsets = Subsets::new(&items).iter().collect::<Vec<_>>();
        assert_eq!(subsets.first(), Some(&vec![]));
        assert_eq!(subsets.last(), Some(&vec![3, 1, 2]));
    }

    #[test]
    fn orders_by_size_then_index() {
        let items = ['a', 'b', 'c'];
        let subsets = Subsets::new(&items).iter().collect::<Vec<_>>();
        assert_eq!(
            subsets,
            vec![
                vec![],
                vec!['a'],
                vec!['b'],
                vec!['c'],
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['b', 'c'],
                vec!['a', 'b', 'c'],
            ]
        );
    }

    #[test]
    fn keeps_repeated_items_apart() {
        let items = [1.25, 1.25];
        let subsets = Subsets::new(&items).iter().collect::<Vec<_>>();
        assert_eq!(
            subsets,
            vec![vec![], vec![1.25], vec![1.25], vec![1.25, 1.25]]
        );
    }

    #[test]
    fn restarts_on_every_pass() {
        let items = [1, 2, 3, 4];
        let subsets = Subsets::new(&items);
        let first = subsets.iter().collect::<Vec<_>>();
        let second = subsets.iter().collect::<Vec<_>>();
        assert_eq!(first, second);
    }

    #[test]
    fn reports_overflowing_length() {
        let items = vec![0u8; usize::BITS as usize];
        assert_eq!(Subsets::new(&items).len(), None);
    }
}
