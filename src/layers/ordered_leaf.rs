//! Implementation using ordered keys and exponential search.

use super::advance;
use crate::algebra::{GroupValue, MonoidValue};
use num::Zero;
use std::{
    cmp::{min, Ordering},
    ops::{Add, AddAssign, Neg, Sub},
};

/// A layer of `(key, value)` pairs sorted by key.
///
/// Keys are strictly increasing and no value is zero, so two leaves are
/// equal exactly when they denote the same function.
#[derive(Debug, Eq, PartialEq, Clone, Hash, PartialOrd, Ord)]
pub struct OrderedLeaf<K, V> {
    vals: Vec<(K, V)>,
}

impl<K, V> Default for OrderedLeaf<K, V> {
    fn default() -> Self {
        Self { vals: Vec::new() }
    }
}

impl<K, V> OrderedLeaf<K, V> {
    /// Wraps a vector that is already sorted, duplicate-free and
    /// zero-free.
    pub(crate) fn from_consolidated(vals: Vec<(K, V)>) -> Self {
        Self { vals }
    }

    /// Number of stored pairs.
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Stored pairs in ascending key order.
    pub fn as_slice(&self) -> &[(K, V)] {
        &self.vals
    }

    pub fn into_vec(self) -> Vec<(K, V)> {
        self.vals
    }

    pub fn iter(&self) -> std::slice::Iter<'_, (K, V)> {
        self.vals.iter()
    }
}

impl<K, V> OrderedLeaf<K, V>
where
    K: Ord,
{
    /// Looks up the value stored for `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.vals
            .binary_search_by(|(k, _)| k.cmp(key))
            .ok()
            .map(|pos| &self.vals[pos].1)
    }
}

impl<K, V> OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    /// Point-wise sum of two leaves. Keys whose values cancel are dropped.
    pub fn merge(&self, other: &Self) -> Self {
        let (mut lower1, upper1) = (0, self.vals.len());
        let (mut lower2, upper2) = (0, other.vals.len());
        let mut vals = Vec::with_capacity(upper1 + upper2);

        // while both mergees are still active
        while lower1 < upper1 && lower2 < upper2 {
            match self.vals[lower1].0.cmp(&other.vals[lower2].0) {
                Ordering::Less => {
                    // determine how far we can advance lower1 until we reach/pass lower2
                    let step = 1 + advance(&self.vals[(1 + lower1)..upper1], |x| {
                        x.0 < other.vals[lower2].0
                    });
                    let step = min(step, 1000);
                    vals.extend_from_slice(&self.vals[lower1..lower1 + step]);
                    lower1 += step;
                }
                Ordering::Equal => {
                    let mut sum = self.vals[lower1].1.clone();
                    sum.add_assign_by_ref(&other.vals[lower2].1);
                    if !sum.is_zero() {
                        vals.push((self.vals[lower1].0.clone(), sum));
                    }

                    lower1 += 1;
                    lower2 += 1;
                }
                Ordering::Greater => {
                    // determine how far we can advance lower2 until we reach/pass lower1
                    let step = 1 + advance(&other.vals[(1 + lower2)..upper2], |x| {
                        x.0 < self.vals[lower1].0
                    });
                    let step = min(step, 1000);
                    vals.extend_from_slice(&other.vals[lower2..lower2 + step]);
                    lower2 += step;
                }
            }
        }

        if lower1 < upper1 {
            vals.extend_from_slice(&self.vals[lower1..upper1]);
        }
        if lower2 < upper2 {
            vals.extend_from_slice(&other.vals[lower2..upper2]);
        }

        Self { vals }
    }
}

impl<K, V> Add<Self> for OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(&rhs)
    }
}

impl<'a, K, V> Add<&'a OrderedLeaf<K, V>> for &'a OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    type Output = OrderedLeaf<K, V>;

    fn add(self, rhs: Self) -> Self::Output {
        self.merge(rhs)
    }
}

impl<K, V> AddAssign<Self> for OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    fn add_assign(&mut self, rhs: Self) {
        *self = self.merge(&rhs);
    }
}

impl<'a, K, V> AddAssign<&'a Self> for OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    fn add_assign(&mut self, rhs: &'a Self) {
        *self = self.merge(rhs);
    }
}

impl<K, V> Zero for OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.vals.is_empty()
    }
}

impl<K, V> Neg for OrderedLeaf<K, V>
where
    V: Neg<Output = V>,
{
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            vals: self.vals.into_iter().map(|(k, v)| (k, v.neg())).collect(),
        }
    }
}

impl<'a, K, V> Neg for &'a OrderedLeaf<K, V>
where
    K: Clone,
    V: GroupValue,
{
    type Output = OrderedLeaf<K, V>;

    fn neg(self) -> Self::Output {
        OrderedLeaf {
            vals: self
                .vals
                .iter()
                .map(|(k, v)| (k.clone(), v.neg_by_ref()))
                .collect(),
        }
    }
}

impl<K, V> Sub<Self> for OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: GroupValue,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self.merge(&rhs.neg())
    }
}

impl<'a, K, V> Sub<&'a OrderedLeaf<K, V>> for &'a OrderedLeaf<K, V>
where
    K: Ord + Clone,
    V: GroupValue,
{
    type Output = OrderedLeaf<K, V>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.merge(&rhs.neg())
    }
}

impl<K, V> FromIterator<(K, V)> for OrderedLeaf<K, V>
where
    K: Ord,
    V: MonoidValue,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = iter.into_iter();
        let mut builder = UnorderedLeafBuilder::with_capacity(iter.size_hint().0);
        for tuple in iter {
            builder.push_tuple(tuple);
        }
        builder.done()
    }
}

impl<'a, K, V> IntoIterator for &'a OrderedLeaf<K, V> {
    type Item = &'a (K, V);
    type IntoIter = std::slice::Iter<'a, (K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.iter()
    }
}

impl<K, V> IntoIterator for OrderedLeaf<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.vals.into_iter()
    }
}

/// A builder that accepts pairs in any order, with repeated keys and
/// zero values, and consolidates them when done.
pub struct UnorderedLeafBuilder<K, V> {
    vals: Vec<(K, V)>,
}

impl<K, V> UnorderedLeafBuilder<K, V>
where
    K: Ord,
    V: MonoidValue,
{
    pub fn new() -> Self {
        UnorderedLeafBuilder { vals: Vec::new() }
    }

    pub fn with_capacity(cap: usize) -> Self {
        UnorderedLeafBuilder {
            vals: Vec::with_capacity(cap),
        }
    }

    #[inline]
    pub fn push_tuple(&mut self, tuple: (K, V)) {
        self.vals.push(tuple)
    }

    /// Sorts and consolidates the pushed pairs.
    pub fn done(mut self) -> OrderedLeaf<K, V> {
        let len = consolidate_slice(&mut self.vals);
        self.vals.truncate(len);
        OrderedLeaf { vals: self.vals }
    }
}

impl<K, V> Default for UnorderedLeafBuilder<K, V>
where
    K: Ord,
    V: MonoidValue,
{
    fn default() -> Self {
        Self::new()
    }
}

/// Sorts and consolidates a slice, returning the valid prefix length.
///
/// Values of equal keys are summed and pairs whose sum is zero are moved
/// past the returned prefix.
pub fn consolidate_slice<K, V>(slice: &mut [(K, V)]) -> usize
where
    K: Ord,
    V: MonoidValue,
{
    slice.sort_unstable_by(|x, y| x.0.cmp(&y.0));

    // Counts the number of distinct known-non-zero accumulations. Indexes the write
    // location.
    let mut offset = 0;
    for index in 1..slice.len() {
        // LOOP INVARIANT: offset < index
        if slice[offset].0 == slice[index].0 {
            let (head, tail) = slice.split_at_mut(index);
            head[offset].1.add_assign_by_ref(&tail[0].1);
        } else {
            if !slice[offset].1.is_zero() {
                offset += 1;
            }
            slice.swap(offset, index);
        }
    }
    if offset < slice.len() && !slice[offset].1.is_zero() {
        offset += 1;
    }

    offset
}

#[cfg(test)]
mod tests {
    use super::{consolidate_slice, OrderedLeaf, UnorderedLeafBuilder};
    use num::Zero;

    #[test]
    fn consolidate_sums_and_drops_zeros() {
        let mut vals = vec![(3, 1i64), (1, 2), (3, -1), (2, 5), (1, 1), (0, 0)];
        let len = consolidate_slice(&mut vals);
        assert_eq!(&vals[..len], &[(1, 3), (2, 5)]);
    }

    #[test]
    fn builder_consolidates_unordered_pairs() {
        let mut builder = UnorderedLeafBuilder::new();
        builder.push_tuple((2, 1i64));
        builder.push_tuple((1, 1));
        builder.push_tuple((2, -1));
        builder.push_tuple((0, 4));
        builder.push_tuple((3, 0));
        let leaf = builder.done();
        assert_eq!(leaf.as_slice(), &[(0, 4), (1, 1)]);
    }

    #[test]
    fn merge_cancels_and_gallops() {
        let left: OrderedLeaf<i64, i64> = (0..50).map(|k| (2 * k, 1)).collect();
        let right: OrderedLeaf<i64, i64> = (0..50).map(|k| (k, -1)).collect();
        let sum = left.merge(&right);

        for (k, v) in sum.iter() {
            assert!(*k >= 0 && *k < 100);
            if *k < 50 {
                assert_eq!(*k % 2, 1);
                assert_eq!(*v, -1);
            } else {
                assert_eq!(*k % 2, 0);
                assert_eq!(*v, 1);
            }
        }
        assert_eq!(sum.len(), 25 + 25);
        assert!((&sum - &sum).is_zero());
    }

    #[test]
    fn lookup() {
        let leaf: OrderedLeaf<&str, i64> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(leaf.get(&"a"), Some(&1));
        assert_eq!(leaf.get(&"c"), None);
    }
}
