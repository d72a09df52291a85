#[macro_use]
mod map_macro;

use crate::{
    algebra::{MonoidValue, SemiringValue},
    layers::{OrderedLeaf, UnorderedLeafBuilder},
};
use itertools::Itertools;
use num::Zero;
use std::{
    fmt::{self, Display},
    iter::Map,
    slice::Iter,
};

/// Iterator over the support of a finite map, in ascending key order.
pub type Support<'a, K, V> = Map<Iter<'a, (K, V)>, fn(&(K, V)) -> &K>;

fn key_of<K, V>(pair: &(K, V)) -> &K {
    &pair.0
}

/// Finite map trait.
///
/// A finite map maps arbitrary keys to values in a monoid.  It has
/// finite support: it is non-zero only for a finite number of keys.
/// Finite maps form a monoid whose plus operator computes point-wise
/// sum of values associated with each key.
///
/// Implementors expose their pairs as a slice sorted by key with no zero
/// values; every query below is derived from that slice.
pub trait FiniteMap {
    /// Type of keys stored in finite map.
    type MapKey: Ord + Clone;
    /// Type of values.
    type Value: MonoidValue;

    /// The `(key, value)` pairs with non-zero value, sorted by key.
    fn pairs(&self) -> &[(Self::MapKey, Self::Value)];

    /// Value at `key`; zero for any key outside the support.
    fn evaluate(&self, key: &Self::MapKey) -> Self::Value {
        let pairs = self.pairs();
        match pairs.binary_search_by(|(k, _)| k.cmp(key)) {
            Ok(pos) => pairs[pos].1.clone(),
            Err(_) => Self::Value::zero(),
        }
    }

    /// Keys with a non-zero value.
    fn support(&self) -> Support<'_, Self::MapKey, Self::Value> {
        self.pairs().iter().map(key_of as fn(&_) -> &_)
    }

    /// Number of keys in the support.
    fn support_len(&self) -> usize {
        self.pairs().len()
    }

    /// Applies `f` to every `(key, value)` pair in the support and sums
    /// the results.  Returns zero for the zero map.
    fn sum<S, F>(&self, mut f: F) -> S
    where
        S: MonoidValue,
        F: FnMut(&Self::MapKey, &Self::Value) -> S,
    {
        let mut acc = S::zero();
        for (k, v) in self.pairs() {
            acc += f(k, v);
        }
        acc
    }
}

/// Finite map implementation backed by [`OrderedLeaf`].
///
/// Requires keys to form a total order.
pub type OrdFiniteMap<Key, Value> = OrderedLeaf<Key, Value>;

impl<K, V> FiniteMap for OrdFiniteMap<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    type MapKey = K;
    type Value = V;

    fn pairs(&self) -> &[(K, V)] {
        self.as_slice()
    }
}

impl<K, V> OrdFiniteMap<K, V>
where
    K: Ord + Clone,
    V: MonoidValue,
{
    /// Map with a single key.  Empty when `value` is zero.
    pub fn singleton(key: K, value: V) -> Self {
        if value.is_zero() {
            Self::default()
        } else {
            Self::from_consolidated(vec![(key, value)])
        }
    }

    /// Applies `f` to every value.  `f` must map zero to zero; keys mapped
    /// to zero are dropped.
    pub fn map_values<W, F>(&self, mut f: F) -> OrdFiniteMap<K, W>
    where
        W: MonoidValue,
        F: FnMut(&K, &V) -> W,
    {
        OrderedLeaf::from_consolidated(
            self.iter()
                .filter_map(|(k, v)| {
                    let w = f(k, v);
                    (!w.is_zero()).then(|| (k.clone(), w))
                })
                .collect(),
        )
    }

    /// Pushes the map forward along `f`, summing the values of keys that
    /// collide.
    pub fn map_keys<K2, F>(&self, mut f: F) -> OrdFiniteMap<K2, V>
    where
        K2: Ord + Clone,
        F: FnMut(&K) -> K2,
    {
        let mut builder = UnorderedLeafBuilder::with_capacity(self.len());
        for (k, v) in self.iter() {
            builder.push_tuple((f(k), v.clone()));
        }
        builder.done()
    }

    /// Restricts the map to the keys satisfying `predicate`.
    pub fn filter<F>(&self, mut predicate: F) -> Self
    where
        F: FnMut(&K) -> bool,
    {
        Self::from_consolidated(
            self.iter()
                .filter(|(k, _)| predicate(k))
                .cloned()
                .collect(),
        )
    }
}

impl<K, V> OrdFiniteMap<K, V>
where
    K: Ord + Clone,
    V: SemiringValue,
{
    /// Left scalar action: multiplies every value by `scalar` on the left.
    ///
    /// Products that vanish (zero divisors) leave the support.
    pub fn smul(&self, scalar: &V) -> Self {
        self.map_values(|_, v| scalar.mul_by_ref(v))
    }
}

impl<K, V> Display for OrderedLeaf<K, V>
where
    K: Display,
    V: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}}",
            self.iter().format_with(", ", |(k, v), f| f(&format_args!("{k} => {v}")))
        )
    }
}

#[cfg(feature = "with-serde")]
mod serde_impls {
    use super::OrdFiniteMap;
    use crate::algebra::MonoidValue;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<K, V> Serialize for OrdFiniteMap<K, V>
    where
        K: Serialize,
        V: Serialize,
    {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.as_slice().serialize(serializer)
        }
    }

    /// Deserialization accepts any list of pairs and consolidates it.
    impl<'de, K, V> Deserialize<'de> for OrdFiniteMap<K, V>
    where
        K: Deserialize<'de> + Ord,
        V: Deserialize<'de> + MonoidValue,
    {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            Vec::<(K, V)>::deserialize(deserializer).map(|pairs| pairs.into_iter().collect())
        }
    }
}
