use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher, RandomState};
use std::ops::{BitAnd, BitOr, BitXor, Sub};

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::{Iter, UnguardedCursor};
use crate::json::{self, DecodeError};
use crate::pair::OrderedPair;
use crate::traits::Set;
use crate::traversal::Traversal;
use crate::util::hash::unordered_hash;
use crate::util::text::native_str;

/// A set backed by a membership table, for use from a single thread at a time.
///
/// All mutation requires `&mut self`, so sharing it between threads needs external locking. For
/// a set that does its own locking, see `GuardedSet`.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in `self`.
/// - `m`: The number of items in `other`.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `is_subset` | `O(n)` |
/// | `union` | `O(n + m)` |
/// | `intersect` | `O(min(n, m))` |
/// | `difference` | `O(n)` |
/// | `cartesian_product` | `O(n * m)` |
/// | `power_set` | `O(2^n)` |
///
/// \* Amortized, assuming few hash collisions.
#[derive(Clone)]
pub struct UnguardedSet<T, B = RandomState> {
    // The unit value takes no space, so this is just a table of keys.
    pub(crate) table: HashMap<T, (), B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> UnguardedSet<T, B> {
    pub fn new() -> UnguardedSet<T, B> {
        UnguardedSet {
            table: HashMap::default(),
        }
    }

    pub fn with_cap(cap: usize) -> UnguardedSet<T, B> {
        UnguardedSet {
            table: HashMap::with_capacity_and_hasher(cap, B::default()),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> UnguardedSet<T, B> {
    pub fn with_hasher(hasher: B) -> UnguardedSet<T, B> {
        UnguardedSet {
            table: HashMap::with_hasher(hasher),
        }
    }

    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> UnguardedSet<T, B> {
        UnguardedSet {
            table: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements the set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.table.capacity()
    }

    pub fn hasher(&self) -> &B {
        self.table.hasher()
    }

    pub fn reserve(&mut self, extra: usize) {
        self.table.reserve(extra)
    }

    /// Returns an iterator over all elements in the set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T, B> Set<T> for UnguardedSet<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    type Of<U: Hash + Eq + Clone> = UnguardedSet<U, B>;

    type Cursor<'a> = UnguardedCursor<'a, T>
    where
        Self: 'a;

    fn add(&mut self, item: T) -> bool {
        if self.table.contains_key(&item) {
            return false;
        }
        self.table.insert(item, ());
        true
    }

    fn contains(&self, item: &T) -> bool {
        self.table.contains_key(item)
    }

    fn remove(&mut self, item: &T) {
        self.table.remove(item);
    }

    fn clear(&mut self) {
        self.table.clear()
    }

    fn cardinality(&self) -> usize {
        self.table.len()
    }

    fn pop(&mut self) -> Option<T> {
        // Whatever the table yields first, which depends on the hasher's random state.
        let item = self.table.keys().next()?.clone();
        self.table.remove_entry(&item).map(|(item, ())| item)
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        self.iter().all(|item| other.contains(item))
    }

    fn union(&self, other: &Self) -> Self {
        let mut union = UnguardedSet::with_cap_and_hasher(
            self.len().max(other.len()),
            self.hasher().clone(),
        );
        union.extend(self.iter().cloned());
        union.extend(other.iter().cloned());
        union
    }

    fn intersect(&self, other: &Self) -> Self {
        // Only the smaller set needs to be walked.
        let (smaller, larger) = if self.len() < other.len() {
            (self, other)
        } else {
            (other, self)
        };

        let mut intersection = UnguardedSet::with_hasher(self.hasher().clone());
        intersection.extend(
            smaller.iter()
                .filter(|item| larger.contains(item))
                .cloned()
        );
        intersection
    }

    fn difference(&self, other: &Self) -> Self {
        let mut difference = UnguardedSet::with_hasher(self.hasher().clone());
        difference.extend(
            self.iter()
                .filter(|item| !other.contains(item))
                .cloned()
        );
        difference
    }

    fn each<F: FnMut(&T) -> bool>(&self, mut visit: F) {
        for item in self.iter() {
            if visit(item) {
                break;
            }
        }
    }

    fn traverse(&self) -> Traversal<Self::Cursor<'_>> {
        Traversal::new(UnguardedCursor(self.table.keys()))
    }

    fn power_set(&self) -> UnguardedSet<Self, B> {
        let hasher = self.hasher();

        // Start with the family containing only the empty set.
        let mut family = UnguardedSet::with_hasher(hasher.clone());
        family.add(UnguardedSet::with_hasher(hasher.clone()));

        for item in self.iter() {
            let mut grown = UnguardedSet::with_cap_and_hasher(family.len(), hasher.clone());
            for subset in family.iter() {
                let mut subset = subset.clone();
                subset.add(item.clone());
                grown.add(subset);
            }
            family = family.union(&grown);
        }

        family
    }

    fn cartesian_product<U: Hash + Eq + Clone>(
        &self,
        other: &UnguardedSet<U, B>,
    ) -> UnguardedSet<OrderedPair<T, U>, B> {
        let mut product = UnguardedSet::with_cap_and_hasher(
            self.len().saturating_mul(other.len()),
            self.hasher().clone(),
        );

        for first in self.iter() {
            for second in other.iter() {
                product.add(OrderedPair::new(first.clone(), second.clone()));
            }
        }

        product
    }

    fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    fn strings(&self) -> Vec<String>
    where
        T: 'static,
    {
        self.iter()
            .filter_map(|item| native_str(item))
            .map(str::to_owned)
            .collect()
    }

    fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize,
    {
        serde_json::to_string(self)
    }

    fn extend_from_json(&mut self, input: &str) -> Result<(), DecodeError>
    where
        T: DeserializeOwned,
    {
        let entries = json::parse_entries(input)?;
        self.reserve(entries.len());
        json::absorb_entries(entries, |item| {
            self.add(item);
        })
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for UnguardedSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.table.len() == other.table.len()
            && self.table.keys().all(|item| other.table.contains_key(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for UnguardedSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Hash for UnguardedSet<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unordered_hash(self.table.keys(), self.table.len(), state);
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for UnguardedSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for UnguardedSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        // Inserting an existing key keeps the original key, which is the behaviour of `add`.
        self.table.extend(iter.into_iter().map(|item| (item, ())));
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for UnguardedSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = UnguardedSet::with_cap(iter.size_hint().0);
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for UnguardedSet<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitOr for &UnguardedSet<T, B> {
    type Output = UnguardedSet<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitAnd for &UnguardedSet<T, B> {
    type Output = UnguardedSet<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersect(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> BitXor for &UnguardedSet<T, B> {
    type Output = UnguardedSet<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Sub for &UnguardedSet<T, B> {
    type Output = UnguardedSet<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs)
    }
}

impl<T: Serialize, B> Serialize for UnguardedSet<T, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.table.keys())
    }
}

impl<'de, T, B> Deserialize<'de> for UnguardedSet<T, B>
where
    T: Hash + Eq + DeserializeOwned,
    B: BuildHasher + Default,
{
    /// Decodes a sequence of elements, skipping any entry that is an array or an object.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<Value>::deserialize(deserializer)?;
        let mut set = UnguardedSet::with_cap(entries.len());
        json::absorb_entries(entries, |item| {
            set.table.insert(item, ());
        }).map_err(D::Error::custom)?;
        Ok(set)
    }
}

impl<T: Debug, B> Debug for UnguardedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.table.keys()).finish()
    }
}

impl<T: Display, B> Display for UnguardedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f, "Set{{{}}}",
            self.table.keys()
                .map(|i| format!("{i}"))
                .collect::<Vec<String>>()
                .join(", ")
        )
    }
}
