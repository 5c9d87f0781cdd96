use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, Hasher, RandomState};
use std::ptr;

use parking_lot::RwLock;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::GuardedCursor;
use crate::json::{self, DecodeError};
use crate::pair::OrderedPair;
use crate::traits::Set;
use crate::traversal::Traversal;
use crate::unguarded::UnguardedSet;

/// A set that can be shared between threads, wrapping one [`UnguardedSet`] in its own
/// reader/writer lock.
///
/// Queries take the lock in shared mode and mutations take it exclusively, in both cases only for
/// the duration of the call. The mutating methods are also available through `&self`, so a
/// GuardedSet is usually shared as an `Arc<GuardedSet<T>>`.
///
/// Operations involving two sets never hold both locks at once. Each operand is copied under its
/// own lock first and the result is computed from the two copies without any lock held. This
/// means that `a.union(&b)` racing against `b.union(&a)` can't deadlock.
pub struct GuardedSet<T, B = RandomState> {
    pub(crate) inner: RwLock<UnguardedSet<T, B>>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> GuardedSet<T, B> {
    pub fn new() -> GuardedSet<T, B> {
        GuardedSet::from_unguarded(UnguardedSet::new())
    }

    pub fn with_cap(cap: usize) -> GuardedSet<T, B> {
        GuardedSet::from_unguarded(UnguardedSet::with_cap(cap))
    }
}

impl<T: Hash + Eq, B: BuildHasher> GuardedSet<T, B> {
    pub fn with_hasher(hasher: B) -> GuardedSet<T, B> {
        GuardedSet::from_unguarded(UnguardedSet::with_hasher(hasher))
    }

    /// Takes ownership of `set`, guarding it with a new lock.
    pub const fn from_unguarded(set: UnguardedSet<T, B>) -> GuardedSet<T, B> {
        GuardedSet {
            inner: RwLock::new(set),
        }
    }

    /// Removes the lock, returning the underlying set.
    pub fn into_unguarded(self) -> UnguardedSet<T, B> {
        self.inner.into_inner()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> GuardedSet<T, B> {
    /// Copies the current contents while holding the read lock, releasing it before returning.
    pub fn snapshot(&self) -> UnguardedSet<T, B> {
        self.inner.read().clone()
    }

    /// Adds `item` to the set, returning true if it wasn't already present.
    pub fn add(&self, item: T) -> bool {
        self.inner.write().add(item)
    }

    /// Removes `item` from the set. Removing an absent item does nothing.
    pub fn remove(&self, item: &T) {
        self.inner.write().remove(item)
    }

    pub fn clear(&self) {
        self.inner.write().clear()
    }

    /// Removes and returns an arbitrary element, or None if the set is empty.
    pub fn pop(&self) -> Option<T> {
        self.inner.write().pop()
    }

    /// Decodes a JSON array and adds each of its entries, see [`Set::extend_from_json`].
    ///
    /// The input is parsed before the write lock is taken. Entries are then added one by one while
    /// it is held, so other threads never see a partially decoded array.
    pub fn extend_from_json(&self, input: &str) -> Result<(), DecodeError>
    where
        T: DeserializeOwned,
    {
        let entries = json::parse_entries(input)?;
        let mut table = self.inner.write();
        table.reserve(entries.len());
        json::absorb_entries(entries, |item| {
            table.add(item);
        })
    }
}

impl<T, B> Set<T> for GuardedSet<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    type Of<U: Hash + Eq + Clone> = GuardedSet<U, B>;

    type Cursor<'a> = GuardedCursor<'a, T, B>
    where
        Self: 'a;

    fn add(&mut self, item: T) -> bool {
        GuardedSet::add(self, item)
    }

    fn contains(&self, item: &T) -> bool {
        self.inner.read().contains(item)
    }

    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        let table = self.inner.read();
        table.contains_all(items)
    }

    fn remove(&mut self, item: &T) {
        GuardedSet::remove(self, item)
    }

    fn clear(&mut self) {
        GuardedSet::clear(self)
    }

    fn cardinality(&self) -> usize {
        self.inner.read().cardinality()
    }

    fn pop(&mut self) -> Option<T> {
        GuardedSet::pop(self)
    }

    fn equal(&self, other: &Self) -> bool {
        self == other
    }

    fn is_subset(&self, other: &Self) -> bool {
        let left = self.snapshot();
        let right = other.snapshot();
        left.is_subset(&right)
    }

    fn is_proper_subset(&self, other: &Self) -> bool {
        let left = self.snapshot();
        let right = other.snapshot();
        left.is_proper_subset(&right)
    }

    fn union(&self, other: &Self) -> Self {
        let left = self.snapshot();
        let right = other.snapshot();
        GuardedSet::from_unguarded(left.union(&right))
    }

    fn intersect(&self, other: &Self) -> Self {
        let left = self.snapshot();
        let right = other.snapshot();
        GuardedSet::from_unguarded(left.intersect(&right))
    }

    fn difference(&self, other: &Self) -> Self {
        let left = self.snapshot();
        let right = other.snapshot();
        GuardedSet::from_unguarded(left.difference(&right))
    }

    fn symmetric_difference(&self, other: &Self) -> Self {
        let left = self.snapshot();
        let right = other.snapshot();
        GuardedSet::from_unguarded(left.symmetric_difference(&right))
    }

    /// Calls `visit` on every element of a snapshot taken when the call starts.
    ///
    /// No lock is held while `visit` runs, so it may read or mutate this set. Changes it makes
    /// aren't reflected in the elements visited.
    fn each<F: FnMut(&T) -> bool>(&self, visit: F) {
        self.snapshot().each(visit)
    }

    /// Starts a traversal over the elements present now.
    ///
    /// The lock is never held between two advances. Each advance takes the read lock afresh and
    /// skips elements that have been removed in the meantime, so a slow consumer doesn't block
    /// writers.
    fn traverse(&self) -> Traversal<Self::Cursor<'_>> {
        Traversal::new(GuardedCursor::new(self, self.to_vec()))
    }

    /// Creates the set of all subsets, each as its own GuardedSet with its own lock.
    fn power_set(&self) -> GuardedSet<Self, B> {
        let (family, hasher) = {
            let table = self.inner.read();
            (table.power_set(), table.hasher().clone())
        };

        let mut subsets = UnguardedSet::with_cap_and_hasher(family.len(), hasher);
        for subset in family {
            subsets.add(GuardedSet::from_unguarded(subset));
        }
        GuardedSet::from_unguarded(subsets)
    }

    fn cartesian_product<U: Hash + Eq + Clone>(
        &self,
        other: &GuardedSet<U, B>,
    ) -> GuardedSet<OrderedPair<T, U>, B> {
        let left = self.snapshot();
        let right = other.snapshot();
        GuardedSet::from_unguarded(left.cartesian_product(&right))
    }

    fn to_vec(&self) -> Vec<T> {
        self.inner.read().to_vec()
    }

    fn strings(&self) -> Vec<String>
    where
        T: 'static,
    {
        self.inner.read().strings()
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
        GuardedSet::extend_from_json(self, input)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> PartialEq for GuardedSet<T, B> {
    fn eq(&self, other: &Self) -> bool {
        if ptr::eq(self, other) {
            return true;
        }
        let left = self.snapshot();
        let right = other.snapshot();
        left == right
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Eq for GuardedSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Hash for GuardedSet<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.inner.read().hash(state);
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for GuardedSet<T, B> {
    /// Copies the contents into a new set with a lock of its own.
    fn clone(&self) -> Self {
        GuardedSet::from_unguarded(self.snapshot())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for GuardedSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq, B: BuildHasher> From<UnguardedSet<T, B>> for GuardedSet<T, B> {
    fn from(value: UnguardedSet<T, B>) -> Self {
        GuardedSet::from_unguarded(value)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for GuardedSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        GuardedSet::from_unguarded(value.into_iter().collect())
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for GuardedSet<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Serialize, B> Serialize for GuardedSet<T, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.inner.read().serialize(serializer)
    }
}

impl<'de, T, B> Deserialize<'de> for GuardedSet<T, B>
where
    T: Hash + Eq + DeserializeOwned,
    B: BuildHasher + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        UnguardedSet::deserialize(deserializer).map(GuardedSet::from_unguarded)
    }
}

impl<T: Debug, B> Debug for GuardedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("GuardedSet")
            .field("contents", &*self.inner.read())
            .finish()
    }
}

impl<T: Display, B> Display for GuardedSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.inner.read(), f)
    }
}
