use std::hash::Hash;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::json::DecodeError;
use crate::pair::OrderedPair;
use crate::traversal::{Cursor, Traversal};

/// The capability contract implemented by both [`UnguardedSet`](crate::UnguardedSet) and
/// `GuardedSet`, allowing either variant to be used interchangeably.
///
/// Binary operations take another set of the same variant (`&Self` or [`Self::Of`]), so mixing
/// variants is rejected at compile time rather than at runtime. Every binary operation is pure:
/// neither operand is changed and the result is a freshly allocated set.
///
/// Iteration order is unspecified everywhere, including [`pop`](Set::pop), [`to_vec`](Set::to_vec)
/// and serialization, and may differ between two sets holding the same elements.
///
/// It is a logic error to change a set while it is an element of another set (e.g. one produced by
/// [`power_set`](Set::power_set)), as doing so changes its hash.
pub trait Set<T: Hash + Eq + Clone>: Clone + Eq + Hash + Sized {
    /// The same variant as `Self`, holding elements of type `U`.
    type Of<U: Hash + Eq + Clone>: Set<U>;

    /// The cursor that drives this variant's [`Traversal`].
    type Cursor<'a>: Cursor<Item = T>
    where
        Self: 'a;

    /// Adds `item` to the set, returning true if it wasn't already present.
    fn add(&mut self, item: T) -> bool;

    /// Returns true if the set contains `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns true if the set contains every provided item. This is vacuously true when `items`
    /// is empty.
    fn contains_all<'a, I>(&self, items: I) -> bool
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Removes `item` from the set. Removing an absent item does nothing.
    fn remove(&mut self, item: &T);

    /// Removes every element from the set.
    fn clear(&mut self);

    /// Returns the number of elements in the set.
    fn cardinality(&self) -> usize;

    /// An alias for [`cardinality`](Set::cardinality).
    fn len(&self) -> usize {
        self.cardinality()
    }

    fn is_empty(&self) -> bool {
        self.cardinality() == 0
    }

    /// Removes and returns an arbitrary element, or None if the set is empty.
    ///
    /// Which element is removed is deliberately unspecified and shouldn't be relied upon.
    fn pop(&mut self) -> Option<T>;

    /// Returns true if both sets contain exactly the same elements.
    fn equal(&self, other: &Self) -> bool;

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool;

    /// Returns true if `self ⊆ other` and `self != other`. (`self ⊂ other`)
    fn is_proper_subset(&self, other: &Self) -> bool {
        self.is_subset(other) && !self.equal(other)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self ⊇ other` and `self != other`. (`self ⊃ other`)
    fn is_proper_superset(&self, other: &Self) -> bool {
        other.is_proper_subset(self)
    }

    /// Creates a set of all items that are in either `self` or `other`. (`self ∪ other`)
    fn union(&self, other: &Self) -> Self;

    /// Creates a set of all items that are in both `self` and `other`. (`self ∩ other`)
    fn intersect(&self, other: &Self) -> Self;

    /// Creates a set of all items that are in `self` but not `other`. (`self \ other`)
    fn difference(&self, other: &Self) -> Self;

    /// Creates a set of all items that are in `self` or `other` but not both. (`self △ other`)
    fn symmetric_difference(&self, other: &Self) -> Self {
        self.difference(other).union(&other.difference(self))
    }

    /// Calls `visit` on every element, stopping early once it returns true.
    fn each<F: FnMut(&T) -> bool>(&self, visit: F);

    /// Starts a new lazy, cancellable traversal over the set's elements.
    fn traverse(&self) -> Traversal<Self::Cursor<'_>>;

    /// Creates the set of all subsets of `self`, including the empty set and `self` itself.
    ///
    /// The result always has `2^n` members, so this is only practical for small sets.
    fn power_set(&self) -> Self::Of<Self>;

    /// Creates the set of every [`OrderedPair`] `(a, b)` with `a` from `self` and `b` from
    /// `other`.
    fn cartesian_product<U: Hash + Eq + Clone>(
        &self,
        other: &Self::Of<U>,
    ) -> Self::Of<OrderedPair<T, U>>;

    /// Copies every element into a [`Vec`], in no particular order.
    fn to_vec(&self) -> Vec<T>;

    /// Returns every element that is natively a string, skipping everything else.
    ///
    /// Elements count as strings if their type is [`String`], `&'static str` or a
    /// [`Scalar::String`](crate::Scalar::String). No conversion of other types is attempted.
    fn strings(&self) -> Vec<String>
    where
        T: 'static;

    /// Encodes the set as a JSON array of its elements.
    fn to_json(&self) -> Result<String, serde_json::Error>
    where
        T: Serialize;

    /// Decodes a JSON array and adds each of its entries to the set.
    ///
    /// Nested arrays and objects are silently skipped. Decoding isn't atomic: if an entry fails
    /// to decode, the entries before it have already been added when the error is returned.
    fn extend_from_json(&mut self, json: &str) -> Result<(), DecodeError>
    where
        T: DeserializeOwned;
}
