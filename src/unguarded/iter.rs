use std::collections::hash_map::{IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;

use super::UnguardedSet;
use crate::traversal::Cursor;

impl<T, B> IntoIterator for UnguardedSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.table.into_keys())
    }
}

pub struct IntoIter<T>(
    pub(crate) IntoKeys<T, ()>,
);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a UnguardedSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.table.keys())
    }
}

pub struct Iter<'a, T>(
    pub(crate) Keys<'a, T, ()>,
);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Drives a [`Traversal`](crate::Traversal) over an [`UnguardedSet`], cloning each element as it
/// is reached.
pub struct UnguardedCursor<'a, T>(
    pub(crate) Keys<'a, T, ()>,
);

impl<T: Clone> Cursor for UnguardedCursor<'_, T> {
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        self.0.next().cloned()
    }
}
