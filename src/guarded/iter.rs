use std::hash::{BuildHasher, Hash};
use std::vec;

use super::GuardedSet;
use crate::traits::Set;
use crate::traversal::Cursor;

/// Drives a [`Traversal`](crate::Traversal) over a [`GuardedSet`].
///
/// The candidates are the elements present when the traversal started. Every advance takes the
/// read lock just long enough to check that the next candidate is still a member.
pub struct GuardedCursor<'a, T, B> {
    set: &'a GuardedSet<T, B>,
    pending: vec::IntoIter<T>,
}

impl<'a, T, B> GuardedCursor<'a, T, B> {
    pub(crate) fn new(set: &'a GuardedSet<T, B>, pending: Vec<T>) -> GuardedCursor<'a, T, B> {
        GuardedCursor {
            set,
            pending: pending.into_iter(),
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Cursor for GuardedCursor<'_, T, B> {
    type Item = T;

    fn advance(&mut self) -> Option<T> {
        for item in self.pending.by_ref() {
            if self.set.inner.read().contains(&item) {
                return Some(item);
            }
        }
        None
    }
}
