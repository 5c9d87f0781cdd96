use std::hash::{DefaultHasher, Hash, Hasher};

/// Hashes a single element with fixed keys, so that the result only depends on the element.
///
/// Sets combine these per-element hashes with a commutative operation to get a hash that ignores
/// iteration order.
pub(crate) fn element_hash<T: Hash + ?Sized>(item: &T) -> u64 {
    let mut state = DefaultHasher::new();
    item.hash(&mut state);
    state.finish()
}

/// Hashes the given elements in a way that doesn't depend on the order they are produced in.
pub(crate) fn unordered_hash<'a, T, I, H>(items: I, len: usize, state: &mut H)
where
    T: Hash + 'a,
    I: IntoIterator<Item = &'a T>,
    H: Hasher,
{
    let sum = items
        .into_iter()
        .fold(0_u64, |acc, item| acc.wrapping_add(element_hash(item)));
    state.write_usize(len);
    state.write_u64(sum);
}

/// An element whose hash is chosen by hand, so that distinct elements can be made to collide.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

#[cfg(test)]
impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash {
            hash,
            value,
        }
    }
}

#[cfg(test)]
impl<T: Eq> Hash for ManualHash<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
    }
}

#[cfg(test)]
impl<T: Eq> PartialEq for ManualHash<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

#[cfg(test)]
impl<T: Eq> Eq for ManualHash<T> {}
