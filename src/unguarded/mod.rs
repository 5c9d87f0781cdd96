//! A module containing [`UnguardedSet`] and its associated iterator types.
//!
//! [`UnguardedSet`] does no synchronization of its own, all mutation goes through `&mut self`. It is
//! also the storage and algorithm behind `GuardedSet`, which adds locking around it.
//!
//! As with the standard library's sets, there is no mutable iterator over the elements because
//! mutating them in place would cause a logic error.

mod iter;
mod tests;
mod unguarded_set;

pub use iter::*;
pub use unguarded_set::*;
