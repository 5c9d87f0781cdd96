//! A module containing [`GuardedSet`], the thread safe set variant.
//!
//! [`GuardedSet`] forwards to an [`UnguardedSet`](crate::UnguardedSet) after taking its lock in the
//! appropriate mode. It is only available with the `guarded` feature.

mod guarded_set;
mod iter;

pub use guarded_set::*;
pub use iter::*;
