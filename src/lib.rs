//! Mutable hash sets with boolean set algebra, in a single threaded and a thread safe flavour.
//!
//! # Variants
//! There are two set types, both implementing the [`Set`] trait:
//! - [`UnguardedSet`] owns its membership table directly. It does no locking, so mutating it
//!   requires `&mut self` like any other collection.
//! - `GuardedSet` (behind the default `guarded` feature) wraps an [`UnguardedSet`] in a
//!   reader/writer lock. It can be shared between threads and mutated through `&self`.
//!
//! Code written against [`Set`] works with either. Binary operations only accept a set of the
//! same variant, which is checked by the compiler, and always return a new set.
//!
//! # Order
//! None of these sets are ordered. The order of iteration, [`pop`](Set::pop),
//! [`to_vec`](Set::to_vec), [`Display`](std::fmt::Display) and JSON output is unspecified and may
//! change between runs. Nothing in this crate should be tested against a particular order.
//!
//! # Traversal
//! Besides the usual iterators, [`Set::traverse`] returns a [`Traversal`] which yields one
//! element at a time and can be cancelled with a [`StopSignal`], possibly from another thread.
//!
//! # Error Handling
//! Mixing variants doesn't compile, so the only runtime errors come from decoding JSON, reported
//! as a [`DecodeError`]. Ordinary conditions are not errors: popping an empty set returns None,
//! removing an absent element does nothing and checking containment of no elements returns true.
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "guarded")]
pub mod guarded;
pub mod json;
pub mod pair;
pub mod traits;
pub mod traversal;
pub mod unguarded;

pub(crate) mod util;

#[cfg(feature = "guarded")]
#[doc(inline)]
pub use guarded::GuardedSet;
#[doc(inline)]
pub use json::{DecodeError, Scalar};
#[doc(inline)]
pub use pair::OrderedPair;
#[doc(inline)]
pub use traits::Set;
#[doc(inline)]
pub use traversal::{Cursor, StopSignal, Traversal, TraversalState};
#[doc(inline)]
pub use unguarded::UnguardedSet;
