//! The lazy, cancellable traversal protocol shared by both set variants.
//!
//! A [`Traversal`] is pulled one element at a time. Either the consumer or any holder of its
//! [`StopSignal`] may cancel it, after which it yields nothing more. There is no background
//! producer, so abandoning a traversal by dropping it can never leave anything blocked.

mod traversal;

pub use traversal::*;
