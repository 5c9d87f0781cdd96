//! Traits shared by every set variant in this crate.

pub mod set;

#[doc(inline)]
pub use set::Set;
