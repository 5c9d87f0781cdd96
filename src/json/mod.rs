//! JSON encoding and decoding of sets, along with [`Scalar`], an element type for sets that need
//! to hold differently typed JSON values at once.
//!
//! A set is encoded as a flat JSON array of its elements, in no particular order. When decoding,
//! entries that are themselves arrays or objects are skipped without error. Numbers go through
//! serde_json's `arbitrary_precision` representation, so they are never rounded through a float.

mod decode;
mod error;
mod scalar;

pub(crate) use decode::*;
pub use error::*;
pub use scalar::*;
