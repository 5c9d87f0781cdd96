//! A module containing [`OrderedPair`], the element type of cartesian products.

use std::fmt::{self, Display, Formatter};

use serde::Serialize;

/// An immutable 2-tuple where position matters, so `(a, b)` and `(b, a)` are different pairs
/// unless `a == b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OrderedPair<A, B> {
    first: A,
    second: B,
}

impl<A, B> OrderedPair<A, B> {
    pub const fn new(first: A, second: B) -> OrderedPair<A, B> {
        OrderedPair {
            first,
            second,
        }
    }

    pub const fn first(&self) -> &A {
        &self.first
    }

    pub const fn second(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for OrderedPair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        OrderedPair::new(first, second)
    }
}

impl<A: Display, B: Display> Display for OrderedPair<A, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}
