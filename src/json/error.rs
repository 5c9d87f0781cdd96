use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// The input couldn't be read as a JSON array at all, so nothing was added.
#[derive(Debug)]
pub struct MalformedJson {
    pub source: serde_json::Error,
}

impl Display for MalformedJson {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Input isn't a valid JSON array: {}", self.source)
    }
}

impl Error for MalformedJson {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

impl From<serde_json::Error> for MalformedJson {
    fn from(source: serde_json::Error) -> Self {
        MalformedJson { source }
    }
}

/// An entry of the array couldn't be decoded as an element. Every entry before `index` has
/// already been added.
#[derive(Debug)]
pub struct InvalidElement {
    pub index: usize,
    pub fragment: String,
    pub source: serde_json::Error,
}

impl Display for InvalidElement {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to decode entry {} (`{}`): {}", self.index, self.fragment, self.source)
    }
}

impl Error for InvalidElement {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.source)
    }
}

#[derive(Debug, Display, Error, From, IsVariant)]
pub enum DecodeError {
    Malformed(MalformedJson),
    InvalidElement(InvalidElement),
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        DecodeError::Malformed(MalformedJson::from(source))
    }
}
