use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{DecodeError, InvalidElement};

/// Parses `json` as an array of arbitrary JSON values without decoding any of them yet.
pub(crate) fn parse_entries(json: &str) -> Result<Vec<Value>, DecodeError> {
    Ok(serde_json::from_str::<Vec<Value>>(json)?)
}

/// Decodes every scalar entry as a `T` and passes it to `add`, in array order.
///
/// Arrays and objects are skipped. The first entry that fails to decode stops the process, after
/// `add` has already been called for everything before it.
pub(crate) fn absorb_entries<T, F>(entries: Vec<Value>, mut add: F) -> Result<(), DecodeError>
where
    T: DeserializeOwned,
    F: FnMut(T),
{
    for (index, entry) in entries.iter().enumerate() {
        if entry.is_array() || entry.is_object() {
            tracing::trace!(index, "skipping nested JSON entry");
            continue;
        }

        // Numbers must be decoded from an owned Value to keep their arbitrary precision form.
        match T::deserialize(entry.clone()) {
            Ok(item) => add(item),
            Err(source) => {
                let fragment = entry.to_string();
                tracing::debug!(index, %fragment, "JSON entry failed to decode");
                return Err(InvalidElement { index, fragment, source }.into());
            },
        }
    }
    Ok(())
}
