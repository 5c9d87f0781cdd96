use std::any::Any;

use crate::json::Scalar;

/// Returns the string held by `item` if its concrete type is a string type.
pub(crate) fn native_str(item: &dyn Any) -> Option<&str> {
    if let Some(s) = item.downcast_ref::<String>() {
        Some(s)
    } else if let Some(s) = item.downcast_ref::<&'static str>() {
        Some(s)
    } else {
        item.downcast_ref::<Scalar>().and_then(Scalar::as_str)
    }
}
