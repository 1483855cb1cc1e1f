//! Scalar leaf nodes.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A leaf node wrapping a single plain value.
///
/// The wrapped slot has three observable states: a set value (`Some(v)`),
/// an explicit null (`Some(Value::Null)`), and an unset slot (`None`) — the
/// analogue of a scalar holding `undefined`. Null and unset are distinct:
/// nullability checks treat them differently.
#[derive(Debug, Clone, PartialEq)]
pub struct Scalar {
    value: Option<Value>,
}

impl Scalar {
    /// Create a scalar wrapping `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }

    /// Create a scalar holding an explicit null.
    pub fn null() -> Self {
        Self {
            value: Some(Value::Null),
        }
    }

    /// Create a scalar whose value slot is unset.
    pub fn undefined() -> Self {
        Self { value: None }
    }

    /// The wrapped value, or `None` if the slot is unset.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Replace the wrapped value.
    pub fn set(&mut self, value: impl Into<Value>) {
        self.value = Some(value.into());
    }

    /// Serialize to a plain value. An unset slot serializes as null, since
    /// the plain representation has no unset state.
    pub fn to_plain(&self) -> Value {
        self.value.clone().unwrap_or(Value::Null)
    }
}

impl Serialize for Scalar {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_plain().serialize(serializer)
    }
}
