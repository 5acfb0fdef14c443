use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The path payload returned by the routing proxy.
///
/// The shape is owned by the upstream directions provider, so it is kept
/// opaque and handed to consumers as-is.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RoutePath(Value);

impl RoutePath {
    pub fn new(value: Value) -> RoutePath {
        RoutePath(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}
