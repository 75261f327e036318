use indexmap::IndexMap;
use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// The JSON body handed to the transport: `operationName`, `query` and
/// `variables`, nothing else.
///
/// `variables` starts out mapping each declared name to its type as a string
/// placeholder (e.g. `"from": "Int"`). Callers overwrite entries with real
/// values before sending; extra keys are passed through as-is.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub operation_name: String,
    pub query: String,
    pub variables: IndexMap<String, Value>,
}

impl RequestPayload {
    /// Sets `name` to `value`, returning the previous value (usually the type
    /// placeholder) if there was one.
    pub fn set_variable(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.variables.insert(name.into(), value.into())
    }

    pub fn with_variable(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_variable(name, value);
        self
    }

    pub fn to_json_value(&self) -> serde_json::Result<Value> {
        serde_json::to_value(self)
    }

    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
