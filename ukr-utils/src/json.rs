//! JSON mapping with an explicit, immutable configuration.
//!
//! A [`JsonMapper`] is built once from a [`JsonConfig`] and passed to whoever
//! needs it. There is no process-wide mapper to reconfigure; build another
//! mapper for different settings.

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, trace};

/// Errors from JSON serialization and deserialization.
#[derive(Debug, thiserror::Error)]
pub enum JsonError {
    /// Value could not be written as JSON
    #[error("failed to serialize {type_name} to JSON: {source}")]
    Serialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Text is not valid JSON for the target type
    #[error("failed to deserialize JSON to {type_name}: {source}")]
    Deserialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Input has a field the target type does not declare
    #[error("unknown field `{path}` while deserializing {type_name}")]
    UnknownField {
        type_name: &'static str,
        path: String,
    },
}

/// Output settings for [`JsonMapper`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonConfig {
    /// Write indented, multi-line output.
    pub pretty: bool,

    /// Spaces per indent level when `pretty` is set.
    pub indent_width: usize,

    /// Reject input with fields the target type does not declare.
    pub fail_on_unknown_fields: bool,
}

impl JsonConfig {
    pub fn new(pretty: bool, indent_width: usize) -> Self {
        Self {
            pretty,
            indent_width,
            ..Self::default()
        }
    }

    pub fn with_fail_on_unknown_fields(mut self, fail: bool) -> Self {
        self.fail_on_unknown_fields = fail;
        self
    }

    /// Indented output with the default width.
    pub fn pretty() -> Self {
        Self {
            pretty: true,
            ..Self::default()
        }
    }
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            pretty: false,
            indent_width: 2,
            fail_on_unknown_fields: true,
        }
    }
}

/// Maps typed values to and from JSON text.
#[derive(Debug, Clone, Default)]
pub struct JsonMapper {
    config: JsonConfig,
}

impl JsonMapper {
    pub fn new(config: JsonConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &JsonConfig {
        &self.config
    }

    /// Serialize `value` using this mapper's output settings.
    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String, JsonError> {
        let wrap = |source| JsonError::Serialize {
            type_name: type_name::<T>(),
            source,
        };

        if !self.config.pretty {
            return serde_json::to_string(value).map_err(wrap);
        }

        let indent = " ".repeat(self.config.indent_width);
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(indent.as_bytes());
        let mut ser = Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser).map_err(wrap)?;

        String::from_utf8(buf).map_err(|e| wrap(serde::ser::Error::custom(e)))
    }

    /// Deserialize a `T` from JSON text.
    ///
    /// Fields `T` does not declare fail with [`JsonError::UnknownField`]
    /// unless the config allows them, in which case they are skipped.
    pub fn from_json<T: DeserializeOwned>(&self, json: &str) -> Result<T, JsonError> {
        let type_name = type_name::<T>();
        trace!(target_type = type_name, bytes = json.len(), "deserializing JSON");
        let wrap = |source| JsonError::Deserialize { type_name, source };

        let mut unknown = Vec::new();
        let mut de = serde_json::Deserializer::from_str(json);
        let value: T =
            serde_ignored::deserialize(&mut de, |path| unknown.push(path.to_string()))
                .map_err(wrap)?;
        de.end().map_err(wrap)?;

        if let Some(path) = unknown.into_iter().next() {
            if self.config.fail_on_unknown_fields {
                return Err(JsonError::UnknownField { type_name, path });
            }
            debug!(target_type = type_name, %path, "skipped unknown field");
        }

        Ok(value)
    }

    /// Deserialize a JSON array of `T`.
    pub fn list_from_json<T: DeserializeOwned>(&self, json: &str) -> Result<Vec<T>, JsonError> {
        self.from_json(json)
    }
}
