use super::{CompatTool, Environment};
use crate::encoding::encode_args;
use crate::error::{GameError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// Launch parameters of one sub-game.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Passed positionally to the executable.
    #[serde(default)]
    pub arguments: Vec<String>,
    #[serde(default)]
    pub working_directory: String,
    #[serde(default)]
    pub game_prefix: String,
    #[serde(default)]
    pub executable: String,
    #[serde(default)]
    pub environment: Environment,
    // The server stores this as a required string, "" meaning none.
    #[serde(
        default,
        serialize_with = "empty_when_none",
        deserialize_with = "none_when_empty"
    )]
    pub archive_file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compat_tool: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GameConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| GameError::malformed(format!("invalid game config: {e}")))
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        serde_json::from_value(value)
            .map_err(|e| GameError::malformed(format!("invalid game config: {e}")))
    }

    /// The argument list as a single form-field string.
    pub fn arguments_field(&self) -> String {
        encode_args(&self.arguments)
    }

    pub fn environment_field(&self) -> String {
        self.environment.to_field()
    }

    /// Whether this config points at `tool`.
    pub fn uses(&self, tool: &CompatTool) -> bool {
        self.compat_tool == Some(tool.id)
    }
}

fn empty_when_none<S: Serializer>(
    value: &Option<String>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

fn none_when_empty<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|path| !path.is_empty()))
}
