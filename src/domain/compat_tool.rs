use super::Environment;
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// A compatibility layer (e.g. Proton or Wine) used to launch sub-games.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatTool {
    pub id: i64,
    pub name: String,
    pub executable: String,
    pub environment: Environment,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CompatTool {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            executable: String::new(),
            environment: Environment::new(),
            extra: Map::new(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawCompatTool = serde_json::from_str(json)
            .map_err(|e| GameError::malformed(format!("invalid compat tool: {e}")))?;
        Self::try_from(raw)
    }

    pub fn from_json_value(value: Value) -> Result<Self> {
        let raw: RawCompatTool = serde_json::from_value(value)
            .map_err(|e| GameError::malformed(format!("invalid compat tool: {e}")))?;
        Self::try_from(raw)
    }

    /// Parses the tool listing, an array of `{id, name}` records.
    pub fn list_from_json_str(json: &str) -> Result<Vec<Self>> {
        let raw: Vec<RawCompatTool> = serde_json::from_str(json)
            .map_err(|e| GameError::malformed(format!("invalid compat tool listing: {e}")))?;
        Self::collect_listing(raw)
    }

    pub fn list_from_json_value(value: Value) -> Result<Vec<Self>> {
        let raw: Vec<RawCompatTool> = serde_json::from_value(value)
            .map_err(|e| GameError::malformed(format!("invalid compat tool listing: {e}")))?;
        Self::collect_listing(raw)
    }

    fn collect_listing(raw: Vec<RawCompatTool>) -> Result<Vec<Self>> {
        let tools = raw
            .into_iter()
            .map(Self::try_from)
            .collect::<Result<Vec<_>>>()?;
        debug!("Parsed {} compat tools", tools.len());
        Ok(tools)
    }
}

#[derive(Debug, Deserialize)]
struct RawCompatTool {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    executable: Option<String>,
    #[serde(default)]
    environment: Option<Environment>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawCompatTool> for CompatTool {
    type Error = GameError;

    fn try_from(raw: RawCompatTool) -> Result<Self> {
        Ok(Self {
            id: raw.id.ok_or_else(|| GameError::missing("compat tool", "id"))?,
            name: raw.name.ok_or_else(|| GameError::missing("compat tool", "name"))?,
            executable: raw.executable.unwrap_or_default(),
            environment: raw.environment.unwrap_or_default(),
            extra: raw.extra,
        })
    }
}
