use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::str::FromStr;
use tracing::debug;

/// One playable unit of a [`Game`], e.g. the base game, a DLC or a platform build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubGame {
    id: i64,
    pub name: String,
    /// Seconds played, `None` while not tracked yet.
    pub playtime: Option<u64>,
    /// Unix seconds of the last launch, `None` or `0` for never.
    pub last_launch: Option<u64>,
    #[serde(rename = "is_archived")]
    pub archived: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent: Option<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SubGame {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            playtime: None,
            last_launch: None,
            archived: false,
            parent: None,
            extra: Map::new(),
        }
    }

    pub fn with_playtime(mut self, seconds: u64) -> Self {
        self.playtime = Some(seconds);
        self
    }

    pub fn with_last_launch(mut self, timestamp: u64) -> Self {
        self.last_launch = Some(timestamp);
        self
    }

    pub fn with_archived(mut self, archived: bool) -> Self {
        self.archived = archived;
        self
    }

    pub fn with_parent(mut self, parent: i64) -> Self {
        self.parent = Some(parent);
        self
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn playtime_or_zero(&self) -> u64 {
        self.playtime.unwrap_or(0)
    }

    pub fn last_launch_or_zero(&self) -> u64 {
        self.last_launch.unwrap_or(0)
    }

    pub fn is_active(&self) -> bool {
        !self.archived
    }
}

/// A library entry grouping its sub-games. Sub-game ids are unique within a game.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    id: i64,
    name: String,
    #[serde(rename = "subgames")]
    sub_games: Vec<SubGame>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl Game {
    pub fn new(id: i64, name: impl Into<String>, sub_games: Vec<SubGame>) -> Result<Self> {
        ensure_unique_ids(&sub_games)?;
        Ok(Self {
            id,
            name: name.into(),
            sub_games,
            extra: Map::new(),
        })
    }

    /// Parses and validates a game document such as `{"id":5,"name":"Foo","subgames":[]}`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawGame = serde_json::from_str(json)
            .map_err(|e| GameError::malformed(format!("invalid game document: {e}")))?;
        Self::try_from(raw)
    }

    /// Same as [`Game::from_json_str`] for a document that was already parsed.
    pub fn from_json_value(value: Value) -> Result<Self> {
        let raw: RawGame = serde_json::from_value(value)
            .map_err(|e| GameError::malformed(format!("invalid game document: {e}")))?;
        Self::try_from(raw)
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sub_games(&self) -> &[SubGame] {
        &self.sub_games
    }

    /// Fields the document carried that this model does not know about.
    pub fn extra(&self) -> &Map<String, Value> {
        &self.extra
    }

    pub fn sub_game(&self, id: i64) -> Option<&SubGame> {
        self.sub_games.iter().find(|sub_game| sub_game.id == id)
    }

    pub fn contains(&self, sub_game_id: i64) -> bool {
        self.sub_game(sub_game_id).is_some()
    }

    /// Sub-games that are not archived, in document order.
    pub fn active_sub_games(&self) -> impl Iterator<Item = &SubGame> {
        self.sub_games.iter().filter(|sub_game| sub_game.is_active())
    }
}

impl FromStr for Game {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_json_str(s)
    }
}

impl TryFrom<Value> for Game {
    type Error = GameError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json_value(value)
    }
}

fn ensure_unique_ids(sub_games: &[SubGame]) -> Result<()> {
    let mut seen = HashSet::new();
    for sub_game in sub_games {
        if !seen.insert(sub_game.id) {
            return Err(GameError::malformed(format!(
                "duplicate sub-game id {}",
                sub_game.id
            )));
        }
    }
    Ok(())
}

/// Converts a playtime reading into whole seconds. Fractions are truncated.
pub(crate) fn playtime_seconds(value: f64) -> Result<u64> {
    if !value.is_finite() || value < 0.0 {
        return Err(GameError::out_of_range("playtime", value));
    }
    Ok(value.trunc() as u64)
}

pub(crate) fn launch_timestamp(value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| GameError::out_of_range("last_launch", value))
}

#[derive(Debug, Deserialize)]
struct RawSubGame {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    playtime: Option<f64>,
    #[serde(default)]
    last_launch: Option<i64>,
    #[serde(default)]
    archived: Option<bool>,
    #[serde(default)]
    is_archived: Option<bool>,
    #[serde(default)]
    parent: Option<i64>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawSubGame> for SubGame {
    type Error = GameError;

    fn try_from(raw: RawSubGame) -> Result<Self> {
        let id = raw.id.ok_or_else(|| GameError::missing("sub-game", "id"))?;
        let name = raw.name.ok_or_else(|| GameError::missing("sub-game", "name"))?;

        let mut extra = raw.extra;
        let archived = match (raw.is_archived, raw.archived) {
            (Some(is_archived), Some(archived)) => {
                extra.insert("archived".to_string(), Value::Bool(archived));
                is_archived
            }
            (is_archived, archived) => is_archived.or(archived).unwrap_or(false),
        };

        Ok(Self {
            id,
            name,
            playtime: raw.playtime.map(playtime_seconds).transpose()?,
            last_launch: raw.last_launch.map(launch_timestamp).transpose()?,
            archived,
            parent: raw.parent,
            extra,
        })
    }
}

#[derive(Debug, Deserialize)]
struct RawGame {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    subgames: Option<Value>,
    #[serde(default)]
    sub_games: Option<Value>,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl TryFrom<RawGame> for Game {
    type Error = GameError;

    fn try_from(raw: RawGame) -> Result<Self> {
        let id = raw.id.ok_or_else(|| GameError::missing("game", "id"))?;
        let name = raw.name.ok_or_else(|| GameError::missing("game", "name"))?;

        let mut extra = raw.extra;
        let listed = match (raw.subgames, raw.sub_games) {
            (Some(subgames), Some(sub_games)) => {
                extra.insert("sub_games".to_string(), sub_games);
                Some(subgames)
            }
            (subgames, sub_games) => subgames.or(sub_games),
        };

        let sub_games = match listed {
            Some(value) => Vec::<RawSubGame>::deserialize(value)
                .map_err(|e| GameError::malformed(format!("invalid sub-game list: {e}")))?,
            None => Vec::new(),
        }
        .into_iter()
        .map(SubGame::try_from)
        .collect::<Result<Vec<_>>>()?;
        ensure_unique_ids(&sub_games)?;

        debug!("Parsed game {} ({}) with {} sub-games", name, id, sub_games.len());

        Ok(Self {
            id,
            name,
            sub_games,
            extra,
        })
    }
}
