//! Assembles records from raw form values and renders records back into them.
//!
//! Callers read the fields themselves; everything here works on plain
//! strings and numbers.

use crate::domain::{
    launch_timestamp, playtime_seconds, CompatTool, Environment, GameConfig, SubGame,
};
use crate::encoding::{decode_args, encode_args};
use crate::error::{GameError, Result};
use tracing::debug;

/// Values of one sub-game section (`subid`, `subgame_name`, `subgame_playtime`).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubGameFields {
    pub sub_id: String,
    pub name: String,
    /// Numeric reading of the playtime input, NaN when the input is empty.
    pub playtime: f64,
    pub last_launch: Option<i64>,
    pub archived: bool,
}

/// Values of one launch configuration section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GameConfigFields {
    /// `subgame_args`
    pub arguments: String,
    /// `subgame_workdir`
    pub working_directory: String,
    /// `subgame_winprefix`
    pub game_prefix: String,
    /// `subgame_executable`
    pub executable: String,
    /// `subgame_env`
    pub environment: String,
    /// Selected `compat_tool` option value, empty for none.
    pub compat_tool: String,
}

/// One `<option>` of the compat tool selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Builds a [`SubGame`] belonging to `parent` from its form section.
///
/// A playtime of `0` or an empty input means "not tracked".
pub fn parse_sub_game(fields: &SubGameFields, parent: i64) -> Result<SubGame> {
    let id = parse_id(&fields.sub_id, "sub-game")?;

    let name = fields.name.trim();
    if name.is_empty() {
        return Err(GameError::missing("sub-game", "name"));
    }

    let playtime = if fields.playtime.is_nan() || fields.playtime == 0.0 {
        None
    } else {
        Some(playtime_seconds(fields.playtime)?)
    };

    let mut sub_game = SubGame::new(id, name)
        .with_archived(fields.archived)
        .with_parent(parent);
    sub_game.playtime = playtime;
    sub_game.last_launch = fields.last_launch.map(launch_timestamp).transpose()?;

    debug!("Assembled sub-game {} for game {}", id, parent);
    Ok(sub_game)
}

/// Builds a [`GameConfig`] from its form section.
///
/// Quoted arguments must be closed. The environment field is decoded
/// leniently, so a malformed pair degrades instead of failing the form.
pub fn parse_game_config(
    fields: &GameConfigFields,
    archive_file: Option<String>,
) -> Result<GameConfig> {
    let compat_tool = match fields.compat_tool.trim() {
        "" => None,
        raw => Some(parse_id(raw, "compat tool")?),
    };

    Ok(GameConfig {
        arguments: decode_args(&fields.arguments)?,
        working_directory: fields.working_directory.clone(),
        game_prefix: fields.game_prefix.clone(),
        executable: fields.executable.clone(),
        environment: Environment::from_field(&fields.environment),
        archive_file: archive_file.filter(|path| !path.is_empty()),
        compat_tool,
        ..GameConfig::default()
    })
}

pub fn compat_tool_options(tools: &[CompatTool]) -> Vec<SelectOption> {
    tools
        .iter()
        .map(|tool| SelectOption {
            value: tool.id.to_string(),
            label: tool.name.clone(),
        })
        .collect()
}

fn parse_id(raw: &str, entity: &'static str) -> Result<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(GameError::missing(entity, "id"));
    }
    raw.parse()
        .map_err(|_| GameError::malformed(format!("{entity} id {raw:?} is not an integer")))
}

impl TryFrom<&SubGame> for SubGameFields {
    type Error = GameError;

    fn try_from(sub_game: &SubGame) -> Result<Self> {
        let last_launch = sub_game
            .last_launch
            .map(|ts| i64::try_from(ts).map_err(|_| GameError::out_of_range("last_launch", ts)))
            .transpose()?;

        Ok(Self {
            sub_id: sub_game.id().to_string(),
            name: sub_game.name.clone(),
            playtime: sub_game.playtime_or_zero() as f64,
            last_launch,
            archived: sub_game.archived,
        })
    }
}

impl From<&GameConfig> for GameConfigFields {
    fn from(config: &GameConfig) -> Self {
        Self {
            arguments: encode_args(&config.arguments),
            working_directory: config.working_directory.clone(),
            game_prefix: config.game_prefix.clone(),
            executable: config.executable.clone(),
            environment: config.environment.to_field(),
            compat_tool: config
                .compat_tool
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}
