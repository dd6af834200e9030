use super::Game;
use crate::services::summary::summarize;
use serde::Serialize;

/// Read-only play statistics of a [`Game`], derived from its sub-games.
///
/// Has no identity of its own; build a fresh one whenever the game changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetaGame {
    id: i64,
    name: String,
    playtime: u64,
    last_launch: u64,
}

impl MetaGame {
    pub(crate) fn new(id: i64, name: String, playtime: u64, last_launch: u64) -> Self {
        Self {
            id,
            name,
            playtime,
            last_launch,
        }
    }

    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total seconds over all sub-games, archived ones included.
    pub fn playtime(&self) -> u64 {
        self.playtime
    }

    /// Most recent launch over all sub-games, `0` if none was ever launched.
    pub fn last_launch(&self) -> u64 {
        self.last_launch
    }

    pub fn never_launched(&self) -> bool {
        self.last_launch == 0
    }
}

impl From<&Game> for MetaGame {
    fn from(game: &Game) -> Self {
        summarize(game)
    }
}
