mod compat_tool;
mod environment;
mod game;
mod game_config;
mod meta_game;

pub use compat_tool::CompatTool;
pub use environment::Environment;
pub use game::{Game, SubGame};
pub(crate) use game::{launch_timestamp, playtime_seconds};
pub use game_config::GameConfig;
pub use meta_game::MetaGame;
