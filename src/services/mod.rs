pub mod form;
pub mod summary;

pub use form::{
    compat_tool_options, parse_game_config, parse_sub_game, GameConfigFields, SelectOption,
    SubGameFields,
};
pub use summary::{summarize, summarize_library};
