//! Game library helpers: sub-game aggregation and launch configuration encodings.
//!
//! A [`Game`] groups [`SubGame`]s (base game, DLC, platform builds) and
//! [`summarize`] folds them into a [`MetaGame`]. Launch settings travel
//! through form fields as flat strings, see [`encoding`].

pub mod commands;
pub mod config;
pub mod domain;
pub mod encoding;
pub mod error;
pub mod services;
pub mod utils;

pub use domain::{CompatTool, Environment, Game, GameConfig, MetaGame, SubGame};
pub use error::{GameError, Result};
pub use services::{summarize, summarize_library};
