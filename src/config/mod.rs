use crate::config::cli::Args;
use crate::error::{GameError, Result};
use clap::Parser;
use tracing::Level;

pub mod cli;

pub struct Config {
    pub args: Args,
    pub log_level: Level,
}

impl Config {
    pub fn new() -> Result<Self> {
        Self::from_args(Args::parse())
    }

    pub fn from_args(args: Args) -> Result<Self> {
        let log_level = args
            .log_level
            .parse::<Level>()
            .map_err(|_| GameError::Config(format!("unknown log level {:?}", args.log_level)))?;

        Ok(Self { args, log_level })
    }

    /// Logs go to stderr so command output on stdout stays machine readable.
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.log_level)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::cli::Command;
    use std::path::PathBuf;

    #[test]
    fn parses_log_level_and_subcommand() -> Result<()> {
        let args = Args::try_parse_from(["gameshelf", "--log-level", "debug", "summarize", "game.json"])
            .map_err(|e| GameError::Config(e.to_string()))?;
        let config = Config::from_args(args)?;
        assert_eq!(config.log_level, Level::DEBUG);
        assert_eq!(
            config.args.command,
            Command::Summarize {
                file: PathBuf::from("game.json")
            }
        );
        Ok(())
    }

    #[test]
    fn hyphenated_tokens_are_values() -> Result<()> {
        let args = Args::try_parse_from(["gameshelf", "encode-args", "-windowed", "--dx11"])
            .map_err(|e| GameError::Config(e.to_string()))?;
        assert_eq!(
            args.command,
            Command::EncodeArgs {
                tokens: vec!["-windowed".to_string(), "--dx11".to_string()]
            }
        );
        Ok(())
    }

    #[test]
    fn rejects_unknown_log_level() {
        let args = Args::try_parse_from(["gameshelf", "--log-level", "loud", "decode-args", "x"])
            .expect("arguments parse");
        assert!(matches!(Config::from_args(args), Err(GameError::Config(_))));
    }
}
