use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, env = "GAMESHELF_LOG", default_value = "info", global = true)]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Summarize a game JSON document (playtime and last launch)
    Summarize {
        /// Path to the game document
        file: PathBuf,
    },
    /// Decode an environment field (`KEY,VALUE;KEY,VALUE`) into JSON
    DecodeEnv {
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Fail on malformed pairs instead of skipping them
        #[arg(long)]
        strict: bool,
    },
    /// Encode KEY=VALUE pairs into an environment field
    EncodeEnv {
        #[arg(value_name = "KEY=VALUE")]
        pairs: Vec<String>,
    },
    /// Decode an arguments field into a JSON array
    DecodeArgs {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
    /// Encode tokens into an arguments field
    EncodeArgs {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        tokens: Vec<String>,
    },
    /// Print the form fields of a launch configuration JSON document
    ConfigFields {
        /// Path to the configuration document
        file: PathBuf,
    },
}
