use crate::config::cli::Command;
use crate::domain::{Environment, Game, GameConfig};
use crate::encoding::{decode_args, encode_args};
use crate::error::{GameError, Result};
use crate::services::{summarize, GameConfigFields};
use crate::utils::{format_last_launch, format_playtime};
use serde_json::json;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Runs one CLI command, writing its result to `out`.
pub fn run(command: &Command, out: &mut impl Write) -> Result<()> {
    match command {
        Command::Summarize { file } => {
            let game = load_game(file)?;
            let summary = summarize(&game);
            info!(
                "{}: {}, last launched {}",
                summary.name(),
                format_playtime(summary.playtime()),
                format_last_launch(summary.last_launch())
            );
            write_json(out, &summary)
        }
        Command::DecodeEnv { value, strict } => {
            let env = if *strict {
                value.parse::<Environment>()?
            } else {
                Environment::from_field(value)
            };
            write_json(out, &env)
        }
        Command::EncodeEnv { pairs } => {
            let env = pairs
                .iter()
                .map(|pair| {
                    pair.split_once('=').ok_or_else(|| {
                        GameError::malformed(format!("expected KEY=VALUE, got {pair:?}"))
                    })
                })
                .collect::<Result<Environment>>()?;
            writeln!(out, "{}", env.try_to_field()?)?;
            Ok(())
        }
        Command::DecodeArgs { value } => write_json(out, &decode_args(value)?),
        Command::EncodeArgs { tokens } => {
            writeln!(out, "{}", encode_args(tokens))?;
            Ok(())
        }
        Command::ConfigFields { file } => {
            let config = GameConfig::from_json_str(&std::fs::read_to_string(file)?)?;
            let fields = GameConfigFields::from(&config);
            write_json(
                out,
                &json!({
                    "subgame_args": fields.arguments,
                    "subgame_workdir": fields.working_directory,
                    "subgame_winprefix": fields.game_prefix,
                    "subgame_executable": fields.executable,
                    "subgame_env": fields.environment,
                    "compat_tool": fields.compat_tool,
                }),
            )
        }
    }
}

pub fn load_game(path: &Path) -> Result<Game> {
    let game = Game::from_json_str(&std::fs::read_to_string(path)?)?;
    info!(
        "Loaded game {} with {} sub-games from {:?}",
        game.name(),
        game.sub_games().len(),
        path
    );
    Ok(game)
}

fn write_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    fn run_to_string(command: Command) -> Result<String> {
        let mut out = Vec::new();
        run(&command, &mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn summarizes_game_file() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("game.json");
        fs::write(
            &file,
            r#"{"id":1,"name":"X","subgames":[
                {"id":1,"name":"a","playtime":100,"last_launch":50},
                {"id":2,"name":"b","playtime":null,"last_launch":200}
            ]}"#,
        )?;

        let output: Value = serde_json::from_str(&run_to_string(Command::Summarize { file })?)?;
        assert_eq!(
            output,
            json!({"id": 1, "name": "X", "playtime": 100, "last_launch": 200})
        );
        Ok(())
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = run_to_string(Command::Summarize {
            file: "/definitely/not/here.json".into(),
        });
        assert!(matches!(result, Err(GameError::Io(_))));
    }

    #[test]
    fn env_commands() -> Result<()> {
        let decoded: Value = serde_json::from_str(&run_to_string(Command::DecodeEnv {
            value: "a;b,2".to_string(),
            strict: false,
        })?)?;
        assert_eq!(decoded, json!({"a": "", "b": "2"}));

        assert!(run_to_string(Command::DecodeEnv {
            value: "a;b,2".to_string(),
            strict: true,
        })
        .is_err());

        let encoded = run_to_string(Command::EncodeEnv {
            pairs: vec!["a=1".to_string(), "b=x=y".to_string()],
        })?;
        assert_eq!(encoded, "a,1;b,x=y\n");

        assert!(run_to_string(Command::EncodeEnv {
            pairs: vec!["novalue".to_string()],
        })
        .is_err());
        Ok(())
    }

    #[test]
    fn args_commands() -> Result<()> {
        let encoded = run_to_string(Command::EncodeArgs {
            tokens: vec!["-c".to_string(), "My File.ini".to_string()],
        })?;
        let decoded: Vec<String> = serde_json::from_str(&run_to_string(Command::DecodeArgs {
            value: encoded.trim_end().to_string(),
        })?)?;
        assert_eq!(decoded, vec!["-c", "My File.ini"]);

        let encoded = run_to_string(Command::EncodeArgs {
            tokens: vec!["%command%".to_string(), r"C:\a".to_string()],
        })?;
        assert_eq!(encoded, "%command% C:\\a\n");
        Ok(())
    }

    #[test]
    fn renders_config_fields() -> Result<()> {
        let dir = tempdir()?;
        let file = dir.path().join("config.json");
        fs::write(
            &file,
            r#"{"arguments":["-windowed"],"working_directory":"/g","game_prefix":"/p",
                "executable":"g.exe","environment":{"A":"1","B":"2"},"archive_file":"","compat_tool":2}"#,
        )?;

        let fields: Value = serde_json::from_str(&run_to_string(Command::ConfigFields { file })?)?;
        assert_eq!(fields["subgame_args"], json!("-windowed"));
        assert_eq!(fields["subgame_env"], json!("A,1;B,2"));
        assert_eq!(fields["compat_tool"], json!("2"));
        Ok(())
    }
}
