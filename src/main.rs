use gameshelf::commands;
use gameshelf::config::Config;
use gameshelf::error::Result;
use tracing::debug;

fn main() -> Result<()> {
    let config = Config::new()?;
    config.init_tracing();

    debug!("Running {:?}", config.args.command);
    commands::run(&config.args.command, &mut std::io::stdout().lock())
}
