use anyhow::Result;
use tag_nesting_check::{cli, Config};

fn main() -> Result<()> {
    // Parse configuration from command line and environment
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    let stdout = std::io::stdout();
    cli::run(&config, &mut stdout.lock())
}
