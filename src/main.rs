use clap::Parser;

use seeker::cli::{self, Cli, Commands, ConfigSubcommands};
use seeker::config::AppConfig;
use seeker::core::Result;
use seeker::logging;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = logging::init();

    if let Some(Commands::Config { command }) = &cli.command {
        match command {
            ConfigSubcommands::Init => match AppConfig::init_default() {
                Ok(path) => println!("✓ Created config file at {}", path.display()),
                Err(e) => eprintln!("✗ Failed to create config: {e}"),
            },
            ConfigSubcommands::Where => match AppConfig::get_config_path() {
                Some(path) => println!("{}", path.display()),
                None => eprintln!("✗ Could not determine config path"),
            },
        }
        return Ok(());
    }

    let config = AppConfig::load(cli.config.as_deref());

    let llm = cli::create_provider(&cli, &config)?;
    let mut executor = cli::create_executor(&llm, &cli, &config)?;

    cli::run_session(&mut executor, &cli.effective_questions()).await
}
