use anyhow::Result;
use clap::{CommandFactory, Parser};

use ragchat::app::{run_command, run_repl_mode, setup_from_cli};
use ragchat::config::default_log_filter;
use ragchat::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_log_filter(cli.verbose)),
    )
    .init();

    if let Some(shell) = cli.generate {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
        return Ok(());
    }

    let controller = setup_from_cli(&cli)?;

    // If a subcommand was provided, execute it and exit
    if let Some(ref command) = cli.command {
        let output = run_command(&controller, command).await?;
        println!("{}", output);
        return Ok(());
    }

    run_repl_mode(&controller).await
}
