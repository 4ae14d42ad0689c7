use std::process::ExitCode;

use anyhow::Result;
use clap::Parser as _;
use rentals_cli::cli::{Cli, Commands};
use rentals_cli::commands::{
    generate_completions, print_login_message, run_admin, run_config, run_logout, run_open,
    run_user,
};
use rentals_cli::context::AppContext;
use rentals_cli::output::Output;
use rentals_cli::timing::init_tracing;

async fn run(cli: Cli) -> Result<()> {
    // These need neither configuration nor a backend.
    match &cli.command {
        Commands::Completions { shell } => {
            generate_completions(*shell);
            return Ok(());
        }
        Commands::LoginMessage { query } => {
            print_login_message(&Output::new(), query);
            return Ok(());
        }
        _ => {}
    }

    let mut ctx = AppContext::from_cli(&cli)?;

    match cli.command {
        Commands::Admin { view } => run_admin(&ctx, view).await,
        Commands::User { command } => run_user(&ctx, command).await,
        Commands::Open { console, view } => run_open(&mut ctx, console, &view).await,
        Commands::Config { command } => run_config(&mut ctx, command),
        Commands::Logout => run_logout(&mut ctx),
        Commands::Completions { .. } | Commands::LoginMessage { .. } => Ok(()),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.timing);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Output::stderr().error(format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}
