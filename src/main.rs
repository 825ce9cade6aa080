use clap::Parser;

use confusion::cli::{execute, Cli};
use confusion::logging::init_tracing;
use confusion::root::AppState;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = cli.load_config()?;
    init_tracing(&config.logging.filter, cli.verbose);

    let seed = cli.load_seed(&config)?;
    let output = execute(cli.command, AppState::from(seed))?;
    print!("{}", output);
    Ok(())
}
