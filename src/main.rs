mod cli;
mod error;
mod fmt;
mod ledger;
mod logging;
mod models;
mod parser;
mod scanner;
mod settings;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let Cli {
        root,
        ledger,
        verbose,
        command,
    } = Cli::parse();
    dotenvy::dotenv().ok();
    logging::init_logging(verbose);

    let resolve = || settings::resolve(root.clone(), ledger.clone());

    let result = match command {
        Commands::Scan { format } => resolve()
            .require_root()
            .and_then(|config| cli::scan::run(&config, format)),
        Commands::Rebuild { format, output } => resolve()
            .require_root()
            .and_then(|config| cli::rebuild::run(&config, format, output)),
        Commands::Mark { name } => cli::mark::mark(&resolve().ledger_path, &name),
        Commands::Unmark { name } => cli::mark::unmark(&resolve().ledger_path, &name),
        Commands::Init => cli::init::run(root.clone(), ledger.clone()),
        Commands::Status => cli::status::run(&resolve()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
