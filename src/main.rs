//! pccop - declarative resource management for the Compute console

use clap::Parser;

mod cli;
mod client;
mod config;
mod convert;
mod error;
mod output;
mod resources;
mod schema;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let env = env_logger::Env::default().default_filter_or("warn");
    let mut builder = env_logger::Builder::from_env(env);
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Status => cli::status::run(&opts),
        Commands::Apply { file } => cli::apply::run(&file, &opts).await,
        Commands::Get { kind, id } => cli::get::get(kind, &id, &opts).await,
        Commands::Import { kind, id } => cli::get::import(kind, &id, &opts).await,
        Commands::Delete { kind, id, yes } => cli::delete::run(kind, &id, yes, &opts).await,
        Commands::Kinds => cli::kinds::run(opts.format),
        Commands::Completions { shell } => {
            cli::completions::run(shell);
            Ok(())
        }
    }
}
