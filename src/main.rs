use clap::Parser;

use datespan::cli::{Cli, Commands};
use datespan::commands;

fn main() {
    let cli = Cli::parse();

    let exit_code = match &cli.command {
        Commands::Age(args) => commands::age::run(args, &cli),
        Commands::Span(args) => commands::span::run(args, &cli),
        Commands::Facts(args) => commands::facts::run(args, &cli),
        Commands::Init(args) => commands::init::run(args),
        Commands::Config(args) => commands::config::run(args, &cli),
    };

    std::process::exit(exit_code);
}
