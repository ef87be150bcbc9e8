use clap::Parser;

use music_scan::cli::{Cli, Commands};
use music_scan::commands::{run_config, run_init, run_inventory, run_scan};
use music_scan::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match &cli.command {
        Commands::Scan(args) => run_scan(args, &cli),
        Commands::Inventory(args) => run_inventory(args, &cli),
        Commands::Init(args) => run_init(args, &cli),
        Commands::Config(args) => run_config(args, &cli),
    };

    std::process::exit(exit_code);
}
