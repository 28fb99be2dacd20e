use clap::Parser;

use style_guard::cli::{Cli, Commands};
use style_guard::commands::{run_check, run_explain, run_init};
use style_guard::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => run_check(args, &cli),
        Commands::Explain(args) => run_explain(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}
