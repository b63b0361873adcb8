use clap::Parser;
use structcast_cli::{Cli, logging, run};

fn main() {
    logging::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
