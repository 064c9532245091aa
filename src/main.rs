use std::process::exit;

use assistant_bot::prelude::{Cli, init_subscriber, run_app};
use clap::Parser;
use dotenv::dotenv;

fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    init_subscriber(&cli.log_level);

    if let Err(e) = run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
