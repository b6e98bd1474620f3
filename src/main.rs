use clap::Parser;
use coven::cli::{Config, Runner, die};
use std::io;

fn main() {
    let config = Config::parse();
    env_logger::Builder::new()
        .filter_level(config.verbosity().log_level_filter())
        .init();

    let result = Runner::new(config).and_then(|runner| runner.run(&mut io::stdout().lock()));
    if let Err(err) = result {
        die(1, &format!("coven: {err}"));
    }
}
