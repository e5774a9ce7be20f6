#![allow(non_snake_case)]
use RustedBalance::Examples::balance_examples::{balance_examples, run_session};
use RustedBalance::Utils::logger::init_logger;
use RustedBalance::balance::config::EngineConfig;
use RustedBalance::errors::BalanceError;
use std::env;
use std::io;

// usage: RustedBalance [example number] [config.toml]
// example 0 is the interactive session on stdin, run with the given config
fn main() -> Result<(), BalanceError> {
    let mut args = env::args().skip(1);
    let example = match args.next() {
        Some(arg) => arg
            .parse::<usize>()
            .map_err(|_| BalanceError::Config(format!("example must be a number, got {}", arg)))?,
        None => 0,
    };
    let config = match args.next() {
        Some(path) => EngineConfig::from_file(path)?,
        None => EngineConfig::default(),
    };
    init_logger(
        Some(config.log_level.as_deref().unwrap_or("warn")),
        config.log_file.as_deref(),
    )?;
    if example == 0 {
        run_session(config, io::stdin().lock(), io::stdout())?;
        Ok(())
    } else {
        balance_examples(example)
    }
}
