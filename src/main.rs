use std::env;
use std::process;

mod cli;
mod error;
mod exits;
mod form;
mod pass;
mod rand;
mod terminal;
mod tui;

use form::FormState;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    exits::install_handlers();
    exits::disable_core_dumps();

    let args: Vec<String> = env::args().collect();
    log::debug!("entropy source: {}", rand::entropy_source());

    let result = if args.len() == 1 {
        tui::run(FormState::default())
    } else {
        cli::run(args)
    };

    if let Err(e) = result {
        cli::prompts::error(&e.to_string());
        process::exit(e.exit_code());
    }
}
