mod context;
mod flags;
mod parse;
pub mod prompts;
mod quiet;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

use crate::error::Error;

/// Run CLI mode with the raw process arguments.
pub fn run(args: Vec<String>) -> Result<(), Error> {
    Context::new(args)?.run()
}
