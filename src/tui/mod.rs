//! Interactive password form.

mod input;
mod options;
mod text;

pub use input::*;
pub use options::*;
pub use text::*;

use crate::error::Error;
use crate::form::FormState;
use crate::terminal::stdin_is_tty;

/// Run the interactive form, starting from `form`.
pub fn run(form: FormState) -> Result<(), Error> {
    ensure_terminal(stdin_is_tty())?;
    FormMenu::new(form).run()?;
    Ok(())
}

/// The form reads keys in raw mode, so stdin has to be a terminal.
fn ensure_terminal(is_tty: bool) -> Result<(), Error> {
    if is_tty {
        Ok(())
    } else {
        log::debug!("stdin is not a terminal, not starting the form");
        Err(Error::NoTerminal)
    }
}
