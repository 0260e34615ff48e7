//! Password output: stdout or the system clipboard.

use std::io::{self, Write};

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::GeneratedPassword;
use crate::error::Error;

/// Write one password per line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    let mut buf = Vec::with_capacity(passwords.iter().map(|p| p.len() + 1).sum());
    for pass in passwords {
        buf.extend_from_slice(pass.as_str().as_bytes());
        buf.push(b'\n');
    }
    let res = out.write_all(&buf).and_then(|_| out.flush());
    buf.zeroize();
    res
}

/// Join passwords with newlines, the clipboard payload.
pub fn join(passwords: &[GeneratedPassword]) -> String {
    let mut joined = String::new();
    for (i, pass) in passwords.iter().enumerate() {
        if i > 0 {
            joined.push('\n');
        }
        joined.push_str(pass.as_str());
    }
    joined
}

pub struct Clipboard(ClipboardContext);

impl Clipboard {
    pub fn open() -> Result<Self, Error> {
        let ctx = ClipboardContext::new().map_err(|e| Error::Clipboard(e.to_string()))?;
        log::debug!("clipboard acquired");
        Ok(Self(ctx))
    }

    /// Copy `text`; the caller keeps ownership of its own buffer.
    pub fn copy(&mut self, text: &str) -> Result<(), Error> {
        let mut contents = text.to_string();
        let res = self
            .0
            .set_contents(contents.clone())
            .map_err(|e| Error::Clipboard(e.to_string()));
        contents.zeroize();
        res?;

        // Read back so the provider settles ownership, then wipe our copy
        if let Ok(mut retrieved) = self.0.get_contents() {
            retrieved.zeroize();
        }
        Ok(())
    }
}
