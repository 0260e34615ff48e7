//! CLI context - bundles the form, flags, and output handling.

use std::io;

use zeroize::Zeroize;

use super::{CliFlags, prompts, quiet};
use crate::error::Error;
use crate::form::FormState;
use crate::pass::{self, CharClass, ClassSet, SamplingPolicy, output};
use crate::rand::HwRng;
use crate::tui;

/// Application context for CLI mode.
pub struct Context {
    pub form: FormState,
    pub flags: CliFlags,
}

impl Context {
    /// Parse command-line arguments and fill the form from them.
    pub fn new(args: Vec<String>) -> Result<Self, Error> {
        let flags = super::parse(&args)?;
        let mut ctx = Self {
            form: FormState::default(),
            flags,
        };
        ctx.apply_flags();
        Ok(ctx)
    }

    pub fn run(&mut self) -> Result<(), Error> {
        if self.handle_info_flags() {
            return Ok(());
        }
        quiet::set(self.flags.quiet);

        if self.flags.interactive {
            return tui::run(std::mem::take(&mut self.form));
        }
        self.generate_output()
    }

    fn handle_info_flags(&self) -> bool {
        if self.flags.help {
            tui::print_help();
        } else if self.flags.version {
            println!("passform {}", env!("CARGO_PKG_VERSION"));
        }
        self.flags.has_info_flag()
    }

    /// Apply CLI flags to the form.
    fn apply_flags(&mut self) {
        let form = &mut self.form;

        if let Some(ref text) = self.flags.length {
            form.set_length(text);
        }

        if self.flags.all {
            form.classes = ClassSet::ALL;
        }
        if let Some(lower) = self.flags.lower {
            form.classes.set(CharClass::Lowercase, lower);
        }
        for (on, class) in [
            (self.flags.upper, CharClass::Uppercase),
            (self.flags.digits, CharClass::Digits),
            (self.flags.symbols, CharClass::Symbols),
        ] {
            if on {
                form.classes.set(class, true);
            }
        }

        if self.flags.legacy {
            form.policy = SamplingPolicy::Legacy;
        }
    }

    /// Generate passwords and print or copy them.
    pub fn generate_output(&mut self) -> Result<(), Error> {
        let request = self.form.request()?;
        let count = self.flags.number.unwrap_or(1).max(1);

        if request.classes.is_empty() {
            prompts::empty_pool();
        }
        if self.form.policy == SamplingPolicy::Legacy {
            prompts::legacy_sampling();
        }

        let mut rng = HwRng::new();
        let passwords: Vec<_> = (0..count)
            .map(|_| pass::generate(&request, self.form.policy, &mut rng))
            .collect();

        if self.flags.clipboard {
            match output::Clipboard::open() {
                Ok(mut clipboard) => {
                    let mut joined = output::join(&passwords);
                    let res = clipboard.copy(&joined);
                    joined.zeroize();
                    res?;
                    prompts::clipboard_copied(count);
                    return Ok(());
                }
                Err(e) => {
                    log::debug!("{e}");
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Ok(());
                    }
                }
            }
        }

        let stdout = io::stdout();
        output::write_lines(&mut stdout.lock(), &passwords)?;
        Ok(())
    }
}
