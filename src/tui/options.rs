use crate::form::FormState;
use crate::pass::{CharClass, output::Clipboard};
use crate::rand::HwRng;
use crate::terminal::{clear, reset_terminal};
use std::io;

use super::{
    class_option, enter_prompt, get_editable_input, print_form, print_help, print_password_card,
};

use LoopAction::*;
pub enum LoopAction {
    Break,
    Continue,
}

/// Interactive form session. Holds what outlives a single redraw.
pub struct FormMenu {
    pub form: FormState,
    rng: HwRng,
    clipboard: Option<Clipboard>,
    message: Option<String>,
}

impl FormMenu {
    pub fn new(form: FormState) -> Self {
        Self {
            form,
            rng: HwRng::new(),
            clipboard: None,
            message: None,
        }
    }

    /// Redraw and read until the user quits. A terminal that stops
    /// delivering input ends the session with its error.
    pub fn run(&mut self) -> io::Result<()> {
        reset_terminal();

        loop {
            clear();
            print_form(&self.form, self.message.take().as_deref());
            print_password_card(&self.form);

            let input = match get_editable_input(enter_prompt(), "")? {
                Some(s) => s,
                None => continue,
            };

            if let Break = self.handle(input.trim()) {
                clear();
                return Ok(());
            }
        }
    }

    /// Apply one menu choice to the form.
    pub fn handle(&mut self, choice: &str) -> LoopAction {
        match choice {
            "" => self.submit(),
            "1" => self.edit_length(),
            "r" => self.form.reset(),
            "c" => self.copy(),
            "h" => {
                clear();
                print_help();
                if let Err(e) = get_editable_input("Press Enter to return", "") {
                    log::debug!("help prompt: {e}");
                }
            }
            "q" => return Break,
            other => match toggle_for(other) {
                Some(class) => self.form.toggle(class),
                None => self.message = Some(format!("Invalid option: {other}")),
            },
        }
        Continue
    }

    fn submit(&mut self) {
        if let Err(e) = self.form.submit(&mut self.rng) {
            self.message = Some(e.to_string());
        }
    }

    fn edit_length(&mut self) {
        let current = self.form.length_text.clone();
        match get_editable_input("Password Length", &current) {
            Ok(Some(text)) => self.form.set_length(&text),
            Ok(None) => {}
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    fn copy(&mut self) {
        let Some(pass) = self.form.password() else {
            self.message = Some("Nothing to copy yet, generate a password first".to_string());
            return;
        };

        if self.clipboard.is_none() {
            match Clipboard::open() {
                Ok(c) => self.clipboard = Some(c),
                Err(e) => {
                    self.message = Some(e.to_string());
                    return;
                }
            }
        }

        if let Some(clipboard) = self.clipboard.as_mut() {
            self.message = Some(match clipboard.copy(pass.as_str()) {
                Ok(()) => "*** -COPIED TO CLIPBOARD- ***".to_string(),
                Err(e) => e.to_string(),
            });
        }
    }
}

fn toggle_for(choice: &str) -> Option<CharClass> {
    CharClass::ALL
        .into_iter()
        .find(|c| choice == class_option(*c).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pass::ClassSet;

    #[test]
    fn numbered_choices_toggle_classes() {
        assert_eq!(toggle_for("2"), Some(CharClass::Lowercase));
        assert_eq!(toggle_for("3"), Some(CharClass::Uppercase));
        assert_eq!(toggle_for("4"), Some(CharClass::Digits));
        assert_eq!(toggle_for("5"), Some(CharClass::Symbols));
        assert_eq!(toggle_for("6"), None);
        assert_eq!(toggle_for("x"), None);
    }

    #[test]
    fn submit_with_length_generates() {
        let mut menu = FormMenu::new(FormState::default());
        menu.form.set_length("10");
        menu.handle("3");
        menu.handle("");
        assert!(menu.message.is_none());
        assert_eq!(menu.form.password().unwrap().len(), 10);
    }

    #[test]
    fn submit_without_length_shows_error() {
        let mut menu = FormMenu::new(FormState::default());
        assert!(matches!(menu.handle(""), Continue));
        assert_eq!(menu.message.as_deref(), Some("Length is required"));
        assert!(!menu.form.is_generated());
    }

    #[test]
    fn reset_and_toggles() {
        let mut menu = FormMenu::new(FormState::default());
        menu.handle("2");
        menu.handle("5");
        assert_eq!(menu.form.classes, ClassSet::only(CharClass::Symbols));
        menu.handle("r");
        assert_eq!(menu.form, FormState::default());
    }

    #[test]
    fn copy_before_generate_warns() {
        let mut menu = FormMenu::new(FormState::default());
        menu.handle("c");
        assert!(menu.message.unwrap().starts_with("Nothing to copy"));
    }

    #[test]
    fn invalid_and_quit() {
        let mut menu = FormMenu::new(FormState::default());
        menu.handle("zz");
        assert_eq!(menu.message.as_deref(), Some("Invalid option: zz"));
        assert!(matches!(menu.handle("q"), Break));
    }
}
