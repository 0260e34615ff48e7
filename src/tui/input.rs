use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, read};
use std::io;

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// What a key press did to the line being edited.
#[derive(Debug, PartialEq, Eq)]
pub enum Edit {
    Continue,
    Submit,
    Cancel,
    Quit,
}

/// Single-line editor state; cursor is 1-based (1 = before first char).
#[derive(Debug)]
pub struct LineEditor {
    pub text: String,
    cursor: usize,
}

impl LineEditor {
    pub fn new(initial: &str) -> Self {
        Self {
            text: initial.to_string(),
            cursor: initial.chars().count() + 1,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn byte_at(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos - 1)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn apply(&mut self, key: KeyEvent) -> Edit {
        let len = self.text.chars().count();
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Quit,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Char('u') if ctrl => {
                self.text.clear();
                self.cursor = 1;
            }
            KeyCode::Backspace if self.cursor > 1 => {
                self.cursor -= 1;
                let at = self.byte_at(self.cursor);
                self.text.remove(at);
            }
            KeyCode::Delete if self.cursor <= len => {
                let at = self.byte_at(self.cursor);
                self.text.remove(at);
            }
            KeyCode::Left if self.cursor > 1 => self.cursor -= 1,
            KeyCode::Right if self.cursor <= len => self.cursor += 1,
            KeyCode::Home => self.cursor = 1,
            KeyCode::End => self.cursor = len + 1,
            KeyCode::Char(c) if !ctrl => {
                let at = self.byte_at(self.cursor);
                self.text.insert(at, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }
}

/// Read a line in raw mode. `Ok(None)` when the user cancels with Esc/Ctrl+Q.
/// Fails when raw mode cannot be entered or the terminal stops delivering keys.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> io::Result<Option<String>> {
    let mut editor = LineEditor::new(initial_value);
    let mut drawn_len = editor.text.chars().count();

    let mut guard = RawModeGuard::new()?;

    print!("{}: {}", prompt, editor.text);
    flush();

    let outcome = loop {
        match read() {
            Ok(Event::Key(key)) => {
                let edit = editor.apply(key);
                if edit != Edit::Continue {
                    break edit;
                }

                print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
                print!("\r{}: {}", prompt, editor.text);
                print!("\x1b[{}G", prompt.len() + 2 + editor.cursor());
                flush();
                drawn_len = editor.text.chars().count();
            }
            Ok(_) => {}
            Err(e) => {
                guard.release();
                println!();
                return Err(e);
            }
        }
    };

    guard.release();
    println!();

    match outcome {
        Edit::Quit => {
            // process::exit skips destructors
            reset_terminal();
            std::process::exit(0);
        }
        Edit::Cancel => Ok(None),
        _ => Ok(Some(editor.text)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_str(ed: &mut LineEditor, s: &str) {
        for c in s.chars() {
            assert_eq!(ed.apply(key(KeyCode::Char(c))), Edit::Continue);
        }
    }

    #[test]
    fn typing_and_backspace() {
        let mut ed = LineEditor::new("");
        type_str(&mut ed, "123");
        ed.apply(key(KeyCode::Backspace));
        assert_eq!(ed.text, "12");
        assert_eq!(ed.cursor(), 3);
    }

    #[test]
    fn insert_in_middle() {
        let mut ed = LineEditor::new("16");
        ed.apply(key(KeyCode::Left));
        type_str(&mut ed, "0");
        assert_eq!(ed.text, "106");
        ed.apply(key(KeyCode::Home));
        ed.apply(key(KeyCode::Delete));
        assert_eq!(ed.text, "06");
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut ed = LineEditor::new("ab");
        ed.apply(key(KeyCode::Right));
        assert_eq!(ed.cursor(), 3);
        ed.apply(key(KeyCode::Delete));
        assert_eq!(ed.text, "ab");
        ed.apply(key(KeyCode::Home));
        ed.apply(key(KeyCode::Backspace));
        assert_eq!(ed.text, "ab");
    }

    #[test]
    fn control_keys() {
        let mut ed = LineEditor::new("12");
        assert_eq!(ed.apply(ctrl('u')), Edit::Continue);
        assert_eq!(ed.text, "");
        assert_eq!(ed.apply(key(KeyCode::Enter)), Edit::Submit);
        assert_eq!(ed.apply(key(KeyCode::Esc)), Edit::Cancel);
        assert_eq!(ed.apply(ctrl('q')), Edit::Cancel);
        assert_eq!(ed.apply(ctrl('c')), Edit::Quit);
    }
}
