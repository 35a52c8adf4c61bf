use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Single-line editor state, kept apart from the terminal so it can be tested.
#[derive(Debug, Default)]
struct LineEditor {
    chars: Vec<char>,
    /// 0-based, 0..=chars.len()
    cursor: usize,
}

enum Edit {
    Continue,
    Submit,
    Cancel,
    Interrupt,
}

impl LineEditor {
    fn new(initial: &str) -> Self {
        let chars: Vec<char> = initial.chars().collect();
        let cursor = chars.len();
        Self { chars, cursor }
    }

    fn apply(&mut self, key: KeyEvent) -> Edit {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => return Edit::Interrupt,
            KeyCode::Char('q') if ctrl => return Edit::Cancel,
            KeyCode::Char('u') if ctrl => {
                self.chars.clear();
                self.cursor = 0;
            }
            KeyCode::Esc => return Edit::Cancel,
            KeyCode::Enter => return Edit::Submit,
            KeyCode::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.chars.remove(self.cursor);
            }
            KeyCode::Delete if self.cursor < self.chars.len() => {
                self.chars.remove(self.cursor);
            }
            KeyCode::Left if self.cursor > 0 => self.cursor -= 1,
            KeyCode::Right if self.cursor < self.chars.len() => self.cursor += 1,
            KeyCode::Home => self.cursor = 0,
            KeyCode::End => self.cursor = self.chars.len(),
            KeyCode::Char(c) if !ctrl => {
                self.chars.insert(self.cursor, c);
                self.cursor += 1;
            }
            _ => {}
        }
        Edit::Continue
    }

    fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Read one line with in-place editing. `None` when the user cancels with
/// Esc or Ctrl+Q, or when the terminal can't be read.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    let mut editor = LineEditor::new(initial_value);

    let mut guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return None,
    };

    print!("{}: {}", prompt, editor.text());
    flush();
    let mut last_len = editor.chars.len();

    let submitted = loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break false,
        };

        match editor.apply(key) {
            Edit::Continue => {}
            Edit::Submit => break true,
            Edit::Cancel => break false,
            Edit::Interrupt => {
                // process::exit skips destructors
                reset_terminal();
                println!();
                std::process::exit(130);
            }
        }

        print!("\r{}: {}", prompt, " ".repeat(last_len + 1));
        print!("\r{}: {}", prompt, editor.text());
        print!("\x1b[{}G", prompt.chars().count() + 3 + editor.cursor);
        flush();
        last_len = editor.chars.len();
    };

    guard.release();
    println!();
    submitted.then(|| editor.text())
}
