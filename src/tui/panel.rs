//! The boxed password display in the menu screen.

use std::io;

use zeroize::Zeroizing;

use crate::pass::{Password, output::DisplaySlot};
use crate::terminal::{BOLD, DIM, RESET, box_bottom, box_line, box_top, chunk_for_box};

/// Holds the most recent password until the screen is redrawn.
#[derive(Default)]
pub struct PanelSlot {
    shown: Option<Zeroizing<String>>,
}

impl PanelSlot {
    pub fn current(&self) -> Option<&str> {
        self.shown.as_deref().map(String::as_str)
    }

    pub fn draw(&self) {
        box_top("Password");
        match self.current() {
            None => box_line(&format!("{DIM}[Enter] to generate{RESET}")),
            Some("") => box_line(&format!("{DIM}(empty){RESET}")),
            Some(pass) => {
                for chunk in chunk_for_box(pass) {
                    box_line(&format!("{BOLD}{chunk}{RESET}"));
                }
            }
        }
        box_bottom();
    }
}

impl DisplaySlot for PanelSlot {
    fn clear(&mut self) -> io::Result<()> {
        self.shown = None;
        Ok(())
    }

    fn show(&mut self, password: &Password) -> io::Result<()> {
        self.shown = Some(Zeroizing::new(password.as_str().to_owned()));
        Ok(())
    }
}
