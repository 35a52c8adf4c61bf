use crate::entropy::{Rand, Source};
use crate::pass::{alphabet, generate_into};
use crate::settings::{GeneratorConfig, Length};
use crate::terminal::{RawModeGuard, clear, print_error, reset_terminal};

use super::{PanelSlot, enter_prompt, get_editable_input, print_help, print_main_menu};

/// Everything the menu mutates between redraws.
pub struct Session {
    pub config: GeneratorConfig,
    rng: Rand,
}

impl Session {
    pub fn new(source: Source) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: Rand::new(source),
        }
    }

    pub fn source(&self) -> Source {
        self.rng.source()
    }

    pub fn pool_size(&self) -> usize {
        alphabet::pool(&self.config).len()
    }

    pub fn generate(&mut self, panel: &mut PanelSlot) -> Option<String> {
        generate_into(&self.config, &mut self.rng, panel)
            .err()
            .map(|e| format!("Failed to generate: {e}"))
    }

    /// Returns a notice when the value won't produce any characters.
    pub fn set_length(&mut self, raw: &str) -> Option<String> {
        self.config.set_length(raw);
        match self.config.length {
            Length::NotANumber => Some(format!("{raw:?} is not a number, passwords will be empty")),
            Length::Negative => Some(format!("{raw:?} is negative, passwords will be empty")),
            Length::Chars(_) => None,
        }
    }

    pub fn toggle_symbols_and_numbers(&mut self) {
        self.config.toggle_symbols_and_numbers();
    }

    /// Swap the random source. Config is kept.
    pub fn toggle_source(&mut self) {
        self.rng = Rand::new(self.source().toggled());
    }
}

pub enum LoopAction {
    Break,
    Continue(Option<String>),
}

pub fn gen_main_menu() {
    reset_terminal();

    if let Err(e) = RawModeGuard::new() {
        print_error(&format!("Terminal does not support raw mode: {e}"));
        return;
    }

    let mut session = Session::new(Source::default());
    let mut panel = PanelSlot::default();
    let mut notice = session.generate(&mut panel);

    loop {
        clear();
        print_main_menu(&session, &panel, notice.as_deref());

        let input = match get_editable_input(enter_prompt(), "") {
            Some(s) => s,
            None => {
                notice = None;
                continue;
            }
        };

        match menu_options(input.trim(), &mut session, &mut panel) {
            LoopAction::Break => break,
            LoopAction::Continue(n) => notice = n,
        }
    }

    clear();
}

fn menu_options(choice: &str, session: &mut Session, panel: &mut PanelSlot) -> LoopAction {
    match choice {
        "" => LoopAction::Continue(session.generate(panel)),
        "1" => {
            let current = session.config.length.to_string();
            match get_editable_input("Enter new password length", &current) {
                Some(raw) => LoopAction::Continue(session.set_length(&raw)),
                None => LoopAction::Continue(None),
            }
        }
        "2" => {
            session.toggle_symbols_and_numbers();
            LoopAction::Continue(None)
        }
        "3" => {
            session.toggle_source();
            LoopAction::Continue(None)
        }
        "4" | "h" | "help" => {
            clear();
            print_help();
            let _ = get_editable_input("Press Enter to return", "");
            LoopAction::Continue(None)
        }
        "5" | "q" | "quit" => LoopAction::Break,
        other => LoopAction::Continue(Some(format!("Invalid selection: {other:?}"))),
    }
}
