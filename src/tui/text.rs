use super::{PanelSlot, Session};
use crate::terminal::{
    DIM, GREEN, RED, RESET, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, entropy_strength, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter menu option (or press Enter to generate)"
}

fn on_off(flag: bool) -> String {
    if flag {
        format!("{GREEN}on{RESET}")
    } else {
        format!("{RED}off{RESET}")
    }
}

pub fn print_main_menu(session: &Session, panel: &PanelSlot, notice: Option<&str>) {
    let config = &session.config;
    let pool = session.pool_size();
    let bits = calculate_entropy(config.length.count(), pool);

    box_top("pwgen");
    box_opt("  1)", &format!("Length: {}", config.length));
    box_opt(
        "  2)",
        &format!(
            "Symbols & numbers: {}",
            on_off(config.include_symbols_and_numbers)
        ),
    );
    box_opt("  3)", &format!("Random source: {}", session.source().name()));
    box_opt("  4)", "Help");
    box_opt("  5)", "Quit");
    print_rule();
    box_line(&format!(
        "{DIM}Pool: {pool} chars • Entropy: {bits:.1} bits ({}){RESET}",
        entropy_strength(bits)
    ));
    box_bottom();
    println!();

    panel.draw();
    println!();

    if let Some(msg) = notice {
        print_error(msg);
        println!();
    }
}

pub fn print_help() {
    box_top("Help");
    box_line_center("Password generator");
    box_line("");
    box_line("Press Enter on the menu to generate a new password.");
    box_line("");
    box_line("  1) Length: typed like a web form field. \"12abc\" reads as");
    box_line("     12. Text with no leading digits, or a negative number,");
    box_line("     produces an empty password.");
    box_line("  2) Symbols & numbers: when off, only A-Z and a-z are used.");
    box_line("  3) Random source: SmallRng is fast but not cryptographic.");
    box_line("     OsRng reads the system random source for every draw.");
    box_line("");
    box_line("Line editing: arrows, Home/End, Ctrl+U clears, Esc cancels.");
    box_line("");
    box_line("From the shell:  pwgen -l 20 -n 3 --letters-only");
    box_line("                 pwgen --help");
    box_bottom();
    println!();
}
