use crate::form::FormState;
use crate::pass::{CharClass, MAX_LENGTH, MIN_LENGTH};
use crate::terminal::{
    DIM, GREEN, RESET, UNDERLINE, box_bottom, box_line, box_line_center, box_opt, box_top,
    calculate_entropy, entropy_strength, flush, print_error, print_rule,
};

pub fn enter_prompt() -> &'static str {
    "Enter option (or press Enter to generate)"
}

fn checkbox(on: bool) -> String {
    if on {
        format!("{GREEN}[x]{RESET}")
    } else {
        "[ ]".to_string()
    }
}

/// Menu number for each class toggle.
pub fn class_option(class: CharClass) -> u8 {
    match class {
        CharClass::Lowercase => 2,
        CharClass::Uppercase => 3,
        CharClass::Digits => 4,
        CharClass::Symbols => 5,
    }
}

pub fn print_form(form: &FormState, error: Option<&str>) {
    box_top("Password Generator");
    box_line_center("Esc/CTRL+Q: cancel input | CTRL+U: clear input");
    box_line("");
    let length = if form.length_text.is_empty() {
        format!("{DIM}Ex. 8{RESET}")
    } else {
        form.length_text.clone()
    };
    box_line(&format!("  1) Password Length: {length}"));
    for class in [
        CharClass::Lowercase,
        CharClass::Uppercase,
        CharClass::Digits,
        CharClass::Symbols,
    ] {
        box_line(&format!(
            "  {}) {} {}",
            class_option(class),
            checkbox(form.classes.contains(class)),
            class.label()
        ));
    }
    box_line("");
    print_rule();
    box_line_center("Enter) generate | r) reset | c) copy | h) help | q) quit");
    box_bottom();

    match error {
        Some(msg) => print_error(msg),
        None => println!(),
    }
    flush();
}

pub fn print_password_card(form: &FormState) {
    let Some(pass) = form.password() else {
        return;
    };
    let pool = form.pool_size();
    let bits = calculate_entropy(pass.len(), pool);

    box_top("Password");
    box_line("");
    if pass.is_empty() {
        let note = if pool == 0 {
            "(empty: no character classes selected)"
        } else {
            "(empty)"
        };
        box_line_center(&format!("{DIM}{note}{RESET}"));
    } else {
        box_line_center(pass.as_str());
    }
    box_line("");
    box_line_center(&format!(
        "{:.1} bits ({}) • Charset: {} chars",
        bits,
        entropy_strength(bits),
        pool
    ));
    box_line_center(&format!("{DIM}Press c to copy{RESET}"));
    box_bottom();
    println!();
}

pub fn print_help() {
    box_top("Passform");
    box_line_center("Password generator form");
    box_line("");
    box_line("MODES:");
    box_line("  1) Interactive: Run without arguments. Fill in the form");
    box_line("     and press Enter to generate.");
    box_line("  2) Client: Pass flags (e.g., -l 12 -U -D) to print a");
    box_line("     password without the form.");
    box_line("");
    box_line("USAGE:");
    box_line("  passform [OPTIONS]");
    box_line("");
    box_line(&format!("{UNDERLINE}Password{RESET}:"));
    box_opt(
        "  -l, --length <N>",
        &format!("Characters per password, {MIN_LENGTH} to {MAX_LENGTH}"),
    );
    box_opt("      --lower", "Include lowercase letters (default)");
    box_opt("      --no-lower", "Leave lowercase letters out");
    box_opt("  -U, --upper", "Include uppercase letters");
    box_opt("  -D, --digits", "Include numbers");
    box_opt("  -S, --symbols", "Include symbols !@#$%^&*()_+");
    box_opt("  -a, --all", "Include every character class");
    box_opt("  -n, --number <N>", "How many passwords to generate");
    box_opt(
        "      --legacy",
        "Legacy sampling: a position may come out empty, so passwords can be shorter",
    );
    box_line("");
    box_line(&format!("{UNDERLINE}Output{RESET}:"));
    box_opt("  -b, --board", "Copy to clipboard instead of printing");
    box_opt("  -q, --quiet", "Suppress warnings and confirmations");
    box_opt("  -i, --interactive", "Open the form, prefilled from flags");
    box_line("");
    box_line(&format!("{UNDERLINE}Info{RESET}:"));
    box_opt("  -h, --help", "Display this help message");
    box_opt("  -v, --version", "Display version");
    box_line("");
    box_line("EXAMPLES:");
    box_line("  passform -l 8 -U --no-lower   8 uppercase letters");
    box_line("  passform -l 16 -a             16 chars, every class");
    box_line("  passform -l 12 -D -n 3 -b     3 passwords to clipboard");
    box_line("");
    box_bottom();
    println!();
}
