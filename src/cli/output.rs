//! Colored terminal output helpers.
//!
//! All user-facing output goes through these functions so we get
//! consistent styling across every command. Values meant for scripts
//! (slugs, ids, tokens) are printed bare with `println!` by the commands.

use comfy_table::{ContentArrangement, Table};
use console::style;

/// Print a green success message: "check_mark {msg}"
pub fn success(msg: &str) {
    eprintln!("{} {}", style("\u{2713}").green().bold(), msg);
}

/// Print a red error message: "x_mark {msg}"
pub fn error(msg: &str) {
    eprintln!("{} {}", style("\u{2717}").red().bold(), msg);
}

/// Print a yellow warning: "warning_sign {msg}"
pub fn warning(msg: &str) {
    eprintln!("{} {}", style("\u{26a0}").yellow().bold(), msg);
}

/// Print a dim tip/hint: "arrow {msg}"
pub fn tip(msg: &str) {
    eprintln!("{} {}", style("\u{2192}").dim(), style(msg).dim());
}

/// One row of the `config check` table.
#[derive(Debug, Clone)]
pub struct SecretStatus {
    pub label: &'static str,
    pub variable: String,
    pub state: String,
}

/// Print a table of secret variables and their state (never their values).
pub fn print_secret_status_table(rows: &[SecretStatus]) {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Secret", "Variable", "State"]);

    for row in rows {
        table.add_row(vec![
            row.label.to_string(),
            row.variable.clone(),
            row.state.clone(),
        ]);
    }

    println!("{table}");
}
