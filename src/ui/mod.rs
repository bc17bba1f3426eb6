//! CLI UI utilities: status lines, spinner, banners and catalog tables.
//!
//! Card rendering lives in [`card`]; everything here is the chrome around it.

pub mod card;

use comfy_table::{presets, Attribute, Cell, Table};
use owo_colors::OwoColorize;
use std::time::Duration;

use crate::models::{Edition, Language, LastSearched};
use crate::utils::is_terminal;

/// Status icons for different operations.
pub fn status_icon(status: Status) -> &'static str {
    match status {
        Status::Success => "✓",
        Status::Error => "✗",
        Status::Warning => "⚠",
        Status::Info => "ℹ",
    }
}

/// Status types for colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Success,
    Error,
    Warning,
    Info,
}

/// Format a status line, coloured when `color` is set.
pub fn status_line(status: Status, msg: &str, color: bool) -> String {
    let icon = status_icon(status);
    if !color {
        return format!("{} {}", icon, msg);
    }
    match status {
        Status::Success => format!("{} {}", icon.green().bold(), msg.green()),
        Status::Error => format!("{} {}", icon.red().bold(), msg.red()),
        Status::Warning => format!("{} {}", icon.yellow().bold(), msg),
        Status::Info => format!("{} {}", icon.cyan().bold(), msg),
    }
}

/// Print a styled status message to stdout.
pub fn print_status(status: Status, msg: &str) {
    println!("{}", status_line(status, msg, is_terminal()));
}

/// Print the friendly error box.
pub fn print_error(msg: &str) {
    print_status(Status::Error, msg);
}

/// Print the "last searched" confirmation.
pub fn print_last_searched(last: &LastSearched) {
    print_status(Status::Success, &last.to_string());
}

/// Welcome banner for interactive mode.
pub fn print_banner() {
    println!();
    println!("{}", format!("ProphetSays v{}", crate::VERSION).green().bold());
    println!("{}", "Hadith Search".bold());
    println!(
        "{}",
        "Type a hadith number and press Enter. :help lists commands.".dimmed()
    );
    println!();
}

/// Print a section header.
pub fn print_section(title: &str) {
    println!();
    println!("{}", format!("━━━ {} ━━━", title).bold().cyan());
}

/// Commands understood by interactive mode
pub const INTERACTIVE_HELP: &[(&str, &str)] = &[
    ("<number>", "Look up a hadith in the current edition and language"),
    (":edition <code>", "Select an edition (see `editions`)"),
    (":language <code>", "Select a language (eng, urd, ara)"),
    (":show", "Show the current selection and result"),
    (":help", "Show this help"),
    (":quit", "Leave interactive mode"),
];

/// Print the interactive-mode help.
pub fn print_interactive_help() {
    print_section("Commands");
    for (command, description) in INTERACTIVE_HELP {
        println!("  {:<18} {}", command.cyan(), description);
    }
    println!();
}

/// Table of known editions, marking `selected`.
pub fn editions_table(selected: Option<Edition>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Code", "Edition", ""]);
    for edition in Edition::ALL {
        let mark = if Some(edition) == selected { "●" } else { "" };
        table.add_row(vec![
            Cell::new(edition.code()).add_attribute(Attribute::Bold),
            Cell::new(edition.label()),
            Cell::new(mark),
        ]);
    }
    table
}

/// Table of known languages, marking `selected`.
pub fn languages_table(selected: Option<Language>) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.set_header(vec!["Code", "Language", ""]);
    for language in Language::ALL {
        let mark = if Some(language) == selected { "●" } else { "" };
        table.add_row(vec![
            Cell::new(language.code()).add_attribute(Attribute::Bold),
            Cell::new(language.label()),
            Cell::new(mark),
        ]);
    }
    table
}

/// Attribution line printed after results.
pub fn footer_text() -> String {
    let year = chrono::Local::now().format("%Y");
    format!(
        "© {} ProphetSays · Powered by Hadith API (https://github.com/fawazahmed0/hadith-api)",
        year
    )
}

/// Print the attribution footer.
pub fn print_footer() {
    println!("{}", footer_text().dimmed());
}

/// Loading spinner shown while a lookup is in flight.
pub struct Spinner {
    pb: indicatif::ProgressBar,
}

impl Spinner {
    /// Create a new spinner with the given message.
    pub fn new(msg: &str) -> Self {
        let pb = indicatif::ProgressBar::new_spinner();
        pb.set_style(
            indicatif::ProgressStyle::with_template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| indicatif::ProgressStyle::default_spinner())
                .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));

        Self { pb }
    }

    /// A spinner that draws nothing (quiet mode, pipes).
    pub fn hidden() -> Self {
        Self {
            pb: indicatif::ProgressBar::hidden(),
        }
    }

    /// Stop and erase the spinner line.
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
