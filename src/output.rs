use std::io::{self, Write};

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled, settings::Style};

pub const BANNER_RULE: &str = "========================================";
pub const BANNER_PROTOCOL: &str = "   [!] LOW-LEVEL PROTOCOL ACTIVE [!]   ";
pub const BANNER_TITLE: &str = "   GO-SERVICE.PL | DLG_REG_MODULE v1.0  ";

pub const SUCCESS_MESSAGE: &str = "SUCCESS: Application registered in system memory.";
pub const FAILURE_MESSAGE: &str = "ERROR: System access denied.";

/// Print the fixed module banner.
pub fn display_header(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{BANNER_RULE}")?;
    writeln!(out, "{}", BANNER_PROTOCOL.yellow().bold())?;
    writeln!(out, "{}", BANNER_TITLE.cyan())?;
    writeln!(out, "{BANNER_RULE}")
}

/// Print a prompt without a line break and flush so it shows before input is read.
pub fn prompt(out: &mut impl Write, label: &str) -> io::Result<()> {
    write!(out, "{label}: ")?;
    out.flush()
}

/// Print a `[DLG]`-tagged progress line
pub fn progress(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{} {message}", "[DLG]".bright_black())
}

/// Final status line for the register flow, preceded by a blank line
pub fn status(out: &mut impl Write, registered: bool) -> io::Result<()> {
    if registered {
        writeln!(out, "\n{}", SUCCESS_MESSAGE.green().bold())
    } else {
        writeln!(out, "\n{}", FAILURE_MESSAGE.red().bold())
    }
}

/// Print a table, or pretty JSON when `json` is set
pub fn print_table<T, R, F>(
    out: &mut impl Write,
    items: &[T],
    json: bool,
    to_row: F,
) -> crate::error::Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(items)?)?;
    } else {
        let rows: Vec<R> = items.iter().map(to_row).collect();
        let table = Table::new(rows).with(Style::rounded()).to_string();
        writeln!(out, "{table}")?;
    }
    Ok(())
}
