pub mod formatting;
pub mod table;
pub mod views;

pub use formatting::{dash_if_empty, format_status};
pub use table::Table;
pub use views::{games_table, no_games_message, players_table, teams_table};

use crossterm::{
    execute,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
};
use std::io::Write;

/// Writes a table with its title in bold, body in the terminal's default
/// color.
pub fn print_table<W: Write>(out: &mut W, table: &Table) -> std::io::Result<()> {
    let rendered = table.render();
    let (title, body) = match table.title() {
        Some(_) => rendered.split_once('\n').unwrap_or((rendered.as_str(), "")),
        None => ("", rendered.as_str()),
    };

    if !title.is_empty() {
        execute!(
            out,
            SetAttribute(Attribute::Bold),
            Print(format!("{title}\n")),
            SetAttribute(Attribute::Reset)
        )?;
    }
    execute!(out, Print(format!("{body}\n")))
}

pub fn print_message<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    execute!(
        out,
        SetAttribute(Attribute::Bold),
        Print(format!("{message}\n")),
        SetAttribute(Attribute::Reset)
    )
}

pub fn print_error<W: Write>(out: &mut W, message: &str) -> std::io::Result<()> {
    execute!(
        out,
        SetForegroundColor(Color::Red),
        Print(format!("{message}\n")),
        ResetColor
    )
}
