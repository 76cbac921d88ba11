use ansi_term::Colour;
use rusqlite::Connection;

use crate::db::log::load_log;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;

const OP_WIDTH_MAX: usize = 60;

/// Colour of an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "start-transfer" | "start-work" => Colour::Green,
        "end-work" | "end-transfer" => Colour::Cyan,
        "del" => Colour::Red,
        "export" | "chart" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// One formatted line of the audit log.
fn format_entry(
    id: i64,
    date: &str,
    operation: &str,
    target: &str,
    message: &str,
    widths: (usize, usize, usize),
) -> String {
    let (id_w, date_w, op_w) = widths;
    let color = color_for_operation(operation);

    let mut visible = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };
    if visible.chars().count() > OP_WIDTH_MAX {
        visible = visible.chars().take(OP_WIDTH_MAX - 3).collect::<String>() + "...";
    }

    // only the operation word is coloured
    let colored = match visible.split_once(' ') {
        Some((op, rest)) => format!("{} {}", color.paint(op), rest),
        None => color.paint(visible.as_str()).to_string(),
    };
    let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).chars().count()));

    format!("{id:>id_w$}: {date:<date_w$} | {colored}{padding} => {message}")
}

pub struct LogLogic;

impl LogLogic {
    pub fn lines(conn: &Connection) -> AppResult<Vec<String>> {
        let entries: Vec<(i64, String, String, String, String)> = load_log(conn)?
            .into_iter()
            .map(|(id, raw_date, op, target, msg)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, op, target, msg)
            })
            .collect();

        let id_w = entries
            .iter()
            .map(|e| e.0.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.1.len()).max().unwrap_or(10);
        let op_w = entries
            .iter()
            .map(|e| e.2.len() + if e.3.is_empty() { 0 } else { e.3.len() + 3 })
            .max()
            .unwrap_or(10)
            .min(OP_WIDTH_MAX);

        Ok(entries
            .iter()
            .map(|(id, date, op, target, msg)| {
                format_entry(*id, date, op, target, msg, (id_w, date_w, op_w))
            })
            .collect())
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        println!("📜 Internal log:\n");
        for line in Self::lines(conn)? {
            println!("{line}");
        }
        Ok(())
    }
}
