use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::table::strip_ansi;
use ansi_term::Colour;

const OP_TARGET_MAX: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" | "register" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "schedule" => Colour::Cyan,
        "login" | "logout" => Colour::Fixed(244),
        "migration_applied" => Colour::Purple,
        "backup" | "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// "op (target)", cut to [`OP_TARGET_MAX`] visible characters, with only
/// the operation word colored.
fn render_op_target(operation: &str, target: &str) -> String {
    let plain = if target.is_empty() {
        operation.to_string()
    } else {
        format!("{operation} ({target})")
    };

    let visible = if plain.chars().count() > OP_TARGET_MAX {
        let mut s: String = plain.chars().take(OP_TARGET_MAX - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    let color = color_for_operation(operation);
    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_log(&pool.conn)?;

        if entries.is_empty() {
            println!("📜 Internal log is empty.");
            return Ok(());
        }

        let rendered: Vec<(i64, String, String, String)> = entries
            .into_iter()
            .map(|(id, raw_date, operation, target, message)| {
                let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or(raw_date);
                (id, date, render_op_target(&operation, &target), message)
            })
            .collect();

        let id_w = rendered
            .iter()
            .map(|(id, ..)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = rendered
            .iter()
            .map(|(_, date, ..)| date.len())
            .max()
            .unwrap_or(10);
        let op_w = rendered
            .iter()
            .map(|(_, _, op, _)| strip_ansi(op).chars().count())
            .max()
            .unwrap_or(10);

        println!("📜 Internal log:\n");

        for (id, date, op_target, message) in rendered {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&op_target).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id,
                date,
                op_target,
                padding,
                message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}
