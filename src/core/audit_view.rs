use crate::core::listview::{AuditQuery, apply_audit_query};
use crate::db::store::Store;
use crate::errors::AppResult;
use crate::models::audit::AuditAction;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Restituisce il colore ANSI in base all'azione
fn color_for_action(action: AuditAction) -> Colour {
    match action {
        AuditAction::Create => Colour::Green,
        AuditAction::Update => Colour::Yellow,
        AuditAction::Delete => Colour::Red,
        AuditAction::Activate => Colour::Cyan,
        AuditAction::System => Colour::Purple,
    }
}

pub struct AuditLogic;

impl AuditLogic {
    /// Print one page of the audit trail, newest first, colored per
    /// action.
    pub fn print(store: &mut dyn Store, query: &AuditQuery) -> AppResult<()> {
        let rows = store.list_audit()?;
        let page = apply_audit_query(&rows, query);

        if page.rows.is_empty() {
            println!("No audit rows match.");
            return Ok(());
        }

        // Pre-render the plain columns to size them.
        let entries: Vec<(i64, String, AuditAction, String, String)> = page
            .rows
            .iter()
            .map(|r| {
                let ts = chrono::DateTime::parse_from_rfc3339(&r.timestamp)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| r.timestamp.clone());

                // Unica colonna action+entity+key
                let op_target = if r.entity_key.is_empty() {
                    format!("{} [{}]", r.action.to_db_str(), r.entity.to_db_str())
                } else {
                    format!(
                        "{} [{} {}]",
                        r.action.to_db_str(),
                        r.entity.to_db_str(),
                        r.entity_key
                    )
                };

                (r.id, ts, r.action, op_target, r.message.clone())
            })
            .collect();

        let op_w = entries
            .iter()
            .map(|(_, _, _, op, _)| op.len())
            .max()
            .unwrap_or(10)
            .min(60);

        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(1);
        let ts_w = entries
            .iter()
            .map(|(_, ts, _, _, _)| ts.len())
            .max()
            .unwrap_or(10);

        println!("📜 Audit trail:\n");

        for (id, ts, action, op_target, message) in entries {
            let color = color_for_action(action);

            // Truncate on the plain text, then recolor the action word.
            let truncated = if op_target.len() > 60 {
                let mut s = op_target.chars().take(57).collect::<String>();
                s.push_str("...");
                s
            } else {
                op_target
            };

            let colored = if let Some((op_word, rest)) = truncated.split_once(' ') {
                format!("{} {}", color.paint(op_word), rest)
            } else {
                color.paint(truncated.as_str()).to_string()
            };

            // Padding computed on the visible width, without ANSI codes.
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&colored).len()));

            println!(
                "{:>id_w$}: {:<ts_w$} | {}{} => {}",
                id,
                ts,
                colored,
                padding,
                message,
                id_w = id_w,
                ts_w = ts_w
            );
        }

        println!(
            "\nPage {} of {} ({} rows)",
            page.page, page.page_count, page.total_rows
        );

        Ok(())
    }
}
