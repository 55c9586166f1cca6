use crate::db::pool::DbPool;
use crate::utils::colors::{colorize_optional, CYAN, GREEN, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) DATABASE FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) ROW COUNTS
    //
    let logs: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM work_logs", [], |row| row.get(0))?;
    let targets: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM targets", [], |row| row.get(0))?;
    let audit_rows: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM audit_log", [], |row| row.get(0))?;

    println!("{}• Work logs:{} {}{}{}", CYAN, RESET, GREEN, logs, RESET);
    println!("{}• Targets:{} {}{}{}", CYAN, RESET, GREEN, targets, RESET);
    println!(
        "{}• Audit rows:{} {}{}{}",
        CYAN, RESET, GREEN, audit_rows, RESET
    );

    //
    // 3) ACTIVE TARGET
    //
    let active: Option<String> = pool
        .conn
        .query_row(
            "SELECT name FROM targets WHERE is_active = 1 LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_active = colorize_optional(active.as_deref().unwrap_or("--"));
    println!("{}• Active target:{} {}", CYAN, RESET, fmt_active);

    //
    // 4) DATE RANGE
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_logs ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM work_logs ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = colorize_optional(first_date.as_deref().unwrap_or("--"));
    let fmt_last = colorize_optional(last_date.as_deref().unwrap_or("--"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 5) AVERAGE COUNTS PER LOGGED DAY
    //
    if logs > 0 {
        let avg_docs: f64 = pool.conn.query_row(
            "SELECT AVG(docs_completed) FROM work_logs",
            [],
            |row| row.get(0),
        )?;
        let avg_videos: f64 = pool.conn.query_row(
            "SELECT AVG(videos_completed) FROM work_logs",
            [],
            |row| row.get(0),
        )?;

        println!("{}• Average docs/day:{} {:.2}", CYAN, RESET, avg_docs);
        println!("{}• Average videos/day:{} {:.2}", CYAN, RESET, avg_videos);
    }

    println!();
    Ok(())
}
