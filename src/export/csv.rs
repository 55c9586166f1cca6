use crate::core::metrics;
use crate::errors::AppResult;
use crate::models::entry::WorkLogEntry;
use crate::models::target::UphTarget;
use crate::utils::formatting::format_uph;
use csv::Writer;
use std::path::Path;

/// Scrive le righe di log in CSV nel file indicato.
///
/// Fixed columns first, then one `<name> units` / `<name> uph` pair per
/// defined target, so a sheet can compare the same day against every
/// goal. Quoting is the csv crate default: only fields containing a
/// comma, quote or newline are quoted.
pub fn write_csv(
    path: &Path,
    entries: &[WorkLogEntry],
    targets: &[UphTarget],
    decimals: usize,
) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    let mut header: Vec<String> = [
        "date",
        "start",
        "end",
        "break_min",
        "training_min",
        "hours_worked",
        "docs",
        "videos",
        "notes",
        "target",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    for t in targets {
        header.push(format!("{} units", t.name));
        header.push(format!("{} uph", t.name));
    }
    wtr.write_record(&header)?;

    for entry in entries {
        let target_name = entry
            .target_id
            .and_then(|id| targets.iter().find(|t| t.id == id))
            .map(|t| t.name.clone())
            .unwrap_or_default();

        let mut record = vec![
            entry.date_str(),
            entry.start_str(),
            entry.end_str(),
            entry.break_minutes.to_string(),
            entry.training_minutes.to_string(),
            format_uph(entry.hours_worked(), decimals),
            entry.docs_completed.to_string(),
            entry.videos_completed.to_string(),
            entry.notes.clone(),
            target_name,
        ];

        for t in targets {
            record.push(format_uph(metrics::units_completed(entry, t), decimals));
            record.push(format_uph(metrics::units_per_hour(entry, t), decimals));
        }

        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
