use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::listview::{self, LogQuery, SortDirection};
use crate::core::metrics;
use crate::db::store::{SqliteStore, Store};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::utils::date;
use crate::utils::formatting::{format_optional_uph, format_uph};
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        filter,
        from,
        to,
        sort,
        desc,
        page,
        page_size,
    } = cmd
    {
        let mut query = LogQuery::new(page_size.unwrap_or(cfg.page_size_logs));
        query.set_text(filter.clone());
        query.set_range(parse_bound(from.as_ref())?, parse_bound(to.as_ref())?);
        query.sort_col = *sort;
        query.sort_dir = if *desc {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        // Requested page goes in last: filter/sort changes reset it to 1.
        if let Some(p) = page {
            query.page = *p;
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        let entries = store.list_entries()?;
        let targets = store.list_targets()?;

        let result = listview::apply_log_query(&entries, &targets, &query);

        if result.total_rows == 0 {
            info("No work logs match.");
            return Ok(());
        }

        let decimals = cfg.decimal_places;
        let mut table = Table::new(vec![
            "Date", "Start", "End", "Hours", "Docs", "Videos", "Units", "UPH", "Target", "Notes",
        ]);

        for entry in &result.rows {
            let target = listview::resolve_target(entry, &targets);
            let units = target.map(|t| metrics::units_completed(entry, t));
            let uph = listview::row_uph(entry, &targets);
            table.add_row(vec![
                entry.date_str(),
                entry.start_str(),
                entry.end_str(),
                format_uph(entry.hours_worked(), decimals),
                entry.docs_completed.to_string(),
                entry.videos_completed.to_string(),
                format_optional_uph(units, decimals),
                format_optional_uph(uph, decimals),
                target.map(|t| t.name.clone()).unwrap_or_default(),
                entry.notes.clone(),
            ]);
        }

        println!("{}", table.render());
        println!(
            "Page {} of {} ({} rows)",
            result.page, result.page_count, result.total_rows
        );
    }

    Ok(())
}

fn parse_bound(s: Option<&String>) -> AppResult<Option<NaiveDate>> {
    match s {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.clone())),
        None => Ok(None),
    }
}
