use crate::db::store::Store;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete the work log recorded for `date`.
    /// The confirmation prompt lives in the command handler.
    pub fn apply(store: &mut dyn Store, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        let entry = store
            .find_entry_by_date(date)?
            .ok_or(AppError::NoEntryForDate(date_str.clone()))?;

        store.delete_entry(entry.id)?;

        info(format!("Deleted work log for {}", date_str));
        Ok(())
    }
}
