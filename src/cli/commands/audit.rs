use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::audit_view::AuditLogic;
use crate::core::listview::AuditQuery;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::audit::{AuditAction, AuditEntity};
use crate::utils::date;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Audit {
        action,
        entity,
        filter,
        from,
        to,
        page,
    } = cmd
    {
        let mut query = AuditQuery::new(cfg.page_size_audit);

        query.action = match action.as_deref() {
            Some(code) => Some(
                AuditAction::from_code(code)
                    .ok_or_else(|| AppError::InvalidAuditFilter(code.to_string()))?,
            ),
            None => None,
        };
        query.entity = match entity.as_deref() {
            Some(code) => Some(
                AuditEntity::from_code(code)
                    .ok_or_else(|| AppError::InvalidAuditFilter(code.to_string()))?,
            ),
            None => None,
        };
        query.text = filter.clone().filter(|t| !t.trim().is_empty());
        query.from = parse_bound(from.as_ref())?;
        query.to = parse_bound(to.as_ref())?;
        if let Some(p) = page {
            query.page = *p;
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        AuditLogic::print(&mut store, &query)?;
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
