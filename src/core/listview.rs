//! Filter / sort / paginate engine for the log and audit list views.
//!
//! Everything here is pure over in-memory slices; the CLI commands load
//! rows through the store and hand them to these functions. The page
//! returned is always a contiguous slice of the filtered-and-sorted
//! whole.

use crate::core::metrics;
use crate::models::audit::{AuditAction, AuditEntity, AuditLogEntry};
use crate::models::entry::WorkLogEntry;
use crate::models::target::UphTarget;
use chrono::NaiveDate;
use clap::ValueEnum;
use std::cmp::Ordering;

// ----------------------------------------------------------------------------
// Sort state
// ----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Two-state cycle: repeated selection of the same column flips the
    /// direction and never lands on "unsorted".
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    fn apply(self, ord: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Sortable columns of the work-log list. `Uph` is synthetic: computed
/// per row from the row's own target before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogColumn {
    #[default]
    Date,
    Start,
    End,
    Hours,
    Docs,
    Videos,
    Uph,
    Notes,
}

// ----------------------------------------------------------------------------
// Queries
// ----------------------------------------------------------------------------

/// The complete view state of the work-log list: filters, sort and page.
#[derive(Debug, Clone)]
pub struct LogQuery {
    pub text: Option<String>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub sort_col: LogColumn,
    pub sort_dir: SortDirection,
    pub page: usize,
    pub page_size: usize,
}

impl LogQuery {
    pub fn new(page_size: usize) -> Self {
        LogQuery {
            text: None,
            from: None,
            to: None,
            sort_col: LogColumn::default(),
            sort_dir: SortDirection::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Select a sort column. Re-selecting the active column flips the
    /// direction; a new column starts ascending. Resets to page 1.
    pub fn toggle_sort(&mut self, col: LogColumn) {
        if self.sort_col == col {
            self.sort_dir = self.sort_dir.toggled();
        } else {
            self.sort_col = col;
            self.sort_dir = SortDirection::Ascending;
        }
        self.page = 1;
    }

    /// Replace the free-text filter. Resets to page 1.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text.filter(|t| !t.trim().is_empty());
        self.page = 1;
    }

    /// Replace the inclusive date-range bound. Resets to page 1.
    pub fn set_range(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.from = from;
        self.to = to;
        self.page = 1;
    }
}

/// View state of the audit list: free text plus equality filters on the
/// categorical columns.
#[derive(Debug, Clone)]
pub struct AuditQuery {
    pub text: Option<String>,
    pub action: Option<AuditAction>,
    pub entity: Option<AuditEntity>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub page: usize,
    pub page_size: usize,
}

impl AuditQuery {
    pub fn new(page_size: usize) -> Self {
        AuditQuery {
            text: None,
            action: None,
            entity: None,
            from: None,
            to: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }
}

// ----------------------------------------------------------------------------
// Pagination
// ----------------------------------------------------------------------------

/// One rendered page plus the numbers the footer needs.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub rows: Vec<T>,
    pub page: usize,
    pub page_count: usize,
    pub total_rows: usize,
}

/// Slice out one 1-indexed page, clamping the requested page into
/// `[1, ceil(total/size)]`. An empty input still yields page 1 of 1.
pub fn paginate<T: Clone>(rows: &[T], page: usize, page_size: usize) -> Page<T> {
    let size = page_size.max(1);
    let total = rows.len();
    let page_count = total.div_ceil(size).max(1);
    let page = page.clamp(1, page_count);
    let start = (page - 1) * size;
    let rows = rows.iter().skip(start).take(size).cloned().collect();
    Page {
        rows,
        page,
        page_count,
        total_rows: total,
    }
}

// ----------------------------------------------------------------------------
// Work-log view
// ----------------------------------------------------------------------------

/// The target a row's metrics are computed against: the entry's own
/// reference when it resolves, else the globally active target.
pub fn resolve_target<'a>(
    entry: &WorkLogEntry,
    targets: &'a [UphTarget],
) -> Option<&'a UphTarget> {
    entry
        .target_id
        .and_then(|id| targets.iter().find(|t| t.id == id))
        .or_else(|| targets.iter().find(|t| t.is_active))
}

/// Per-row average UPH, `None` when no target resolves.
pub fn row_uph(entry: &WorkLogEntry, targets: &[UphTarget]) -> Option<f64> {
    resolve_target(entry, targets).map(|t| metrics::units_per_hour(entry, t))
}

fn in_date_range(date: NaiveDate, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    if let Some(from) = from
        && date < from
    {
        return false;
    }
    if let Some(to) = to
        && date > to
    {
        return false;
    }
    true
}

fn entry_matches(entry: &WorkLogEntry, targets: &[UphTarget], query: &LogQuery) -> bool {
    if !in_date_range(entry.date, query.from, query.to) {
        return false;
    }
    let Some(text) = &query.text else {
        return true;
    };
    let needle = text.to_lowercase();
    let uph = row_uph(entry, targets)
        .map(|v| format!("{:.2}", v))
        .unwrap_or_default();
    let haystacks = [
        entry.date_str(),
        entry.start_str(),
        entry.end_str(),
        entry.docs_completed.to_string(),
        entry.videos_completed.to_string(),
        entry.notes.clone(),
        uph,
    ];
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

fn compare_entries(
    a: &WorkLogEntry,
    b: &WorkLogEntry,
    targets: &[UphTarget],
    col: LogColumn,
) -> Ordering {
    let ord = match col {
        LogColumn::Date => a.date.cmp(&b.date),
        LogColumn::Start => a.start_time.cmp(&b.start_time),
        LogColumn::End => a.end_time.cmp(&b.end_time),
        LogColumn::Hours => a.hours_worked().total_cmp(&b.hours_worked()),
        LogColumn::Docs => a.docs_completed.cmp(&b.docs_completed),
        LogColumn::Videos => a.videos_completed.cmp(&b.videos_completed),
        LogColumn::Uph => {
            let ua = row_uph(a, targets).unwrap_or(0.0);
            let ub = row_uph(b, targets).unwrap_or(0.0);
            ua.total_cmp(&ub)
        }
        LogColumn::Notes => a.notes.to_lowercase().cmp(&b.notes.to_lowercase()),
    };
    // Calendar date breaks ties so equal keys still render in a stable,
    // predictable order.
    ord.then_with(|| a.date.cmp(&b.date))
}

/// Filter, sort and paginate the work-log collection in one pass.
pub fn apply_log_query(
    entries: &[WorkLogEntry],
    targets: &[UphTarget],
    query: &LogQuery,
) -> Page<WorkLogEntry> {
    let mut rows: Vec<WorkLogEntry> = entries
        .iter()
        .filter(|e| entry_matches(e, targets, query))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        query
            .sort_dir
            .apply(compare_entries(a, b, targets, query.sort_col))
    });
    paginate(&rows, query.page, query.page_size)
}

// ----------------------------------------------------------------------------
// Audit view
// ----------------------------------------------------------------------------

fn audit_date(row: &AuditLogEntry) -> Option<NaiveDate> {
    row.timestamp.get(..10)?.parse().ok()
}

fn audit_matches(row: &AuditLogEntry, query: &AuditQuery) -> bool {
    if let Some(action) = query.action
        && row.action != action
    {
        return false;
    }
    if let Some(entity) = query.entity
        && row.entity != entity
    {
        return false;
    }
    if (query.from.is_some() || query.to.is_some())
        && !audit_date(row).is_some_and(|d| in_date_range(d, query.from, query.to))
    {
        return false;
    }
    let Some(text) = &query.text else {
        return true;
    };
    let needle = text.to_lowercase();
    let haystacks = [
        row.timestamp.clone(),
        row.action.to_db_str().to_string(),
        row.entity.to_db_str().to_string(),
        row.entity_key.clone(),
        row.message.clone(),
    ];
    haystacks
        .iter()
        .any(|h| h.to_lowercase().contains(&needle))
}

/// Filter and paginate the audit trail, newest first (descending by
/// timestamp, id as tie-breaker).
pub fn apply_audit_query(rows: &[AuditLogEntry], query: &AuditQuery) -> Page<AuditLogEntry> {
    let mut rows: Vec<AuditLogEntry> = rows
        .iter()
        .filter(|r| audit_matches(r, query))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        b.timestamp
            .cmp(&a.timestamp)
            .then_with(|| b.id.cmp(&a.id))
    });
    paginate(&rows, query.page, query.page_size)
}
