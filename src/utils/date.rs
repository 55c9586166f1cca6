use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let first_next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    first_next.and_then(|d| d.pred_opt())
}

/// Expand a period string into its inclusive first/last day pair.
///
/// Accepted forms:
/// - `YYYY-MM-DD` → that single day
/// - `YYYY-MM`    → the whole month
/// - `YYYY`       → the whole year
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    // single day
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // whole month
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{}-01", p), "%Y-%m-%d")
        && let Some(last) = last_day_of_month(first.year(), first.month())
    {
        return Ok((first, last));
    }

    // whole year
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}
