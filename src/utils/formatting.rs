//! Number and duration formatting shared by tables, status and exports.

/// Minutes as a human-readable duration.
///
/// `short` → `02:25`, otherwise `02h 25m`; `want_sign` prefixes `+`/`-`
/// for non-zero values (zero stays unsigned).
pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// Fixed-point rendering for UPH and unit counts; `decimals` comes from
/// the config file.
pub fn format_uph(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// Units rendering for optional values: `None` renders as `--`.
pub fn format_optional_uph(value: Option<f64>, decimals: usize) -> String {
    match value {
        Some(v) => format_uph(v, decimals),
        None => "--".to_string(),
    }
}

/// Fractional hours as `H.HH h`.
pub fn format_hours(hours: f64, decimals: usize) -> String {
    format!("{:.*} h", decimals, hours)
}
