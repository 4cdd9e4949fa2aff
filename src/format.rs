//! Display formatting helpers for the listing and the detail modal.

use chrono::NaiveDate;

/// Format a whole-unit amount as grouped currency with zero decimal places
/// (e.g. `format_currency(50000)` -> "$50,000").
pub fn format_currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${}", grouped)
}

/// Whole days from `today` until `deadline`, floored at zero for past
/// deadlines.
pub fn days_remaining(deadline: NaiveDate, today: NaiveDate) -> i64 {
    (deadline - today).num_days().max(0)
}

/// Human-readable countdown for the detail modal.
pub fn deadline_label(deadline: NaiveDate, today: NaiveDate) -> String {
    if deadline < today {
        return "Deadline passed".to_string();
    }
    match days_remaining(deadline, today) {
        0 => "Due today".to_string(),
        1 => "1 day left".to_string(),
        n => format!("{} days left", n),
    }
}
