//! Display formatting for API values.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Render a `created_at` timestamp as e.g. `Jan 5, 2025`.
///
/// Accepts RFC 3339 and `YYYY-MM-DD HH:MM:SS`; anything else is returned
/// unchanged so an unexpected format still shows something useful.
pub fn format_created_at(raw: &str) -> String {
    let display = format_description!("[month repr:short] [day padding:none], [year]");
    parse_timestamp(raw.trim())
        .and_then(|ts| ts.format(display).ok())
        .unwrap_or_else(|| raw.to_owned())
}

fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(ts) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(PrimitiveDateTime::new(ts.date(), ts.time()));
    }
    let sql = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    PrimitiveDateTime::parse(raw, sql).ok()
}
