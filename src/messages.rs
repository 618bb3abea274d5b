//! Lines printed for the operator, and the process exit code.

use crate::errors::SeedError;
use crate::loader::InsertReport;
use crate::provisioner::IndexStatus;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;

pub fn index_status_line(index: &str, status: IndexStatus) -> String {
    let marker = match status {
        IndexStatus::Created => "✅",
        IndexStatus::AlreadyExists => "ℹ️",
    };
    format!("{} Index {} {}", marker, index, status.as_str())
}

/// Completion summary, followed by one line per rejected document.
pub fn insert_summary_lines(report: &InsertReport) -> Vec<String> {
    if !report.has_failures() {
        return vec![format!(
            "Bulk inserted successfully: {} documents into {} ({} ms)",
            report.succeeded, report.index, report.took_ms
        )];
    }

    let mut lines = vec![format!(
        "⚠️ Bulk insert finished: {} of {} documents indexed, {} rejected ({} ms)",
        report.succeeded, report.total, report.failed, report.took_ms
    )];
    lines.extend(report.failures().map(|item| {
        format!(
            "   {} -> {}",
            item.product_id,
            item.error.as_deref().unwrap_or("unknown error")
        )
    }));
    lines
}

pub fn failure_line(error: &SeedError) -> String {
    format!("Seeding failed: {}", error)
}

pub fn exit_code<T>(result: &Result<T, SeedError>) -> u8 {
    match result {
        Ok(_) => EXIT_SUCCESS,
        Err(_) => EXIT_FAILURE,
    }
}
