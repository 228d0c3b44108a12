use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat};
use std::path::{Path, PathBuf};

use crate::db::Storage;

pub(crate) const HEADER: [&str; 5] = ["id", "timestamp", "amount", "category", "description"];

/// Write every transaction of `user_id` to `path`, oldest first. Returns the
/// number of rows written (header excluded).
pub(crate) fn write_csv(storage: &impl Storage, user_id: &str, path: &Path) -> Result<usize> {
    let mut txns = storage.query_all(user_id)?;
    txns.reverse();

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;
    wtr.write_record(HEADER)
        .context("Failed to write CSV header")?;

    for txn in &txns {
        wtr.write_record([
            txn.id.map(|id| id.to_string()).unwrap_or_default(),
            txn.timestamp.to_rfc3339_opts(SecondsFormat::Secs, false),
            txn.amount.to_string(),
            txn.category.as_str().to_string(),
            txn.description.clone(),
        ])
        .context("Failed to write CSV record")?;
    }
    wtr.flush().context("Failed to flush export file")?;

    tracing::info!(user_id, rows = txns.len(), path = %path.display(), "exported transactions");
    Ok(txns.len())
}

/// `<dir>/finbot-<user>-<YYYYmmdd-HHMMSS>.csv`. Characters that are awkward in
/// file names are dropped from the user id.
pub(crate) fn default_export_path(dir: &Path, user_id: &str, now: DateTime<Local>) -> PathBuf {
    let safe_user: String = user_id
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-' || *c == '_')
        .collect();
    let safe_user = if safe_user.is_empty() {
        "user".to_string()
    } else {
        safe_user
    };
    dir.join(format!(
        "finbot-{safe_user}-{}.csv",
        now.format("%Y%m%d-%H%M%S")
    ))
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
