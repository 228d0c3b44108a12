mod cli;
mod tui;

pub(crate) use cli::{as_cli, shellexpand};
pub(crate) use tui::as_tui;

use anyhow::{Context, Result};
use chrono::Local;
use std::path::Path;

use crate::bot::{Bot, Reply};
use crate::db::Storage;
use crate::export;

/// Render a reply for display, writing the CSV file first when the bot asked
/// for an export.
pub(crate) fn reply_text(bot: &Bot<impl Storage>, reply: Reply, export_dir: &Path) -> String {
    match reply {
        Reply::Text(text) => text,
        Reply::Export { user_id } => {
            let path = export::default_export_path(export_dir, &user_id, Local::now());
            match export_to(bot.storage(), &user_id, &path) {
                Ok(count) => format!(
                    "📁 {count} transaksi diekspor ke:\n{}",
                    path.display()
                ),
                Err(e) => {
                    tracing::error!(user = %user_id, "export failed: {e:#}");
                    format!("❌ Export gagal: {e:#}")
                }
            }
        }
    }
}

/// Write the user's transactions to `path`, creating its directory if needed.
pub(crate) fn export_to(storage: &impl Storage, user_id: &str, path: &Path) -> Result<usize> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
    }
    export::write_csv(storage, user_id, path)
}
