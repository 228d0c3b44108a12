use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::level_filters::LevelFilter;

use crate::models::User;

const DB_FILE: &str = "finbot.db";
const LOG_FILE: &str = "finbot.log";
const EXPORT_DIR: &str = "exports";
const DEFAULT_USER: &str = "local";

/// Where things live and who is talking. Defaults come from the platform data
/// directory; `FINBOT_*` environment variables override them.
#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) db_path: PathBuf,
    pub(crate) export_dir: PathBuf,
    pub(crate) log_path: PathBuf,
    pub(crate) user: User,
    pub(crate) log_level: LevelFilter,
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let proj_dirs = directories::ProjectDirs::from("com", "finbot", "FinBot")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Self::from_lookup(data_dir, |key| std::env::var(key).ok())
    }

    /// Build a config rooted at `data_dir`, reading overrides through `lookup`.
    pub(crate) fn from_lookup(
        data_dir: &Path,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let log_level = match var("FINBOT_LOG") {
            Some(level) => level
                .trim()
                .parse::<LevelFilter>()
                .with_context(|| format!("Invalid FINBOT_LOG level: {level}"))?,
            None => LevelFilter::WARN,
        };

        let user_id = var("FINBOT_USER")
            .or_else(|| var("USER"))
            .unwrap_or_else(|| DEFAULT_USER.to_string());
        let mut user = User::new(user_id.trim());
        if let Some(name) = var("FINBOT_NAME") {
            user = user.with_name(name.trim());
        }

        Ok(Self {
            db_path: var("FINBOT_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(DB_FILE)),
            export_dir: var("FINBOT_EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| data_dir.join(EXPORT_DIR)),
            log_path: data_dir.join(LOG_FILE),
            user,
            log_level,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
