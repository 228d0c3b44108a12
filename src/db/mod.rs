mod schema;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use std::path::Path;

use crate::models::{Budget, Category, Transaction};

/// What the bot needs from persistence. Every call is scoped to one user.
pub(crate) trait Storage {
    /// Persist `txn` and return its new row id.
    fn append(&self, user_id: &str, txn: &Transaction) -> Result<i64>;

    /// Transactions with `start <= timestamp <= end`, most recent first.
    fn query_range(
        &self,
        user_id: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Vec<Transaction>>;

    /// Every transaction of the user, most recent first.
    fn query_all(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Budget for `month` (a [`month_key`]), if one was set.
    fn get_budget(&self, user_id: &str, month: &str) -> Result<Option<i64>>;

    /// Set or replace the budget for `month`.
    fn set_budget(&self, user_id: &str, month: &str, amount: i64) -> Result<()>;
}

/// `"YYYY-MM"` key for the month containing `ts`.
pub(crate) fn month_key(ts: DateTime<Local>) -> String {
    ts.format("%Y-%m").to_string()
}

/// Timestamps are stored as fixed-width UTC RFC 3339 so text order matches
/// time order.
fn encode_timestamp(ts: DateTime<Local>) -> String {
    ts.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn decode_timestamp(raw: &str) -> rusqlite::Result<DateTime<Local>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|ts| ts.with_timezone(&Local))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(4, rusqlite::types::Type::Text, Box::new(e))
        })
}

fn transaction_from_row(row: &Row<'_>) -> rusqlite::Result<Transaction> {
    let id: i64 = row.get(0)?;
    let timestamp = decode_timestamp(&row.get::<_, String>(4)?)?;
    Ok(Transaction::new(
        row.get(1)?,
        row.get(2)?,
        Category::parse(&row.get::<_, String>(3)?),
        timestamp,
    )
    .with_id(id))
}

const SELECT_TRANSACTIONS: &str =
    "SELECT id, amount, description, category, timestamp FROM transactions";

pub(crate) struct Database {
    conn: Connection,
}

impl Database {
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")
            .context("Failed to set database pragmas")?;
        let mut db = Self { conn };
        db.migrate().context("Database migration failed")?;
        tracing::debug!(path = %path.display(), "database ready");
        Ok(db)
    }

    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&mut self) -> Result<()> {
        let has_version_table: bool = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
            [],
            |row| row.get(0),
        )?;

        if !has_version_table {
            self.conn.execute_batch(schema::SCHEMA_V1)?;
            self.conn.execute(
                "INSERT INTO schema_version (version) VALUES (?1)",
                params![schema::CURRENT_VERSION],
            )?;
            return Ok(());
        }

        let current: i32 = self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })
            .unwrap_or(0);

        for &(from_version, sql) in schema::MIGRATIONS {
            if current <= from_version {
                tracing::info!(from_version, "applying migration");
                self.conn.execute_batch(sql)?;
            }
        }

        if current < schema::CURRENT_VERSION {
            self.conn.execute(
                "UPDATE schema_version SET version = ?1",
                params![schema::CURRENT_VERSION],
            )?;
        }

        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn schema_version(&self) -> Result<i32> {
        Ok(self
            .conn
            .query_row("SELECT version FROM schema_version LIMIT 1", [], |row| {
                row.get(0)
            })?)
    }

    fn query_transactions(
        &self,
        sql: &str,
        args: &[&dyn rusqlite::ToSql],
    ) -> Result<Vec<Transaction>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt.query_map(args, transaction_from_row)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub(crate) fn transaction_count(&self, user_id: &str) -> Result<i64> {
        Ok(self.conn.query_row(
            "SELECT COUNT(*) FROM transactions WHERE user_id = ?1",
            params![user_id],
            |row| row.get(0),
        )?)
    }

    // ── Budgets ───────────────────────────────────────────────

    pub(crate) fn budget(&self, user_id: &str, month: &str) -> Result<Option<Budget>> {
        let result = self.conn.query_row(
            "SELECT user_id, month, amount FROM budgets WHERE user_id = ?1 AND month = ?2",
            params![user_id, month],
            |row| Ok(Budget::new(row.get(0)?, row.get(1)?, row.get(2)?)),
        );
        match result {
            Ok(b) => Ok(Some(b)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub(crate) fn upsert_budget(&self, budget: &Budget) -> Result<()> {
        self.conn.execute(
            "INSERT INTO budgets (user_id, month, amount)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(user_id, month) DO UPDATE SET amount = excluded.amount",
            params![budget.user_id, budget.month, budget.amount],
        )?;
        Ok(())
    }
}

impl Storage for Database {
    fn append(&self, user_id: &str, txn: &Transaction) -> Result<i64> {
        self.conn
            .execute(
                "INSERT INTO transactions (user_id, amount, description, category, timestamp)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    user_id,
                    txn.amount,
                    txn.description,
                    txn.category.as_str(),
                    encode_timestamp(txn.timestamp),
                ],
            )
            .context("Failed to append transaction")?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(user_id, id, amount = txn.amount, "transaction stored");
        Ok(id)
    }

    fn query_range(
        &self,
        user_id: &str,
        start: DateTime<Local>,
        end: DateTime<Local>,
    ) -> Result<Vec<Transaction>> {
        let sql = format!(
            "{SELECT_TRANSACTIONS} WHERE user_id = ?1 AND timestamp >= ?2 AND timestamp <= ?3
             ORDER BY timestamp DESC, id DESC"
        );
        self.query_transactions(
            &sql,
            &[&user_id, &encode_timestamp(start), &encode_timestamp(end)],
        )
        .context("Failed to query transactions in range")
    }

    fn query_all(&self, user_id: &str) -> Result<Vec<Transaction>> {
        let sql = format!(
            "{SELECT_TRANSACTIONS} WHERE user_id = ?1 ORDER BY timestamp DESC, id DESC"
        );
        self.query_transactions(&sql, &[&user_id])
            .context("Failed to query transactions")
    }

    fn get_budget(&self, user_id: &str, month: &str) -> Result<Option<i64>> {
        Ok(self.budget(user_id, month)?.map(|b| b.amount))
    }

    fn set_budget(&self, user_id: &str, month: &str, amount: i64) -> Result<()> {
        let budget = Budget::new(user_id.to_string(), month.to_string(), amount);
        self.upsert_budget(&budget)
            .context("Failed to save budget")
    }
}

#[cfg(test)]
mod tests;
