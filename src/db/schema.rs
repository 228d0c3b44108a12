pub(crate) const SCHEMA_V1: &str = r#"
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS transactions (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id     TEXT NOT NULL,
    amount      INTEGER NOT NULL CHECK (amount > 0),
    description TEXT NOT NULL,
    category    TEXT NOT NULL,
    timestamp   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_transactions_user_time ON transactions(user_id, timestamp);

CREATE TABLE IF NOT EXISTS budgets (
    id       INTEGER PRIMARY KEY AUTOINCREMENT,
    user_id  TEXT NOT NULL,
    month    TEXT NOT NULL,
    amount   INTEGER NOT NULL,
    UNIQUE(user_id, month)
);
"#;

pub(crate) const CURRENT_VERSION: i32 = 1;

/// `(from_version, sql)` steps applied to databases older than
/// `CURRENT_VERSION`.
pub(crate) const MIGRATIONS: &[(i32, &str)] = &[];
