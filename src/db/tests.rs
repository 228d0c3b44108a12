#![allow(clippy::unwrap_used)]

use chrono::{TimeDelta, TimeZone};

use super::*;

fn at(d: u32, h: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 3, d, h, 0, 0).unwrap()
}

fn txn(amount: i64, desc: &str, category: Category, ts: DateTime<Local>) -> Transaction {
    Transaction::new(amount, desc.into(), category, ts)
}

// ── Schema ────────────────────────────────────────────────────

#[test]
fn test_fresh_database_is_current_version() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.schema_version().unwrap(), schema::CURRENT_VERSION);
}

#[test]
fn test_reopen_file_database_keeps_data() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("finbot.db");
    {
        let db = Database::open(&path).unwrap();
        db.append("u1", &txn(5_000, "parkir", Category::Transportasi, at(1, 9)))
            .unwrap();
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(db.schema_version().unwrap(), schema::CURRENT_VERSION);
    assert_eq!(db.query_all("u1").unwrap().len(), 1);
}

// ── Transactions ──────────────────────────────────────────────

#[test]
fn test_append_and_read_back() {
    let db = Database::open_in_memory().unwrap();
    let original = txn(15_000, "makan siang", Category::Makanan, at(10, 12));
    let id = db.append("u1", &original).unwrap();

    let all = db.query_all("u1").unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], original.with_id(id));
}

#[test]
fn test_append_assigns_increasing_ids() {
    let db = Database::open_in_memory().unwrap();
    let a = db.append("u1", &txn(1, "a", Category::Lainnya, at(1, 1))).unwrap();
    let b = db.append("u1", &txn(2, "b", Category::Lainnya, at(1, 1))).unwrap();
    assert!(b > a);
}

#[test]
fn test_query_all_most_recent_first() {
    let db = Database::open_in_memory().unwrap();
    db.append("u1", &txn(1, "old", Category::Lainnya, at(1, 9))).unwrap();
    db.append("u1", &txn(2, "new", Category::Lainnya, at(5, 9))).unwrap();
    db.append("u1", &txn(3, "mid", Category::Lainnya, at(3, 9))).unwrap();

    let descs: Vec<String> = db
        .query_all("u1")
        .unwrap()
        .into_iter()
        .map(|t| t.description)
        .collect();
    assert_eq!(descs, vec!["new", "mid", "old"]);
}

#[test]
fn test_same_instant_newest_row_first() {
    let db = Database::open_in_memory().unwrap();
    db.append("u1", &txn(1, "first", Category::Lainnya, at(2, 9))).unwrap();
    db.append("u1", &txn(2, "second", Category::Lainnya, at(2, 9))).unwrap();
    assert_eq!(db.query_all("u1").unwrap()[0].description, "second");
}

#[test]
fn test_query_range_is_inclusive() {
    let db = Database::open_in_memory().unwrap();
    db.append("u1", &txn(1, "before", Category::Lainnya, at(1, 8))).unwrap();
    db.append("u1", &txn(2, "start", Category::Lainnya, at(1, 9))).unwrap();
    db.append("u1", &txn(3, "end", Category::Lainnya, at(2, 9))).unwrap();
    db.append("u1", &txn(4, "after", Category::Lainnya, at(2, 10))).unwrap();

    let got = db.query_range("u1", at(1, 9), at(2, 9)).unwrap();
    let descs: Vec<&str> = got.iter().map(|t| t.description.as_str()).collect();
    assert_eq!(descs, vec!["end", "start"]);
}

#[test]
fn test_query_range_subsecond_bound() {
    let db = Database::open_in_memory().unwrap();
    let ts = at(4, 23) + TimeDelta::minutes(59) + TimeDelta::seconds(59);
    db.append("u1", &txn(1, "late", Category::Lainnya, ts)).unwrap();

    let end_of_day = at(4, 0) + TimeDelta::days(1) - TimeDelta::nanoseconds(1);
    assert_eq!(db.query_range("u1", at(4, 0), end_of_day).unwrap().len(), 1);
}

#[test]
fn test_users_are_isolated() {
    let db = Database::open_in_memory().unwrap();
    db.append("alice", &txn(1, "a", Category::Lainnya, at(1, 9))).unwrap();
    db.append("bob", &txn(2, "b", Category::Lainnya, at(1, 9))).unwrap();

    assert_eq!(db.query_all("alice").unwrap().len(), 1);
    assert_eq!(db.transaction_count("bob").unwrap(), 1);
    assert_eq!(db.transaction_count("carol").unwrap(), 0);
    assert!(db.query_range("carol", at(1, 0), at(2, 0)).unwrap().is_empty());
}

#[test]
fn test_unknown_stored_category_reads_as_lainnya() {
    let db = Database::open_in_memory().unwrap();
    db.conn
        .execute(
            "INSERT INTO transactions (user_id, amount, description, category, timestamp)
             VALUES ('u1', 100, 'x', 'crypto', ?1)",
            params![encode_timestamp(at(1, 9))],
        )
        .unwrap();
    assert_eq!(db.query_all("u1").unwrap()[0].category, Category::Lainnya);
}

#[test]
fn test_non_positive_amount_rejected_by_schema() {
    let db = Database::open_in_memory().unwrap();
    let bad = txn(0, "nothing", Category::Lainnya, at(1, 9));
    assert!(db.append("u1", &bad).is_err());
}

// ── Budgets ───────────────────────────────────────────────────

#[test]
fn test_budget_absent() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(db.get_budget("u1", "2024-03").unwrap(), None);
}

#[test]
fn test_set_budget_upserts_month() {
    let db = Database::open_in_memory().unwrap();
    let month = month_key(at(10, 12));
    assert_eq!(month, "2024-03");
    db.set_budget("u1", &month, 2_000_000).unwrap();
    db.set_budget("u1", &month, 1_500_000).unwrap();
    assert_eq!(db.get_budget("u1", &month).unwrap(), Some(1_500_000));
    assert_eq!(db.get_budget("u2", &month).unwrap(), None);
    assert_eq!(db.get_budget("u1", "2024-04").unwrap(), None);

    let stored = db.budget("u1", "2024-03").unwrap().unwrap();
    assert_eq!(stored.amount, 1_500_000);
}

#[test]
fn test_budgets_are_per_month() {
    let db = Database::open_in_memory().unwrap();
    db.upsert_budget(&Budget::new("u1".into(), "2024-01".into(), 100))
        .unwrap();
    db.upsert_budget(&Budget::new("u1".into(), "2024-02".into(), 200))
        .unwrap();
    assert_eq!(db.budget("u1", "2024-01").unwrap().unwrap().amount, 100);
    assert_eq!(db.budget("u1", "2024-02").unwrap().unwrap().amount, 200);
    assert!(db.budget("u1", "2024-03").unwrap().is_none());
}

#[test]
fn test_month_key() {
    assert_eq!(month_key(at(9, 12)), "2024-03");
}
