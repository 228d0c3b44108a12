#![allow(clippy::unwrap_used)]

use chrono::{Local, TimeZone};

use super::*;

// ── Category ──────────────────────────────────────────────────

#[test]
fn test_category_parse() {
    assert_eq!(Category::parse("makanan"), Category::Makanan);
    assert_eq!(Category::parse("MAKANAN"), Category::Makanan);
    assert_eq!(Category::parse(" transportasi "), Category::Transportasi);
    assert_eq!(Category::parse("pendidikan"), Category::Pendidikan);
    assert_eq!(Category::parse("hiburan"), Category::Hiburan);
    assert_eq!(Category::parse("kebutuhan"), Category::Kebutuhan);
    assert_eq!(Category::parse("kesehatan"), Category::Kesehatan);
    assert_eq!(Category::parse("lainnya"), Category::Lainnya);
}

#[test]
fn test_category_parse_free_text_is_lainnya() {
    assert_eq!(Category::parse("groceries"), Category::Lainnya);
    assert_eq!(Category::parse(""), Category::Lainnya);
}

#[test]
fn test_category_roundtrip() {
    for c in Category::all() {
        let s = c.as_str();
        assert_eq!(*c, Category::parse(s), "Roundtrip failed for {s}");
    }
}

#[test]
fn test_category_display() {
    assert_eq!(format!("{}", Category::Kesehatan), "kesehatan");
    assert_eq!(Category::all().len(), 7);
}

// ── Period ────────────────────────────────────────────────────

#[test]
fn test_period_unit_synonyms() {
    assert_eq!(PeriodUnit::parse("hari"), (PeriodUnit::Days, true));
    assert_eq!(PeriodUnit::parse("Days"), (PeriodUnit::Days, true));
    assert_eq!(PeriodUnit::parse("minggu"), (PeriodUnit::Weeks, true));
    assert_eq!(PeriodUnit::parse("week"), (PeriodUnit::Weeks, true));
    assert_eq!(PeriodUnit::parse("bulan"), (PeriodUnit::Months, true));
    assert_eq!(PeriodUnit::parse("months"), (PeriodUnit::Months, true));
}

#[test]
fn test_period_unit_unknown_defaults_to_days() {
    assert_eq!(PeriodUnit::parse("tahun"), (PeriodUnit::Days, false));
}

#[test]
fn test_period_label() {
    assert_eq!(Period::new(3, PeriodUnit::Months).label(), "3 bulan terakhir");
    assert_eq!(Period::new(7, PeriodUnit::Days).label(), "7 hari terakhir");
    assert_eq!(Period::new(2, PeriodUnit::Weeks).label(), "2 minggu terakhir");
}

// ── Summary ───────────────────────────────────────────────────

#[test]
fn test_summary_empty() {
    let s = Summary::empty("harian".into());
    assert!(s.is_empty());
    assert_eq!(s.total, 0);
    assert_eq!(s.average, 0);
    assert_eq!(s.top_category_label(), NO_DATA);
    assert!(s.categories.is_empty());
}

#[test]
fn test_summary_top_category_label() {
    let mut s = Summary::empty("bulanan".into());
    s.categories = vec![(Category::Makanan, 25_000), (Category::Hiburan, 5_000)];
    s.top_category = Some(Category::Makanan);
    assert_eq!(s.top_category_label(), "makanan");
}

// ── Transaction / Budget ──────────────────────────────────────

#[test]
fn test_transaction_new_has_no_id() {
    let ts = Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
    let txn = Transaction::new(15_000, "makan siang".into(), Category::Makanan, ts);
    assert!(txn.id.is_none());
    assert_eq!(txn.with_id(7).id, Some(7));
}

#[test]
fn test_budget_new() {
    let budget = Budget::new("user-1".into(), "2024-01".into(), 2_000_000);
    assert_eq!(budget.user_id, "user-1");
    assert_eq!(budget.month, "2024-01");
    assert_eq!(budget.amount, 2_000_000);
}

#[test]
fn test_user_with_name() {
    let user = User::new("6281234").with_name("Budi");
    assert_eq!(user.id, "6281234");
    assert_eq!(user.name.as_deref(), Some("Budi"));
    assert!(User::new("x").name.is_none());
}
