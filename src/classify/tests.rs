#![allow(clippy::unwrap_used)]

use super::rules::IntentRules;
use super::*;

fn classifier() -> RuleClassifier {
    RuleClassifier::new(&RuleTable::default()).unwrap()
}

fn intent_of(text: &str) -> Intent {
    classifier().classify(text).intent
}

// ── Intent routing ────────────────────────────────────────────

#[test]
fn test_greetings() {
    for text in ["Halo", "hai", "Hello", "selamat pagi", "apa kabar?"] {
        assert_eq!(intent_of(text), Intent::Greeting, "{text}");
    }
}

#[test]
fn test_greeting_needs_whole_word() {
    assert_ne!(intent_of("hitung pengeluaran"), Intent::Greeting);
}

#[test]
fn test_record_transaction_forms() {
    for text in [
        "/catat 15000 makan siang",
        "catat 20000 bensin motor",
        "bayar makan 12000",
        "beli buku 25000 rupiah",
    ] {
        assert_eq!(intent_of(text), Intent::RecordTransaction, "{text}");
    }
}

#[test]
fn test_record_with_bad_amount_still_routes_to_record() {
    let c = classifier();
    let result = c.classify("/catat abc makan");
    assert_eq!(result.intent, Intent::RecordTransaction);
    assert_eq!(result.captures.field("amount", 0), Some("abc"));

    let bare = c.classify("/catat");
    assert_eq!(bare.intent, Intent::RecordTransaction);
    assert_eq!(bare.captures.len(), 0);
}

#[test]
fn test_catatan_is_not_a_record() {
    assert_eq!(intent_of("catatan saya hilang"), Intent::Unknown);
}

#[test]
fn test_summary_intents() {
    assert_eq!(intent_of("berapa duit yang sudah kuhabiskan hari ini?"), Intent::DailySummary);
    assert_eq!(intent_of("pengeluaran hari ini"), Intent::DailySummary);
    assert_eq!(intent_of("total today"), Intent::DailySummary);
    assert_eq!(intent_of("pengeluaran bulan ini"), Intent::MonthlySummary);
    assert_eq!(intent_of("laporan bulan ini"), Intent::MonthlySummary);
    assert_eq!(intent_of("berapa total this month"), Intent::MonthlySummary);
    assert_eq!(intent_of("berapa pengeluaran 3 bulan terakhir?"), Intent::PeriodSummary);
    assert_eq!(intent_of("laporan 2 minggu"), Intent::PeriodSummary);
    assert_eq!(intent_of("summary 10 days"), Intent::PeriodSummary);
    assert_eq!(intent_of("3 bulan terakhir"), Intent::PeriodSummary);
}

#[test]
fn test_other_intents() {
    assert_eq!(intent_of("saldo saya"), Intent::BalanceCheck);
    assert_eq!(intent_of("help"), Intent::Help);
    assert_eq!(intent_of("/help"), Intent::Help);
    assert_eq!(intent_of("apa yang bisa kamu lakukan"), Intent::Help);
    assert_eq!(intent_of("kategori terbesar"), Intent::CategoryAnalysis);
    assert_eq!(intent_of("analisis kategori"), Intent::CategoryAnalysis);
    assert_eq!(intent_of("/export"), Intent::Export);
    assert_eq!(intent_of("download csv"), Intent::Export);
    assert_eq!(intent_of("/stats"), Intent::Statistics);
    assert_eq!(intent_of("rata-rata per hari"), Intent::Statistics);
}

#[test]
fn test_set_budget_checked_before_budget_alert() {
    let c = classifier();
    let set = c.classify("set budget 2000000");
    assert_eq!(set.intent, Intent::SetBudget);
    assert_eq!(set.captures.field("amount", 0), Some("2000000"));

    assert_eq!(intent_of("/setbudget 1500000"), Intent::SetBudget);
    assert_eq!(intent_of("budget saya"), Intent::BudgetAlert);
    assert_eq!(intent_of("pengingat budget"), Intent::BudgetAlert);
}

#[test]
fn test_unknown_has_empty_captures() {
    let result = classifier().classify("blablabla random text");
    assert_eq!(result.intent, Intent::Unknown);
    assert_eq!(result.captures.len(), 0);
}

// ── Matching details ──────────────────────────────────────────

#[test]
fn test_case_insensitive() {
    assert_eq!(intent_of("PENGELUARAN HARI INI"), Intent::DailySummary);
    assert_eq!(intent_of("/CATAT 5000 Parkir"), Intent::RecordTransaction);
}

#[test]
fn test_original_text_is_untrimmed() {
    let result = classifier().classify("   /catat 15000 makan siang  ");
    assert_eq!(result.intent, Intent::RecordTransaction);
    assert_eq!(result.original_text, "   /catat 15000 makan siang  ");
    assert_eq!(result.captures.field("desc", 1), Some("makan siang"));
}

#[test]
fn test_named_groups_override_position() {
    let result = classifier().classify("bayar makan 12000");
    assert_eq!(result.captures.get(0), Some("bayar"));
    assert_eq!(result.captures.field("amount", 0), Some("12000"));
    assert_eq!(result.captures.field("desc", 1), Some("makan"));
}

#[test]
fn test_period_captures() {
    let result = classifier().classify("berapa pengeluaran 3 bulan terakhir?");
    assert_eq!(result.captures.field("amount", 0), Some("3"));
    assert_eq!(result.captures.field("unit", 1), Some("bulan"));
}

#[test]
fn test_table_order_decides_ambiguity() {
    // Same text, two tables with opposite priority.
    let budget_first = RuleTable {
        intents: vec![
            IntentRules::new(Intent::BudgetAlert, &["budget"]),
            IntentRules::new(Intent::SetBudget, &[r"set\s+budget\s+(\d+)"]),
        ],
    };
    let c = RuleClassifier::new(&budget_first).unwrap();
    assert_eq!(c.classify("set budget 100").intent, Intent::BudgetAlert);

    let set_first = RuleTable {
        intents: budget_first.intents.iter().rev().cloned().collect(),
    };
    let c = RuleClassifier::new(&set_first).unwrap();
    assert_eq!(c.classify("set budget 100").intent, Intent::SetBudget);
}

#[test]
fn test_patterns_within_intent_in_declared_order() {
    let table = RuleTable {
        intents: vec![IntentRules::new(
            Intent::PeriodSummary,
            &[r"(\d+)\s+hari", r"(\d+)\s+(\w+)"],
        )],
    };
    let c = RuleClassifier::new(&table).unwrap();
    let result = c.classify("5 hari");
    assert_eq!(result.captures.len(), 1);
    assert_eq!(result.captures.get(0), Some("5"));
    assert_eq!(result.captures.get(1), None);
}

#[test]
fn test_invalid_pattern_reports_intent() {
    let table = RuleTable {
        intents: vec![IntentRules::new(Intent::Help, &["[unclosed"])],
    };
    let err = RuleClassifier::new(&table).err().unwrap();
    assert!(err.to_string().contains("help"));
}

#[test]
fn test_intent_display() {
    assert_eq!(Intent::RecordTransaction.to_string(), "record_transaction");
    assert_eq!(Intent::Unknown.to_string(), "unknown");
}
