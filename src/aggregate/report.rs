use chrono::{DateTime, Local};
use rust_decimal::{Decimal, RoundingStrategy};

use super::{percentage, ranked, BudgetLevel, BudgetStatus, Stats};
use crate::models::{Summary, Transaction};

/// How many of the sampled transactions a report lists.
const REPORT_RECENT: usize = 3;

/// Format an amount as whole rupiah with dot-grouped thousands.
/// e.g. `1500000` → `"Rp1.500.000"`, `-5000` → `"-Rp5.000"`
pub(crate) fn format_currency(amount: impl Into<Decimal>) -> String {
    let val: Decimal = amount.into();
    let rounded = val.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let digits = rounded.abs().trunc().to_string();

    let grouped: String = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(".");

    if rounded < Decimal::ZERO {
        format!("-Rp{grouped}")
    } else {
        format!("Rp{grouped}")
    }
}

/// Day/month/year without zero padding, e.g. `10/3/2024`.
pub(crate) fn format_date(ts: &DateTime<Local>) -> String {
    ts.format("%-d/%-m/%Y").to_string()
}

fn transaction_line(txn: &Transaction) -> String {
    format!(
        "• {}: {} - {}",
        format_date(&txn.timestamp),
        format_currency(txn.amount),
        txn.description
    )
}

pub(crate) fn format_report(summary: &Summary) -> String {
    if summary.is_empty() {
        return format!(
            "📊 *Laporan {}*\n\n❌ Belum ada transaksi dalam periode ini.",
            summary.period_label
        );
    }

    let mut report = format!("📊 *Laporan {}*\n\n", summary.period_label);
    report.push_str(&format!(
        "💰 Total Pengeluaran: {}\n",
        format_currency(summary.total)
    ));
    report.push_str(&format!("📝 Jumlah Transaksi: {}\n", summary.count));
    report.push_str(&format!("📈 Rata-rata: {}\n", format_currency(summary.average)));
    report.push_str(&format!(
        "🏆 Kategori Terbesar: {}\n",
        summary.top_category_label()
    ));

    report.push_str("\n🏷️ *Breakdown Kategori:*\n");
    for (category, amount) in ranked(&summary.categories) {
        report.push_str(&format!(
            "• {category}: {} ({}%)\n",
            format_currency(amount),
            percentage(amount, summary.total)
        ));
    }

    if !summary.sample_transactions.is_empty() {
        report.push_str("\n📋 *Transaksi Terakhir:*\n");
        for txn in summary.sample_transactions.iter().take(REPORT_RECENT) {
            report.push_str(&format!("{}\n", transaction_line(txn)));
        }
    }

    report.trim_end().to_string()
}

/// All-time category ranking with medals for the top three.
pub(crate) fn format_category_analysis(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "📊 Belum ada data transaksi untuk dianalisis.".to_string();
    }

    let total: i64 = transactions.iter().map(|t| t.amount).sum();
    let sorted = ranked(&super::category_totals(transactions));

    let mut analysis = String::from("📊 *Analisis Kategori Pengeluaran*\n\n");
    for (index, (category, amount)) in sorted.iter().enumerate() {
        let medal = match index {
            0 => "🥇",
            1 => "🥈",
            2 => "🥉",
            _ => "•",
        };
        analysis.push_str(&format!(
            "{medal} {category}: {} ({}%)\n",
            format_currency(*amount),
            percentage(*amount, total)
        ));
    }

    if let Some((top, amount)) = sorted.first() {
        analysis.push_str(&format!(
            "\n💡 Kategori terbesar kamu adalah *{top}* dengan {}% dari total pengeluaran.",
            percentage(*amount, total)
        ));
    }

    analysis
}

pub(crate) fn format_statistics(stats: &Stats) -> String {
    if stats.count == 0 {
        return "📈 Belum ada transaksi yang tercatat.".to_string();
    }

    let mut out = String::from("📈 *Statistik Keuangan*\n\n");
    out.push_str(&format!("📝 Total transaksi: {}\n", stats.count));
    out.push_str(&format!("💰 Total pengeluaran: {}\n", format_currency(stats.total)));
    out.push_str(&format!("🏷️ Jumlah kategori: {}\n", stats.distinct_categories));
    out.push_str(&format!(
        "📅 Rata-rata per hari: {}",
        format_currency(stats.average_per_day)
    ));
    if let Some(first) = stats.first_day {
        out.push_str(&format!("\n🗓️ Sejak: {}", first.format("%-d/%-m/%Y")));
    }
    out
}

pub(crate) fn format_budget_status(status: &BudgetStatus) -> String {
    let mut out = String::from("🎯 *Budget Bulan Ini*\n\n");
    out.push_str(&format!("💼 Budget: {}\n", format_currency(status.budget)));
    out.push_str(&format!(
        "💸 Terpakai: {} ({}%)\n",
        format_currency(status.spent),
        status.percent_used
    ));
    out.push_str(&format!("💰 Sisa: {}\n", format_currency(status.remaining)));
    out.push('\n');
    out.push_str(match status.level {
        BudgetLevel::Safe => "✅ Pengeluaran kamu masih aman.",
        BudgetLevel::Warning => "⚠️ Hati-hati, budget kamu hampir habis!",
        BudgetLevel::Exceeded => "🚨 Budget bulan ini sudah terlampaui!",
    });
    out
}
