mod report;

pub(crate) use report::{
    format_budget_status, format_category_analysis, format_currency, format_report,
    format_statistics,
};
#[cfg(test)]
pub(crate) use report::format_date;

use chrono::{DateTime, Datelike, Local, Months, NaiveDate, NaiveTime, TimeDelta, TimeZone};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{Category, Period, PeriodUnit, Summary, Transaction};

/// How many recent transactions a summary keeps.
pub(crate) const SAMPLE_SIZE: usize = 5;

pub(crate) const DAILY_LABEL: &str = "harian";
pub(crate) const MONTHLY_LABEL: &str = "bulanan";

/// A closed time interval; both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub(crate) start: DateTime<Local>,
    pub(crate) end: DateTime<Local>,
}

impl Window {
    pub(crate) fn new(start: DateTime<Local>, end: DateTime<Local>) -> Self {
        Self { start, end }
    }

    /// Local midnight of `now`'s day up to, but excluding, the next midnight.
    pub(crate) fn daily(now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let start = local_midnight(today);
        let next = today
            .succ_opt()
            .map_or(start + TimeDelta::days(1), local_midnight);
        Self::new(start, next - TimeDelta::nanoseconds(1))
    }

    /// First calendar day of `now`'s month through the whole last day.
    pub(crate) fn monthly(now: DateTime<Local>) -> Self {
        let today = now.date_naive();
        let first = today.with_day(1).unwrap_or(today);
        let start = local_midnight(first);
        let end = first
            .checked_add_months(Months::new(1))
            .map_or(now, |next| local_midnight(next) - TimeDelta::nanoseconds(1));
        Self::new(start, end)
    }

    /// `[now - period, now]`. Months use calendar arithmetic. A lookback that
    /// leaves chrono's range starts at the Unix epoch.
    pub(crate) fn relative(period: Period, now: DateTime<Local>) -> Self {
        let n = period.amount;
        let start = match period.unit {
            PeriodUnit::Days => now.checked_sub_signed(TimeDelta::days(i64::from(n))),
            PeriodUnit::Weeks => now.checked_sub_signed(TimeDelta::weeks(i64::from(n))),
            PeriodUnit::Months => now.checked_sub_months(Months::new(n)),
        };
        let start = start.unwrap_or_else(|| Local.timestamp_opt(0, 0).earliest().unwrap_or(now));
        Self::new(start, now)
    }

    pub(crate) fn contains(&self, ts: DateTime<Local>) -> bool {
        ts >= self.start && ts <= self.end
    }
}

fn local_midnight(date: NaiveDate) -> DateTime<Local> {
    let naive = date.and_time(NaiveTime::MIN);
    naive
        .and_local_timezone(Local)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&naive))
}

/// `round(numerator / denominator)` with halves rounded up. Zero denominator
/// yields zero.
pub(crate) fn round_ratio(numerator: i64, denominator: i64) -> i64 {
    if denominator == 0 {
        return 0;
    }
    (Decimal::from(numerator) / Decimal::from(denominator))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

pub(crate) fn percentage(part: i64, whole: i64) -> i64 {
    if whole == 0 {
        return 0;
    }
    round_ratio(part.saturating_mul(100), whole)
}

/// Summed amount per category in the order categories are first seen.
pub(crate) fn category_totals<'a, I>(transactions: I) -> Vec<(Category, i64)>
where
    I: IntoIterator<Item = &'a Transaction>,
{
    let mut totals: Vec<(Category, i64)> = Vec::new();
    for txn in transactions {
        match totals.iter_mut().find(|(c, _)| *c == txn.category) {
            Some((_, sum)) => *sum += txn.amount,
            None => totals.push((txn.category, txn.amount)),
        }
    }
    totals
}

/// Category with the largest sum; the earliest seen wins a tie.
pub(crate) fn top_category(totals: &[(Category, i64)]) -> Option<Category> {
    let mut best: Option<(Category, i64)> = None;
    for &(category, sum) in totals {
        match best {
            Some((_, best_sum)) if sum <= best_sum => {}
            _ => best = Some((category, sum)),
        }
    }
    best.map(|(c, _)| c)
}

/// Totals sorted by descending amount. Equal amounts keep first-seen order.
pub(crate) fn ranked(totals: &[(Category, i64)]) -> Vec<(Category, i64)> {
    let mut sorted = totals.to_vec();
    sorted.sort_by(|a, b| b.1.cmp(&a.1));
    sorted
}

pub(crate) fn summarize(transactions: &[Transaction], window: &Window, label: &str) -> Summary {
    let filtered: Vec<(usize, &Transaction)> = transactions
        .iter()
        .enumerate()
        .filter(|(_, t)| window.contains(t.timestamp))
        .collect();

    if filtered.is_empty() {
        return Summary::empty(label.to_string());
    }

    let total: i64 = filtered.iter().map(|(_, t)| t.amount).sum();
    let count = filtered.len();
    let categories = category_totals(filtered.iter().map(|(_, t)| *t));
    let top = top_category(&categories);

    // Newest first; same instant falls back to id, then to input position.
    let mut recent = filtered.clone();
    recent.sort_by(|(ia, a), (ib, b)| {
        b.timestamp
            .cmp(&a.timestamp)
            .then(b.id.cmp(&a.id))
            .then(ib.cmp(ia))
    });
    let sample_transactions = recent
        .into_iter()
        .take(SAMPLE_SIZE)
        .map(|(_, t)| t.clone())
        .collect();

    Summary {
        total,
        count,
        average: round_ratio(total, count as i64),
        categories,
        top_category: top,
        period_label: label.to_string(),
        sample_transactions,
    }
}

// ── All-time figures ──────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Stats {
    pub(crate) count: usize,
    pub(crate) total: i64,
    pub(crate) distinct_categories: usize,
    pub(crate) first_day: Option<NaiveDate>,
    /// Total spread over every calendar day from the first transaction to
    /// `today`, inclusive.
    pub(crate) average_per_day: i64,
}

pub(crate) fn statistics(transactions: &[Transaction], today: NaiveDate) -> Stats {
    let total: i64 = transactions.iter().map(|t| t.amount).sum();
    let distinct_categories = category_totals(transactions).len();
    let first_day = transactions.iter().map(|t| t.timestamp.date_naive()).min();
    let days = first_day.map_or(0, |first| (today - first).num_days().max(0) + 1);

    Stats {
        count: transactions.len(),
        total,
        distinct_categories,
        first_day,
        average_per_day: round_ratio(total, days),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BudgetLevel {
    Safe,
    Warning,
    Exceeded,
}

/// Spending at or above this share of the budget raises a warning.
pub(crate) const BUDGET_WARNING_PERCENT: i64 = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct BudgetStatus {
    pub(crate) budget: i64,
    pub(crate) spent: i64,
    pub(crate) remaining: i64,
    pub(crate) percent_used: i64,
    pub(crate) level: BudgetLevel,
}

pub(crate) fn budget_status(budget: i64, spent: i64) -> BudgetStatus {
    let percent_used = percentage(spent, budget);
    let level = if spent > budget {
        BudgetLevel::Exceeded
    } else if percent_used >= BUDGET_WARNING_PERCENT {
        BudgetLevel::Warning
    } else {
        BudgetLevel::Safe
    };
    BudgetStatus {
        budget,
        spent,
        remaining: budget - spent,
        percent_used,
        level,
    }
}
