use super::Intent;

/// Patterns for one intent, tried in declared order.
#[derive(Debug, Clone)]
pub(crate) struct IntentRules {
    pub(crate) intent: Intent,
    pub(crate) patterns: Vec<String>,
}

impl IntentRules {
    pub(crate) fn new(intent: Intent, patterns: &[&str]) -> Self {
        Self {
            intent,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// The classifier's rule table. The order of `intents` is the priority order
/// of the whole walk.
#[derive(Debug, Clone)]
pub(crate) struct RuleTable {
    pub(crate) intents: Vec<IntentRules>,
}

impl Default for RuleTable {
    fn default() -> Self {
        Self {
            intents: vec![
                IntentRules::new(
                    Intent::Greeting,
                    &[
                        r"^(hai|halo|hello|hi|selamat\s+(pagi|siang|sore|malam))\b",
                        r"^(apa\s+kabar|gimana\s+kabarnya)",
                    ],
                ),
                IntentRules::new(
                    Intent::RecordTransaction,
                    &[
                        r"^/?catat(?:\s+(?P<amount>\S+))?(?:\s+(?P<desc>.+))?$",
                        r"^(?P<verb>bayar|beli|buat)\s+(?P<desc>.+?)\s+(?P<amount>\d+)(?:\s*(?:rupiah|rp))?$",
                    ],
                ),
                IntentRules::new(
                    Intent::DailySummary,
                    &[
                        r"berapa\s+(duit|uang|dana)\s+.*(hari\s+ini|today)",
                        r"pengeluaran\s+hari\s+ini",
                        r"total\s+.*(hari\s+ini|today)",
                    ],
                ),
                IntentRules::new(
                    Intent::MonthlySummary,
                    &[
                        r"berapa\s+.*(bulan\s+ini|this\s+month)",
                        r"pengeluaran\s+bulan\s+ini",
                        r"laporan\s+bulan",
                    ],
                ),
                IntentRules::new(
                    Intent::PeriodSummary,
                    &[
                        r"berapa\s+pengeluaran\s+(?P<amount>\d+)\s+(?P<unit>hari|bulan|minggu)\s+terakhir",
                        r"laporan\s+(?P<amount>\d+)\s+(?P<unit>hari|bulan|minggu)",
                        r"summary\s+(?P<amount>\d+)\s+(?P<unit>days?|months?|weeks?)",
                        r"^(?P<amount>\d+)\s+(?P<unit>hari|bulan|minggu)\s+terakhir",
                    ],
                ),
                IntentRules::new(
                    Intent::BalanceCheck,
                    &[
                        r"saldo|balance",
                        r"berapa\s+(sisa|duit|uang)\s+saya",
                        r"how\s+(much|many)\s+do\s+i\s+have",
                    ],
                ),
                IntentRules::new(
                    Intent::Help,
                    &[
                        r"help|bantuan|cara\s+pakai",
                        r"apa\s+yang\s+bisa\s+kamu\s+lakukan",
                        r"what\s+can\s+you\s+do",
                    ],
                ),
                IntentRules::new(
                    Intent::CategoryAnalysis,
                    &[
                        r"kategori\s+terbesar",
                        r"pengeluaran\s+terbanyak\s+untuk\s+apa",
                        r"analisis\s+kategori",
                    ],
                ),
                IntentRules::new(
                    Intent::Export,
                    &[
                        r"^/?export$",
                        r"export\s+(data|csv|file)",
                        r"simpan\s+(data|csv|file)",
                        r"download\s+(data|csv|file)",
                    ],
                ),
                IntentRules::new(
                    Intent::Statistics,
                    &[
                        r"^/?stats$",
                        r"^statistik$",
                        r"rata-?rata\s+per\s+hari",
                        r"average\s+per\s+day",
                    ],
                ),
                IntentRules::new(
                    Intent::SetBudget,
                    &[
                        r"^/setbudget\s+(?P<amount>\S+)",
                        r"set\s+budget\s+(?P<amount>\d+)",
                    ],
                ),
                IntentRules::new(Intent::BudgetAlert, &[r"budget", r"pengingat\s+budget"]),
            ],
        }
    }
}
