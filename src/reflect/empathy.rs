use rand::seq::SliceRandom;

/// Trigger pattern (case-insensitive) and the lines it may answer with.
#[derive(Debug, Clone)]
pub(crate) struct EmpathyRule {
    pub(crate) trigger: String,
    pub(crate) responses: Vec<String>,
}

impl EmpathyRule {
    pub(crate) fn new(trigger: &str, responses: &[&str]) -> Self {
        Self {
            trigger: trigger.to_string(),
            responses: responses.iter().map(|r| (*r).to_string()).collect(),
        }
    }
}

/// Ordered; the first matching trigger wins.
#[derive(Debug, Clone)]
pub(crate) struct EmpathyTable {
    pub(crate) rules: Vec<EmpathyRule>,
}

impl Default for EmpathyTable {
    fn default() -> Self {
        Self {
            rules: vec![
                EmpathyRule::new(
                    r"berapa\s+(duit|uang|dana).*(habis|keluar)",
                    &[
                        "Sepertinya kamu ingin tahu total pengeluaran ya. Mari saya hitung untuk kamu!",
                        "Oke, saya akan cek berapa yang sudah kamu keluarkan.",
                        "Baik, let me check pengeluaran kamu...",
                    ],
                ),
                EmpathyRule::new(
                    r"saldo|sisa",
                    &[
                        "Saya akan cek sisa saldo kamu sekarang.",
                        "Mari kita lihat berapa sisa uang kamu.",
                        "Oke, checking saldo kamu...",
                    ],
                ),
                EmpathyRule::new(
                    r"(boros|banyak\s+banget|mahal)",
                    &[
                        "Tenang, yang penting kamu aware sama pengeluaran kamu sekarang!",
                        "It's okay, sekarang kamu sudah mulai tracking pengeluaran kan 👍",
                        "Gak papa, yang penting sekarang lebih hati-hati ya!",
                    ],
                ),
            ],
        }
    }
}

pub(super) fn choose(responses: &[String], rng: &mut impl rand::Rng) -> Option<String> {
    responses.choose(rng).cloned()
}
