#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodUnit {
    Days,
    Weeks,
    Months,
}

impl PeriodUnit {
    /// Normalize a unit token from either language. Unknown tokens fall back
    /// to `Days`; the second field tells the caller whether that happened.
    pub fn parse(token: &str) -> (Self, bool) {
        match token.trim().to_lowercase().as_str() {
            "hari" | "day" | "days" => (Self::Days, true),
            "minggu" | "week" | "weeks" => (Self::Weeks, true),
            "bulan" | "month" | "months" => (Self::Months, true),
            _ => (Self::Days, false),
        }
    }

    /// Indonesian label used in report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Days => "hari",
            Self::Weeks => "minggu",
            Self::Months => "bulan",
        }
    }
}

/// A relative lookback window, e.g. "3 bulan terakhir".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub amount: u32,
    pub unit: PeriodUnit,
}

impl Period {
    pub fn new(amount: u32, unit: PeriodUnit) -> Self {
        Self { amount, unit }
    }

    pub fn label(&self) -> String {
        format!("{} {} terakhir", self.amount, self.unit.label())
    }
}
