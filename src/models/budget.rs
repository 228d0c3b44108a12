#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Budget {
    pub user_id: String,
    /// Format: "YYYY-MM"
    pub month: String,
    pub amount: i64,
}

impl Budget {
    pub fn new(user_id: String, month: String, amount: i64) -> Self {
        Self {
            user_id,
            month,
            amount,
        }
    }
}
