use chrono::{DateTime, Local};

use super::Category;

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Row id assigned by storage; `None` until the transaction is appended.
    pub id: Option<i64>,
    pub amount: i64,
    pub description: String,
    pub category: Category,
    pub timestamp: DateTime<Local>,
}

impl Transaction {
    pub fn new(amount: i64, description: String, category: Category, timestamp: DateTime<Local>) -> Self {
        Self {
            id: None,
            amount,
            description,
            category,
            timestamp,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
