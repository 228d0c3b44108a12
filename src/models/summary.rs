use super::{Category, Transaction};

/// Label shown in place of a top category when a window holds no data.
pub const NO_DATA: &str = "Tidak ada data";

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub total: i64,
    pub count: usize,
    pub average: i64,
    /// Summed amount per category, in the order each category was first seen.
    pub categories: Vec<(Category, i64)>,
    pub top_category: Option<Category>,
    pub period_label: String,
    /// Most recent transactions of the window, newest first.
    pub sample_transactions: Vec<Transaction>,
}

impl Summary {
    pub fn empty(period_label: String) -> Self {
        Self {
            total: 0,
            count: 0,
            average: 0,
            categories: Vec::new(),
            top_category: None,
            period_label,
            sample_transactions: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn top_category_label(&self) -> &'static str {
        self.top_category.map_or(NO_DATA, |c| c.as_str())
    }
}
