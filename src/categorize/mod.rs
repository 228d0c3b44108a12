use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::models::Category;

/// One ordered keyword rule: a description matching `pattern` belongs to
/// `category`.
#[derive(Debug, Clone)]
pub(crate) struct KeywordRule {
    pub(crate) category: Category,
    pub(crate) pattern: String,
}

impl KeywordRule {
    pub(crate) fn new(category: Category, pattern: &str) -> Self {
        Self {
            category,
            pattern: pattern.to_string(),
        }
    }
}

/// Ordered keyword rules. Order is priority: the first rule that matches a
/// description decides its category.
#[derive(Debug, Clone)]
pub(crate) struct KeywordTable {
    pub(crate) rules: Vec<KeywordRule>,
}

impl Default for KeywordTable {
    fn default() -> Self {
        Self {
            rules: vec![
                KeywordRule::new(
                    Category::Makanan,
                    r"makan|makanan|nasi|ayam|soto|bakso|pizza|burger|snack|cemilan",
                ),
                KeywordRule::new(
                    Category::Transportasi,
                    r"bensin|ojek|bus|kereta|grab|gojek|parkir|tol",
                ),
                KeywordRule::new(
                    Category::Pendidikan,
                    r"buku|fotocopy|print|tugas|kuliah|kursus|les",
                ),
                KeywordRule::new(Category::Hiburan, r"game|film|bioskop|cafe|hang\s*out|jalan"),
                KeywordRule::new(
                    Category::Kebutuhan,
                    r"sabun|pasta\s*gigi|shampo|detergen|tissue",
                ),
                KeywordRule::new(
                    Category::Kesehatan,
                    r"obat|dokter|vitamin|masker|hand\s*sanitizer",
                ),
                KeywordRule::new(Category::Lainnya, r".*"),
            ],
        }
    }
}

pub(crate) struct Categorizer {
    rules: Vec<CompiledRule>,
}

struct CompiledRule {
    regex: Regex,
    category: Category,
}

impl Categorizer {
    pub(crate) fn new(table: &KeywordTable) -> Result<Self> {
        let rules = table
            .rules
            .iter()
            .map(|r| {
                let regex = RegexBuilder::new(&r.pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| {
                        format!("Invalid keyword pattern for {}: {}", r.category, r.pattern)
                    })?;
                Ok(CompiledRule {
                    regex,
                    category: r.category,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules })
    }

    /// Every description resolves to exactly one category. A table without
    /// its own catch-all still ends in `Lainnya`.
    pub(crate) fn categorize(&self, description: &str) -> Category {
        self.rules
            .iter()
            .find(|rule| rule.regex.is_match(description))
            .map_or(Category::Lainnya, |rule| rule.category)
    }
}

#[cfg(test)]
mod tests;
