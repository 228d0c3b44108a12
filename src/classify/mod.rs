mod rules;

pub(crate) use rules::RuleTable;

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Intent {
    Greeting,
    RecordTransaction,
    DailySummary,
    MonthlySummary,
    PeriodSummary,
    BalanceCheck,
    Help,
    CategoryAnalysis,
    Export,
    Statistics,
    SetBudget,
    BudgetAlert,
    Unknown,
}

impl Intent {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::RecordTransaction => "record_transaction",
            Self::DailySummary => "daily_summary",
            Self::MonthlySummary => "monthly_summary",
            Self::PeriodSummary => "period_summary",
            Self::BalanceCheck => "balance_check",
            Self::Help => "help",
            Self::CategoryAnalysis => "category_analysis",
            Self::Export => "export",
            Self::Statistics => "statistics",
            Self::SetBudget => "set_budget",
            Self::BudgetAlert => "budget_alert",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Groups captured by the winning pattern, in group order (group 0 excluded).
/// A group that did not take part in the match is kept as `None` so positions
/// stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Captures {
    groups: Vec<(Option<String>, Option<String>)>,
}

impl Captures {
    fn from_match(regex: &Regex, caps: &regex::Captures<'_>) -> Self {
        let groups = regex
            .capture_names()
            .enumerate()
            .skip(1)
            .map(|(i, name)| {
                (
                    name.map(str::to_string),
                    caps.get(i).map(|m| m.as_str().to_string()),
                )
            })
            .collect();
        Self { groups }
    }

    #[cfg(test)]
    pub(crate) fn positional(values: &[&str]) -> Self {
        Self {
            groups: values
                .iter()
                .map(|v| (None, Some(v.to_string())))
                .collect(),
        }
    }

    /// Number of groups that actually captured text.
    pub(crate) fn len(&self) -> usize {
        self.groups.iter().filter(|(_, v)| v.is_some()).count()
    }

    /// Positional lookup, 0-based over groups 1..n.
    pub(crate) fn get(&self, index: usize) -> Option<&str> {
        self.groups.get(index).and_then(|(_, v)| v.as_deref())
    }

    pub(crate) fn name(&self, name: &str) -> Option<&str> {
        self.groups
            .iter()
            .find(|(n, _)| n.as_deref() == Some(name))
            .and_then(|(_, v)| v.as_deref())
    }

    /// A named group if the pattern declares one, otherwise the group at
    /// `index`.
    pub(crate) fn field(&self, name: &str, index: usize) -> Option<&str> {
        if self.groups.iter().any(|(n, _)| n.as_deref() == Some(name)) {
            self.name(name)
        } else {
            self.get(index)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Classification {
    pub(crate) intent: Intent,
    pub(crate) captures: Captures,
    pub(crate) original_text: String,
}

pub(crate) struct RuleClassifier {
    rules: Vec<(Intent, Regex)>,
}

impl RuleClassifier {
    pub(crate) fn new(table: &RuleTable) -> Result<Self> {
        let mut rules = Vec::new();
        for entry in &table.intents {
            for pattern in &entry.patterns {
                let regex = RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .with_context(|| format!("Invalid pattern for {}: {pattern}", entry.intent))?;
                rules.push((entry.intent, regex));
            }
        }
        Ok(Self { rules })
    }

    /// Walk the rules in table order and stop at the first match.
    pub(crate) fn classify(&self, text: &str) -> Classification {
        let trimmed = text.trim();

        for (intent, regex) in &self.rules {
            if let Some(caps) = regex.captures(trimmed) {
                return Classification {
                    intent: *intent,
                    captures: Captures::from_match(regex, &caps),
                    original_text: text.to_string(),
                };
            }
        }

        Classification {
            intent: Intent::Unknown,
            captures: Captures::default(),
            original_text: text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
