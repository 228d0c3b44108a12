mod reply;
mod responses;

pub(crate) use reply::Reply;

use anyhow::Result;
use chrono::{DateTime, Local};

use crate::aggregate::{self, Window};
use crate::categorize::{Categorizer, KeywordTable};
use crate::classify::{Captures, Classification, Intent, RuleClassifier, RuleTable};
use crate::db::{month_key, Storage};
use crate::extract::{parse_amount, FieldExtractor};
use crate::models::{Period, Summary, Transaction, User};
use crate::reflect::{personalize, EmpathyTable, PersonalData, ReflectionEngine, ReflectionTable};
use crate::validate;

/// Every configurable table the bot is built from.
#[derive(Debug, Clone, Default)]
pub(crate) struct Tables {
    pub(crate) rules: RuleTable,
    pub(crate) keywords: KeywordTable,
    pub(crate) reflections: ReflectionTable,
    pub(crate) empathy: EmpathyTable,
}

/// Turns one chat message into one reply. Holds compiled tables and the
/// storage handle; no per-conversation state.
pub(crate) struct Bot<S: Storage> {
    classifier: RuleClassifier,
    extractor: FieldExtractor,
    reflector: ReflectionEngine,
    storage: S,
}

impl<S: Storage> Bot<S> {
    pub(crate) fn new(storage: S) -> Result<Self> {
        Self::with_tables(storage, &Tables::default())
    }

    pub(crate) fn with_tables(storage: S, tables: &Tables) -> Result<Self> {
        Ok(Self {
            classifier: RuleClassifier::new(&tables.rules)?,
            extractor: FieldExtractor::new(Categorizer::new(&tables.keywords)?),
            reflector: ReflectionEngine::new(&tables.reflections, &tables.empathy)?,
            storage,
        })
    }

    pub(crate) fn storage(&self) -> &S {
        &self.storage
    }

    pub(crate) fn interpret(&self, raw_text: &str, user: &User) -> Reply {
        self.interpret_at(raw_text, user, Local::now(), &mut rand::thread_rng())
    }

    /// `interpret` with the clock and the random source supplied.
    pub(crate) fn interpret_at(
        &self,
        raw_text: &str,
        user: &User,
        now: DateTime<Local>,
        rng: &mut impl rand::Rng,
    ) -> Reply {
        let text = match validate::validate_message(raw_text) {
            Ok(text) => validate::sanitize_input(text),
            Err(e) => return Reply::text(e.to_string()),
        };

        let classification = self.classifier.classify(&text);
        tracing::info!(user = %user.id, intent = %classification.intent, "message classified");

        match self.respond(&classification, user, now, rng) {
            Ok(reply) => reply,
            Err(e) => {
                tracing::error!(user = %user.id, intent = %classification.intent, "failed to answer: {e:#}");
                Reply::text(responses::APOLOGY)
            }
        }
    }

    fn respond(
        &self,
        classification: &Classification,
        user: &User,
        now: DateTime<Local>,
        rng: &mut impl rand::Rng,
    ) -> Result<Reply> {
        let captures = &classification.captures;
        let text = match classification.intent {
            Intent::Greeting => self.greeting(user, now, rng)?,
            Intent::Help => responses::HELP.to_string(),
            Intent::RecordTransaction => self.record(captures, user, now)?,
            Intent::DailySummary => {
                self.report(classification, user, Window::daily(now), aggregate::DAILY_LABEL)?
            }
            Intent::MonthlySummary => self.report(
                classification,
                user,
                Window::monthly(now),
                aggregate::MONTHLY_LABEL,
            )?,
            Intent::PeriodSummary => match self.extractor.period(captures) {
                Ok(period) => self.period_report(classification, user, period, now)?,
                Err(e) => {
                    tracing::debug!("period extraction failed: {e}");
                    responses::INVALID_PERIOD.to_string()
                }
            },
            Intent::BalanceCheck => self.balance(user, now)?,
            Intent::CategoryAnalysis => {
                aggregate::format_category_analysis(&self.storage.query_all(&user.id)?)
            }
            Intent::Export => {
                return Ok(Reply::Export {
                    user_id: user.id.clone(),
                })
            }
            Intent::Statistics => {
                let all = self.storage.query_all(&user.id)?;
                aggregate::format_statistics(&aggregate::statistics(&all, now.date_naive()))
            }
            Intent::SetBudget => self.set_budget(captures, user, now)?,
            Intent::BudgetAlert => self.budget_alert(user, now)?,
            Intent::Unknown => self.fallback(&classification.original_text, rng),
        };
        Ok(Reply::Text(text))
    }

    fn monthly_summary(&self, user: &User, now: DateTime<Local>) -> Result<Summary> {
        let window = Window::monthly(now);
        let txns = self.storage.query_range(&user.id, window.start, window.end)?;
        Ok(aggregate::summarize(&txns, &window, aggregate::MONTHLY_LABEL))
    }

    fn greeting(&self, user: &User, now: DateTime<Local>, rng: &mut impl rand::Rng) -> Result<String> {
        let Some(name) = &user.name else {
            return Ok(responses::pick(responses::GREETINGS, rng).to_string());
        };

        let summary = self.monthly_summary(user, now)?;
        let data = PersonalData {
            name: Some(name.clone()),
            total_spent: Some(aggregate::format_currency(summary.total)),
            top_category: summary.top_category.map(|c| c.to_string()),
        };
        Ok(personalize(responses::PERSONAL_GREETING, &data))
    }

    fn record(&self, captures: &Captures, user: &User, now: DateTime<Local>) -> Result<String> {
        let txn = match self.extractor.transaction(captures, now) {
            Ok(txn) => txn,
            Err(e) => {
                tracing::debug!("transaction extraction failed: {e}");
                return Ok(responses::INVALID_TRANSACTION.to_string());
            }
        };
        let txn = match checked(txn) {
            Ok(txn) => txn,
            Err(e) => return Ok(e.to_string()),
        };

        let id = self.storage.append(&user.id, &txn)?;
        tracing::info!(user = %user.id, id, amount = txn.amount, category = %txn.category, "recorded");

        Ok(format!(
            "✅ Tercatat!\n💰 {}\n🏷️ {}\n📝 {}",
            aggregate::format_currency(txn.amount),
            txn.category,
            txn.description
        ))
    }

    fn report(
        &self,
        classification: &Classification,
        user: &User,
        window: Window,
        label: &str,
    ) -> Result<String> {
        let txns = self.storage.query_range(&user.id, window.start, window.end)?;
        let report = aggregate::format_report(&aggregate::summarize(&txns, &window, label));
        Ok(self.echo_question(&classification.original_text, report))
    }

    fn period_report(
        &self,
        classification: &Classification,
        user: &User,
        period: Period,
        now: DateTime<Local>,
    ) -> Result<String> {
        self.report(
            classification,
            user,
            Window::relative(period, now),
            &period.label(),
        )
    }

    /// Prefix a report with the user's own question, turned around, when it
    /// contains one of the known "my X" phrases.
    fn echo_question(&self, question: &str, report: String) -> String {
        let reflected = self.reflector.reflect_question(question);
        if reflected == question {
            report
        } else {
            format!("🔎 _{reflected}_\n\n{report}")
        }
    }

    fn balance(&self, user: &User, now: DateTime<Local>) -> Result<String> {
        let summary = self.monthly_summary(user, now)?;
        let mut out = String::from("💳 *Informasi Saldo*\n\n");
        out.push_str(&format!(
            "💸 Total pengeluaran bulan ini: {}\n",
            aggregate::format_currency(summary.total)
        ));
        match self.storage.get_budget(&user.id, &month_key(now))? {
            Some(budget) => out.push_str(&format!(
                "💰 Sisa saldo: {}",
                aggregate::format_currency(budget - summary.total)
            )),
            None => out.push_str("ℹ️ Set saldo bulan ini dengan: /setbudget 1000000"),
        }
        Ok(out)
    }

    fn set_budget(
        &self,
        captures: &Captures,
        user: &User,
        now: DateTime<Local>,
    ) -> Result<String> {
        let amount = match captures
            .field("amount", 0)
            .ok_or(())
            .and_then(|raw| parse_amount(raw).map_err(|_| ()))
        {
            Ok(amount) => amount,
            Err(()) => return Ok(responses::INVALID_BUDGET.to_string()),
        };

        let month = month_key(now);
        self.storage.set_budget(&user.id, &month, amount)?;
        tracing::info!(user = %user.id, month = %month, amount, "budget set");
        Ok(format!(
            "🎯 Budget bulan ini diset ke {}",
            aggregate::format_currency(amount)
        ))
    }

    fn budget_alert(&self, user: &User, now: DateTime<Local>) -> Result<String> {
        let Some(budget) = self.storage.get_budget(&user.id, &month_key(now))? else {
            return Ok(responses::NO_BUDGET.to_string());
        };
        let spent = self.monthly_summary(user, now)?.total;
        Ok(aggregate::format_budget_status(&aggregate::budget_status(
            budget, spent,
        )))
    }

    fn fallback(&self, original_text: &str, rng: &mut impl rand::Rng) -> String {
        if let Some(empathy) = self.reflector.generate_empathy_response(original_text, rng) {
            return format!("{empathy}\n\n{}", responses::pick(responses::UNKNOWN, rng));
        }
        let reflected = self.reflector.reflect(original_text);
        format!("Hmm, \"{reflected}\"... Saya belum mengerti. Ketik 'help' ya!")
    }
}

/// Apply the amount and description limits to an extracted transaction.
fn checked(txn: Transaction) -> Result<Transaction, validate::ValidationError> {
    let amount = validate::validate_amount(txn.amount)?;
    let description = validate::validate_description(&txn.description)?;
    Ok(Transaction {
        amount,
        description,
        ..txn
    })
}
