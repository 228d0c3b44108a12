mod empathy;

pub(crate) use empathy::EmpathyTable;

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Pronoun swaps plus the fixed question phrases the bot echoes back.
#[derive(Debug, Clone)]
pub(crate) struct ReflectionTable {
    pub(crate) pairs: Vec<(String, String)>,
    pub(crate) questions: Vec<(String, String)>,
}

fn owned(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

impl Default for ReflectionTable {
    fn default() -> Self {
        Self {
            pairs: owned(&[
                ("saya", "kamu"),
                ("aku", "kamu"),
                ("ku", "mu"),
                ("kamu", "saya"),
                ("mu", "ku"),
                ("anda", "saya"),
                ("gue", "lu"),
                ("gw", "lu"),
                ("lu", "gue"),
                ("lo", "gue"),
                ("saya punya", "kamu punya"),
                ("aku punya", "kamu punya"),
                ("kamu punya", "saya punya"),
                ("punya saya", "punya kamu"),
                ("punya aku", "punya kamu"),
                ("punya kamu", "punya saya"),
                ("milik saya", "milik kamu"),
                ("milik aku", "milik kamu"),
                ("milik kamu", "milik saya"),
                ("my", "your"),
                ("your", "my"),
                ("mine", "yours"),
                ("yours", "mine"),
                ("i", "you"),
                ("you", "i"),
                ("me", "you"),
                ("am", "are"),
                ("are", "am"),
            ]),
            questions: owned(&[
                ("berapa yang sudah saya habiskan", "berapa yang sudah kamu habiskan"),
                ("pengeluaran saya", "pengeluaran kamu"),
                ("uang saya", "uang kamu"),
                ("saldo saya", "saldo kamu"),
                ("kategori saya", "kategori kamu"),
            ]),
        }
    }
}

/// Values substituted into `{name}`, `{total_spent}` and `{top_category}`.
#[derive(Debug, Clone, Default)]
pub(crate) struct PersonalData {
    pub(crate) name: Option<String>,
    pub(crate) total_spent: Option<String>,
    pub(crate) top_category: Option<String>,
}

/// A piece of the text being reflected. Reflected pieces are final.
#[derive(Debug)]
enum Span {
    Raw(String),
    Reflected(String),
}

struct CompiledEmpathy {
    trigger: Regex,
    responses: Vec<String>,
}

pub(crate) struct ReflectionEngine {
    /// Longest key first; ties keep table order.
    swaps: Vec<(Regex, String)>,
    questions: Vec<(Regex, String)>,
    empathy: Vec<CompiledEmpathy>,
}

fn case_insensitive(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).case_insensitive(true).build()
}

impl ReflectionEngine {
    pub(crate) fn new(table: &ReflectionTable, empathy: &EmpathyTable) -> Result<Self> {
        let mut pairs: Vec<&(String, String)> = table.pairs.iter().collect();
        pairs.sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));

        let swaps = pairs
            .into_iter()
            .map(|(key, value)| -> Result<(Regex, String)> {
                let re = case_insensitive(&format!(r"\b{}\b", regex::escape(key)))
                    .with_context(|| format!("Invalid reflection key: {key}"))?;
                Ok((re, value.to_lowercase()))
            })
            .collect::<Result<Vec<_>>>()?;

        let questions = table
            .questions
            .iter()
            .map(|(phrase, reply)| -> Result<(Regex, String)> {
                let re = case_insensitive(&regex::escape(phrase))
                    .with_context(|| format!("Invalid question phrase: {phrase}"))?;
                Ok((re, reply.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        let empathy = empathy
            .rules
            .iter()
            .map(|rule| -> Result<CompiledEmpathy> {
                let trigger = case_insensitive(&rule.trigger)
                    .with_context(|| format!("Invalid empathy trigger: {}", rule.trigger))?;
                Ok(CompiledEmpathy {
                    trigger,
                    responses: rule.responses.clone(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            swaps,
            questions,
            empathy,
        })
    }

    /// Swap first and second person, e.g. `"saya bingung"` → `"Kamu bingung"`.
    ///
    /// Text is lowercased first. Longer keys are applied before shorter ones
    /// and a rewritten word is never rewritten again, so `"saya"` → `"kamu"`
    /// does not flip back through the `"kamu"` rule.
    pub(crate) fn reflect(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut spans = vec![Span::Raw(text.to_lowercase())];
        for (re, replacement) in &self.swaps {
            let mut next = Vec::with_capacity(spans.len());
            for span in spans {
                match span {
                    Span::Raw(raw) => split_on(re, &raw, replacement, &mut next),
                    reflected => next.push(reflected),
                }
            }
            spans = next;
        }

        let joined: String = spans
            .iter()
            .map(|span| match span {
                Span::Raw(s) | Span::Reflected(s) => s.as_str(),
            })
            .collect();
        capitalize_first(&joined)
    }

    /// Rewrite the known "my X" phrases of a question into "your X".
    pub(crate) fn reflect_question(&self, text: &str) -> String {
        self.questions
            .iter()
            .fold(text.to_string(), |acc, (re, reply)| {
                re.replace_all(&acc, regex::NoExpand(reply)).into_owned()
            })
    }

    /// A canned empathetic line for the first trigger that matches, picked
    /// uniformly at random.
    pub(crate) fn generate_empathy_response(
        &self,
        text: &str,
        rng: &mut impl rand::Rng,
    ) -> Option<String> {
        self.empathy
            .iter()
            .find(|rule| rule.trigger.is_match(text))
            .and_then(|rule| empathy::choose(&rule.responses, rng))
    }
}

/// Fill `{name}`, `{total_spent}` and `{top_category}`. Without a name the
/// template comes back untouched.
pub(crate) fn personalize(template: &str, data: &PersonalData) -> String {
    let Some(name) = data.name.as_deref() else {
        return template.to_string();
    };
    template
        .replace("{name}", name)
        .replace("{total_spent}", data.total_spent.as_deref().unwrap_or("0"))
        .replace(
            "{top_category}",
            data.top_category.as_deref().unwrap_or("belum ada data"),
        )
}

fn split_on(re: &Regex, raw: &str, replacement: &str, out: &mut Vec<Span>) {
    let mut last = 0;
    for m in re.find_iter(raw) {
        if m.start() > last {
            out.push(Span::Raw(raw[last..m.start()].to_string()));
        }
        out.push(Span::Reflected(replacement.to_string()));
        last = m.end();
    }
    if last < raw.len() {
        out.push(Span::Raw(raw[last..].to_string()));
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
