use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::models::User;

use super::util::{max_scroll_back, wrap};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Speaker {
    User,
    Bot,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Chat,
    Command,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Chat => write!(f, "CHAT"),
            Self::Command => write!(f, "COMMAND"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Message {
    pub(crate) speaker: Speaker,
    pub(crate) text: String,
    pub(crate) at: DateTime<Local>,
}

/// One row of the rendered transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TranscriptLine {
    Heading { speaker: Speaker, label: String },
    Body { speaker: Speaker, text: String },
    Blank,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) input: String,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) messages: Vec<Message>,
    /// Lines scrolled up from the newest message; 0 follows the conversation.
    pub(crate) scroll_back: usize,
    pub(crate) visible_rows: usize,
    pub(crate) wrap_width: usize,
    pub(crate) user: User,
    pub(crate) export_dir: PathBuf,
}

impl App {
    pub(crate) fn new(user: User, export_dir: PathBuf) -> Self {
        let mut app = Self {
            running: true,
            input_mode: InputMode::Chat,
            input: String::new(),
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            messages: Vec::new(),
            scroll_back: 0,
            visible_rows: 20,
            wrap_width: 80,
            user,
            export_dir,
        };
        app.push(
            Speaker::System,
            "Ketik pesan lalu Enter. Coba: /catat 15000 makan siang, atau 'bantuan'.",
        );
        app
    }

    pub(crate) fn push(&mut self, speaker: Speaker, text: impl Into<String>) {
        self.messages.push(Message {
            speaker,
            text: text.into(),
            at: Local::now(),
        });
        self.scroll_back = 0;
    }

    /// Take the typed message, leaving the input empty. `None` if there is
    /// nothing worth sending.
    pub(crate) fn take_input(&mut self) -> Option<String> {
        let text = std::mem::take(&mut self.input);
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    pub(crate) fn clear_messages(&mut self) {
        self.messages.clear();
        self.scroll_back = 0;
    }

    pub(crate) fn transcript(&self) -> Vec<TranscriptLine> {
        let mut lines = Vec::new();
        for msg in &self.messages {
            let who = match msg.speaker {
                Speaker::User => self.user.name.as_deref().unwrap_or("Kamu"),
                Speaker::Bot => "FinBot",
                Speaker::System => "•",
            };
            lines.push(TranscriptLine::Heading {
                speaker: msg.speaker,
                label: format!("{who}  {}", msg.at.format("%H:%M")),
            });
            for raw in msg.text.lines() {
                for text in wrap(raw, self.wrap_width) {
                    lines.push(TranscriptLine::Body {
                        speaker: msg.speaker,
                        text,
                    });
                }
            }
            lines.push(TranscriptLine::Blank);
        }
        lines
    }

    pub(crate) fn scroll_up(&mut self, lines: usize) {
        let limit = max_scroll_back(self.transcript().len(), self.visible_rows);
        self.scroll_back = (self.scroll_back + lines).min(limit);
    }

    pub(crate) fn scroll_down(&mut self, lines: usize) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    pub(crate) fn scroll_to_top(&mut self) {
        self.scroll_back = max_scroll_back(self.transcript().len(), self.visible_rows);
    }

    pub(crate) fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
