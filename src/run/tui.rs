use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use crate::bot::Bot;
use crate::config::Config;
use crate::db::Database;
use crate::ui::app::{App, InputMode, Speaker};
use crate::ui::commands;

pub(crate) fn as_tui(bot: &Bot<Database>, config: &Config) -> Result<()> {
    let mut app = App::new(config.user.clone(), config.export_dir.clone());

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!(user = %app.user.id, "chat session started");
    let result = run_app(&mut terminal, &mut app, bot);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        eprintln!("Error: {e:?}");
    }

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    bot: &Bot<Database>,
) -> Result<()> {
    while app.running {
        terminal.draw(|f| {
            // header + status + input bars, plus the chat pane's borders
            let area = f.area();
            app.visible_rows = (area.height.saturating_sub(5) as usize).max(1);
            app.wrap_width = (area.width.saturating_sub(2) as usize).max(1);
            crate::ui::render::render(f, app);
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if app.show_help {
                app.show_help = false;
                continue;
            }
            match app.input_mode {
                InputMode::Chat => handle_chat_input(key, app, bot),
                InputMode::Command => handle_command_input(key, app, bot),
            }
        }
    }
    Ok(())
}

// ── Input handlers ───────────────────────────────────────────

fn handle_chat_input(key: event::KeyEvent, app: &mut App, bot: &Bot<Database>) {
    let half_page = (app.visible_rows / 2).max(1);
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('c')
            if key.modifiers.contains(KeyModifiers::CONTROL) =>
        {
            app.running = false;
        }
        KeyCode::Char(':') if app.input.is_empty() => {
            app.input_mode = InputMode::Command;
            app.command_input.clear();
        }
        KeyCode::Char('?') if app.input.is_empty() => {
            app.show_help = true;
        }
        KeyCode::F(1) => {
            app.show_help = true;
        }
        KeyCode::Enter => send_message(app, bot),
        KeyCode::Esc => {
            app.input.clear();
            app.set_status("");
        }
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.input.clear();
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_word(&mut app.input);
        }
        KeyCode::Up => app.scroll_up(1),
        KeyCode::Down => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(half_page),
        KeyCode::PageDown => app.scroll_down(half_page),
        KeyCode::Home => app.scroll_to_top(),
        KeyCode::End => app.scroll_to_bottom(),
        KeyCode::Char(c) => {
            app.input.push(c);
        }
        _ => {}
    }
}

fn handle_command_input(key: event::KeyEvent, app: &mut App, bot: &Bot<Database>) {
    match key.code {
        KeyCode::Enter => {
            let input = app.command_input.clone();
            app.input_mode = InputMode::Chat;
            app.command_input.clear();
            if let Err(e) = commands::handle_command(&input, app, bot) {
                tracing::error!("command :{input} failed: {e:#}");
                app.set_status(format!("Error: {e:#}"));
            }
        }
        KeyCode::Esc => {
            app.input_mode = InputMode::Chat;
            app.command_input.clear();
        }
        KeyCode::Backspace => {
            app.command_input.pop();
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Chat;
            }
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.command_input.clear();
            app.input_mode = InputMode::Chat;
        }
        KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            delete_word(&mut app.command_input);
            if app.command_input.is_empty() {
                app.input_mode = InputMode::Chat;
            }
        }
        KeyCode::Char(c) => {
            app.command_input.push(c);
        }
        _ => {}
    }
}

fn send_message(app: &mut App, bot: &Bot<Database>) {
    let Some(text) = app.take_input() else {
        return;
    };
    app.push(Speaker::User, text.as_str());
    let reply = bot.interpret(&text, &app.user);
    let shown = super::reply_text(bot, reply, &app.export_dir);
    app.push(Speaker::Bot, shown);
    app.set_status("");
}

/// Ctrl-W: drop the last word, keeping the space before it.
fn delete_word(input: &mut String) {
    let trimmed = input.trim_end();
    if let Some(pos) = trimmed.rfind(' ') {
        input.truncate(pos + 1);
    } else {
        input.clear();
    }
}
