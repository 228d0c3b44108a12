use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::app::{App, InputMode, TranscriptLine};
use super::commands;
use super::theme;
use super::util::{display_width, tail, truncate, visible_window};

pub(crate) fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Conversation
            Constraint::Length(1), // Status bar
            Constraint::Length(1), // Input bar
        ])
        .split(f.area());

    render_header(f, chunks[0], app);
    render_conversation(f, chunks[1], app);
    render_status_bar(f, chunks[2], app);
    render_input_bar(f, chunks[3], app);

    if app.show_help {
        render_help_overlay(f, f.area());
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let who = match &app.user.name {
        Some(name) => format!("{name} ({})", app.user.id),
        None => app.user.id.clone(),
    };
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" FinBot ", theme::header_style().fg(theme::ACCENT)),
        Span::styled(
            format!(" {}", truncate(&who, area.width.saturating_sub(9) as usize)),
            theme::header_style(),
        ),
    ]))
    .style(Style::default().bg(theme::HEADER_BG));
    f.render_widget(header, area);
}

fn render_conversation(f: &mut Frame, area: Rect, app: &App) {
    let transcript = app.transcript();
    let height = area.height.saturating_sub(2) as usize;
    let window = visible_window(transcript.len(), height, app.scroll_back);

    let lines: Vec<Line> = transcript[window]
        .iter()
        .map(|line| match line {
            TranscriptLine::Heading { speaker, label } => {
                Line::from(Span::styled(label.as_str(), theme::speaker_style(*speaker)))
            }
            TranscriptLine::Body { speaker, text } => {
                Line::from(Span::styled(text.as_str(), theme::message_style(*speaker)))
            }
            TranscriptLine::Blank => Line::from(""),
        })
        .collect();

    let title = if app.scroll_back > 0 {
        format!(" Chat (↑{}) ", app.scroll_back)
    } else {
        " Chat ".to_string()
    };
    let pane = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::OVERLAY))
            .title(Span::styled(title, theme::dim_style())),
    );
    f.render_widget(pane, area);
}

fn render_status_bar(f: &mut Frame, area: Rect, app: &App) {
    let mode_label = format!(" {} ", app.input_mode);
    let mode_style = match app.input_mode {
        InputMode::Chat => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD),
        InputMode::Command => Style::default()
            .fg(theme::HEADER_BG)
            .bg(theme::GREEN)
            .add_modifier(Modifier::BOLD),
    };

    let right = " Enter send | PgUp/PgDn scroll | : command | ? help ";
    let available = area.width as usize;
    let room = available.saturating_sub(display_width(&mode_label) + display_width(right));

    let info_style = if app.status_message.starts_with("Error:") {
        theme::error_style().bg(theme::SURFACE)
    } else {
        theme::status_bar_style()
    };
    let info = truncate(&format!(" {}", app.status_message), room);
    let pad = room.saturating_sub(display_width(&info));

    let bar = Paragraph::new(Line::from(vec![
        Span::styled(mode_label, mode_style),
        Span::styled(info, info_style),
        Span::styled(" ".repeat(pad), theme::status_bar_style()),
        Span::styled(right, theme::status_bar_style()),
    ]));
    f.render_widget(bar, area);
}

fn render_input_bar(f: &mut Frame, area: Rect, app: &App) {
    let (prompt, prompt_style, text) = match app.input_mode {
        InputMode::Chat => ("> ", Style::default().fg(theme::ACCENT), &app.input),
        InputMode::Command => (":", Style::default().fg(theme::GREEN), &app.command_input),
    };

    // Keep the end of a long line in view.
    let room = (area.width as usize).saturating_sub(prompt.len() + 1);
    let shown = tail(text, room);
    let cursor = prompt.len() + display_width(shown);

    let content = if text.is_empty() && app.input_mode == InputMode::Chat {
        Line::from(vec![
            Span::styled(prompt, prompt_style),
            Span::styled("ketik pesan… (: perintah, ? bantuan)", theme::dim_style()),
        ])
    } else {
        Line::from(vec![
            Span::styled(prompt, prompt_style),
            Span::styled(shown, theme::command_bar_style()),
        ])
    };

    let bar = Paragraph::new(content).style(Style::default().bg(theme::COMMAND_BG));
    f.render_widget(bar, area);
    f.set_cursor_position((area.x + cursor as u16, area.y));
}

fn render_help_overlay(f: &mut Frame, area: Rect) {
    let heading = |text: &'static str| {
        Line::from(Span::styled(
            text,
            Style::default()
                .fg(theme::YELLOW)
                .add_modifier(Modifier::BOLD),
        ))
    };

    let mut help_text = vec![
        Line::from(Span::styled(
            " FinBot Help ",
            Style::default()
                .fg(theme::ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        heading(" Chat"),
        Line::from(Span::styled(
            "  Enter           Send message          Esc        Clear input",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Up/Down         Scroll one line       PgUp/PgDn  Scroll half a page",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  Home/End        Oldest/Newest         Ctrl-w     Delete word",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  : (empty input) Command mode          Ctrl-q     Quit",
            theme::normal_style(),
        )),
        Line::from(""),
        heading(" Try"),
        Line::from(Span::styled(
            "  /catat 15000 makan siang   pengeluaran hari ini   saldo saya",
            theme::normal_style(),
        )),
        Line::from(Span::styled(
            "  laporan 3 bulan terakhir   /setbudget 2000000     bantuan",
            theme::normal_style(),
        )),
        Line::from(""),
        heading(" Commands"),
    ];

    // Build command list dynamically from COMMANDS registry
    let mut seen = std::collections::HashSet::new();
    let mut cmd_lines: Vec<(&str, &str)> = Vec::new();
    for (&name, cmd) in commands::COMMANDS.iter() {
        if name.len() <= 2 {
            continue;
        }
        if seen.insert(cmd.description) {
            cmd_lines.push((name, cmd.description));
        }
    }
    cmd_lines.sort_by_key(|(name, _)| *name);
    for (name, desc) in &cmd_lines {
        help_text.push(Line::from(Span::styled(
            format!("  :{name:<10} {desc}"),
            theme::normal_style(),
        )));
    }

    help_text.push(Line::from(""));
    help_text.push(Line::from(Span::styled(
        " Press any key to close ",
        Style::default().fg(theme::TEXT_DIM),
    )));

    // Center the popup, clamped to terminal height
    let popup_height = (help_text.len() as u16 + 2).min(area.height.saturating_sub(2));
    let popup_width = 72.min(area.width.saturating_sub(4));
    let x = area.x + (area.width.saturating_sub(popup_width)) / 2;
    let y = area.y + (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(x, y, popup_width, popup_height);

    f.render_widget(Clear, popup_area);
    let help = Paragraph::new(help_text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme::ACCENT))
            .style(Style::default().bg(theme::HEADER_BG)),
    );
    f.render_widget(help, popup_area);
}
