use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::Local;

use super::app::App;
use crate::bot::Bot;
use crate::db::Database;
use crate::export;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &Bot<Database>) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit FinBot", cmd_quit, r);
    register_command!("quit", "Quit FinBot", cmd_quit, r);
    register_command!("help", "Show keys and commands", cmd_help, r);
    register_command!("h", "Show keys and commands", cmd_help, r);
    register_command!("clear", "Clear the conversation", cmd_clear, r);
    register_command!(
        "export",
        "Export your transactions to CSV (e.g. :export ~/uang.csv)",
        cmd_export,
        r
    );
    register_command!(
        "e",
        "Export your transactions to CSV (e.g. :e ~/uang.csv)",
        cmd_export,
        r
    );
    register_command!(
        "name",
        "Set the name used in greetings (e.g. :name Budi)",
        cmd_name,
        r
    );
    register_command!(
        "user",
        "Switch to another user id (e.g. :user 6281234)",
        cmd_user,
        r
    );
    register_command!(
        "count",
        "Show how many transactions are recorded",
        cmd_count,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App, bot: &Bot<Database>) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, bot)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _bot: &Bot<Database>) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _bot: &Bot<Database>) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_clear(_args: &str, app: &mut App, _bot: &Bot<Database>) -> anyhow::Result<()> {
    app.clear_messages();
    app.set_status("Conversation cleared");
    Ok(())
}

fn cmd_export(args: &str, app: &mut App, bot: &Bot<Database>) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        export::default_export_path(&app.export_dir, &app.user.id, Local::now())
    } else {
        PathBuf::from(crate::run::shellexpand(args))
    };

    let count = crate::run::export_to(bot.storage(), &app.user.id, &path)?;
    if count == 0 {
        app.set_status(format!("No transactions yet; wrote header to {}", path.display()));
    } else {
        app.set_status(format!("Exported {count} transactions to {}", path.display()));
    }
    Ok(())
}

fn cmd_name(args: &str, app: &mut App, _bot: &Bot<Database>) -> anyhow::Result<()> {
    if args.is_empty() {
        app.user.name = None;
        app.set_status("Name cleared");
    } else {
        app.user.name = Some(args.to_string());
        app.set_status(format!("Name set to {args}"));
    }
    Ok(())
}

fn cmd_user(args: &str, app: &mut App, _bot: &Bot<Database>) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status(format!("Current user: {}", app.user.id));
        return Ok(());
    }
    app.user.id = args.to_string();
    app.clear_messages();
    app.set_status(format!("Switched to user {args}"));
    tracing::info!(user = args, "switched user");
    Ok(())
}

fn cmd_count(_args: &str, app: &mut App, bot: &Bot<Database>) -> anyhow::Result<()> {
    let count = bot.storage().transaction_count(&app.user.id)?;
    app.set_status(format!("{count} transactions recorded for {}", app.user.id));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
