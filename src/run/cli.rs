use anyhow::{Context, Result};
use chrono::Local;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::bot::Bot;
use crate::config::Config;
use crate::db::Storage;
use crate::export;

pub(crate) fn as_cli(args: &[String], bot: &Bot<impl Storage>, config: &Config) -> Result<()> {
    match args[1].as_str() {
        "say" | "s" => cli_say(&args[2..], bot, config),
        "repl" => {
            let stdin = std::io::stdin();
            repl(bot, config, stdin.lock(), std::io::stdout())
        }
        "export" => cli_export(&args[2..], bot, config),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finbot {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinBot - chat bookkeeping for short money messages");
    println!();
    println!("Usage: finbot [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive chat");
    println!("  say <message...>              Send one message and print the reply");
    println!("  repl                          Chat line by line on stdin (exit to stop)");
    println!("  export [path]                 Export your transactions to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  FINBOT_DB, FINBOT_EXPORT_DIR, FINBOT_USER, FINBOT_NAME, FINBOT_LOG");
}

fn cli_say(args: &[String], bot: &Bot<impl Storage>, config: &Config) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: finbot say <message>");
    }
    let message = args.join(" ");
    let reply = bot.interpret(&message, &config.user);
    println!("{}", super::reply_text(bot, reply, &config.export_dir));
    Ok(())
}

/// Read messages line by line until EOF or `exit`/`quit`, writing each reply
/// followed by a blank line.
pub(crate) fn repl(
    bot: &Bot<impl Storage>,
    config: &Config,
    input: impl BufRead,
    mut out: impl Write,
) -> Result<()> {
    write!(out, "> ")?;
    out.flush()?;
    for line in input.lines() {
        let line = line.context("Failed to read input")?;
        let message = line.trim();
        if matches!(message, "exit" | "quit") {
            break;
        }
        if !message.is_empty() {
            let reply = bot.interpret(message, &config.user);
            writeln!(out, "{}\n", super::reply_text(bot, reply, &config.export_dir))?;
        }
        write!(out, "> ")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}

fn cli_export(args: &[String], bot: &Bot<impl Storage>, config: &Config) -> Result<()> {
    let output_path = args
        .first()
        .filter(|a| !a.starts_with('-'))
        .map(|a| PathBuf::from(shellexpand(a)))
        .unwrap_or_else(|| {
            export::default_export_path(&config.export_dir, &config.user.id, Local::now())
        });

    let count = super::export_to(bot.storage(), &config.user.id, &output_path)?;
    if count == 0 {
        println!("No transactions for {}", config.user.id);
    } else {
        println!("Exported {count} transactions to {}", output_path.display());
    }
    Ok(())
}

pub(crate) fn shellexpand(path: &str) -> String {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = std::env::var("HOME").unwrap_or_else(|_| ".".into());
        format!("{home}/{rest}")
    } else {
        path.to_string()
    }
}
