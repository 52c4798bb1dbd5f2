use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono::Local;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::logging::init_logging;
use crate::clipboard::copy_output;
use crate::config::{FileConfig, Overrides, Settings, load_file_config};
use crate::models::{ChatSession, ParsedChat, Role};
use crate::parsers::{DateOrder, ParseOptions, ParseStats, parse_with_report};
use crate::prompts::{
    ToolType, build_tool_prompt, format_conversation, summarize_conversation_prompt,
};
use crate::render::{format_last_seen, render_transcript, sanitize_for_terminal, share_link};
use crate::utils::{STDIN_PATH, discover_exports, format_path_with_tilde, read_export};

#[derive(Parser)]
#[command(name = "chat-export-parser")]
#[command(version)]
#[command(about = "Import and inspect WhatsApp chat exports", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// More log output on stderr (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to a config file (defaults to <config dir>/chat-export-parser/config.toml)
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

/// Options that change how exports are read
#[derive(Args, Debug, Clone, Default)]
pub struct ParseFlags {
    /// Extra sender name that means "me" (repeatable)
    #[arg(long = "self-alias", value_name = "NAME")]
    pub self_aliases: Vec<String>,

    /// Date field order in header lines
    #[arg(long, value_enum)]
    pub date_order: Option<DateOrder>,

    /// Chat name used when only your own messages are present
    #[arg(long, value_name = "NAME")]
    pub placeholder_name: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse exports and print them as a transcript or JSON
    Parse {
        /// Export files or directories; `-` reads stdin
        #[arg(required = true, value_name = "PATHS")]
        paths: Vec<PathBuf>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Transcript width in columns
        #[arg(long)]
        width: Option<usize>,

        /// Also copy the output to the clipboard
        #[arg(long)]
        copy: bool,

        #[command(flatten)]
        parse: ParseFlags,
    },
    /// Show message statistics for exports
    Stats {
        #[arg(required = true, value_name = "PATHS")]
        paths: Vec<PathBuf>,

        #[command(flatten)]
        parse: ParseFlags,
    },
    /// Build an assistant prompt from an export
    Prompt {
        #[arg(value_enum)]
        tool: PromptKind,

        /// Export file; `-` reads stdin
        path: PathBuf,

        /// Use this text instead of picking a message from the chat
        #[arg(long)]
        text: Option<String>,

        /// Context for reply suggestions (defaults to the chat name)
        #[arg(long)]
        context: Option<String>,

        #[arg(long)]
        copy: bool,

        #[command(flatten)]
        parse: ParseFlags,
    },
    /// Print a wa.me link that opens WhatsApp with the text prefilled
    Share {
        text: String,

        #[arg(long)]
        copy: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Chat bubbles for the terminal
    Text,
    /// Parsed messages as JSON
    Json,
    /// Chat-list sessions as JSON
    Session,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PromptKind {
    /// Rewrite your last message professionally
    Rewrite,
    /// Translate the last message
    Translate,
    /// One-sentence summary of the conversation
    Summarize,
    /// Reply ideas for the other side's last message
    ReplySuggestion,
    /// Structured summary of the whole conversation
    SummarizeChat,
}

/// One successfully imported export
struct Imported {
    source: PathBuf,
    chat: ParsedChat,
    stats: ParseStats,
}

#[derive(Serialize)]
struct JsonChat<'a> {
    source: String,
    #[serde(flatten)]
    chat: &'a ParsedChat,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let Some(command) = cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    let file_config = load_file_config(cli.config.as_deref())?;

    match command {
        Commands::Parse { paths, format, width, copy, parse } => {
            let settings = resolve_settings(file_config, parse, width);
            let output = parse_command(&paths, format, &settings)?;
            emit(&output, copy)
        }
        Commands::Stats { paths, parse } => {
            let settings = resolve_settings(file_config, parse, None);
            print!("{}", stats_command(&paths, &settings)?);
            Ok(())
        }
        Commands::Prompt { tool, path, text, context, copy, parse } => {
            let settings = resolve_settings(file_config, parse, None);
            let output = prompt_command(tool, &path, text.as_deref(), context.as_deref(), &settings)?;
            emit(&output, copy)
        }
        Commands::Share { text, copy } => emit(&share_link(&text), copy),
    }
}

fn resolve_settings(
    file_config: FileConfig,
    flags: ParseFlags,
    width: Option<usize>,
) -> Settings {
    Settings::resolve(
        file_config,
        Overrides {
            self_aliases: flags.self_aliases,
            date_order: flags.date_order,
            placeholder_name: flags.placeholder_name,
            width,
        },
    )
}

fn emit(output: &str, copy: bool) -> Result<()> {
    if output.ends_with('\n') {
        print!("{}", output);
    } else {
        println!("{}", output);
    }
    if copy {
        copy_output(output)?;
        eprintln!("Copied to clipboard");
    }
    Ok(())
}

fn import_one(path: &Path, options: &ParseOptions) -> Result<Imported> {
    let text = read_export(path)?;
    match parse_with_report(&text, options) {
        (Some(chat), stats) => Ok(Imported { source: path.to_path_buf(), chat, stats }),
        (None, _) => bail!("No messages found in {}", display_source(path)),
    }
}

/// Parse every export in parallel, keeping input order.
///
/// Individual failures are logged and skipped; the run fails only when nothing
/// could be imported.
fn import_all(paths: &[PathBuf], settings: &Settings) -> Result<Vec<Imported>> {
    let files = discover_exports(paths)?;
    let options = settings.parse_options();

    if let [single] = files.as_slice() {
        return Ok(vec![import_one(single, &options)?]);
    }

    let results: Vec<Result<Imported>> =
        files.par_iter().map(|path| import_one(path, &options)).collect();

    let total = results.len();
    let mut imported = Vec::with_capacity(total);
    for result in results {
        match result {
            Ok(chat) => imported.push(chat),
            Err(e) => warn!("Skipping export: {:#}", e),
        }
    }

    if imported.is_empty() {
        bail!("None of the {} exports could be imported", total);
    }
    info!(imported = imported.len(), total, "imported exports");

    Ok(imported)
}

fn display_source(path: &Path) -> String {
    if path.as_os_str() == STDIN_PATH {
        "<stdin>".to_string()
    } else {
        format_path_with_tilde(path)
    }
}

pub fn parse_command(paths: &[PathBuf], format: OutputFormat, settings: &Settings) -> Result<String> {
    let imported = import_all(paths, settings)?;

    match format {
        OutputFormat::Text => {
            let rendered: Vec<String> =
                imported.iter().map(|i| render_transcript(&i.chat, settings.width)).collect();
            Ok(rendered.join("\n"))
        }
        OutputFormat::Json => {
            let chats: Vec<JsonChat<'_>> = imported
                .iter()
                .map(|i| JsonChat { source: display_source(&i.source), chat: &i.chat })
                .collect();
            serde_json::to_string_pretty(&chats).context("Failed to serialize chats")
        }
        OutputFormat::Session => {
            let sessions: Vec<ChatSession> =
                imported.into_iter().map(|i| ChatSession::from_parsed(i.chat)).collect();
            serde_json::to_string_pretty(&sessions).context("Failed to serialize sessions")
        }
    }
}

pub fn stats_command(paths: &[PathBuf], settings: &Settings) -> Result<String> {
    let imported = import_all(paths, settings)?;
    let now = Local::now().naive_local();

    let blocks: Vec<String> = imported
        .iter()
        .map(|item| {
            let chat = &item.chat;
            let mut lines = vec![
                format!("Chat: {}", sanitize_for_terminal(&chat.name)),
                "================================".to_string(),
                format!("Source: {}", display_source(&item.source)),
                format!("Total messages: {}", chat.len()),
                format!("  From you: {}", chat.count_by_role(Role::SelfSender)),
                format!("  From others: {}", chat.count_by_role(Role::Other)),
                format!("Continuation lines: {}", item.stats.continuation_lines),
                format!("Skipped lines: {}", item.stats.skipped_lines),
                format!("Fallback timestamps: {}", item.stats.fallback_timestamps),
                format!("Date order: {}", date_order_label(item.stats.date_order)),
            ];

            if let Some(first) = chat.messages.first() {
                lines.push(format!("First message: {}", first.timestamp.format("%Y-%m-%d %H:%M:%S")));
            }
            if let Some(last) = chat.last_message() {
                lines.push(format!(
                    "Last message: {} ({})",
                    last.timestamp.format("%Y-%m-%d %H:%M:%S"),
                    format_last_seen(&last.timestamp, &now)
                ));
            }

            lines.join("\n") + "\n"
        })
        .collect();

    Ok(blocks.join("\n"))
}

fn date_order_label(order: DateOrder) -> &'static str {
    match order {
        DateOrder::MonthFirst => "month-first",
        DateOrder::DayFirst => "day-first",
        DateOrder::Auto => "auto",
    }
}

pub fn prompt_command(
    kind: PromptKind,
    path: &Path,
    text: Option<&str>,
    context: Option<&str>,
    settings: &Settings,
) -> Result<String> {
    let imported = import_one(path, &settings.parse_options())?;
    let chat = &imported.chat;

    let tool = match kind {
        PromptKind::SummarizeChat => {
            return summarize_conversation_prompt(&chat.messages)
                .context("Nothing to summarize");
        }
        PromptKind::Rewrite => ToolType::Rewrite,
        PromptKind::Translate => ToolType::Translate,
        PromptKind::Summarize => ToolType::Summarize,
        PromptKind::ReplySuggestion => ToolType::ReplySuggestion,
    };

    let input = match text {
        Some(text) => text.to_string(),
        None => tool_input(tool, chat)?,
    };
    let default_context = format!("Chat with {}", chat.name);
    let context = context.unwrap_or(default_context.as_str());

    Ok(build_tool_prompt(tool, &input, Some(context)))
}

/// Pick the text a tool works on when none was given explicitly.
fn tool_input(tool: ToolType, chat: &ParsedChat) -> Result<String> {
    let last_from = |role: Role| chat.messages.iter().rev().find(|m| m.role == role);

    let message = match tool {
        ToolType::Rewrite => last_from(Role::SelfSender)
            .context("No message from you to rewrite; pass --text")?,
        ToolType::ReplySuggestion => last_from(Role::Other)
            .context("No message from the other side to reply to; pass --text")?,
        ToolType::Translate => chat.last_message().context("Chat has no messages")?,
        ToolType::Summarize => {
            return Ok(format_conversation(&chat.messages));
        }
    };

    Ok(message.text.clone())
}
