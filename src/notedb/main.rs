use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use notedb::api::{
    CmdMessage, ConfigAction, MessageLevel, NoteFilter, NotePatch, NotesApi, NotesPaths,
};
use notedb::config::NotedbConfig;
use notedb::error::{NoteError, Result};
use notedb::model::{Note, NoteId};
use notedb::store::fs::JsonFileStore;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

const HOME_ENV: &str = "NOTEDB_HOME";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NotesApi<JsonFileStore>,
    default_priority: String,
}

fn run(cli: Cli) -> Result<()> {
    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            text,
            priority,
            time,
            date,
        }) => handle_add(&mut ctx, text, priority, time, date),
        Some(Commands::List { active, done }) => handle_list(&ctx, active, done),
        Some(Commands::View { ids }) => handle_view(&ctx, &ids),
        Some(Commands::Edit {
            id,
            text,
            priority,
            time,
            date,
        }) => {
            let patch = NotePatch {
                text,
                priority,
                time,
                date,
                done: None,
            };
            let result = ctx.api.update_note(id, &patch)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Done { ids }) => {
            let result = ctx.api.complete_notes(&ids)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Undone { ids }) => {
            let result = ctx.api.reopen_notes(&ids)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Delete { ids }) => {
            let result = ctx.api.delete_notes(&ids)?;
            print_messages(&result.messages);
            Ok(())
        }
        Some(Commands::Path) => {
            println!("{}", ctx.api.store().path().display());
            Ok(())
        }
        Some(Commands::Config { key, value }) => handle_config(&ctx, key, value),
        None => handle_list(&ctx, false, false),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("notedb={}", level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn resolve_home() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "notedb", "notedb")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| NoteError::Store("Could not determine a data directory".to_string()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let home = resolve_home()?;
    let config = NotedbConfig::load(&home)?;
    let data_file = match &cli.file {
        Some(path) => path.clone(),
        None => config.data_path(&home),
    };
    debug!(home = %home.display(), data_file = %data_file.display(), "resolved paths");

    let store = JsonFileStore::open(&data_file)?;
    let paths = NotesPaths { home };

    Ok(AppContext {
        api: NotesApi::new(store, paths),
        default_priority: config.default_priority,
    })
}

fn handle_add(
    ctx: &mut AppContext,
    text: Vec<String>,
    priority: Option<String>,
    time: String,
    date: String,
) -> Result<()> {
    let priority = priority.unwrap_or_else(|| ctx.default_priority.clone());
    let note = Note::new(text.join(" "), priority.to_lowercase(), time, date);
    let result = ctx.api.add_note(note)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext, active: bool, done: bool) -> Result<()> {
    let filter = match (active, done) {
        (true, _) => NoteFilter::Active,
        (_, true) => NoteFilter::Done,
        _ => NoteFilter::All,
    };
    let result = ctx.api.list_notes(filter)?;
    print_board(&result.listed_notes);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &AppContext, ids: &[NoteId]) -> Result<()> {
    let result = ctx.api.view_notes(ids)?;
    for (i, note) in result.listed_notes.iter().enumerate() {
        if i > 0 {
            println!("\n--------------------------------\n");
        }
        let state = if note.done { "done".green() } else { "open".yellow() };
        println!("{} {}", format!("#{}", note.id).yellow(), state);
        println!("priority: {}", colored_priority(note));
        println!("when:     {} {}", note.date, note.time);
        println!();
        println!("{}", note.text);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_config(ctx: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    let result = ctx.api.config(action)?;
    if let Some(config) = &result.config {
        for key in NotedbConfig::keys() {
            if let Some(value) = config.get(key) {
                println!("{} = {}", key, value);
            }
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const PRIORITY_WIDTH: usize = 8;
const WHEN_WIDTH: usize = 18;
const DONE_MARKER: &str = "✓";

fn print_board(notes: &[Note]) {
    if notes.is_empty() {
        println!("No notes found.");
        return;
    }

    let mut in_completed = false;
    for note in notes {
        if note.done && !in_completed {
            in_completed = true;
            println!();
            println!("{}", "Completed".dimmed());
        }

        let marker = if note.done { DONE_MARKER } else { " " };
        let idx_str = format!("{:>4}. ", note.id);
        let when = format!("{} {}", note.date, note.time);
        let when = when.trim();

        let fixed_width = 2 + idx_str.width() + PRIORITY_WIDTH + WHEN_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let first_line = note.text.lines().next().unwrap_or_default();
        let text = truncate_to_width(first_line, available);
        let padding = available.saturating_sub(text.width());

        let priority = format!("{:<width$}", note.priority, width = PRIORITY_WIDTH);
        let priority = match note.priority_rank() {
            3 => priority.red(),
            2 => priority.yellow(),
            _ => priority.normal(),
        };
        let text = if note.done {
            text.dimmed().strikethrough()
        } else {
            text.normal()
        };

        println!(
            "{} {}{}{}{}{}",
            marker.green(),
            idx_str.yellow(),
            priority,
            text,
            " ".repeat(padding),
            format!("{:>width$}", when, width = WHEN_WIDTH).dimmed()
        );
    }
}

fn colored_priority(note: &Note) -> ColoredString {
    match note.priority_rank() {
        3 => note.priority.red(),
        2 => note.priority.yellow(),
        _ => note.priority.normal(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
