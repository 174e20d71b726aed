//! # CLI Layer
//!
//! The CLI layer is the **only** place in the codebase that:
//! - Knows about terminal I/O (stdout, stderr)
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Responsibilities
//!
//! 1. **Argument Parsing**: convert shell arguments into typed commands via clap
//! 2. **Context Setup**: resolve the data directory, load config, start logging
//! 3. **Dispatch**: translate 1-based positions and route to the API
//! 4. **Output Formatting**: hand results to `render`
//!
//! Errors propagate as `anyhow::Error` up to `main`, which prints them and exits
//! with status 1.

use super::render;
use super::setup::{Cli, Commands};
use anyhow::{bail, Context, Result};
use blitzapp::api::BlitzApi;
use blitzapp::autolink;
use blitzapp::commands::CmdResult;
use blitzapp::config::BlitzConfig;
use blitzapp::document::Block;
use blitzapp::init::{initialize, BlitzContext};
use blitzapp::logging::init_logging;
use blitzapp::model::{HotkeySpec, NoteId};
use blitzapp::store::fs_backend::FsBackend;
use blitzapp::store::StorageBackend;
use clap::Parser;
use std::path::Path;

type Api = BlitzApi<FsBackend>;

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let BlitzContext {
        mut api,
        config,
        data_dir,
        config_error,
    } = initialize(cli.data.clone())?;

    init_logging(if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    });
    if let Some(err) = config_error {
        log::warn!(
            "ignoring configuration in {}: {}",
            data_dir.display(),
            err
        );
    }
    if let Some(err) = api.load_error() {
        log::warn!("started from a fresh workspace: {}", err);
    }

    match cli.command.unwrap_or(Commands::List) {
        Commands::List => handle_list(&api),
        Commands::Add { name, icon } => {
            let (_, result) = api.add_note(&name.join(" "), icon.as_deref())?;
            print_result(&api, result);
            Ok(())
        }
        Commands::New => {
            let (_, result) = api.new_note()?;
            print_result(&api, result);
            Ok(())
        }
        Commands::Remove { note } => {
            let result = api.remove_at(to_index(note)?)?;
            print_result(&api, result);
            Ok(())
        }
        Commands::Rename { note, name } => {
            let result = api.rename_at(to_index(note)?, &name.join(" "))?;
            print_result(&api, result);
            Ok(())
        }
        Commands::Select { note } => {
            api.select(to_index(note)?, None)?;
            handle_list(&api)
        }
        Commands::Move { from, to } => {
            let result = api.move_notes(to_index(from)?, to_index(to)?)?;
            print_result(&api, result);
            Ok(())
        }
        Commands::Show { note } => handle_show(&api, note),
        Commands::Write { note, text } => handle_write(&mut api, note, &text.join(" ")),
        Commands::Link { note, path } => {
            let id = target_note(&api, note)?;
            api.edit_note(id, |doc| doc.push(Block::link(path)))?;
            handle_show(&api, note)
        }
        Commands::Drop { note, path } => handle_drop(&mut api, note, &path),
        Commands::Autolink { note } => {
            let id = target_note(&api, note)?;
            if api.autolink_note(id)? {
                handle_show(&api, note)
            } else {
                println!("No links found.");
                Ok(())
            }
        }
        Commands::Settings {
            hotkey,
            hide_on_open,
            check_for_updates,
        } => handle_settings(&mut api, hotkey, hide_on_open, check_for_updates),
        Commands::Config { template } => {
            if template {
                print!("{}", BlitzConfig::template());
            } else {
                print!("{}", render::render_config(&config));
            }
            Ok(())
        }
        Commands::Path => {
            println!("{}", data_dir.display());
            println!("{}", api.backend().record_path().display());
            Ok(())
        }
    }
}

/// Converts a position as typed by the user into a workspace index.
fn to_index(position: usize) -> Result<usize> {
    if position == 0 {
        bail!("Note positions start at 1");
    }
    Ok(position - 1)
}

/// The note at `position`, or the selected note.
fn target_note(api: &Api, position: Option<usize>) -> Result<NoteId> {
    match position {
        Some(position) => Ok(api.note_id(to_index(position)?)?),
        None => match api.workspace().selected_note() {
            Some(note) => Ok(note.id),
            None => bail!("The workspace has no notes; add one with `blitz add <name>`"),
        },
    }
}

fn print_result(api: &Api, result: CmdResult) {
    print!("{}", render::render_messages(&result.messages));
    if result.is_modification() {
        print!("{}", render::render_list(&api.list_notes().listed_notes));
    }
}

fn handle_list(api: &Api) -> Result<()> {
    print!("{}", render::render_list(&api.list_notes().listed_notes));
    Ok(())
}

fn handle_show(api: &Api, position: Option<usize>) -> Result<()> {
    let id = target_note(api, position)?;
    let active = api.open(id)?;
    print!("{}", render::render_document(&active.name, &active.document));
    Ok(())
}

fn handle_write(api: &mut Api, position: Option<usize>, text: &str) -> Result<()> {
    let id = target_note(api, position)?;
    let linked = api.edit_note(id, |doc| {
        doc.push(Block::text(text));
        autolink::apply(doc)
    })?;
    log::debug!("write to {}: autolinked = {}", id, linked);
    handle_show(api, position)
}

fn handle_drop(api: &mut Api, position: Option<usize>, path: &Path) -> Result<()> {
    let id = target_note(api, position)?;
    let path_text = path
        .to_str()
        .with_context(|| format!("Path is not valid UTF-8: {}", path.display()))?;

    let inserted = api.edit_note(id, |doc| {
        let end = doc.block_count();
        doc.insert_dropped_path(end, path_text, |image| std::fs::read(image))
    })?;
    if !inserted {
        bail!("Could not read image {}", path.display());
    }
    handle_show(api, position)
}

fn handle_settings(
    api: &mut Api,
    hotkey: Option<String>,
    hide_on_open: Option<bool>,
    check_for_updates: Option<bool>,
) -> Result<()> {
    let mut messages = Vec::new();
    if let Some(text) = hotkey {
        let spec: HotkeySpec = text.parse()?;
        messages.extend(api.set_hotkey(spec)?.messages);
    }
    if let Some(value) = hide_on_open {
        messages.extend(api.set_hide_on_open(value)?.messages);
    }
    if let Some(value) = check_for_updates {
        messages.extend(api.set_check_for_updates(value)?.messages);
    }

    print!("{}", render::render_messages(&messages));
    print!("{}", render::render_settings(api.workspace()));
    Ok(())
}
