//! solidex - SOLID principle examples with highlighted code.
//!
//! # Usage
//!
//! ```bash
//! solidex list
//! solidex render s --variant good
//! solidex open /principles/o/bad-example
//! solidex preview snippet.ts --highlight 2-4 --watch
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;

use solidex::catalog::{self, Catalog, DEFAULT_LANGUAGE, Variant};
use solidex::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, parse_flag_tokens, save_config_flags,
};
use solidex::highlight::{Highlighter, default_highlighter, set_background_mode};
use solidex::navigation::{self, Page, Route};
use solidex::perf;
use solidex::render::{
    MemoryRegion, OutputRegion, SnippetInput, SnippetRenderer, render_example,
};
use solidex::watcher::FileWatcher;

/// Browse SOLID principle examples with syntax-highlighted snippets
#[derive(Parser, Debug)]
#[command(name = "solidex", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Syntax highlight theme background
    #[arg(long, value_enum, global = true)]
    theme: Option<ThemeMode>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Log timing of catalog and grammar loading
    #[arg(long, global = true)]
    perf: bool,

    /// Write render events (applies, coalesced updates, fallbacks) to a file
    #[arg(long, value_name = "PATH", global = true)]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all principles
    List,
    /// Show a principle's description and which examples it has
    Show { id: String },
    /// Render the highlighted snippets of one example
    Render {
        id: String,
        #[arg(short, long, value_enum, default_value = "bad")]
        variant: Variant,
    },
    /// Render whatever a route path points to, e.g. /principles/s/good-example
    Open { path: String },
    /// Highlight a source file
    Preview {
        #[arg(value_name = "FILE")]
        file: PathBuf,
        /// Grammar tag (defaults to typescript)
        #[arg(short, long)]
        language: Option<String>,
        /// Lines to emphasize, e.g. "3,7-9"
        #[arg(long)]
        highlight: Option<String>,
        /// Re-render when the file changes
        #[arg(short, long)]
        watch: bool,
    },
}

fn main() -> Result<()> {
    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        load_config_flags(&global_path)?.union(&load_config_flags(&local_path)?)
    };
    let effective = file_flags.union(&cli_flags);

    let mut filter =
        tracing_subscriber::EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into());
    if effective.perf {
        filter = filter.add_directive("solidex::perf=info".parse()?);
    }
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    perf::set_enabled(effective.perf);
    if effective.perf {
        tracing::info!(target: "solidex::perf", ?effective, "effective configuration");
    }
    let debug_log = effective
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("SOLIDEX_RENDER_DEBUG_LOG").map(PathBuf::from));
    if let Err(err) = perf::set_debug_log_path(debug_log.as_deref()) {
        tracing::warn!(%err, path = ?debug_log, "failed to open render debug log");
    }
    set_background_mode(effective.theme.and_then(ThemeMode::background));

    let catalog = catalog::builtin();
    let highlighter = default_highlighter();
    let json = effective.json;

    match cli.command.unwrap_or(Command::List) {
        Command::List => print_list(catalog, json),
        Command::Show { id } => show(catalog, &id, json),
        Command::Render { id, variant } => {
            let page = navigation::resolve(catalog, &Route::example(id.as_str(), variant));
            print_page(catalog, highlighter, &page, Some(&id), json)
        }
        Command::Open { path } => {
            let route = Route::parse(&path);
            let requested = match &route {
                Route::Example { id, .. } => Some(id.as_str()),
                Route::Home => None,
            };
            let page = navigation::resolve(catalog, &route);
            print_page(catalog, highlighter, &page, requested, json)
        }
        Command::Preview {
            file,
            language,
            highlight,
            watch,
        } => {
            let language = language
                .or(effective.language)
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
            preview(highlighter, &file, &language, highlight.as_deref(), watch, json)
        }
    }
}

fn print_list(catalog: &Catalog, json: bool) -> Result<()> {
    if json {
        let entries: Vec<_> = catalog
            .principles()
            .iter()
            .map(|p| json!({ "id": p.id, "name": p.name, "description": p.description }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for principle in catalog.principles() {
        println!("{:<3} {}", principle.id, principle.name);
    }
    Ok(())
}

fn show(catalog: &Catalog, id: &str, json: bool) -> Result<()> {
    let Some(principle) = catalog.find_by_id(id) else {
        eprintln!("No principle '{id}'.");
        return print_list(catalog, json);
    };
    if json {
        println!("{}", serde_json::to_string_pretty(principle)?);
        return Ok(());
    }
    println!("{}\n", principle.full_name);
    println!("{}\n", principle.description);
    println!("How we demonstrate it: {}\n", principle.how_to_demonstrate);
    for variant in [Variant::Bad, Variant::Good] {
        let status = principle
            .example(variant)
            .map_or("not written yet", |example| {
                example.title.as_deref().unwrap_or("untitled")
            });
        println!("  {}: {status}", Route::example(principle.id.as_str(), variant).path());
    }
    Ok(())
}

fn print_page(
    catalog: &Catalog,
    highlighter: &Highlighter,
    page: &Page<'_>,
    requested: Option<&str>,
    json: bool,
) -> Result<()> {
    let (principle, variant, example) = match *page {
        Page::Home(_) => {
            if let Some(id) = requested {
                eprintln!("No principle '{id}'.");
            }
            return print_list(catalog, json);
        }
        Page::Example {
            principle,
            variant,
            example,
        } => (principle, variant, example),
    };

    let rendered = match example {
        Some(example) => render_example(highlighter, example)?,
        None => Vec::new(),
    };

    if json {
        let value = json!({
            "id": principle.id,
            "variant": variant,
            "title": example.and_then(|e| e.title.as_deref()),
            "description": example.and_then(|e| e.description.as_deref()),
            "snippets": rendered,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("{} ({variant})", principle.full_name);
    let Some(example) = example else {
        println!("\nNo {variant} has been written for this principle yet.");
        return Ok(());
    };
    if let Some(title) = &example.title {
        println!("\n{title}");
    }
    if let Some(description) = &example.description {
        println!("{description}");
    }
    for item in &rendered {
        println!();
        println!("{}", item.output.markup);
        if let Some(explanation) = &item.snippet.explanation {
            println!("\n{explanation}");
        }
    }
    Ok(())
}

fn preview(
    highlighter: &Highlighter,
    file: &Path,
    language: &str,
    highlight: Option<&str>,
    watch: bool,
    json: bool,
) -> Result<()> {
    let read = || {
        std::fs::read_to_string(file)
            .with_context(|| format!("Failed to read {}", file.display()))
    };

    let mut renderer = SnippetRenderer::new(highlighter);
    renderer.mount(MemoryRegion::latest_only())?;
    renderer.update(SnippetInput::new(read()?, language, highlight))?;
    if renderer.flush()? {
        print_region(renderer.region(), json)?;
    }

    if watch {
        let mut watcher = FileWatcher::new(file, Duration::from_millis(200))
            .with_context(|| format!("Failed to watch {}", file.display()))?;
        loop {
            std::thread::sleep(Duration::from_millis(100));
            if !watcher.take_change_ready() {
                continue;
            }
            match read() {
                Ok(code) => {
                    renderer.update(SnippetInput::new(code, language, highlight))?;
                }
                Err(err) => tracing::warn!(%err, "skipping unreadable change"),
            }
            if renderer.flush()? {
                print_region(renderer.region(), json)?;
            }
        }
    }

    renderer.unmount()?;
    Ok(())
}

fn print_region(region: Option<&MemoryRegion>, json: bool) -> Result<()> {
    let Some(region) = region else {
        return Ok(());
    };
    if json {
        println!("{}", serde_json::to_string(region.current())?);
    } else {
        println!("{}", region.content());
    }
    Ok(())
}
