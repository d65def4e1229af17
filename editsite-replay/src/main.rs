//! editsite-replay - Replay editor actions through the store
//!
//! Reads one JSON action record per line, dispatches each through the same
//! reducers the editor uses, and prints the resulting state.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use libeditsite::logging::{LogFormat, LoggingConfig};
use libeditsite::store::selectors;
use libeditsite::{Action, Config, EditSiteError, EditSiteState, Store};
use serde_json::{json, Value};

#[derive(Parser, Debug)]
#[command(name = "editsite-replay")]
#[command(version, about = "Replay editor actions through the store")]
#[command(long_about = r#"Replay a JSON-lines stream of editor actions and print the resulting state.

Each non-blank line is one action record such as
    {"type":"SET_TEMPLATE","templateId":"tt1//index"}
Lines starting with '#' are comments. Records with an unknown type leave the
state unchanged.

EXAMPLES:
    # Replay a recorded session
    editsite-replay session.jsonl

    # Pipe actions in
    echo '{"type":"SET_INSERTER_OPEN","isOpen":true}' | editsite-replay --format json

    # Show every snapshot
    editsite-replay --trace session.jsonl

EXIT CODES:
    0 - Success
    1 - I/O error
    2 - Configuration error
    3 - Invalid input (a line is not JSON)
"#)]
struct Cli {
    /// Action stream (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text", value_name = "FORMAT")]
    #[arg(value_parser = ["text", "json"])]
    format: String,

    /// Print a snapshot after every action instead of only the final state
    #[arg(long)]
    trace: bool,

    /// Configuration file providing the starting state
    #[arg(short, long, env = "EDITSITE_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    let logging = LoggingConfig::new(LogFormat::Text, level.to_string(), cli.verbose);
    if let Err(e) = logging.init() {
        eprintln!("Warning: logging disabled: {}", e);
    }

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<EditSiteError>())
        .map(EditSiteError::exit_code)
        .unwrap_or(1)
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
    .context("Failed to load configuration")?;

    let mut store = Store::with_state(config.initial_state());

    let reader: Box<dyn BufRead> = match &cli.input {
        Some(path) => {
            let file = File::open(path)
                .map_err(EditSiteError::from)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            Box::new(BufReader::new(file))
        }
        None => Box::new(io::stdin().lock()),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut replayed = 0usize;
    let mut changed = 0usize;

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(EditSiteError::from).context("Failed to read input")?;
        let Some(action) = parse_line(&line, index + 1)? else {
            continue;
        };

        let kind = action.kind();
        let did_change = store.dispatch(action);
        replayed += 1;
        if did_change {
            changed += 1;
        }

        if cli.trace {
            write_snapshot(&mut out, &cli.format, index + 1, kind, did_change, store.state())?;
        }
    }

    tracing::info!(replayed, changed, "Replay finished");

    if !cli.trace {
        match cli.format.as_str() {
            "json" => writeln!(out, "{}", serde_json::to_string_pretty(store.state().as_ref())?)?,
            _ => write!(out, "{}", render_text(store.state()))?,
        }
    }

    Ok(())
}

/// Decode one input line; blank lines and `#` comments yield `None`
fn parse_line(line: &str, line_number: usize) -> Result<Option<Action>, EditSiteError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let value: Value = serde_json::from_str(trimmed).map_err(|e| {
        EditSiteError::InvalidInput(format!("line {}: not valid JSON: {}", line_number, e))
    })?;
    Ok(Some(Action::from_value(value)))
}

fn write_snapshot(
    out: &mut impl Write,
    format: &str,
    line_number: usize,
    kind: &str,
    changed: bool,
    state: &EditSiteState,
) -> Result<()> {
    match format {
        "json" => {
            let record = json!({
                "line": line_number,
                "action": kind,
                "changed": changed,
                "state": state,
            });
            writeln!(out, "{}", record)?;
        }
        _ => {
            let marker = if changed { "changed" } else { "unchanged" };
            writeln!(out, "line {}: {} ({})", line_number, kind, marker)?;
            write!(out, "{}", indent(&render_text(state)))?;
        }
    }
    Ok(())
}

fn indent(text: &str) -> String {
    text.lines().map(|line| format!("  {}\n", line)).collect()
}

fn or_dash(value: Option<impl ToString>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Human-readable summary of a snapshot
fn render_text(state: &EditSiteState) -> String {
    let open = |is_open: bool| if is_open { "open" } else { "closed" };

    let features: Vec<String> = state
        .preferences
        .features
        .iter()
        .map(|(name, enabled)| format!("{}={}", name, enabled))
        .collect();

    let settings = serde_json::to_string(selectors::get_settings(state))
        .unwrap_or_else(|_| "{}".to_string());

    let page = selectors::get_page(state).map(|page| match &page.path {
        Some(path) => path.clone(),
        None => "(no path)".to_string(),
    });

    let lines = [
        format!("deviceType: {}", selectors::get_preview_device_type(state)),
        format!("templateType: {}", selectors::get_edited_post_type(state)),
        format!("editedPostId: {}", or_dash(selectors::get_edited_post_id(state))),
        format!("templateId: {}", or_dash(state.template_id.as_ref())),
        format!("templatePartId: {}", or_dash(state.template_part_id.as_ref())),
        format!("page: {}", or_dash(page)),
        format!("homeTemplateId: {}", or_dash(selectors::get_home_template_id(state))),
        format!(
            "navigationPanel: {} ({})",
            selectors::get_navigation_panel_active_menu(state),
            open(selectors::get_navigation_is_open(state))
        ),
        format!("blockInserterPanel: {}", open(selectors::get_inserter_is_open(state))),
        format!("features: {}", features.join(" ")),
        format!("settings: {}", settings),
    ];

    lines.iter().map(|line| format!("{}\n", line)).collect()
}
