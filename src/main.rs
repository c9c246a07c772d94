mod cli;
mod settings;

use anyhow::{Context, Result, bail};
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use quickopen::{FilePicker, NavigationHistory, RankOptions, logging, scan, search};
use settings::ResolvedConfig;

fn main() -> Result<()> {
    logging::initialize();
    let cli = parse_cli();

    let resolved = settings::load(&cli)?;

    if cli.print_config {
        resolved.print_summary();
    }

    if let Some(path) = cli.record.clone() {
        return record_opened_file(&resolved, path);
    }

    let query = cli.query.clone().unwrap_or_default();
    run_query(cli.output, resolved, &query)
}

/// Append a just-opened file to the navigation history.
fn record_opened_file(settings: &ResolvedConfig, path: String) -> Result<()> {
    let history_file = &settings.picker.history_file;
    let mut history = NavigationHistory::load(history_file, settings.picker.history_size)
        .with_context(|| format!("failed to load history from {}", history_file.display()))?;
    history.record(path);
    history
        .save(history_file)
        .with_context(|| format!("failed to save history to {}", history_file.display()))?;
    Ok(())
}

/// Scan the root, rank the query against history and search results, and
/// print the outcome in the chosen format.
fn run_query(format: OutputFormat, settings: ResolvedConfig, query: &str) -> Result<()> {
    let history =
        NavigationHistory::load(&settings.picker.history_file, settings.picker.history_size)
            .with_context(|| {
                format!(
                    "failed to load history from {}",
                    settings.picker.history_file.display()
                )
            })?;

    let data = scan(&settings.root, &settings.filesystem);
    let worker = search::spawn(data);
    let sessions = worker.sessions();
    let picker = FilePicker::new(
        history,
        worker,
        sessions,
        RankOptions {
            limit: settings.picker.limit,
        },
    );

    let Some(items) = picker.rank(query)? else {
        // A one-shot run has no competing sessions, so a superseded result
        // indicates a logic error rather than an expected cancellation.
        bail!("ranking session was superseded unexpectedly");
    };

    match format {
        OutputFormat::Plain => print_plain(&items),
        OutputFormat::Json => print_json(&items)?,
    }

    Ok(())
}
