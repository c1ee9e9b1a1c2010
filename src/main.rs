use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use hnstories::config::Config;
use hnstories::logging::{init_tracing, LogTarget};
use hnstories::mvi::Reducer;
use hnstories::search::bundled::framework_items;
use hnstories::search::{
    filter_items, ActionSink, FetchOrchestrator, RequestBuilder, ResultsAction, ResultsReducer,
    ResultsState, SearchRequest, SearchTermState, SEARCH_TERM_KEY,
};
use hnstories::store::{FileStore, KeyValueStore};
use hnstories::ui::app::App;
use hnstories::ui::events::EventHandler;

const TICK_RATE: Duration = Duration::from_millis(250);

#[derive(Debug, Parser)]
#[command(name = "hnstories", version, about = "Search Hacker News stories from the terminal")]
struct Cli {
    /// Path to the config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Set (and remember) the search term before starting
    #[arg(long, value_name = "TERM")]
    term: Option<String>,

    /// Run one search, print the results and exit
    #[arg(long)]
    print: bool,

    /// Use the bundled example data instead of the network
    #[arg(long)]
    offline: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let log_target = if cli.print {
        LogTarget::Stderr
    } else {
        LogTarget::File(config.log_path())
    };
    init_tracing(&config.logging.level, log_target).context("Failed to set up logging")?;

    let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::new(config.store_path()));
    let mut search = SearchTermState::load(store, SEARCH_TERM_KEY, &config.search.default_term);
    if let Some(term) = &cli.term {
        search.set_term(term);
    }
    let builder = config.request_builder()?;

    if cli.print {
        return print_once(&config, &search, &builder, cli.offline);
    }

    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let events = EventHandler::new(TICK_RATE);
    let (fetcher, initial) = if cli.offline {
        (None, ResultsState::with_items(framework_items()))
    } else {
        let fetcher = FetchOrchestrator::new(&config.search, runtime.handle().clone(), events.sink())?;
        (Some(fetcher), ResultsState::default())
    };

    let app = App::new(search, builder, fetcher, initial);
    hnstories::ui::runtime::run(app, events, TICK_RATE)?;
    Ok(ExitCode::SUCCESS)
}

/// Headless mode: one search, results on stdout.
fn print_once(
    config: &Config,
    search: &SearchTermState,
    builder: &RequestBuilder,
    offline: bool,
) -> anyhow::Result<ExitCode> {
    let state = if offline {
        ResultsState::with_items(framework_items())
    } else {
        let Some(request) = builder.build(search.term()) else {
            eprintln!(
                "Search term '{}' is too short; enter at least 2 characters.",
                search.term()
            );
            return Ok(ExitCode::FAILURE);
        };
        fetch_once(config, request)?
    };

    if state.is_error {
        eprintln!("Error loading data.");
        return Ok(ExitCode::FAILURE);
    }

    let mut out = io::stdout().lock();
    if !state.last_queried_term.is_empty() {
        writeln!(out, "Your News about {}", state.last_queried_term)?;
    }
    for item in filter_items(&state.items, search.term()) {
        writeln!(out, "{}", item.title)?;
        if let Some(link) = item.link() {
            writeln!(out, "  {link}")?;
        }
        writeln!(
            out,
            "  by {} | {} likes | {} comments",
            item.author, item.score, item.comment_count
        )?;
    }
    Ok(ExitCode::SUCCESS)
}

/// Drives the orchestrator until the request settles.
fn fetch_once(config: &Config, request: SearchRequest) -> anyhow::Result<ResultsState> {
    let runtime = Runtime::new().context("Failed to start async runtime")?;
    let (tx, mut rx) = mpsc::unbounded_channel::<ResultsAction>();
    let sink: Arc<dyn ActionSink> = Arc::new(tx);
    let fetcher = FetchOrchestrator::new(&config.search, runtime.handle().clone(), sink)?;
    fetcher.trigger(Some(request));
    drop(fetcher);

    let mut state = ResultsState::default();
    while let Some(action) = runtime.block_on(rx.recv()) {
        state = ResultsReducer::reduce(state, action);
        if !state.is_loading {
            break;
        }
    }
    Ok(state)
}
