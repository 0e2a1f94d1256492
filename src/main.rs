use anyhow::Result;
use clap::{Parser, ValueEnum};
use portal_search::{
    Role, Session, User, WidgetOptions, format_search_result,
    interactive::InteractiveSearch,
    interactive::application::navigation_service::HistoryNavigator,
    interactive::application::search_service::SearchService,
    interactive::domain::models::SearchRequest,
    open_index, telemetry,
};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(
    name = "portal-search",
    version,
    about = "Search articles, opportunities and alumni from the career portal",
    long_about = None
)]
struct Cli {
    /// Search query (case-insensitive substring)
    #[arg(required_unless_present = "interactive")]
    query: Option<String>,

    /// Interactive search-as-you-type mode
    #[arg(short = 'i', long)]
    interactive: bool,

    /// JSON catalog to search instead of the built-in entries
    #[arg(long, env = "PORTAL_SEARCH_CATALOG")]
    catalog: Option<PathBuf>,

    /// Quiet period after typing before a lookup is issued
    #[arg(long, env = "PORTAL_SEARCH_DEBOUNCE_MS", default_value = "200")]
    debounce_ms: u64,

    /// Artificial delay added to every lookup
    #[arg(long, env = "PORTAL_SEARCH_LATENCY_MS", default_value = "0")]
    latency_ms: u64,

    /// Maximum number of results to return
    #[arg(short = 'n', long, env = "PORTAL_SEARCH_MAX_RESULTS", default_value = "20")]
    max_results: usize,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "text")]
    format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Start signed in with this email
    #[arg(long, env = "PORTAL_SEARCH_USER")]
    signed_in_as: Option<String>,

    /// Role of the signed-in user
    #[arg(long, value_enum, default_value = "member", requires = "signed_in_as")]
    role: Role,

    /// Log file for interactive mode
    #[arg(long, env = "PORTAL_SEARCH_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    #[value(name = "jsonl")]
    JsonL,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let options = WidgetOptions {
        debounce_ms: cli.debounce_ms,
        latency_ms: cli.latency_ms,
        max_results: cli.max_results,
        catalog: cli.catalog.clone(),
        verbose: cli.verbose,
        ..WidgetOptions::default()
    };

    if cli.interactive {
        let log_path = cli.log_file.clone().unwrap_or_else(telemetry::default_log_path);
        telemetry::init_file_tracing(&log_path, options.verbose)?;

        let session = match cli.signed_in_as {
            Some(email) => Session::signed_in(User {
                id: email.clone(),
                email,
                role: cli.role,
            }),
            None => Session::anonymous(),
        };

        let index = open_index(&options)?;
        let mut interactive = InteractiveSearch::new(
            &options,
            index,
            session,
            Box::new(HistoryNavigator::default()),
        );
        return interactive.run();
    }

    telemetry::init_tracing(options.verbose);

    let query = cli.query.ok_or_else(|| {
        anyhow::anyhow!("Query argument is required (use --interactive for interactive mode)")
    })?;

    if options.verbose {
        match &options.catalog {
            Some(path) => eprintln!("Searching in: {}", path.display()),
            None => eprintln!("Searching in: built-in catalog"),
        }
        eprintln!("Query: {query:?}");
    }

    let service = SearchService::new(open_index(&options)?, options.max_results);
    let started = Instant::now();
    let response = service.search(SearchRequest {
        id: 1,
        query: query.clone(),
    });
    let duration = started.elapsed();
    let results = response.results.map_err(|e| anyhow::anyhow!("Search failed: {e}"))?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    match cli.format {
        OutputFormat::Text => {
            if results.is_empty() {
                writeln!(handle, "No results found for \"{query}\"")?;
            } else {
                writeln!(handle, "Found {} results:\n", results.len())?;
                for result in &results {
                    writeln!(handle, "{}", format_search_result(result, !cli.no_color))?;
                }
                eprintln!("\n⏱️  Search completed in {}ms", duration.as_millis());
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "query": query,
                "results": results,
                "duration_ms": duration.as_millis(),
                "returned_count": results.len()
            });
            serde_json::to_writer_pretty(&mut handle, &output)?;
            writeln!(&mut handle)?;
        }
        OutputFormat::JsonL => {
            for result in &results {
                serde_json::to_writer(&mut handle, result)?;
                writeln!(&mut handle)?;
            }
            let metadata = serde_json::json!({
                "_metadata": {
                    "query": query,
                    "duration_ms": duration.as_millis(),
                    "returned_count": results.len()
                }
            });
            serde_json::to_writer(&mut handle, &metadata)?;
            writeln!(&mut handle)?;
        }
    }

    Ok(())
}
