// Editorial search CLI
//
// Purpose: Load the editorial collection, run one search, print the cards
// Usage: editorial_search --category author "kim"

use anyhow::{Context, Result};
use clap::Parser;
use editorial_search::render::labels::section_label;
use editorial_search::render::HtmlFormatter;
use editorial_search::{
    EditorialCollection, OutputFormat, QueryHandler, SearchCategory, SearchConfig, SearchError,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about = "Search editorials by title, author or structure section", long_about = None)]
struct Args {
    /// Search query (case-insensitive substring)
    query: Option<String>,

    /// Category: all, author, title or structure_<key> (default: EDITORIAL_CATEGORY or all)
    #[arg(short, long)]
    category: Option<String>,

    /// Path to the editorial JSON collection (default: EDITORIAL_DATA)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Output format (default: EDITORIAL_FORMAT or text)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// With --format html, emit a standalone page instead of a fragment
    #[arg(long)]
    page: bool,

    /// List the category values available for the collection and exit
    #[arg(long)]
    list_categories: bool,
}

/// Exit status when the query is empty
const EMPTY_QUERY_EXIT: u8 = 2;

fn main() -> Result<ExitCode> {
    // Logs go to stderr so stdout carries only the rendered output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "editorial_search=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let config = SearchConfig::from_env()
        .context("Invalid environment configuration")?
        .with_overrides(args.data, args.format, args.category);

    tracing::debug!("Configuration: {:?}", config);

    let collection = EditorialCollection::load_from_path(&config.data_path)?;

    if args.list_categories {
        print_categories(&collection);
        return Ok(ExitCode::SUCCESS);
    }

    let handler = QueryHandler::new(&collection);
    let query = args.query.unwrap_or_default();

    let outcome = match handler.handle_search(&query, &config.category) {
        Ok(outcome) => outcome,
        Err(err @ SearchError::EmptyQuery) => {
            eprintln!("{}", err);
            return Ok(ExitCode::from(EMPTY_QUERY_EXIT));
        }
    };

    let output = if args.page && config.format == OutputFormat::Html {
        HtmlFormatter::format_page(&outcome)
    } else {
        config
            .format
            .format(&outcome)
            .context("Failed to format search results")?
    };

    print!("{}", output);
    Ok(ExitCode::SUCCESS)
}

fn print_categories(collection: &EditorialCollection) {
    println!("all\ttitle, author or any section");
    println!("author\tauthor");
    println!("title\ttitle");

    for key in collection.structure_keys() {
        println!("{}\t{}", SearchCategory::structure_value(key), section_label(key));
    }
}
