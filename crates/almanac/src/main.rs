use anyhow::Result;
use clap::Parser;
use colored::*;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use almanac::catalog::Catalog;
use almanac::session::{SearchSession, Status};
use almanac::source::CatalogSource;
use almanac::view;

#[derive(Parser)]
#[command(name = "almanac")]
#[command(
  about = "Almanac - New Year 2026 Insights\nBrowse and search a fixed catalog of predictions for the year ahead"
)]
#[command(version)]
struct Cli {
  /// Run a single search and exit
  #[arg(short, long)]
  query: Option<String>,

  /// Simulated service latency in milliseconds (default: 1000)
  #[arg(long)]
  delay_ms: Option<u64>,

  /// Disable colored output
  #[arg(long)]
  no_color: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)).with(filter).init();

  let cli = Cli::parse();
  if cli.no_color {
    colored::control::set_override(false);
  }

  let catalog = Catalog::default_catalog().clone();
  let source = match cli.delay_ms {
    Some(ms) => CatalogSource::with_latency(catalog.clone(), Duration::from_millis(ms)),
    None => CatalogSource::new(catalog.clone()),
  };
  let mut session = SearchSession::new(source, catalog);

  match cli.query {
    Some(query) => run_once(&mut session, &query).await,
    None => run_interactive(&mut session).await,
  }
}

/// One-shot mode: submit a single query, render the outcome, exit
async fn run_once(session: &mut SearchSession<CatalogSource>, query: &str) -> Result<()> {
  view::render_header();

  session.submit(query).await;
  view::render(session);

  // The user-facing message is already on screen as the error banner
  if matches!(session.status(), Status::Error(_)) {
    anyhow::bail!("search did not complete");
  }
  Ok(())
}

/// Interactive mode: each line read is an Enter-submission
async fn run_interactive(session: &mut SearchSession<CatalogSource>) -> Result<()> {
  view::render_header();
  view::render(session);
  println!();

  let stdin = io::stdin();
  loop {
    print!("{} {} ", view::READY_CAPTION.green().bold(), ">".dimmed());
    io::stdout().flush()?;

    let mut line = String::new();
    if stdin.lock().read_line(&mut line)? == 0 {
      break; // EOF
    }

    let input = line.trim_end_matches(['\r', '\n']);
    if input == ":q" || input == ":quit" {
      break;
    }

    println!("{}", view::BUSY_CAPTION.dimmed());
    session.submit(input).await;
    view::render(session);
  }

  Ok(())
}
