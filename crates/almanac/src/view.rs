//! Terminal rendering of a search session snapshot

use colored::*;

use crate::insight::InsightRecord;
use crate::session::{SearchSession, Status};

/// Shown while no search has produced anything yet
pub const PLACEHOLDER: &str = "Search for insights about New Year 2026";

/// Submit caption while a search is pending
pub const BUSY_CAPTION: &str = "Searching...";

/// Submit caption while ready
pub const READY_CAPTION: &str = "Search";

const WRAP_WIDTH: usize = 80;

/// Print the view header
pub fn render_header() {
  println!("{}", "New Year 2026 Insights".bold());
  println!("{}", "Discover trends, predictions, and insights for the year ahead".dimmed());
  println!();
}

/// Render the current session state: banners, cards, or the placeholder
pub fn render<S>(session: &SearchSession<S>) {
  if let Status::Error(message) = session.status() {
    println!("{} {}", "✗".red().bold(), message.red());
    println!();
  }

  if let Some(notice) = session.notice() {
    println!("{} {}", "!".yellow().bold(), notice.yellow());
    println!();
  }

  if session.is_searching() {
    println!("{}", "Loading insights...".dimmed());
    return;
  }

  if session.results().is_empty() {
    if matches!(session.status(), Status::Idle) {
      println!("{}", PLACEHOLDER.dimmed());
    }
    return;
  }

  for record in session.results() {
    render_card(record);
  }
}

/// One insight card: title, category tag, wrapped body, bullet facts
fn render_card(record: &InsightRecord) {
  println!("{} {}", record.title.blue().bold(), format!("[{}]", record.category).cyan());

  for line in wrap(&record.content, WRAP_WIDTH) {
    println!("{line}");
  }

  if let Some(items) = record.items.as_deref() {
    for item in items {
      let mut lines = wrap(item, WRAP_WIDTH.saturating_sub(4)).into_iter();
      if let Some(first) = lines.next() {
        println!("  {} {first}", "•".yellow());
      }
      for continuation in lines {
        println!("    {continuation}");
      }
    }
  }

  println!();
}

/// Greedy word wrap; words longer than the width get their own line
fn wrap(text: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut current = String::new();

  for word in text.split_whitespace() {
    if current.is_empty() {
      current = word.to_string();
    } else if current.len() + 1 + word.len() <= width {
      current.push(' ');
      current.push_str(word);
    } else {
      lines.push(std::mem::take(&mut current));
      current = word.to_string();
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  lines
}
