//! Colorful console output for search progress.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: search start and end
//! - **DEBUG**: every new best mission team
//! - **TRACE**: per-node scores, when `log_node_scores` is set

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect. `RUST_LOG`
/// overrides the default `teamforge_solver=info` filter.
pub fn init() {
    INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("teamforge_solver=info"));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init();
    });
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if !event.metadata().target().starts_with("teamforge_solver") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    score: Option<String>,
    node_count: Option<u64>,
    module_count: Option<u64>,
    duration_ms: Option<u64>,
    nodes: Option<u64>,
    leaves: Option<u64>,
    pruned: Option<u64>,
    units: Option<u64>,
    node: Option<u64>,
    pruning: Option<bool>,
    found: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "score" => self.score = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "node_count" => self.node_count = Some(value),
            "module_count" => self.module_count = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "nodes" => self.nodes = Some(value),
            "leaves" => self.leaves = Some(value),
            "pruned" => self.pruned = Some(value),
            "units" => self.units = Some(value),
            "node" => self.node = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        match field.name() {
            "pruning" => self.pruning = Some(value),
            "found" => self.found = Some(value),
            _ => {}
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "score" => self.score = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "search_start" => format_search_start(v),
        "new_best" => format_new_best(v),
        "node_score" => format_node_score(v),
        "search_end" => format_search_end(v),
        _ => String::new(),
    }
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    let pruning = if v.pruning.unwrap_or(true) {
        "pruning on".bright_green().to_string()
    } else {
        "pruning off".yellow().to_string()
    };

    format!(
        "{} Searching │ {} nodes │ {} modules │ {}",
        "▶".bright_green().bold(),
        count(v.node_count).bright_yellow(),
        count(v.module_count).bright_yellow(),
        pruning
    )
}

fn format_new_best(v: &EventVisitor) -> String {
    format!(
        "{} New best │ {} units │ leaf {} │ {}",
        "★".bright_yellow(),
        count(v.units).white(),
        count(v.leaves).bright_black(),
        format_score(v.score.as_deref())
    )
}

fn format_node_score(v: &EventVisitor) -> String {
    format!(
        "  {} Node {} │ {} units │ {}",
        "·".bright_black(),
        count(v.node).white(),
        count(v.units).white(),
        format_score(v.score.as_deref()).bright_black()
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let status = if v.found.unwrap_or(false) {
        "TEAM FOUND".bright_green().bold().to_string()
    } else {
        "NO VALID TEAM".bright_red().bold().to_string()
    };

    format!(
        "{} Search complete │ {} │ {} nodes │ {} leaves │ {} pruned │ {} │ {}",
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes).white(),
        count(v.leaves).white(),
        count(v.pruned).bright_magenta(),
        format_score(v.score.as_deref()),
        status
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

// Colors the leading total; the tier breakdown stays plain.
fn format_score(score: Option<&str>) -> String {
    let score = score.unwrap_or("N/A");
    match score.split_once(' ') {
        Some((total, tiers)) => format!("{} {}", total.bright_green().bold(), tiers),
        None => score.white().to_string(),
    }
}
