//! Command-line interface for rules-explorer.
//!
//! Lists the rule and assistant configuration files under a project,
//! filtered by a query, or browses them interactively line by line.

use clap::{Parser, ValueEnum};
use rules_explorer::output::{self, format_listing};
use rules_explorer::{
    BinaryDetection, Event, Explorer, ExplorerBuilder, ExplorerOptions, FileDetails, Session,
    Stats,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::exit;

/// rules-explorer — browse .cursor rules, CLAUDE.md and .claude files
#[derive(Parser)]
#[command(name = "rules-explorer", version, about, long_about = None)]
struct Cli {
    /// Case-insensitive substring matched against path and content
    #[arg(default_value = "")]
    query: String,

    /// Root directory (default current dir)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Paths)]
    format: OutputFormat,

    /// Pretty JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Print per-type statistics after the listing
    #[arg(long)]
    stats: bool,

    /// Browse interactively, reading commands from stdin
    #[arg(short, long)]
    interactive: bool,

    /// Binary detection strategy
    #[arg(long, default_value = "none", value_parser = parse_binary_detection)]
    binary_detection: BinaryDetection,

    /// Max depth (unlimited if not set)
    #[arg(long)]
    max_depth: Option<usize>,

    /// Ignore patterns (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// File size limit in bytes (files larger will have content omitted)
    #[arg(long)]
    file_size_limit: Option<u64>,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Honor .gitignore files
    #[arg(long)]
    gitignore: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Paths,
    Json,
    Text,
    Details,
}

impl From<OutputFormat> for output::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Paths => output::OutputFormat::Paths,
            OutputFormat::Json => output::OutputFormat::Json,
            OutputFormat::Text => output::OutputFormat::Text,
            OutputFormat::Details => output::OutputFormat::Details,
        }
    }
}

/// Parse string into BinaryDetection enum.
fn parse_binary_detection(s: &str) -> Result<BinaryDetection, String> {
    match s {
        "simple" => Ok(BinaryDetection::Simple),
        "accurate" => Ok(BinaryDetection::Accurate),
        "none" => Ok(BinaryDetection::None),
        _ => Err(format!("invalid binary detection method: {}", s)),
    }
}

impl Cli {
    fn options(&self) -> ExplorerOptions {
        let mut builder = ExplorerBuilder::new()
            .respect_gitignore(self.gitignore)
            .follow_links(self.follow_links)
            .ignore_patterns(self.ignore_patterns.clone())
            .file_size_limit(self.file_size_limit)
            .binary_detection(self.binary_detection);

        builder = match &self.root {
            Some(root) => builder.root(root),
            None => builder.current_dir(),
        };
        builder = if let Some(depth) = self.max_depth {
            builder.max_depth(depth)
        } else {
            builder.no_limit_depth()
        };

        builder.build()
    }
}

/// A parsed line of interactive input.
enum Command {
    Search(String),
    Next,
    Previous,
    Select(usize),
    Refresh,
    Quit,
    Help,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    match line {
        ":q" | ":quit" => Command::Quit,
        ":n" | ":next" => Command::Next,
        ":p" | ":prev" => Command::Previous,
        ":r" | ":refresh" => Command::Refresh,
        ":h" | ":help" => Command::Help,
        _ => match line.strip_prefix(':').and_then(|n| n.parse().ok()) {
            Some(index) => Command::Select(index),
            None => Command::Search(line.to_string()),
        },
    }
}

const HELP: &str = "\
Type text to filter by path or content (empty line clears the filter).
  :n / :p     next / previous file
  :<index>    select file by index
  :r          reload files from disk
  :q          quit";

#[cfg(feature = "logging")]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    init_logging();

    let mut explorer = Explorer::new(cli.options());
    if let Err(e) = explorer.load_files() {
        eprintln!("Error: {}", e);
        exit(1);
    }

    if cli.interactive {
        run_interactive(explorer, cli.query);
        return;
    }

    run_normal(&explorer, &cli);
}

fn run_normal(explorer: &Explorer, cli: &Cli) {
    let files = explorer.filter_files(&cli.query);
    match output::format_records(&files, cli.format.into(), cli.pretty) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
    if cli.stats {
        println!("\n{}", Stats::collect(explorer.all_files(), files));
    }
}

fn run_interactive(explorer: Explorer, query: String) {
    let mut session = Session::new(explorer);
    // Only Refresh can fail and SearchChanged never does.
    let _ = session.handle(Event::SearchChanged(query));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    if render(&mut handle, &session).is_err() {
        return;
    }
    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        let event = match parse_command(&line) {
            Command::Quit => break,
            Command::Help => {
                if writeln!(handle, "{}", HELP).is_err() {
                    break;
                }
                continue;
            }
            Command::Search(text) => Event::SearchChanged(text),
            Command::Next => Event::SelectNext,
            Command::Previous => Event::SelectPrevious,
            Command::Select(index) => Event::Select(index),
            Command::Refresh => Event::Refresh,
        };
        // A failed refresh is reported through the status line.
        let _ = session.handle(event);
        if render(&mut handle, &session).is_err() {
            eprintln!("Failed to write to stdout");
            exit(1);
        }
    }
}

fn render(out: &mut impl Write, session: &Session) -> io::Result<()> {
    let visible = session.visible();
    writeln!(out)?;
    write!(out, "{}", format_listing(&visible, session.selected_index()))?;
    match session.selected() {
        Some(record) => writeln!(out, "\n{}", FileDetails::from_record(record))?,
        None => writeln!(
            out,
            "\nNo files found\nTotal files loaded: {}\nFilter: '{}'",
            session.explorer().all_files().len(),
            session.query()
        )?,
    }
    writeln!(out, "\n{}", session.status_line())?;
    write!(out, "search> ")?;
    out.flush()
}
