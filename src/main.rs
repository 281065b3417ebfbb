use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use pathmark::highlight::HighlightPath;
use pathmark::{Augmenter, PrefixClassifier, report};

#[derive(Parser)]
#[command(
    name = "pathmark",
    version,
    about = "Add category styling and path highlights to Mermaid flowcharts"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    file: Option<PathBuf>,

    /// Path to highlight, e.g. "S1 -> go -> D1 -> yes -> E1" (repeatable)
    #[arg(long = "path", short = 'p')]
    paths: Vec<String>,

    /// File with one path per line; `#` starts a comment
    #[arg(long)]
    paths_file: Option<PathBuf>,

    /// First character marking start nodes
    #[arg(long, default_value_t = 'S')]
    start_prefix: char,

    /// First character marking decision nodes
    #[arg(long, default_value_t = 'D')]
    decision_prefix: char,

    /// First character marking ending nodes
    #[arg(long, default_value_t = 'E')]
    ending_prefix: char,

    /// Print the edge index and node categories as a table
    #[arg(long, conflicts_with_all = ["json", "paths", "paths_file", "strict"])]
    report: bool,

    /// Print the edge index and node categories as JSON
    #[arg(long, conflicts_with_all = ["paths", "paths_file", "strict"])]
    json: bool,

    /// Fail if a path step does not match any labeled edge
    #[arg(long)]
    strict: bool,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        eprintln!("ERROR: {e:#}");
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

fn run(cli: Cli) -> Result<()> {
    let source = pathmark::read_source(cli.file.as_deref()).context("loading diagram")?;

    let mut paths: Vec<HighlightPath> = cli.paths.iter().map(|p| HighlightPath::parse(p)).collect();
    if let Some(file) = &cli.paths_file {
        paths.extend(pathmark::read_paths(file).context("loading paths")?);
    }

    let classifier =
        PrefixClassifier::new(cli.start_prefix, cli.decision_prefix, cli.ending_prefix)?;
    let augmenter = Augmenter::new().with_classifier(classifier);

    if cli.report || cli.json {
        let index = augmenter.index(&source);
        if cli.json {
            println!("{}", report::render_json(&index, true)?);
        } else {
            print!("{}", report::render_table(&index));
        }
        return Ok(());
    }

    let augmented = augmenter.augment(&source, &paths);
    info!(
        edges = augmented.index.edges.len(),
        paths = paths.len(),
        "augmented diagram"
    );
    for miss in &augmented.unresolved {
        warn!(
            "path {} step {}: no labeled edge `{}`",
            miss.path + 1,
            miss.step + 1,
            miss.key
        );
    }
    if cli.strict {
        pathmark::ensure_resolved(&augmented)?;
    }

    print!("{}", augmented.text);
    Ok(())
}
