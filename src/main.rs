//! Feedscore: feedback quality analyzer CLI

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use feedscore::config::{load_config, CONFIG_FILENAME};
use feedscore::reporter::{ConsoleReporter, JsonReporter};
use feedscore::scorer::QualityScorer;
use feedscore::sentiment::{Lexicon, LexiconAnalyzer};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Feedscore: sentiment-based quality analyzer for student feedback
#[derive(Parser, Debug)]
#[command(name = "feedscore")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Feedback text to analyze (reads --file or stdin when omitted)
    text: Option<String>,

    /// Read feedback from a file instead of the command line
    #[arg(long, short, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Score each non-blank line of the input separately
    #[arg(long)]
    each_line: bool,

    /// Output format as JSON
    #[arg(long, short)]
    json: bool,

    /// Quiet mode (score and tier only)
    #[arg(long, short)]
    quiet: bool,

    /// Minimum quality percentage (exit 1 if below)
    #[arg(long, short)]
    threshold: Option<f64>,

    /// Path to config file (default: search .feedscorerc.json in current dir and parents)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create .feedscorerc.json with the default tier cut-offs
    Init {
        /// Minimum quality percentage (e.g. 60)
        #[arg(long)]
        threshold: Option<f64>,

        /// Directory in which to create config (default: current)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", "Error".red().bold(), e);
            ExitCode::from(2)
        }
    }
}

fn run() -> Result<ExitCode> {
    let args = Args::parse();

    if let Some(Commands::Init { threshold, dir }) = args.command {
        return run_init(threshold, dir.as_deref());
    }

    let work_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config =
        load_config(&work_dir, args.config.as_deref())?.merge_with_cli(args.threshold);
    let thresholds = config.tiers.to_thresholds()?;

    // Lexicon loading happens once, up front; a configured lexicon that
    // cannot be loaded is fatal rather than silently degraded.
    let mut lexicon = Lexicon::default();
    if let Some(ref path) = config.lexicon {
        let user = Lexicon::from_file(path)
            .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
        lexicon.merge(&user);
    }

    let scorer = QualityScorer::with_analyzer(Box::new(LexiconAnalyzer::with_lexicon(lexicon)))
        .with_thresholds(thresholds);

    let input = read_input(&args)?;
    let entries = collect_entries(&input, args.each_line);

    if entries.is_empty() {
        eprintln!(
            "{}: Feedback text is empty; enter some feedback to analyze",
            "Warning".yellow()
        );
        return Ok(ExitCode::from(2));
    }

    let results: Vec<_> = entries.iter().map(|text| scorer.analyze(text)).collect();
    let summary = scorer.summarize(&results);

    if args.json {
        let reporter = JsonReporter::new().pretty();
        if results.len() == 1 {
            println!("{}", reporter.report(&results[0]));
        } else {
            println!("{}", reporter.report_with_summary(&results, &summary));
        }
    } else if args.quiet {
        let reporter = ConsoleReporter::new();
        for result in &results {
            reporter.report_quiet(result);
        }
    } else {
        let reporter = ConsoleReporter::new();
        if results.len() == 1 {
            reporter.report(&results[0]);
        } else {
            reporter.report_many(&results, &summary);
        }
    }

    // Check threshold (config or CLI)
    if let Some(threshold) = config.threshold {
        let percent = if results.len() == 1 {
            results[0].score.percent
        } else {
            summary.average_percent
        };
        if percent < threshold {
            if !args.quiet && !args.json {
                eprintln!(
                    "\n{}: Quality {:.2} is below threshold {:.2}",
                    "Failed".red().bold(),
                    percent,
                    threshold
                );
            }
            return Ok(ExitCode::from(1));
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Resolve the feedback text: positional argument, then --file, then stdin
fn read_input(args: &Args) -> Result<String> {
    if let Some(ref text) = args.text {
        return Ok(text.clone());
    }
    if let Some(ref path) = args.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read feedback file: {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read feedback from stdin")?;
    Ok(buffer)
}

/// Split the input into entries to score. Blank entries are dropped; the
/// scorer itself never sees whitespace-only text.
fn collect_entries(input: &str, each_line: bool) -> Vec<String> {
    if each_line {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    } else if input.trim().is_empty() {
        Vec::new()
    } else {
        vec![input.to_string()]
    }
}

fn run_init(threshold: Option<f64>, dir: Option<&Path>) -> Result<ExitCode> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let dir = dir.unwrap_or(&cwd);
    let config_path = dir.join(CONFIG_FILENAME);

    if config_path.exists() {
        eprintln!(
            "{}: {} already exists; use --dir to write elsewhere or remove it first",
            "Warning".yellow(),
            config_path.display()
        );
        return Ok(ExitCode::SUCCESS);
    }

    let threshold_line = match threshold {
        Some(t) => format!("  \"threshold\": {},\n", t),
        None => String::new(),
    };

    let json = format!(
        r#"{{
{}  "tiers": {{
    "excellent": 80.0,
    "good": 60.0,
    "average": 40.0
  }}
}}
"#,
        threshold_line
    );
    // Users can also add:
    // - "lexicon": "words.json" - extra word-to-valence entries merged over
    //   the built-in table

    std::fs::write(&config_path, json)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    println!(
        "{}: Created {}",
        "Done".green().bold(),
        config_path.display()
    );
    Ok(ExitCode::SUCCESS)
}
