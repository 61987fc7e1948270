//! docrank CLI - rank PDF pages against a persona and job description

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use docrank::analysis::{analyze_document, PageScorer};
use docrank::input::{JOB_FILE, PERSONA_FILE};
use docrank::render::{to_summary, write_result};
use docrank::{
    AnalyzeOptions, Analyzer, DocumentSet, ErrorMode, JsonFormat, KeywordSource, LopdfSource,
    RunInputs, TextSource,
};

/// Output file name used when none is given.
const DEFAULT_OUTPUT_NAME: &str = "challenge1b_output.json";

#[derive(Parser)]
#[command(name = "docrank")]
#[command(version)]
#[command(about = "Rank PDF pages by relevance to a persona and job", long_about = None)]
struct Cli {
    /// Directory containing the PDFs, persona.txt and job.txt
    #[arg(value_name = "INPUT", env = "DOCRANK_INPUT", default_value = "/app/input")]
    input: PathBuf,

    /// Directory the JSON result is written to
    #[arg(value_name = "OUTPUT", env = "DOCRANK_OUTPUT", default_value = "/app/output")]
    output: PathBuf,

    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Args)]
struct RunArgs {
    /// Persona description file (default: INPUT/persona.txt)
    #[arg(long, value_name = "FILE")]
    persona: Option<PathBuf>,

    /// Job description file (default: INPUT/job.txt)
    #[arg(long, value_name = "FILE")]
    job: Option<PathBuf>,

    /// Where relevance keywords come from
    #[arg(long, value_enum, default_value = "static")]
    keywords: KeywordMode,

    /// Maximum number of subsections
    #[arg(long, value_name = "N", default_value = "3")]
    top: usize,

    /// Abort on the first unreadable document instead of skipping it
    #[arg(long)]
    strict: bool,

    /// Write compact JSON
    #[arg(long)]
    compact: bool,

    /// Output file name
    #[arg(long, value_name = "NAME", default_value = DEFAULT_OUTPUT_NAME)]
    output_name: String,

    /// Print a ranked summary after writing the result
    #[arg(short, long)]
    summary: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show per-page scores and headings for one PDF
    Inspect {
        /// Input PDF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Job description file, used with --keywords job
        #[arg(long, value_name = "FILE")]
        job: Option<PathBuf>,

        /// Where relevance keywords come from
        #[arg(long, value_enum, default_value = "static")]
        keywords: KeywordMode,
    },

    /// Print the active keyword set
    Keywords {
        /// Job description file, used with --keywords job
        #[arg(long, value_name = "FILE")]
        job: Option<PathBuf>,

        /// Where relevance keywords come from
        #[arg(long, value_enum, default_value = "static")]
        keywords: KeywordMode,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum KeywordMode {
    /// Built-in chemical kinetics vocabulary
    Static,
    /// Words taken from the job description
    Job,
}

impl From<KeywordMode> for KeywordSource {
    fn from(mode: KeywordMode) -> Self {
        match mode {
            KeywordMode::Static => KeywordSource::Static,
            KeywordMode::Job => KeywordSource::Job,
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Inspect {
            input,
            job,
            keywords,
        }) => cmd_inspect(&input, job.as_deref(), keywords),
        Some(Commands::Keywords { job, keywords }) => cmd_keywords(job.as_deref(), keywords),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
        None => cmd_run(&cli.input, &cli.output, &cli.run),
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_run(input: &Path, output: &Path, args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let start = Instant::now();

    let persona_path = args
        .persona
        .clone()
        .unwrap_or_else(|| input.join(PERSONA_FILE));
    let job_path = args.job.clone().unwrap_or_else(|| input.join(JOB_FILE));
    let inputs = RunInputs::load(&persona_path, &job_path)?;
    log::debug!(
        "Loaded persona from {} and job from {}",
        persona_path.display(),
        job_path.display()
    );

    let mode = if args.strict {
        ErrorMode::Strict
    } else {
        ErrorMode::Lenient
    };
    let options = AnalyzeOptions::new()
        .with_error_mode(mode)
        .with_max_subsections(args.top)
        .with_keyword_source(args.keywords.into());
    let analyzer = Analyzer::from_options(options);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);

    pb.set_message(format!("Loading PDFs from {}...", input.display()));
    let documents = DocumentSet::open_dir(input, mode)
        .map_err(|e| format!("Scanning {}: {}", input.display(), e))?;

    pb.set_message(format!("Ranking {} document(s)...", documents.len()));
    let result = analyzer.run(&inputs, &documents)?;

    pb.set_message("Writing result...");
    let format = if args.compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };
    let path = write_result(&result, output, &args.output_name, format)
        .map_err(|e| format!("Writing to {}: {}", output.display(), e))?;
    pb.finish_and_clear();

    let skipped = documents.len() - result.metadata.documents.len();
    println!(
        "{} {} ({} section(s), {} document(s){})",
        "Saved to".green(),
        path.display(),
        result.extracted_sections.len(),
        result.metadata.documents.len(),
        if skipped > 0 {
            format!(", {} skipped", skipped)
        } else {
            String::new()
        }
    );

    if args.summary {
        println!("\n{}", to_summary(&result));
    }

    println!(
        "{} {:.2}s",
        "Total run time:".dimmed(),
        start.elapsed().as_secs_f64()
    );

    Ok(())
}

fn cmd_inspect(
    input: &Path,
    job: Option<&Path>,
    mode: KeywordMode,
) -> Result<(), Box<dyn std::error::Error>> {
    let job_text = read_job(job)?;
    let options = AnalyzeOptions::new().with_keyword_source(mode.into());
    let analyzer = Analyzer::from_options(options);
    let scorer = PageScorer::new(analyzer.keywords(&job_text));

    let source = LopdfSource::open(input)?;
    let reports = analyze_document(&source, &scorer, &analyzer.options().heading)?;

    println!("{}", "Page Relevance".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Pages".bold(), source.page_count());
    println!("{}: {}", "Keywords".bold(), scorer.keywords().len());
    println!();

    for report in &reports {
        match &report.heading {
            Some(heading) => println!(
                "{:>4}  {:>2}  {}",
                report.page,
                report.score.to_string().green(),
                heading
            ),
            None => println!(
                "{:>4}  {:>2}  {}",
                report.page,
                report.score.to_string().dimmed(),
                "(not relevant)".dimmed()
            ),
        }
    }

    let relevant = reports.iter().filter(|r| r.score > 0).count();
    println!(
        "\n{} {} of {} page(s) relevant",
        "Done!".green().bold(),
        relevant,
        reports.len()
    );

    Ok(())
}

fn cmd_keywords(job: Option<&Path>, mode: KeywordMode) -> Result<(), Box<dyn std::error::Error>> {
    let job_text = read_job(job)?;
    let analyzer = Analyzer::from_options(AnalyzeOptions::new().with_keyword_source(mode.into()));
    for keyword in analyzer.keywords(&job_text).iter() {
        println!("{}", keyword);
    }
    Ok(())
}

fn read_job(job: Option<&Path>) -> Result<String, Box<dyn std::error::Error>> {
    match job {
        Some(path) => Ok(docrank::input::load_text(path)?),
        None => Ok(String::new()),
    }
}

fn cmd_version() {
    println!("{} {}", "docrank".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Persona-driven PDF page ranking");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["docrank"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("/app/input"));
        assert_eq!(cli.output, PathBuf::from("/app/output"));
        assert_eq!(cli.run.top, 3);
        assert_eq!(cli.run.output_name, DEFAULT_OUTPUT_NAME);
        assert!(!cli.run.strict);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_flags() {
        let cli = Cli::try_parse_from([
            "docrank", "in", "out", "--keywords", "job", "--top", "5", "--strict", "--compact",
        ])
        .unwrap();
        assert_eq!(cli.input, PathBuf::from("in"));
        assert!(cli.run.keywords == KeywordMode::Job);
        assert_eq!(cli.run.top, 5);
        assert!(cli.run.strict && cli.run.compact);
    }

    #[test]
    fn test_run_writes_output() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        std::fs::write(input.path().join(PERSONA_FILE), "Student").unwrap();
        std::fs::write(input.path().join(JOB_FILE), "Study").unwrap();

        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("docrank"),
            input.path().as_os_str(),
            output.path().as_os_str(),
        ])
        .unwrap();
        cmd_run(&cli.input, &cli.output, &cli.run).unwrap();

        let written = std::fs::read_to_string(output.path().join(DEFAULT_OUTPUT_NAME)).unwrap();
        assert!(written.contains("\"extracted_sections\": []"));
    }

    #[test]
    fn test_run_missing_persona_fails() {
        let input = tempfile::tempdir().unwrap();
        let output = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            std::ffi::OsStr::new("docrank"),
            input.path().as_os_str(),
            output.path().as_os_str(),
        ])
        .unwrap();
        assert!(cmd_run(&cli.input, &cli.output, &cli.run).is_err());
    }
}
