use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing::info;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use doc_analyser::config::DEFAULT_RESULT_SIZE;
use doc_analyser::{AnalyserError, AnalysisConfig, ExclusionPolicy, OutputFormat, report};

#[derive(Debug, Parser)]
#[command(
    name = "doc-analyser",
    about = "Rank words across the .txt documents of a directory",
    long_about = "Count words in every .txt file of a directory and print the most frequent ones, \
                  with the documents and sentences each word occurred in."
)]
struct Cli {
    #[arg(
        default_value = DEFAULT_RESULT_SIZE,
        help = "Number of top-ranked words to print"
    )]
    number: String,
    #[arg(value_name = "COMMON", help = "File of words to exclude from the results")]
    common: Option<PathBuf>,
    #[arg(long, default_value = ".", help = "Directory to scan for .txt files")]
    dir: PathBuf,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    #[arg(
        long,
        value_enum,
        default_value_t = ExclusionPolicy::TruncateSentence,
        help = "On an excluded word, drop the rest of the sentence (truncate) or only the word (skip)"
    )]
    exclusion: ExclusionPolicy,
    #[arg(short, long, action = ArgAction::Count, help = "More logging (-v info, -vv debug)")]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn run(cli: Cli) -> Result<(), AnalyserError> {
    let config = AnalysisConfig {
        dir: cli.dir,
        exclusion_file: cli.common,
        exclusion_policy: cli.exclusion,
        ..Default::default()
    };
    info!("analysing {} (top {})", config.dir.display(), cli.number);

    let ranked = doc_analyser::analyse_with_size(&cli.number, config)?;
    report::write_report(&mut io::stdout().lock(), &ranked, cli.format)
        .map_err(|e| AnalyserError::io("<stdout>", e))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
