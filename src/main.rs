use std::path::PathBuf;

use clap::Parser;
use quiz_runner::{DEFAULT_QUESTIONS_SOURCE, QuestionSource, Quiz, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file or http(s) URL to load the questions from
    #[arg(short, long, default_value = DEFAULT_QUESTIONS_SOURCE)]
    questions: QuestionSource,

    /// Seed for question and choice order
    #[arg(long)]
    seed: Option<u64>,

    /// File to write diagnostics to
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let log_file = args.log_file.unwrap_or_else(logging::default_log_path);
    if let Err(e) = logging::init(&log_file) {
        eprintln!("Could not open log file {}: {}", log_file.display(), e);
    }

    let quiz = match args.seed {
        Some(seed) => Quiz::with_seed(seed),
        None => Quiz::new(),
    };

    if let Err(e) = quiz.run(args.questions).await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
