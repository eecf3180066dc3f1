//! sentir - emotion and sentiment analysis from the command line
//!
//! Usage:
//!   sentir analyse -i "What a day. I love it."   # Emotion of a text
//!   sentir analyse -m -f review.txt -s 4 -d 2    # Sentiment of a file
//!   sentir train -m -s 0 -s 8                    # Train and cache models
//!   sentir evaluate -m -s 4 -k 10                # k-fold cross-validation
//!   sentir list -m                               # Algorithm indices

use clap::{Args, Parser, Subcommand};
use log::LevelFilter;
use sentir::config::ToolkitConfig;
use sentir::labels::Mode;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod error;

/// sentir - emotion and sentiment analysis
///
/// Labels every sentence of a document, then the whole document.
#[derive(Parser)]
#[command(name = "sentir")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding the data sets
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Directory of parsed data sets and trained models
    #[arg(long, global = true, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Neither read nor write the cache
    #[arg(long, global = true)]
    no_cache: bool,

    /// Seed for class balancing and random tie breaks
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    quiet: bool,
}

/// Emotion analysis unless `-m` asks for sentiment.
#[derive(Args, Debug, Clone, Copy)]
struct ModeArg {
    /// Do sentiment analysis
    #[arg(short = 'm', long)]
    sentiment: bool,
}

impl ModeArg {
    fn mode(self) -> Mode {
        if self.sentiment {
            Mode::Sentiment
        } else {
            Mode::Emotion
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Label a document and its sentences, printed as JSON
    Analyse {
        /// Text to analyse
        #[arg(short, long)]
        input: Option<String>,

        /// Read the text from a file
        #[arg(short, long, value_name = "FILE")]
        file: Option<PathBuf>,

        /// Sentence-level algorithm index (see `sentir list`)
        #[arg(short, long, default_value_t = 0)]
        sentence: usize,

        /// Document-level algorithm index (see `sentir list`)
        #[arg(short, long, default_value_t = 0)]
        document: usize,

        #[command(flatten)]
        mode: ModeArg,

        /// Treat the document as a single sentence
        #[arg(short, long)]
        club: bool,
    },

    /// Train predictors on the full corpus and cache them
    Train {
        #[command(flatten)]
        mode: ModeArg,

        /// Sentence-level algorithm indices (default: every trainable one)
        #[arg(short, long)]
        sentence: Vec<usize>,
    },

    /// Cross-validate predictors on the corpus
    Evaluate {
        #[command(flatten)]
        mode: ModeArg,

        /// Sentence-level algorithm indices (default: all)
        #[arg(short, long)]
        sentence: Vec<usize>,

        /// Number of folds
        #[arg(short = 'k', long)]
        folds: Option<usize>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the algorithm indices
    List {
        #[command(flatten)]
        mode: ModeArg,
    },
}

impl Cli {
    fn config(&self) -> ToolkitConfig {
        let mut config = ToolkitConfig::new().with_cache_enabled(!self.no_cache);
        if let Some(dir) = &self.data_dir {
            config = config.with_data_dir(dir);
        }
        if let Some(dir) = &self.cache_dir {
            config = config.with_cache_dir(dir);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Info
        } else if self.quiet {
            LevelFilter::Error
        } else {
            LevelFilter::Warn
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_level())
        .parse_default_env()
        .init();

    let config = cli.config();
    let result = match cli.command {
        Commands::Analyse {
            input,
            file,
            sentence,
            document,
            mode,
            club,
        } => commands::analyse::run(
            config,
            mode.mode(),
            input.as_deref(),
            file.as_deref(),
            sentence,
            document,
            club,
        ),

        Commands::Train { mode, sentence } => commands::train::run(config, mode.mode(), &sentence),

        Commands::Evaluate {
            mode,
            sentence,
            folds,
            json,
        } => commands::evaluate::run(config, mode.mode(), &sentence, folds, json),

        Commands::List { mode } => {
            commands::list::run(mode.mode());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            e.exit_code()
        }
    }
}
