use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use notenexus_cli::commands::{self, FilterArgs};
use notenexus_cli::config;
use notes_common::generator::GeneratorDifficulty;
use notes_common::types::SortKey;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "notenexus")]
#[command(about = "Browse NoteNexus notes and quizzes from the terminal")]
struct Cli {
    /// Config file (default: <config dir>/notenexus/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Finish progress ramps immediately instead of in real time
    #[arg(long, global = true)]
    fast: bool,
    /// Log at debug level unless NOTENEXUS_LOG says otherwise
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct Filters {
    /// Free-text search over title, subject, university, and description
    #[arg(long, short, default_value = "")]
    query: String,
    /// Subject / category to include (repeatable)
    #[arg(long = "category", short)]
    categories: Vec<String>,
    /// Minimum rating, 0.0 to 5.0
    #[arg(long, default_value_t = 0.0)]
    min_rating: f64,
    /// relevance, score, popularity, recency, or oldest
    #[arg(long, default_value = "relevance")]
    sort: SortKey,
}

#[derive(Subcommand)]
enum Commands {
    /// List notes matching the filters
    Notes {
        #[command(flatten)]
        filters: Filters,
        /// University to include (repeatable)
        #[arg(long = "university", short)]
        universities: Vec<String>,
        /// 1-based page
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// List quizzes matching the filters
    Quizzes {
        #[command(flatten)]
        filters: Filters,
        /// Beginner, Intermediate, or Advanced (repeatable)
        #[arg(long = "difficulty", short)]
        difficulties: Vec<String>,
    },
    /// Print a quiz's questions and options
    ShowQuiz { id: u32 },
    /// Answer a quiz and print the score and review
    TakeQuiz {
        id: u32,
        /// Comma-separated option numbers in question order; "-" skips one
        #[arg(long, short)]
        answers: String,
    },
    /// Run the AI summary for a note
    Summarize { note_id: u32 },
    /// Run the handwriting scanner on the sample page
    Scan,
    /// Generate a practice quiz, optionally answering it
    Generate {
        #[arg(long, short)]
        topic: String,
        #[arg(long, default_value = "medium")]
        difficulty: GeneratorDifficulty,
        #[arg(long, default_value_t = 10)]
        count: u32,
        #[arg(long, short)]
        answers: Option<String>,
    },
    /// Show search suggestions for a partial query
    Suggest {
        #[arg(default_value = "")]
        query: String,
    },
    /// Ask the assistant
    Chat { message: String },
    /// Sign in with the demo account
    Login {
        #[arg(long, short)]
        username: String,
        #[arg(long, short)]
        password: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

fn filter_args(filters: Filters, secondary: Vec<String>) -> FilterArgs {
    FilterArgs {
        query: filters.query,
        categories: filters.categories,
        secondary,
        min_rating: filters.min_rating,
        sort: filters.sort,
    }
}

fn now_secs() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let fallback = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("NOTENEXUS_LOG").unwrap_or_else(|_| EnvFilter::new(fallback)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = config::load(cli.config.as_deref())?;
    let settings = &config.progress;
    let realtime = !cli.fast;

    let output = match cli.command {
        Commands::Notes {
            filters,
            universities,
            page,
        } => commands::list_notes(&filter_args(filters, universities), page, settings)?,
        Commands::Quizzes {
            filters,
            difficulties,
        } => commands::list_quizzes(&filter_args(filters, difficulties))?,
        Commands::ShowQuiz { id } => commands::show_quiz(id)?,
        Commands::TakeQuiz { id, answers } => commands::take_quiz(id, &answers)?,
        Commands::Summarize { note_id } => commands::summarize(note_id, settings, realtime)?,
        Commands::Scan => commands::scan(settings, realtime)?,
        Commands::Generate {
            topic,
            difficulty,
            count,
            answers,
        } => commands::generate(
            &topic,
            difficulty,
            count,
            answers.as_deref(),
            settings,
            realtime,
        )?,
        Commands::Suggest { query } => commands::suggest(&query),
        Commands::Chat { message } => commands::chat(&message).unwrap_or_default(),
        Commands::Login { username, password } => {
            commands::login(&username, &password, now_secs())?
        }
        Commands::Config => config::to_toml(&config)?,
    };
    println!("{}", output.trim_end());
    Ok(())
}
