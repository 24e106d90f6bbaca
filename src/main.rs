use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use keytrie::dict::WordListLoader;
use keytrie::dictionary::{Dictionary, ExpandableDictionary};
use keytrie::output;
use keytrie::query::{KeyComposer, KeyboardLayout, SuggestionCollector};
use keytrie::utils::KeytrieConfig;
use keytrie::utils::progress::load_spinner;
use std::path::PathBuf;
use termcolor::ColorChoice;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "KEYTRIE_LOG";

#[derive(Parser)]
#[command(name = "keytrie")]
#[command(about = "Predictive text lookups over a word list")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list to load (defaults to `word_list` from the config file)
    #[arg(short, long, global = true)]
    dict: Option<PathBuf>,

    /// Config file to use instead of the one in the app data directory
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// When to use colors
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Auto)]
    color: ColorArg,

    /// Maximum number of candidates (defaults to `suggestion_limit`)
    #[arg(short, long, global = true)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Suggest words for typed input
    Suggest {
        /// Keys as typed
        typed: String,

        /// Treat neighboring keys on the keyboard as alternates
        #[arg(short, long)]
        adjacent: bool,
    },
    /// Suggest words likely to follow a word
    Next { word: String },
    /// Show whether a word is stored and its frequency
    Lookup { word: String },
    /// Show dictionary statistics
    Stats,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorArg {
    Auto,
    Always,
    Never,
}

impl From<ColorArg> for ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => ColorChoice::Auto,
            ColorArg::Always => ColorChoice::Always,
            ColorArg::Never => ColorChoice::Never,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => KeytrieConfig::load_from(path)?,
        None => KeytrieConfig::load()?,
    };
    let dictionary = open_dictionary(&cli, &config)?;
    let limit = cli.limit.unwrap_or(config.suggestion_limit);
    let color = ColorChoice::from(cli.color);

    match &cli.command {
        Commands::Suggest { typed, adjacent } => {
            let composer = if *adjacent {
                KeyComposer::with_layout(typed, &KeyboardLayout::parse(&config.keyboard_layout))
            } else {
                KeyComposer::from_typed(typed)
            };
            let mut collector = SuggestionCollector::new(limit);
            dictionary.get_words(&composer, &mut collector, None);
            emit_suggestions(&collector.into_sorted_vec(), cli.json, color)?;
        }
        Commands::Next { word } => {
            let mut collector = SuggestionCollector::new(limit);
            dictionary.get_bigrams(word, &mut collector);
            emit_suggestions(&collector.into_sorted_vec(), cli.json, color)?;
        }
        Commands::Lookup { word } => {
            let frequency = dictionary.word_frequency(word);
            if cli.json {
                output::print_json(&serde_json::json!({ "word": word, "frequency": frequency }))?;
            } else {
                output::print_lookup(word, frequency, color)?;
            }
        }
        Commands::Stats => {
            let stats = dictionary.stats();
            if cli.json {
                output::print_json(&stats)?;
            } else {
                output::print_stats(&stats, color)?;
            }
        }
    }

    Ok(())
}

fn open_dictionary(cli: &Cli, config: &KeytrieConfig) -> Result<ExpandableDictionary> {
    let Some(path) = cli.dict.clone().or_else(|| config.word_list.clone()) else {
        bail!("No word list given. Pass --dict <file> or set `word_list` in the config file");
    };

    let dictionary = ExpandableDictionary::with_config(
        WordListLoader::new(&path),
        config.dictionary.clone(),
    );

    let spinner = load_spinner(format!("Loading {}", path.display()));
    let loaded = dictionary.load_blocking();
    spinner.finish_and_clear();
    loaded.with_context(|| format!("Failed to load word list {}", path.display()))?;

    Ok(dictionary)
}

fn emit_suggestions(
    suggestions: &[keytrie::dict::Suggestion],
    json: bool,
    color: ColorChoice,
) -> Result<()> {
    if json {
        output::print_json(suggestions)?;
    } else {
        output::print_suggestions(suggestions, color)?;
    }
    Ok(())
}
