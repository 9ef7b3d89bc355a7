//! nativ-tools CLI
//!
//! Runs any of the Nativ tools from the command line and prints the text the
//! agent would see.

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use nativ_tools::client::{BatchTranslateRequest, NewTmEntry, TmSearchRequest, TranslateRequest};
use nativ_tools::tools::{NativToolkit, ToolRegistry};
use nativ_tools::{NativConfig, VERSION};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "nativ-tools",
    author = "Nativ Tools Contributors",
    version = VERSION,
    about = "Nativ localization tools for LLM agents",
    long_about = None
)]
struct Cli {
    /// Nativ API key
    #[arg(long, env = "NATIV_API_KEY", hide_env_values = true, global = true)]
    api_key: Option<String>,

    /// Override the Nativ API endpoint
    #[arg(long, env = "NATIV_BASE_URL", global = true)]
    base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Translate a text
    Translate {
        text: String,
        /// Full target language name, e.g. French
        #[arg(short, long)]
        to: String,
        /// Target language ISO code
        #[arg(long)]
        to_code: Option<String>,
        #[arg(long, default_value = "English")]
        from: String,
        #[arg(long, default_value = "en")]
        from_code: String,
        /// Context hint, e.g. "mobile app button"
        #[arg(long)]
        context: Option<String>,
        /// Inline glossary as CSV
        #[arg(long)]
        glossary: Option<String>,
        /// very_informal | informal | neutral | formal | very_formal
        #[arg(long)]
        formality: Option<String>,
        #[arg(long)]
        max_characters: Option<u32>,
        /// Also return a back-translation
        #[arg(long)]
        backtranslate: bool,
    },

    /// Translate several texts into one language
    TranslateBatch {
        #[arg(required = true)]
        texts: Vec<String>,
        #[arg(short, long)]
        to: String,
        #[arg(long)]
        to_code: Option<String>,
        #[arg(long, default_value = "English")]
        from: String,
        #[arg(long, default_value = "en")]
        from_code: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long)]
        formality: Option<String>,
    },

    /// Fuzzy-search the translation memory
    SearchTm {
        query: String,
        #[arg(long, default_value = "en")]
        source_code: String,
        #[arg(long)]
        target_code: Option<String>,
        #[arg(long, default_value_t = 0.0)]
        min_score: f64,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },

    /// Store an approved translation in the translation memory
    AddTmEntry {
        source_text: String,
        target_text: String,
        source_code: String,
        target_code: String,
        /// Label for the entry
        #[arg(long)]
        name: Option<String>,
    },

    /// List configured target languages
    Languages,

    /// Show configured style guides
    StyleGuides,

    /// Show the brand voice prompt
    BrandVoice,

    /// Show translation memory statistics
    TmStats,

    /// Print the tool definitions offered to the model as JSON
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only tool output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("nativ_tools=info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config = NativConfig::new(cli.api_key, cli.base_url);
    if let Some(secs) = cli.timeout {
        config = config.with_timeout_secs(secs);
    }
    let toolkit = Arc::new(NativToolkit::with_config(config));

    let output = run(&toolkit, cli.command).await?;
    println!("{}", output);
    Ok(())
}

async fn run(toolkit: &Arc<NativToolkit>, command: Commands) -> anyhow::Result<String> {
    let text = match command {
        Commands::Translate {
            text,
            to,
            to_code,
            from,
            from_code,
            context,
            glossary,
            formality,
            max_characters,
            backtranslate,
        } => {
            let request = TranslateRequest {
                target_language_code: to_code,
                source_language: from,
                source_language_code: from_code,
                context,
                glossary,
                formality,
                max_characters,
                backtranslate,
                ..TranslateRequest::new(text, to)
            };
            toolkit.translate(request).await?
        }
        Commands::TranslateBatch {
            texts,
            to,
            to_code,
            from,
            from_code,
            context,
            formality,
        } => {
            let request = BatchTranslateRequest {
                target_language_code: to_code,
                source_language: from,
                source_language_code: from_code,
                context,
                formality,
                ..BatchTranslateRequest::new(texts, to)
            };
            toolkit.translate_batch(request).await?
        }
        Commands::SearchTm {
            query,
            source_code,
            target_code,
            min_score,
            limit,
        } => {
            let request = TmSearchRequest {
                source_language_code: source_code,
                target_language_code: target_code,
                min_score,
                limit,
                ..TmSearchRequest::new(query)
            };
            toolkit.search_translation_memory(request).await?
        }
        Commands::AddTmEntry {
            source_text,
            target_text,
            source_code,
            target_code,
            name,
        } => {
            let entry = NewTmEntry {
                source_text,
                target_text,
                source_language_code: source_code,
                target_language_code: target_code,
                name,
            };
            toolkit.add_translation_memory_entry(entry).await?
        }
        Commands::Languages => toolkit.get_languages().await?,
        Commands::StyleGuides => toolkit.get_style_guides().await?,
        Commands::BrandVoice => toolkit.get_brand_voice().await?,
        Commands::TmStats => toolkit.get_translation_memory_stats().await?,
        Commands::Tools => {
            let mut registry = ToolRegistry::new();
            registry.register_all(toolkit.to_tool_list());
            debug!("Registered {} tools: {:?}", registry.count(), registry.names());
            serde_json::to_string_pretty(&registry.definitions())
                .context("Failed to serialize tool definitions")?
        }
    };
    Ok(text)
}
