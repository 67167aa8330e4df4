use clap::Parser;
use nx_quotes::{all_catalogs, get_catalog, DEFAULT_LIMIT};
use nx_scrapers::{handle_command, ContentProcessor, PipelineArgs, ProcessArgs};
use nx_web::AppState;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Quote generators and the blog content processor", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Look up quotes for a topic
    Quotes {
        /// Topic to search for (e.g. inspiration, success, life)
        topic: String,
        /// Catalog to search: inspiration (substring match) or nexium (exact match)
        #[arg(long, default_value = "inspiration")]
        catalog: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
        /// Print the quotes as JSON
        #[arg(long)]
        json: bool,
    },
    /// List the quote catalogs and their topics
    Catalogs,
    /// Scrape, summarize, translate and store a blog post
    Process(ProcessArgs),
    /// Serve the JSON API
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

fn print_quotes(catalog: &str, topic: &str, limit: usize, json: bool) -> anyhow::Result<()> {
    let catalog = get_catalog(catalog)?;
    let quotes = catalog.filter_with_limit(topic, limit);

    if json {
        println!("{}", serde_json::to_string_pretty(&quotes)?);
        return Ok(());
    }

    if quotes.is_empty() {
        println!("No quotes found for {:?} in {}", topic, catalog.title);
        return Ok(());
    }
    println!("{}", catalog.title);
    for (i, quote) in quotes.iter().enumerate() {
        println!("{}. \"{}\"", i + 1, quote.text);
    }
    Ok(())
}

fn print_catalogs() {
    for catalog in all_catalogs() {
        println!("{} ({}, {:?} match):", catalog.name, catalog.title, catalog.match_mode);
        for topic in catalog.topics() {
            println!("  - {}", topic);
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    nx_scrapers::init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Quotes { topic, catalog, limit, json } => print_quotes(&catalog, &topic, limit, json)?,
        Commands::Catalogs => print_catalogs(),
        Commands::Process(args) => {
            info!("🦗 Processing {}", args.url);
            handle_command(args).await?;
        }
        Commands::Serve { addr, pipeline } => {
            let processor = ContentProcessor::from_config(pipeline.to_config()).await?;
            nx_web::serve(AppState::new(processor), &addr).await?;
        }
    }

    Ok(())
}
