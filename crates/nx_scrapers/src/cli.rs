use clap::Args;
use nx_core::{ProcessingResult, ProcessingStep, Result};
use crate::manager::{ContentProcessor, PipelineConfig};

/// Flags shared by every command that builds a pipeline
#[derive(Args, Debug, Clone)]
pub struct PipelineArgs {
    /// Summarizer to use. Available models: keyword (default), lead
    #[arg(long, default_value = "keyword")]
    pub summarizer: String,
    /// Translator to use. Available translators: urdu (default)
    #[arg(long, default_value = "urdu")]
    pub translator: String,
    /// Storage backend. Available backends: memory (default)
    #[arg(long, default_value = "memory")]
    pub storage: String,
    /// Skip the artificial pauses between and inside stages
    #[arg(long)]
    pub no_delay: bool,
}

impl PipelineArgs {
    pub fn to_config(&self) -> PipelineConfig {
        let mut config = if self.no_delay {
            PipelineConfig::immediate()
        } else {
            PipelineConfig::default()
        };
        config.inference.model_name = Some(self.summarizer.clone());
        config.inference.translator_name = Some(self.translator.clone());
        config.storage = self.storage.clone();
        config
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProcessArgs {
    /// Blog post URL (http or https)
    pub url: String,
    /// Print the result as JSON instead of text
    #[arg(long)]
    pub json: bool,
    #[command(flatten)]
    pub pipeline: PipelineArgs,
}

/// Run the pipeline once, printing each step as it starts.
pub async fn handle_command(args: ProcessArgs) -> Result<ProcessingResult> {
    let processor = ContentProcessor::from_config(args.pipeline.to_config()).await?;

    let mut rx = processor.subscribe();
    let show_steps = !args.json;
    let watcher = tokio::spawn(async move {
        let mut last = rx.borrow().step;
        while rx.changed().await.is_ok() {
            let step = rx.borrow_and_update().step;
            if step != last && step.is_active() && show_steps {
                println!("{} {}...", step.emoji(), step_label(step));
            }
            last = step;
        }
    });

    let outcome = processor.submit(&args.url).await;
    watcher.abort();
    let result = outcome?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_result(&result);
    }
    Ok(result)
}

fn step_label(step: ProcessingStep) -> &'static str {
    match step {
        ProcessingStep::Scraping => "Scraping content",
        ProcessingStep::Summarizing => "Generating summary",
        ProcessingStep::Translating => "Translating to Urdu",
        ProcessingStep::Saving => "Saving to databases",
        ProcessingStep::Completed => "Completed",
        ProcessingStep::Error => "Failed",
        ProcessingStep::Idle => "Idle",
    }
}

fn print_result(result: &ProcessingResult) {
    let content = &result.original_content;
    println!();
    println!("📰 {}", content.title);
    if let Some(author) = &content.metadata.author {
        println!("   by {}", author);
    }
    if let Some(date) = &content.metadata.publish_date {
        println!("   published {}", date);
    }
    println!("   {} words - {}", content.metadata.word_count, content.url);
    println!();
    println!("📝 Summary");
    println!("{}", result.summary);
    println!();
    println!("🈂️ Urdu summary");
    println!("{}", result.urdu_summary);
    println!();
    println!("💾 Supabase id: {}", result.supabase_id);
    println!("💾 MongoDB id:  {}", result.mongo_id);
}
